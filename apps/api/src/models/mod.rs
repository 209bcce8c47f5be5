pub mod lenient;
pub mod resume;
pub mod settings;
