//! Style resolution: colour arithmetic, CSS declaration lists and the
//! per-element resolvers shared by every template.

pub mod color;
pub mod css;
pub mod resolver;

pub use css::Style;
pub use resolver::{SidebarSide, SidebarSplit, StyleResolver};
