//! Page geometry: glyph metrics, content measurement and pagination.

pub mod font_metrics;
pub mod measure;
pub mod pagination;

pub use measure::{ContentMeasurer, FixedMeasurer, HeadlessMeasurer};
pub use pagination::{paginate, paginate_with, PageNavigator, PaginationReport, PreviewMode};
