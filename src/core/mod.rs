pub mod bounds;
pub mod catalog;
pub mod category_filter;
pub mod text_wrap;
pub mod types;

pub use bounds::{AxisBounds, DEFAULT_BOUNDS_PADDING, compute_bounds};
pub use catalog::{Category, CategoryCatalog};
pub use category_filter::{Emphasis, PointStyle, compute_point_styles, emphasis_for, style_for};
pub use text_wrap::{DEFAULT_WRAP_WIDTH, LINE_BREAK, wrap, wrap_lines};
pub use types::{CategoryId, FeatureIndex, PointRecord};
