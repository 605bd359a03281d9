pub mod geometry;
pub mod math;
pub mod types;

pub use geometry::{AxisGeometry, AxisOrientation, LabelFootprint};
pub use math::{even_spacing, factorize};
pub use types::{MajorTick, Tick};
