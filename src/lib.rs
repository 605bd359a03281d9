//! chart-autoskip: axis tick auto-skipping.
//!
//! Given the pixel geometry of an axis and an ordered list of candidate
//! ticks, this crate picks the subset whose labels fit without overlapping.
//! Major ticks are kept as anchors and minors are thinned evenly between them.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{TickOptions, select_visible_indices, select_visible_ticks};
pub use crate::core::{AxisGeometry, MajorTick, Tick};
pub use error::{SkipError, SkipResult};
