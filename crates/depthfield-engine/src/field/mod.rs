//! Sorting field: an ordered run of reference areas along a forward axis.
//!
//! Responsibilities:
//! - interpolate a scale (percent) for any world position
//! - pick the area, and so the render bucket, a position falls into
//! - validate authored areas early so runtime queries never fail

mod area;
mod config;
mod error;
mod map;

pub use area::{SortingArea, SortingMapType};
pub use config::FieldConfig;
pub use error::{FieldError, Result};
pub use map::SortingField;
