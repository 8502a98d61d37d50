//! Per-frame driver tying a field, its followers and the tie-break resolver together.
//!
//! Intended usage:
//! - build one `SortingMap` per sorting field
//! - `register` followers as the host creates them
//! - call `update()` once per frame with the host's screen projection

mod sorting_map;

pub use sorting_map::{FrameReport, SortingMap};
