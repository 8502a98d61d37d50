//! Sub-bucket depth tie-breaking.
//!
//! When several followers share one render bucket, their draw order inside it is
//! decided by where they appear on screen: lower on screen draws in front.

mod projector;
mod resolver;

pub use projector::ScreenProjector;
pub use resolver::{Resolution, SkipReason, TieBreakResolver, DEPTH_EPSILON};
