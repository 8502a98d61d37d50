//! Render bucket types.
//!
//! A bucket is the host renderer's coarse sort key: a named sorting layer plus an
//! integer order inside that layer. Followers that share a bucket draw in an
//! undefined order unless the tie-break resolver gives them depth offsets.

mod bucket;
mod order;

pub use bucket::{RenderBucket, SortingLayer};
pub use order::RenderOrder;
