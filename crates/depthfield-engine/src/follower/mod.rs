//! Follower contract and registry.
//!
//! A follower is a host entity that renders a sprite and tracks a sorting field.
//! The core never owns host entities; it reads and writes them through
//! [`Follower`] and, for the frame driver, [`FieldFollower`].

mod registry;
mod sprite;

pub use registry::{FollowerId, FollowerRegistry};
pub use sprite::SpriteFollower;

use crate::coords::Vec3;
use crate::scene::RenderBucket;

/// What the tie-break resolver needs from a follower.
pub trait Follower {
    /// World position.
    fn position(&self) -> Vec3;

    /// Current render bucket.
    fn bucket(&self) -> &RenderBucket;

    /// Whether the follower tracks the field at all.
    fn participates(&self) -> bool;

    /// Locked followers keep whatever depth offset they have.
    fn sorting_locked(&self) -> bool;

    /// Writes the sub-bucket depth bias.
    fn set_depth_offset(&mut self, offset: f32);
}

/// A follower the per-frame driver can update in place.
pub trait FieldFollower: Follower {
    /// Writes the scale multiplier (1.0 = authored size).
    fn set_scale(&mut self, factor: f32);

    fn set_bucket(&mut self, bucket: RenderBucket);
}
