use crate::coords::Vec3;
use crate::scene::RenderBucket;

use super::{FieldFollower, Follower};

/// Plain-data follower for hosts without their own entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFollower {
    pub position: Vec3,
    pub bucket: RenderBucket,
    pub participates: bool,
    pub sorting_locked: bool,
    pub depth_offset: f32,
    /// Scale multiplier last written by the driver.
    pub scale: f32,
}

impl SpriteFollower {
    /// Participating, unlocked follower with no depth offset.
    pub fn new(position: Vec3, bucket: RenderBucket) -> Self {
        Self {
            position,
            bucket,
            participates: true,
            sorting_locked: false,
            depth_offset: 0.0,
            scale: 1.0,
        }
    }

    pub fn locked(mut self) -> Self {
        self.sorting_locked = true;
        self
    }

    pub fn detached(mut self) -> Self {
        self.participates = false;
        self
    }

    pub fn with_depth_offset(mut self, offset: f32) -> Self {
        self.depth_offset = offset;
        self
    }
}

impl Follower for SpriteFollower {
    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    fn bucket(&self) -> &RenderBucket {
        &self.bucket
    }

    #[inline]
    fn participates(&self) -> bool {
        self.participates
    }

    #[inline]
    fn sorting_locked(&self) -> bool {
        self.sorting_locked
    }

    #[inline]
    fn set_depth_offset(&mut self, offset: f32) {
        self.depth_offset = offset;
    }
}

impl FieldFollower for SpriteFollower {
    #[inline]
    fn set_scale(&mut self, factor: f32) {
        self.scale = factor;
    }

    #[inline]
    fn set_bucket(&mut self, bucket: RenderBucket) {
        self.bucket = bucket;
    }
}
