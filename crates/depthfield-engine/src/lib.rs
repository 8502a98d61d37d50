//! Depthfield engine crate.
//!
//! Computes, per frame, a scale and a sub-bucket depth bias for sprites placed in
//! a 3D scene, so flat sprites sort and shrink like hand-drawn 2D art. Rendering,
//! cameras and entity lifecycles stay with the host.

pub mod coords;
pub mod field;
pub mod follower;
pub mod logging;
pub mod runtime;
pub mod scene;
pub mod tiebreak;

pub use coords::Vec3;
pub use field::{FieldConfig, FieldError, SortingArea, SortingField, SortingMapType};
pub use follower::{FieldFollower, Follower, FollowerId, FollowerRegistry, SpriteFollower};
pub use runtime::{FrameReport, SortingMap};
pub use scene::{RenderBucket, RenderOrder, SortingLayer};
pub use tiebreak::{Resolution, ScreenProjector, SkipReason, TieBreakResolver, DEPTH_EPSILON};
