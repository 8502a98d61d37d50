//! Coordinate and geometry types shared by the field evaluator and the tie-break resolver.
//!
//! World space:
//! - right-handed, units are whatever the host scene uses
//! - the field's forward axis is stored normalized
//!
//! Screen space is owned by the host; the core only ever sees a projected `y`.

mod vec3;

pub use vec3::Vec3;
