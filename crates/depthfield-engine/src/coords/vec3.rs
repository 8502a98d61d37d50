use core::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Squared-magnitude product below which two vectors are treated as having no direction.
const DIRECTION_EPSILON_SQ: f32 = 1e-15;

/// 3D vector in world units.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, rhs: Vec3) -> f32 {
        (self - rhs).length()
    }

    /// Returns the unit vector in the same direction, or `None` for zero-length
    /// and non-finite input.
    pub fn try_normalize(self) -> Option<Vec3> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Unsigned angle between `self` and `rhs`, in degrees (`0..=180`).
    ///
    /// If either vector has (near) zero length the angle is reported as `0`.
    pub fn angle_deg(self, rhs: Vec3) -> f32 {
        let denom = (self.length_squared() * rhs.length_squared()).sqrt();
        if denom < DIRECTION_EPSILON_SQ {
            return 0.0;
        }
        let cos = (self.dot(rhs) / denom).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── angle_deg ─────────────────────────────────────────────────────────

    #[test]
    fn angle_parallel_is_zero() {
        assert!(close(Vec3::Z.angle_deg(Vec3::new(0.0, 0.0, 5.0)), 0.0));
    }

    #[test]
    fn angle_opposite_is_180() {
        assert!(close(Vec3::Z.angle_deg(Vec3::new(0.0, 0.0, -3.0)), 180.0));
    }

    #[test]
    fn angle_perpendicular_is_90() {
        assert!(close(Vec3::Z.angle_deg(Vec3::X), 90.0));
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        assert_eq!(Vec3::Z.angle_deg(Vec3::ZERO), 0.0);
    }

    #[test]
    fn angle_diagonal_is_45() {
        assert!(close(Vec3::Z.angle_deg(Vec3::new(1.0, 0.0, 1.0)), 45.0));
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_scales_to_unit_length() {
        let n = Vec3::new(0.0, 3.0, 4.0).try_normalize().unwrap();
        assert!(close(n.length(), 1.0));
        assert!(close(n.y, 0.6));
    }

    #[test]
    fn normalize_rejects_zero_and_nan() {
        assert!(Vec3::ZERO.try_normalize().is_none());
        assert!(Vec3::new(f32::NAN, 0.0, 1.0).try_normalize().is_none());
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn casts_to_packed_floats() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let arr: [f32; 3] = bytemuck::cast(v);
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
