use crate::coords::Vec3;

/// Host-provided projection of a world position to a vertical screen coordinate.
///
/// Any `Fn(Vec3) -> f32` is a projector.
pub trait ScreenProjector {
    fn screen_y(&self, world: Vec3) -> f32;
}

impl<F> ScreenProjector for F
where
    F: Fn(Vec3) -> f32,
{
    #[inline]
    fn screen_y(&self, world: Vec3) -> f32 {
        self(world)
    }
}
