use crate::scalar::Scalar;

use super::vec2::Vec2g;
use super::vec3::Vec3g;

/// A 4-component vector over scalar `S`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vec4g<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

/// Double-precision 4D vector.
pub type Vec4 = Vec4g<f64>;
/// Platform-native signed integer 4D vector.
pub type Vec4i = Vec4g<isize>;
/// Platform-native unsigned integer 4D vector.
pub type Vec4u = Vec4g<usize>;

super::impl_vector!(Vec4g, 4, x, y, z, w);

impl<S: Scalar> Vec4g<S> {
    /// Builds a vector from `x`, `y`, `z` and `w`.
    #[inline]
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    /// Components as a tuple.
    #[inline]
    pub fn xyzw(self) -> (S, S, S, S) {
        (self.x, self.y, self.z, self.w)
    }

    /// Drops `w`.
    #[inline]
    pub fn truncate(self) -> Vec3g<S> {
        Vec3g::new(self.x, self.y, self.z)
    }

    /// Drops `z` and `w`.
    #[inline]
    pub fn truncate2(self) -> Vec2g<S> {
        Vec2g::new(self.x, self.y)
    }

    /// Passes all four components to `f` at once.
    #[inline]
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnOnce(S, S, S, S) -> (S, S, S, S),
    {
        let (x, y, z, w) = f(self.x, self.y, self.z, self.w);
        Self { x, y, z, w }
    }
}

impl<S: Scalar> From<(S, S, S, S)> for Vec4g<S> {
    #[inline]
    fn from((x, y, z, w): (S, S, S, S)) -> Self {
        Self { x, y, z, w }
    }
}

impl<S: Scalar> From<Vec4g<S>> for (S, S, S, S) {
    #[inline]
    fn from(v: Vec4g<S>) -> Self {
        v.xyzw()
    }
}
