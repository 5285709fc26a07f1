use crate::scalar::Scalar;

use super::vec2::Vec2g;
use super::vec4::Vec4g;

/// A 3-component vector over scalar `S`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vec3g<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

/// Double-precision 3D vector.
pub type Vec3 = Vec3g<f64>;
/// Platform-native signed integer 3D vector.
pub type Vec3i = Vec3g<isize>;
/// Platform-native unsigned integer 3D vector.
pub type Vec3u = Vec3g<usize>;

super::impl_vector!(Vec3g, 3, x, y, z);

impl<S: Scalar> Vec3g<S> {
    /// Builds a vector from `x`, `y` and `z`.
    #[inline]
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    /// Components as a tuple.
    #[inline]
    pub fn xyz(self) -> (S, S, S) {
        (self.x, self.y, self.z)
    }

    /// Appends `w`.
    #[inline]
    pub fn extend(self, w: S) -> Vec4g<S> {
        Vec4g::new(self.x, self.y, self.z, w)
    }

    /// Drops `z`.
    #[inline]
    pub fn truncate(self) -> Vec2g<S> {
        Vec2g::new(self.x, self.y)
    }

    /// Passes all three components to `f` at once.
    #[inline]
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnOnce(S, S, S) -> (S, S, S),
    {
        let (x, y, z) = f(self.x, self.y, self.z);
        Self { x, y, z }
    }
}

impl<S: Scalar> From<(S, S, S)> for Vec3g<S> {
    #[inline]
    fn from((x, y, z): (S, S, S)) -> Self {
        Self { x, y, z }
    }
}

impl<S: Scalar> From<Vec3g<S>> for (S, S, S) {
    #[inline]
    fn from(v: Vec3g<S>) -> Self {
        v.xyz()
    }
}
