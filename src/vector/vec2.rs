use crate::scalar::Scalar;

use super::vec3::Vec3g;
use super::vec4::Vec4g;

/// A 2-component vector over scalar `S`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vec2g<S> {
    pub x: S,
    pub y: S,
}

/// Double-precision 2D vector.
pub type Vec2 = Vec2g<f64>;
/// Platform-native signed integer 2D vector.
pub type Vec2i = Vec2g<isize>;
/// Platform-native unsigned integer 2D vector.
pub type Vec2u = Vec2g<usize>;

super::impl_vector!(Vec2g, 2, x, y);

impl<S: Scalar> Vec2g<S> {
    /// Builds a vector from `x` and `y`.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// Components as a tuple.
    #[inline]
    pub fn xy(self) -> (S, S) {
        (self.x, self.y)
    }

    /// Appends `z`.
    #[inline]
    pub fn extend(self, z: S) -> Vec3g<S> {
        Vec3g::new(self.x, self.y, z)
    }

    /// Appends `z` and `w`.
    #[inline]
    pub fn extend2(self, z: S, w: S) -> Vec4g<S> {
        Vec4g::new(self.x, self.y, z, w)
    }

    /// Angle from the positive x axis, `atan2(y, x)`, in radians.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.to_double().atan2(self.x.to_double())
    }

    /// Passes both components to `f` at once.
    #[inline]
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnOnce(S, S) -> (S, S),
    {
        let (x, y) = f(self.x, self.y);
        Self { x, y }
    }
}

impl<S: Scalar> From<(S, S)> for Vec2g<S> {
    #[inline]
    fn from((x, y): (S, S)) -> Self {
        Self { x, y }
    }
}

impl<S: Scalar> From<Vec2g<S>> for (S, S) {
    #[inline]
    fn from(v: Vec2g<S>) -> Self {
        v.xy()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::VecError;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(13.0, 24.0));
        assert_eq!(a - b, Vec2::new(7.0, 16.0));
        assert_eq!(a * b, Vec2::new(30.0, 80.0));
        assert_eq!(a / b, Vec2::new(10.0 / 3.0, 5.0));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let a = Vec2::new(10.0, 20.0);
        assert_eq!(a.adds(2.0), Vec2::new(12.0, 22.0));
        assert_eq!(a.subs(2.0), Vec2::new(8.0, 18.0));
        assert_eq!(a.muls(2.0), Vec2::new(20.0, 40.0));
        assert_eq!(a.divs(2.0), Vec2::new(5.0, 10.0));
        assert_eq!(a * 2.0, a.muls(2.0));
        assert_eq!(a / 2.0, a.divs(2.0));
        assert_eq!(a.scale(3.0), a.muls(3.0));
    }

    #[test]
    fn test_neg_and_eq() {
        let a = Vec2::new(10.0, 20.0);
        assert_eq!(-a, Vec2::new(-10.0, -20.0));
        assert_ne!(a, Vec2::new(3.0, 4.0));
        assert!(Vec2i::splat(7).eqs(7));
        assert!(!Vec2i::new(7, 8).eqs(7));
    }

    #[test]
    fn test_integer_division_truncates() {
        let a = Vec2i::new(7, -7);
        assert_eq!(a.divs(2), Vec2i::new(3, -3));
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Vec2::splat(5.0), Vec2::new(5.0, 5.0));
        assert_eq!(Vec2u::zero(), Vec2u::new(0, 0));
        assert_eq!(Vec2u::one(), Vec2u::new(1, 1));
        assert_eq!(Vec2::default(), Vec2::zero());
        assert_eq!(Vec2g::<i32>::from_cast(-3.7, 4.2), Vec2g::new(-3, 4));
        assert_eq!(Vec2g::<f32>::from_cast(1_u8, 2_u8), Vec2g::new(1.0, 2.0));
    }

    #[test]
    fn test_conversions() {
        let v = Vec2::new(-3.7, 4.2);
        assert_eq!(v.as_isize(), Vec2i::new(-3, 4));
        assert_eq!(v.as_f32(), Vec2g::new(-3.7_f32, 4.2_f32));
        assert_eq!(v.cast::<u8>(), Vec2g::new(0_u8, 4));
        assert_eq!(Vec2u::new(1, 2).as_f64(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_dimension_changes() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.extend(3.0), Vec3g::new(1.0, 2.0, 3.0));
        assert_eq!(v.extend2(3.0, 4.0), Vec4g::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.extend(3.0).truncate(), v);
    }

    #[test]
    fn test_collections() {
        let v = Vec2i::new(1, 2);
        assert_eq!(v.to_array(), [1, 2]);
        assert_eq!(v.to_vec(), vec![1, 2]);
        assert_eq!(v.xy(), (1, 2));
        assert_eq!(Vec2i::from([1, 2]), v);
        assert_eq!(Vec2i::from((1, 2)), v);
        assert_eq!(Vec2i::try_from(vec![1, 2]), Ok(v));
        assert_eq!(
            Vec2i::try_from(&[1, 2, 3][..]),
            Err(VecError::LengthMismatch { expected: 2, got: 3 })
        );
    }

    #[test]
    fn test_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.len_sq(), 25.0);
        assert_eq!(v.len(), 5.0);
        assert_eq!(v.normalize(), Vec2::new(0.6, 0.8));
        assert_eq!(Vec2::zero().normalize(), Vec2::zero());
        assert_eq!(Vec2i::new(3, 4).len_sq(), 25);
        assert!((v.angle() - 0.9273).abs() < 1e-4);
    }

    #[test]
    fn test_combinators() {
        let v = Vec2::new(-1.5, 2.7);
        assert_eq!(v.map(f64::abs), Vec2::new(1.5, 2.7));
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(3.0, 7.0);
        assert_eq!(a.zip(b, f64::max), a);
        assert_eq!(a.apply(|x, y| (y, x)), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2i::new(3, 4).to_string(), "[3, 4]");
        assert_eq!(format!("{:.2}", Vec2::new(0.5, 1.0)), "[0.50, 1.00]");
    }
}
