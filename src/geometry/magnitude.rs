use crate::like::{Vec2Like, Vec3Like, Vec4Like};
use crate::scalar::Scalar;

/// Squared length of a 2D vector-like value, in its own scalar type.
#[inline]
pub fn len_sq2<S: Scalar, V: Vec2Like<S>>(v: V) -> S {
    v.to_vec2().len_sq()
}

/// Squared length of a 3D vector-like value.
#[inline]
pub fn len_sq3<S: Scalar, V: Vec3Like<S>>(v: V) -> S {
    v.to_vec3().len_sq()
}

/// Squared length of a 4D vector-like value.
#[inline]
pub fn len_sq4<S: Scalar, V: Vec4Like<S>>(v: V) -> S {
    v.to_vec4().len_sq()
}

/// Length of a 2D vector-like value, always in `f64`.
#[inline]
pub fn len2<S: Scalar, V: Vec2Like<S>>(v: V) -> f64 {
    v.to_vec2().len()
}

/// Length of a 3D vector-like value, in `f64`.
#[inline]
pub fn len3<S: Scalar, V: Vec3Like<S>>(v: V) -> f64 {
    v.to_vec3().len()
}

/// Length of a 4D vector-like value, in `f64`.
#[inline]
pub fn len4<S: Scalar, V: Vec4Like<S>>(v: V) -> f64 {
    v.to_vec4().len()
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has
/// zero length.
///
/// # Examples
///
/// ```
/// use vecg::{geometry::normalize2, Vec2};
///
/// assert_eq!(normalize2(Vec2::new(3.0, 4.0)), Vec2::new(0.6, 0.8));
/// assert_eq!(normalize2([0.0, 0.0]), [0.0, 0.0]);
/// ```
#[inline]
pub fn normalize2<S: Scalar, V: Vec2Like<S>>(v: V) -> V {
    V::from_vec2(v.to_vec2().normalize())
}

/// 3D form of [`normalize2`].
#[inline]
pub fn normalize3<S: Scalar, V: Vec3Like<S>>(v: V) -> V {
    V::from_vec3(v.to_vec3().normalize())
}

/// 4D form of [`normalize2`].
#[inline]
pub fn normalize4<S: Scalar, V: Vec4Like<S>>(v: V) -> V {
    V::from_vec4(v.to_vec4().normalize())
}

/// Angle of `v` from the positive x axis, in radians.
#[inline]
pub fn angle2<S: Scalar, V: Vec2Like<S>>(v: V) -> f64 {
    v.to_vec2().angle()
}
