use crate::like::{Vec2Like, Vec3Like, Vec4Like};
use crate::scalar::Scalar;
use crate::vector::Vec3g;

/// Dot product of two 2D vector-like values.
///
/// `a` and `b` may be different types as long as they share the scalar.
///
/// # Examples
///
/// ```
/// use vecg::{geometry::dot2, Vec2};
///
/// assert_eq!(dot2(Vec2::new(10.0, 20.0), [3.0, 4.0]), 110.0);
/// ```
#[inline]
pub fn dot2<S, A, B>(a: A, b: B) -> S
where
    S: Scalar,
    A: Vec2Like<S>,
    B: Vec2Like<S>,
{
    let (a, b) = (a.to_vec2(), b.to_vec2());
    a.x * b.x + a.y * b.y
}

/// Dot product of two 3D vector-like values.
#[inline]
pub fn dot3<S, A, B>(a: A, b: B) -> S
where
    S: Scalar,
    A: Vec3Like<S>,
    B: Vec3Like<S>,
{
    let (a, b) = (a.to_vec3(), b.to_vec3());
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Dot product of two 4D vector-like values.
#[inline]
pub fn dot4<S, A, B>(a: A, b: B) -> S
where
    S: Scalar,
    A: Vec4Like<S>,
    B: Vec4Like<S>,
{
    let (a, b) = (a.to_vec4(), b.to_vec4());
    a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
}

/// 2D cross product: the signed area `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` lies counterclockwise of `a`.
#[inline]
pub fn cross2<S, A, B>(a: A, b: B) -> S
where
    S: Scalar,
    A: Vec2Like<S>,
    B: Vec2Like<S>,
{
    let (a, b) = (a.to_vec2(), b.to_vec2());
    a.x * b.y - a.y * b.x
}

/// Right-handed 3D cross product.
#[inline]
pub fn cross3<S, V>(a: V, b: V) -> V
where
    S: Scalar,
    V: Vec3Like<S>,
{
    let (a, b) = (a.to_vec3(), b.to_vec3());
    V::from_vec3(Vec3g::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    ))
}
