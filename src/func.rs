//! Free constructors, conversions and combinators.
//!
//! The combinators accept any vector-like value and return the caller's own
//! type:
//!
//! - `map2`/`map3`/`map4` apply a unary function to every component. The
//!   digit is the arity, not the function's argument count.
//! - `zip2`/`zip3`/`zip4` combine two vectors componentwise.
//! - `apply2`/`apply3`/`apply4` hand all components to one function at once,
//!   for transforms where an output component depends on several inputs
//!   (permutations, color-space conversions).

use num::traits::AsPrimitive;

use crate::like::{Vec2Like, Vec3Like, Vec4Like};
use crate::scalar::Scalar;
use crate::vector::{Vec2g, Vec3g, Vec4g};

/// Builds a 2D vector from its components.
#[inline]
pub const fn new2<S: Scalar>(x: S, y: S) -> Vec2g<S> {
    Vec2g::new(x, y)
}

/// Builds a 3D vector from its components.
#[inline]
pub const fn new3<S: Scalar>(x: S, y: S, z: S) -> Vec3g<S> {
    Vec3g::new(x, y, z)
}

/// Builds a 4D vector from its components.
#[inline]
pub const fn new4<S: Scalar>(x: S, y: S, z: S, w: S) -> Vec4g<S> {
    Vec4g::new(x, y, z, w)
}

/// 2D vector with both components equal to `s`.
#[inline]
pub fn splat2<S: Scalar>(s: S) -> Vec2g<S> {
    Vec2g::splat(s)
}

/// 3D vector with every component equal to `s`.
#[inline]
pub fn splat3<S: Scalar>(s: S) -> Vec3g<S> {
    Vec3g::splat(s)
}

/// 4D vector with every component equal to `s`.
#[inline]
pub fn splat4<S: Scalar>(s: S) -> Vec4g<S> {
    Vec4g::splat(s)
}

/// Converts a 2D vector-like value to scalar `T` with `as` semantics.
///
/// # Examples
///
/// ```
/// use vecg::{func::cast2, Vec2g};
///
/// assert_eq!(cast2::<u8, _, _>([-3.7, 4.2]), Vec2g::new(0, 4));
/// ```
#[inline]
pub fn cast2<T, S, V>(v: V) -> Vec2g<T>
where
    T: Scalar,
    S: Scalar + AsPrimitive<T>,
    V: Vec2Like<S>,
{
    v.to_vec2().cast()
}

/// Converts a 3D vector-like value to scalar `T` with `as` semantics.
#[inline]
pub fn cast3<T, S, V>(v: V) -> Vec3g<T>
where
    T: Scalar,
    S: Scalar + AsPrimitive<T>,
    V: Vec3Like<S>,
{
    v.to_vec3().cast()
}

/// Converts a 4D vector-like value to scalar `T` with `as` semantics.
#[inline]
pub fn cast4<T, S, V>(v: V) -> Vec4g<T>
where
    T: Scalar,
    S: Scalar + AsPrimitive<T>,
    V: Vec4Like<S>,
{
    v.to_vec4().cast()
}

/// Applies `f` to both components, x first.
#[inline]
pub fn map2<S, V, F>(v: V, f: F) -> V
where
    S: Scalar,
    V: Vec2Like<S>,
    F: FnMut(S) -> S,
{
    V::from_vec2(v.to_vec2().map(f))
}

/// Applies `f` to each component in order.
#[inline]
pub fn map3<S, V, F>(v: V, f: F) -> V
where
    S: Scalar,
    V: Vec3Like<S>,
    F: FnMut(S) -> S,
{
    V::from_vec3(v.to_vec3().map(f))
}

/// Applies `f` to each component in order.
#[inline]
pub fn map4<S, V, F>(v: V, f: F) -> V
where
    S: Scalar,
    V: Vec4Like<S>,
    F: FnMut(S) -> S,
{
    V::from_vec4(v.to_vec4().map(f))
}

/// Combines `a` and `b` componentwise with `f`.
#[inline]
pub fn zip2<S, V, F>(a: V, b: V, f: F) -> V
where
    S: Scalar,
    V: Vec2Like<S>,
    F: FnMut(S, S) -> S,
{
    V::from_vec2(a.to_vec2().zip(b.to_vec2(), f))
}

/// Combines `a` and `b` componentwise with `f`.
#[inline]
pub fn zip3<S, V, F>(a: V, b: V, f: F) -> V
where
    S: Scalar,
    V: Vec3Like<S>,
    F: FnMut(S, S) -> S,
{
    V::from_vec3(a.to_vec3().zip(b.to_vec3(), f))
}

/// Combines `a` and `b` componentwise with `f`.
#[inline]
pub fn zip4<S, V, F>(a: V, b: V, f: F) -> V
where
    S: Scalar,
    V: Vec4Like<S>,
    F: FnMut(S, S) -> S,
{
    V::from_vec4(a.to_vec4().zip(b.to_vec4(), f))
}

/// Passes both components to `f` and builds the result from its output.
#[inline]
pub fn apply2<S, V, F>(v: V, f: F) -> V
where
    S: Scalar,
    V: Vec2Like<S>,
    F: FnOnce(S, S) -> (S, S),
{
    V::from_vec2(v.to_vec2().apply(f))
}

/// Passes all three components to `f` and builds the result from its output.
#[inline]
pub fn apply3<S, V, F>(v: V, f: F) -> V
where
    S: Scalar,
    V: Vec3Like<S>,
    F: FnOnce(S, S, S) -> (S, S, S),
{
    V::from_vec3(v.to_vec3().apply(f))
}

/// Passes all four components to `f` and builds the result from its output.
#[inline]
pub fn apply4<S, V, F>(v: V, f: F) -> V
where
    S: Scalar,
    V: Vec4Like<S>,
    F: FnOnce(S, S, S, S) -> (S, S, S, S),
{
    V::from_vec4(v.to_vec4().apply(f))
}
