//! Structural compatibility with foreign vector types.
//!
//! The free functions in [`geometry`](crate::geometry) and
//! [`func`](crate::func) are generic over these traits rather than over
//! [`Vec2g`]/[`Vec3g`]/[`Vec4g`] themselves. Any type that exposes the same
//! components in the same order can implement them and be passed straight
//! in; arity-preserving operations then hand back the caller's own type.
//!
//! Implementations are provided for the library vectors, fixed-size arrays
//! and tuples. For a plain struct with named fields, [`vec_like!`] writes the
//! impl:
//!
//! ```
//! use vecg::{vec_like, geometry::dot2, Vec2};
//!
//! #[derive(Clone, Copy)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! vec_like!(Point: f64 { x, y });
//!
//! let p = Point { x: 10.0, y: 20.0 };
//! assert_eq!(dot2(p, Vec2::new(3.0, 4.0)), 110.0);
//! ```
//!
//! [`vec_like!`]: crate::vec_like

use crate::scalar::Scalar;
use crate::vector::{Vec2g, Vec3g, Vec4g};

/// A value with exactly two components of scalar `S`.
pub trait Vec2Like<S: Scalar>: Sized {
    fn to_vec2(self) -> Vec2g<S>;
    fn from_vec2(v: Vec2g<S>) -> Self;
}

/// A value with exactly three components of scalar `S`.
pub trait Vec3Like<S: Scalar>: Sized {
    fn to_vec3(self) -> Vec3g<S>;
    fn from_vec3(v: Vec3g<S>) -> Self;
}

/// A value with exactly four components of scalar `S`.
pub trait Vec4Like<S: Scalar>: Sized {
    fn to_vec4(self) -> Vec4g<S>;
    fn from_vec4(v: Vec4g<S>) -> Self;
}

impl<S: Scalar> Vec2Like<S> for Vec2g<S> {
    #[inline]
    fn to_vec2(self) -> Vec2g<S> {
        self
    }

    #[inline]
    fn from_vec2(v: Vec2g<S>) -> Self {
        v
    }
}

impl<S: Scalar> Vec3Like<S> for Vec3g<S> {
    #[inline]
    fn to_vec3(self) -> Vec3g<S> {
        self
    }

    #[inline]
    fn from_vec3(v: Vec3g<S>) -> Self {
        v
    }
}

impl<S: Scalar> Vec4Like<S> for Vec4g<S> {
    #[inline]
    fn to_vec4(self) -> Vec4g<S> {
        self
    }

    #[inline]
    fn from_vec4(v: Vec4g<S>) -> Self {
        v
    }
}

impl<S: Scalar> Vec2Like<S> for [S; 2] {
    #[inline]
    fn to_vec2(self) -> Vec2g<S> {
        self.into()
    }

    #[inline]
    fn from_vec2(v: Vec2g<S>) -> Self {
        v.to_array()
    }
}

impl<S: Scalar> Vec3Like<S> for [S; 3] {
    #[inline]
    fn to_vec3(self) -> Vec3g<S> {
        self.into()
    }

    #[inline]
    fn from_vec3(v: Vec3g<S>) -> Self {
        v.to_array()
    }
}

impl<S: Scalar> Vec4Like<S> for [S; 4] {
    #[inline]
    fn to_vec4(self) -> Vec4g<S> {
        self.into()
    }

    #[inline]
    fn from_vec4(v: Vec4g<S>) -> Self {
        v.to_array()
    }
}

impl<S: Scalar> Vec2Like<S> for (S, S) {
    #[inline]
    fn to_vec2(self) -> Vec2g<S> {
        self.into()
    }

    #[inline]
    fn from_vec2(v: Vec2g<S>) -> Self {
        v.xy()
    }
}

impl<S: Scalar> Vec3Like<S> for (S, S, S) {
    #[inline]
    fn to_vec3(self) -> Vec3g<S> {
        self.into()
    }

    #[inline]
    fn from_vec3(v: Vec3g<S>) -> Self {
        v.xyz()
    }
}

impl<S: Scalar> Vec4Like<S> for (S, S, S, S) {
    #[inline]
    fn to_vec4(self) -> Vec4g<S> {
        self.into()
    }

    #[inline]
    fn from_vec4(v: Vec4g<S>) -> Self {
        v.xyzw()
    }
}

/// Implements [`Vec2Like`], [`Vec3Like`] or [`Vec4Like`] for a struct whose
/// named fields hold the components, in order.
///
/// The struct must have exactly those fields.
///
/// ```
/// use vecg::{vec_like, Vec3Like};
///
/// struct Rgb {
///     r: u8,
///     g: u8,
///     b: u8,
/// }
///
/// vec_like!(Rgb: u8 { r, g, b });
///
/// let v = Rgb { r: 1, g: 2, b: 3 }.to_vec3();
/// assert_eq!(v.to_array(), [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! vec_like {
    ($ty:ty : $s:ty { $x:ident, $y:ident }) => {
        impl $crate::like::Vec2Like<$s> for $ty {
            #[inline]
            fn to_vec2(self) -> $crate::vector::Vec2g<$s> {
                $crate::vector::Vec2g::new(self.$x, self.$y)
            }

            #[inline]
            fn from_vec2(v: $crate::vector::Vec2g<$s>) -> Self {
                Self { $x: v.x, $y: v.y }
            }
        }
    };
    ($ty:ty : $s:ty { $x:ident, $y:ident, $z:ident }) => {
        impl $crate::like::Vec3Like<$s> for $ty {
            #[inline]
            fn to_vec3(self) -> $crate::vector::Vec3g<$s> {
                $crate::vector::Vec3g::new(self.$x, self.$y, self.$z)
            }

            #[inline]
            fn from_vec3(v: $crate::vector::Vec3g<$s>) -> Self {
                Self { $x: v.x, $y: v.y, $z: v.z }
            }
        }
    };
    ($ty:ty : $s:ty { $x:ident, $y:ident, $z:ident, $w:ident }) => {
        impl $crate::like::Vec4Like<$s> for $ty {
            #[inline]
            fn to_vec4(self) -> $crate::vector::Vec4g<$s> {
                $crate::vector::Vec4g::new(self.$x, self.$y, self.$z, self.$w)
            }

            #[inline]
            fn from_vec4(v: $crate::vector::Vec4g<$s>) -> Self {
                Self { $x: v.x, $y: v.y, $z: v.z, $w: v.w }
            }
        }
    };
}
