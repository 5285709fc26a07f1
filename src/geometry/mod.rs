//! Geometry over vector-like values.
//!
//! Every function here is generic over [`Vec2Like`](crate::Vec2Like),
//! [`Vec3Like`](crate::Vec3Like) or [`Vec4Like`](crate::Vec4Like). Functions
//! that produce a vector of the same arity return the caller's own type.
//!
//! Computations that need square roots or trigonometry run in `f64` and are
//! converted back to the scalar type with `as` semantics.

pub mod interpolate;
pub mod magnitude;
pub mod product;
pub mod transform;

pub use interpolate::{lerp2, lerp3, lerp4, slerp3, SLERP_MIN_SIN, SLERP_PARALLEL_COS};
pub use magnitude::{angle2, len2, len3, len4, len_sq2, len_sq3, len_sq4};
pub use magnitude::{normalize2, normalize3, normalize4};
pub use product::{cross2, cross3, dot2, dot3, dot4};
pub use transform::{project2, project3, project4, reflect2, reflect3, reflect4, rotate2};
