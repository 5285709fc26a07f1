//! Numeric type classification for vector components.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar
//!   ├── Integer
//!   │     ├── SignedInteger    (i8 .. i128, isize)
//!   │     └── UnsignedInteger  (u8 .. u128, usize)
//!   └── Float                  (f32, f64)
//! ```
//!
//! Every trait is implemented by a blanket impl over the `num` capability
//! traits, so the classification is structural: any type with the right
//! numeric capabilities qualifies, not only the primitives listed above.

use std::fmt;

use num::traits::{AsPrimitive, Num, PrimInt};

// ---------------------------------------------------------------------------
// Scalar: the root trait for every component type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types usable as vector components.
///
/// Besides ordinary arithmetic, a scalar can be routed through `f64`. Length,
/// normalization, interpolation and rotation are computed in double precision
/// and converted back with the native `as` rule, so integer components
/// truncate toward zero and saturate at the bounds of their type.
pub trait Scalar:
    Copy + fmt::Debug + fmt::Display + PartialOrd + Num + Send + Sync + 'static
{
    /// Converts to `f64` with `as` semantics.
    fn to_double(self) -> f64;

    /// Converts from `f64` with `as` semantics.
    fn from_double(v: f64) -> Self;
}

impl<T> Scalar for T
where
    T: Copy + fmt::Debug + fmt::Display + PartialOrd + Num + Send + Sync + 'static,
    T: AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn to_double(self) -> f64 {
        self.as_()
    }

    #[inline]
    fn from_double(v: f64) -> Self {
        v.as_()
    }
}

// ---------------------------------------------------------------------------
// Integer kinds
// ---------------------------------------------------------------------------

/// Signed or unsigned integer scalar.
pub trait Integer: Scalar + PrimInt {}

impl<T: Scalar + PrimInt> Integer for T {}

/// Signed integer scalar.
pub trait SignedInteger: Integer + num::traits::Signed {}

impl<T: Integer + num::traits::Signed> SignedInteger for T {}

/// Unsigned integer scalar.
pub trait UnsignedInteger: Integer + num::traits::Unsigned {}

impl<T: Integer + num::traits::Unsigned> UnsignedInteger for T {}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Floating-point scalar.
pub trait Float: Scalar + num::traits::Float {}

impl<T: Scalar + num::traits::Float> Float for T {}
