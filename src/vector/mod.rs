//! Fixed-arity vector types.
//!
//! [`Vec2g`], [`Vec3g`] and [`Vec4g`] share one surface, generated by
//! `impl_vector!` below: construction, conversion, componentwise arithmetic,
//! scalar broadcast, magnitude and the `map`/`zip` combinators. Arity-specific
//! items (decomposition, dimension changes, `apply`, tuple conversions) live
//! in the per-arity modules.
//!
//! Equality is exact componentwise equality. Use `approx_eq` when a
//! tolerance is wanted.

macro_rules! impl_vector {
    ($name:ident, $n:literal, $($f:ident),+) => {
        impl<S: $crate::scalar::Scalar> $name<S> {
            /// Returns a vector with every component equal to `s`.
            #[inline]
            pub fn splat(s: S) -> Self {
                Self { $($f: s),+ }
            }

            /// The all-zero vector.
            #[inline]
            pub fn zero() -> Self {
                Self::splat(S::zero())
            }

            /// The all-one vector.
            #[inline]
            pub fn one() -> Self {
                Self::splat(S::one())
            }

            /// Builds a vector from components of another scalar type,
            /// converting each one with `as` semantics.
            #[inline]
            pub fn from_cast<T>($($f: T),+) -> Self
            where
                T: num::traits::AsPrimitive<S>,
            {
                Self { $($f: $f.as_()),+ }
            }

            /// Converts every component to `T` with `as` semantics.
            ///
            /// Float to integer truncates toward zero and saturates at the
            /// target bounds; NaN becomes zero.
            #[inline]
            pub fn cast<T>(self) -> $name<T>
            where
                T: $crate::scalar::Scalar,
                S: num::traits::AsPrimitive<T>,
            {
                $name { $($f: self.$f.as_()),+ }
            }

            /// Converts every component to `f64`.
            #[inline]
            pub fn as_f64(self) -> $name<f64> {
                $name { $($f: self.$f.to_double()),+ }
            }

            /// Inverse of [`as_f64`](Self::as_f64), with `as` semantics.
            #[inline]
            pub(crate) fn from_f64(v: $name<f64>) -> Self {
                Self { $($f: S::from_double(v.$f)),+ }
            }

            /// Converts every component to `f32` with `as` semantics.
            #[inline]
            pub fn as_f32(self) -> $name<f32>
            where
                S: num::traits::AsPrimitive<f32>,
            {
                self.cast()
            }

            /// Converts every component to `isize` with `as` semantics.
            #[inline]
            pub fn as_isize(self) -> $name<isize>
            where
                S: num::traits::AsPrimitive<isize>,
            {
                self.cast()
            }

            /// Converts every component to `usize` with `as` semantics.
            #[inline]
            pub fn as_usize(self) -> $name<usize>
            where
                S: num::traits::AsPrimitive<usize>,
            {
                self.cast()
            }

            /// Components as a fixed-length array, in order.
            #[inline]
            pub fn to_array(self) -> [S; $n] {
                [$(self.$f),+]
            }

            /// Components as a `Vec`, in order.
            pub fn to_vec(self) -> Vec<S> {
                vec![$(self.$f),+]
            }

            /// Adds `s` to every component.
            #[inline]
            pub fn adds(self, s: S) -> Self {
                Self { $($f: self.$f + s),+ }
            }

            /// Subtracts `s` from every component.
            #[inline]
            pub fn subs(self, s: S) -> Self {
                Self { $($f: self.$f - s),+ }
            }

            /// Multiplies every component by `s`.
            #[inline]
            pub fn muls(self, s: S) -> Self {
                Self { $($f: self.$f * s),+ }
            }

            /// Divides every component by `s`.
            ///
            /// Division by zero behaves like the scalar type does: floats
            /// yield infinities or NaN, integers panic.
            #[inline]
            pub fn divs(self, s: S) -> Self {
                Self { $($f: self.$f / s),+ }
            }

            /// Same as [`muls`](Self::muls).
            #[inline]
            pub fn scale(self, s: S) -> Self {
                self.muls(s)
            }

            /// True when every component equals `s` exactly.
            #[inline]
            pub fn eqs(self, s: S) -> bool {
                true $(&& self.$f == s)+
            }

            /// Componentwise comparison within an absolute `tolerance`,
            /// evaluated in `f64`.
            pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
                true $(&& (self.$f.to_double() - other.$f.to_double()).abs() <= tolerance)+
            }

            /// Sum of squared components, in the vector's own scalar type.
            #[inline]
            pub fn len_sq(self) -> S {
                S::zero() $(+ self.$f * self.$f)+
            }

            /// Euclidean length, always in `f64`.
            #[inline]
            pub fn len(self) -> f64 {
                self.len_sq().to_double().sqrt()
            }

            /// Divides by the length. A zero-length vector comes back as the
            /// zero vector instead of NaN.
            ///
            /// The length is converted to `S` before dividing, so integer
            /// vectors divide by the truncated length.
            #[inline]
            pub fn normalize(self) -> Self {
                let l = self.len();
                if l == 0.0 {
                    return Self::zero();
                }
                self.divs(S::from_double(l))
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map<F>(self, mut f: F) -> Self
            where
                F: FnMut(S) -> S,
            {
                Self { $($f: f(self.$f)),+ }
            }

            /// Applies `f` pairwise to the components of `self` and `other`.
            #[inline]
            pub fn zip<F>(self, other: Self, mut f: F) -> Self
            where
                F: FnMut(S, S) -> S,
            {
                Self { $($f: f(self.$f, other.$f)),+ }
            }
        }

        impl<S: $crate::scalar::Scalar> std::ops::Add for $name<S> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<S: $crate::scalar::Scalar> std::ops::Sub for $name<S> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<S: $crate::scalar::Scalar> std::ops::Mul for $name<S> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl<S: $crate::scalar::Scalar> std::ops::Div for $name<S> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl<S: $crate::scalar::Scalar> std::ops::Mul<S> for $name<S> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: S) -> Self {
                self.muls(rhs)
            }
        }

        impl<S: $crate::scalar::Scalar> std::ops::Div<S> for $name<S> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: S) -> Self {
                self.divs(rhs)
            }
        }

        impl<S> std::ops::Neg for $name<S>
        where
            S: $crate::scalar::Scalar + std::ops::Neg<Output = S>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl<S: $crate::scalar::Scalar> std::fmt::Display for $name<S> {
            /// Renders `[x, y, ..]`, forwarding width and precision to each
            /// component.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let components = [$(self.$f),+];
                f.write_str("[")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    std::fmt::Display::fmt(c, f)?;
                }
                f.write_str("]")
            }
        }

        impl<S: $crate::scalar::Scalar> From<[S; $n]> for $name<S> {
            #[inline]
            fn from([$($f),+]: [S; $n]) -> Self {
                Self { $($f),+ }
            }
        }

        impl<S: $crate::scalar::Scalar> From<$name<S>> for [S; $n] {
            #[inline]
            fn from(v: $name<S>) -> Self {
                v.to_array()
            }
        }

        impl<S: $crate::scalar::Scalar> From<$name<S>> for Vec<S> {
            fn from(v: $name<S>) -> Self {
                v.to_vec()
            }
        }

        impl<'a, S: $crate::scalar::Scalar> TryFrom<&'a [S]> for $name<S> {
            type Error = $crate::error::VecError;

            fn try_from(slice: &'a [S]) -> $crate::error::Result<Self> {
                let array: [S; $n] = slice
                    .try_into()
                    .map_err(|_| $crate::error::length_mismatch($n, slice.len()))?;
                Ok(array.into())
            }
        }

        impl<S: $crate::scalar::Scalar> TryFrom<Vec<S>> for $name<S> {
            type Error = $crate::error::VecError;

            fn try_from(v: Vec<S>) -> $crate::error::Result<Self> {
                Self::try_from(v.as_slice())
            }
        }
    };
}

pub(crate) use impl_vector;

mod vec2;
mod vec3;
mod vec4;

pub use vec2::{Vec2, Vec2g, Vec2i, Vec2u};
pub use vec3::{Vec3, Vec3g, Vec3i, Vec3u};
pub use vec4::{Vec4, Vec4g, Vec4i, Vec4u};
