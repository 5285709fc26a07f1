//! Generic fixed-size vector math.
//!
//! `vecg` provides 2-, 3- and 4-component vectors over any numeric scalar
//! (signed integers, unsigned integers and floats). Vectors are plain `Copy`
//! values: every operation returns a new vector and nothing is ever mutated
//! or allocated on the hot path.
//!
//! The API is split in two:
//!
//! - **Methods** on [`Vec2g`], [`Vec3g`] and [`Vec4g`] cover construction,
//!   arithmetic, comparison and conversion.
//! - **Free functions** in [`geometry`] and [`func`] cover geometry and the
//!   functional combinators. They accept any *vector-like* value (see
//!   [`like`]), so a foreign point type with the same component layout can be
//!   used directly and gets its own type back from arity-preserving
//!   operations.
//!
//! ```
//! use vecg::prelude::*;
//!
//! let a = Vec2::new(3.0, 4.0);
//! assert_eq!(a.len(), 5.0);
//! assert_eq!(dot2(a, [1.0, 0.0]), 3.0);
//! assert_eq!(lerp2(a, Vec2::zero(), 1.0), Vec2::zero());
//! ```

pub mod error;
pub mod func;
pub mod geometry;
pub mod like;
pub mod scalar;
pub mod vector;

pub use error::{Result, VecError};
pub use like::{Vec2Like, Vec3Like, Vec4Like};
pub use scalar::{Float, Integer, Scalar, SignedInteger, UnsignedInteger};
pub use vector::{
    Vec2, Vec2g, Vec2i, Vec2u, Vec3, Vec3g, Vec3i, Vec3u, Vec4, Vec4g, Vec4i, Vec4u,
};

/// Items intended for glob-import: `use vecg::prelude::*;`
pub mod prelude {
    pub use crate::func::*;
    pub use crate::geometry::*;
    pub use crate::like::{Vec2Like, Vec3Like, Vec4Like};
    pub use crate::scalar::{Float, Integer, Scalar, SignedInteger, UnsignedInteger};
    pub use crate::vector::{
        Vec2, Vec2g, Vec2i, Vec2u, Vec3, Vec3g, Vec3i, Vec3u, Vec4, Vec4g, Vec4i, Vec4u,
    };
}
