use crate::like::{Vec2Like, Vec3Like, Vec4Like};
use crate::scalar::Scalar;
use crate::vector::Vec3g;

use super::product::dot3;

/// Above this cosine the inputs are treated as parallel and [`slerp3`] falls
/// back to normalized linear interpolation.
pub const SLERP_PARALLEL_COS: f64 = 0.9995;

/// Below this sine of the angle between the inputs [`slerp3`] falls back to
/// normalized linear interpolation.
pub const SLERP_MIN_SIN: f64 = 0.001;

#[inline]
fn lerp_scalar<S: Scalar>(a: S, b: S, t: f64) -> S {
    let (a, b) = (a.to_double(), b.to_double());
    S::from_double(a + (b - a) * t)
}

/// Linear interpolation `a + (b - a) * t`, per component in `f64`.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// use vecg::{geometry::lerp2, Vec2};
///
/// let mid = lerp2(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), 0.5);
/// assert_eq!(mid, Vec2::new(0.5, 0.5));
/// ```
#[inline]
pub fn lerp2<S: Scalar, V: Vec2Like<S>>(a: V, b: V, t: f64) -> V {
    let (a, b) = (a.to_vec2(), b.to_vec2());
    V::from_vec2(a.zip(b, |a, b| lerp_scalar(a, b, t)))
}

/// 3D form of [`lerp2`].
#[inline]
pub fn lerp3<S: Scalar, V: Vec3Like<S>>(a: V, b: V, t: f64) -> V {
    let (a, b) = (a.to_vec3(), b.to_vec3());
    V::from_vec3(a.zip(b, |a, b| lerp_scalar(a, b, t)))
}

/// 4D form of [`lerp2`].
#[inline]
pub fn lerp4<S: Scalar, V: Vec4Like<S>>(a: V, b: V, t: f64) -> V {
    let (a, b) = (a.to_vec4(), b.to_vec4());
    V::from_vec4(a.zip(b, |a, b| lerp_scalar(a, b, t)))
}

/// Spherical interpolation between the directions of `a` and `b`.
///
/// Both inputs are normalized first, so the result is a unit vector (up to
/// the precision of `S`). When the inputs are nearly parallel
/// (`cos θ > SLERP_PARALLEL_COS`) or the angle between them is degenerate
/// (`sin θ < SLERP_MIN_SIN`, which includes opposite directions) the result is
/// the normalized linear interpolation instead.
///
/// # Examples
///
/// ```
/// use vecg::{geometry::slerp3, Vec3};
///
/// let v = slerp3(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 0.5);
/// let h = std::f64::consts::FRAC_1_SQRT_2;
/// assert!(v.approx_eq(Vec3::new(h, h, 0.0), 1e-12));
/// ```
pub fn slerp3<S: Scalar, V: Vec3Like<S>>(a: V, b: V, t: f64) -> V {
    let a = a.to_vec3().as_f64().normalize();
    let b = b.to_vec3().as_f64().normalize();

    let cos_theta = dot3(a, b).clamp(-1.0, 1.0);
    if cos_theta > SLERP_PARALLEL_COS {
        return V::from_vec3(Vec3g::from_f64(nlerp3(a, b, t)));
    }

    let theta = cos_theta.acos();
    let sin_theta = theta.sin();
    if sin_theta < SLERP_MIN_SIN {
        return V::from_vec3(Vec3g::from_f64(nlerp3(a, b, t)));
    }

    let wa = ((1.0 - t) * theta).sin() / sin_theta;
    let wb = (t * theta).sin() / sin_theta;
    V::from_vec3(Vec3g::from_f64(a.muls(wa) + b.muls(wb)))
}

#[inline]
fn nlerp3(a: Vec3g<f64>, b: Vec3g<f64>, t: f64) -> Vec3g<f64> {
    lerp3(a, b, t).normalize()
}
