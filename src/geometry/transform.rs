use crate::like::{Vec2Like, Vec3Like, Vec4Like};
use crate::scalar::Scalar;
use crate::vector::Vec2g;

use super::product::{dot2, dot3, dot4};

/// Rotates `v` counterclockwise by `angle` radians.
///
/// # Examples
///
/// ```
/// use vecg::{geometry::rotate2, Vec2};
///
/// let v = rotate2(Vec2::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
/// assert!(v.approx_eq(Vec2::new(0.0, 1.0), 1e-15));
/// ```
#[inline]
pub fn rotate2<S: Scalar, V: Vec2Like<S>>(v: V, angle: f64) -> V {
    let (sin, cos) = angle.sin_cos();
    let p = v.to_vec2().as_f64();
    V::from_vec2(Vec2g::from_f64(Vec2g::new(
        p.x * cos - p.y * sin,
        p.x * sin + p.y * cos,
    )))
}

/// Projects `v` onto the direction of `on_normal`: `(v · n̂) n̂`.
///
/// `on_normal` does not need to be unit length. A zero `on_normal` projects
/// everything to zero.
#[inline]
pub fn project2<S, V, N>(v: V, on_normal: N) -> V
where
    S: Scalar,
    V: Vec2Like<S>,
    N: Vec2Like<S>,
{
    let v = v.to_vec2();
    let n = on_normal.to_vec2().normalize();
    V::from_vec2(n.scale(dot2(v, n)))
}

/// 3D form of [`project2`].
#[inline]
pub fn project3<S, V, N>(v: V, on_normal: N) -> V
where
    S: Scalar,
    V: Vec3Like<S>,
    N: Vec3Like<S>,
{
    let v = v.to_vec3();
    let n = on_normal.to_vec3().normalize();
    V::from_vec3(n.scale(dot3(v, n)))
}

/// 4D form of [`project2`].
#[inline]
pub fn project4<S, V, N>(v: V, on_normal: N) -> V
where
    S: Scalar,
    V: Vec4Like<S>,
    N: Vec4Like<S>,
{
    let v = v.to_vec4();
    let n = on_normal.to_vec4().normalize();
    V::from_vec4(n.scale(dot4(v, n)))
}

/// Reflects `v` off a surface with the given normal: `v - 2 (v · n̂) n̂`.
///
/// The normal is normalized before use.
///
/// # Examples
///
/// ```
/// use vecg::{geometry::reflect2, Vec2};
///
/// assert_eq!(reflect2(Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0)), Vec2::new(1.0, 1.0));
/// ```
#[inline]
pub fn reflect2<S, V, N>(v: V, normal: N) -> V
where
    S: Scalar,
    V: Vec2Like<S>,
    N: Vec2Like<S>,
{
    let v = v.to_vec2();
    let n = normal.to_vec2().normalize();
    let d = dot2(v, n);
    V::from_vec2(v - n.scale(d + d))
}

/// 3D form of [`reflect2`].
#[inline]
pub fn reflect3<S, V, N>(v: V, normal: N) -> V
where
    S: Scalar,
    V: Vec3Like<S>,
    N: Vec3Like<S>,
{
    let v = v.to_vec3();
    let n = normal.to_vec3().normalize();
    let d = dot3(v, n);
    V::from_vec3(v - n.scale(d + d))
}

/// 4D form of [`reflect2`].
#[inline]
pub fn reflect4<S, V, N>(v: V, normal: N) -> V
where
    S: Scalar,
    V: Vec4Like<S>,
    N: Vec4Like<S>,
{
    let v = v.to_vec4();
    let n = normal.to_vec4().normalize();
    let d = dot4(v, n);
    V::from_vec4(v - n.scale(d + d))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::vector::{Vec2, Vec2i, Vec3, Vec3i, Vec4};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate() {
        let v = rotate2(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert_eq!(v.y, 1.0);
        assert!(v.x.abs() < 1e-16);
        assert!(rotate2(Vec2::new(1.0, 2.0), PI).approx_eq(Vec2::new(-1.0, -2.0), 1e-15));
        assert_eq!(rotate2(Vec2i::new(0, 5), -FRAC_PI_2), Vec2i::new(5, 0));
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Vec2::new(3.0, -4.0);
        for i in 0..16 {
            let r = rotate2(v, i as f64 * 0.4);
            assert!((r.len() - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_project() {
        assert_eq!(project2(Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0)), Vec2::new(0.0, -1.0));
        assert_eq!(project2(Vec2::new(1.0, -1.0), Vec2::new(0.0, 10.0)), Vec2::new(0.0, -1.0));
        assert_eq!(
            project3(Vec3::new(2.0, 3.0, 4.0), Vec3::new(1.0, 0.0, 0.0)),
            Vec3::new(2.0, 0.0, 0.0)
        );
        assert_eq!(project4(Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::zero()), Vec4::zero());
    }

    #[test]
    fn test_reflect() {
        assert_eq!(reflect2(Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0)), Vec2::new(1.0, 1.0));
        assert_eq!(reflect2(Vec2i::new(1, -1), Vec2i::new(0, 3)), Vec2i::new(1, 1));
        assert_eq!(
            reflect3(Vec3i::new(1, 2, 3), Vec3i::new(0, 0, -1)),
            Vec3i::new(1, 2, -3)
        );
        assert_eq!(
            reflect4(Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(0.0, 0.0, 0.0, 1.0)),
            Vec4::new(1.0, 1.0, 1.0, -1.0)
        );
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = Vec3::new(0.3, -1.7, 2.2);
        let r = reflect3(v, Vec3::new(1.0, 1.0, 1.0));
        assert!((r.len() - v.len()).abs() < 1e-12);
    }
}
