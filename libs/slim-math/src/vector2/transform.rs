//! Transforms of [`Vector2`] by quaternions and 4×4 matrices.
//!
//! Vectors are treated as rows multiplied on the left of a [`Matrix`]. A 2D
//! point is lifted to `[x, y, 0, 1]`, so only rows 1, 2 and 4 of the matrix
//! contribute.

use super::Vector2;
use crate::{Matrix, Quaternion, Vector4};

/// Rotates `vector` by a unit quaternion.
///
/// The vector is taken as lying in the XY plane. The result carries the
/// rotated point in 3-space with `w` fixed to `1`. The diagonal terms
/// `1 - yy - zz` and `1 - xx - zz` are evaluated in `f64` before narrowing.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Quaternion, Vector2, Vector4};
///
/// let v = vector2::transform_by_quaternion(Vector2::new(2.0, 3.0), &Quaternion::IDENTITY);
/// assert_eq!(v, Vector4::new(2.0, 3.0, 0.0, 1.0));
/// ```
pub fn transform_by_quaternion(vector: Vector2, rotation: &Quaternion) -> Vector4 {
    let x = rotation.x + rotation.x;
    let y = rotation.y + rotation.y;
    let z = rotation.z + rotation.z;
    let wx = rotation.w * x;
    let wy = rotation.w * y;
    let wz = rotation.w * z;
    let xx = rotation.x * x;
    let xy = rotation.x * y;
    let xz = rotation.x * z;
    let yy = rotation.y * y;
    let yz = rotation.y * z;
    let zz = rotation.z * z;

    let diagonal_x = (f64::from(vector.x) * ((1.0 - f64::from(yy)) - f64::from(zz))) as f32;
    let diagonal_y = (f64::from(vector.y) * ((1.0 - f64::from(xx)) - f64::from(zz))) as f32;

    Vector4::new(
        diagonal_x + (vector.y * (xy - wz)),
        (vector.x * (xy + wz)) + diagonal_y,
        (vector.x * (xz - wy)) + (vector.y * (yz + wx)),
        1.0,
    )
}

/// Full homogeneous product `[x, y, 0, 1] · transform`.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Matrix, Vector2, Vector4};
///
/// let v = vector2::transform(Vector2::new(2.0, 3.0), &Matrix::IDENTITY);
/// assert_eq!(v, Vector4::new(2.0, 3.0, 0.0, 1.0));
/// ```
pub fn transform(vector: Vector2, transform: &Matrix) -> Vector4 {
    Vector4::new(
        (vector.x * transform.m11) + (vector.y * transform.m21) + transform.m41,
        (vector.x * transform.m12) + (vector.y * transform.m22) + transform.m42,
        (vector.x * transform.m13) + (vector.y * transform.m23) + transform.m43,
        (vector.x * transform.m14) + (vector.y * transform.m24) + transform.m44,
    )
}

/// Transforms a point and projects it back with a perspective divide.
///
/// The homogeneous `w` is not checked: a point that maps to `w == 0` yields
/// infinite or NaN components.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Matrix, Vector2};
///
/// let m = Matrix::from(glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 0.0)));
/// assert_eq!(vector2::transform_coordinate(Vector2::ZERO, &m), Vector2::new(1.0, 2.0));
/// ```
pub fn transform_coordinate(coordinate: Vector2, transform: &Matrix) -> Vector2 {
    let x = (coordinate.x * transform.m11) + (coordinate.y * transform.m21) + transform.m41;
    let y = (coordinate.x * transform.m12) + (coordinate.y * transform.m22) + transform.m42;
    let w = 1.0 / ((coordinate.x * transform.m14) + (coordinate.y * transform.m24) + transform.m44);

    Vector2::new(x * w, y * w)
}

/// Transforms a direction by the upper-left 2×2 block of `transform`.
///
/// Translation and projection entries are ignored.
pub fn transform_normal(normal: Vector2, transform: &Matrix) -> Vector2 {
    Vector2::new(
        (normal.x * transform.m11) + (normal.y * transform.m21),
        (normal.x * transform.m12) + (normal.y * transform.m22),
    )
}
