//! Row-major 4×4 matrix consumed by the `Vector2` transforms.
//!
//! Vectors are treated as rows and multiplied on the left (`v · M`), so the
//! translation lives in the fourth row (`m41`, `m42`, `m43`). A `glam::Mat4`
//! uses column vectors instead; its column `i` is exactly our row `i`, which
//! makes the conversion a straight copy of `to_cols_array`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 4×4 matrix with named entries `m11` through `m44` (row, column).
///
/// # Examples
/// ```
/// use slim_math::Matrix;
///
/// let m = Matrix::from(glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)));
/// assert_eq!((m.m41, m.m42, m.m43), (1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix {
    /// Row 1, column 1.
    pub m11: f32,
    /// Row 1, column 2.
    pub m12: f32,
    /// Row 1, column 3.
    pub m13: f32,
    /// Row 1, column 4.
    pub m14: f32,
    /// Row 2, column 1.
    pub m21: f32,
    /// Row 2, column 2.
    pub m22: f32,
    /// Row 2, column 3.
    pub m23: f32,
    /// Row 2, column 4.
    pub m24: f32,
    /// Row 3, column 1.
    pub m31: f32,
    /// Row 3, column 2.
    pub m32: f32,
    /// Row 3, column 3.
    pub m33: f32,
    /// Row 3, column 4.
    pub m34: f32,
    /// Row 4, column 1.
    pub m41: f32,
    /// Row 4, column 2.
    pub m42: f32,
    /// Row 4, column 3.
    pub m43: f32,
    /// Row 4, column 4.
    pub m44: f32,
}

impl Matrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Builds a matrix from four rows.
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r1, r2, r3, r4] = rows;
        Self {
            m11: r1[0],
            m12: r1[1],
            m13: r1[2],
            m14: r1[3],
            m21: r2[0],
            m22: r2[1],
            m23: r2[2],
            m24: r2[3],
            m31: r3[0],
            m32: r3[1],
            m33: r3[2],
            m34: r3[3],
            m41: r4[0],
            m42: r4[1],
            m43: r4[2],
            m44: r4[3],
        }
    }

    /// Returns the entries grouped by row.
    pub const fn to_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.m11, self.m12, self.m13, self.m14],
            [self.m21, self.m22, self.m23, self.m24],
            [self.m31, self.m32, self.m33, self.m34],
            [self.m41, self.m42, self.m43, self.m44],
        ]
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<glam::Mat4> for Matrix {
    fn from(value: glam::Mat4) -> Self {
        Self::from_rows(value.to_cols_array_2d())
    }
}

impl From<Matrix> for glam::Mat4 {
    fn from(value: Matrix) -> Self {
        glam::Mat4::from_cols_array_2d(&value.to_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matches_glam() {
        assert_eq!(Matrix::from(glam::Mat4::IDENTITY), Matrix::IDENTITY);
        assert_eq!(Matrix::default(), Matrix::IDENTITY);
    }

    #[test]
    fn translation_lands_in_fourth_row() {
        let m = Matrix::from(glam::Mat4::from_translation(glam::Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(m.to_rows()[3], [4.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn glam_round_trip_preserves_entries() {
        let original = glam::Mat4::from_scale(glam::Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(glam::Mat4::from(Matrix::from(original)), original);
    }
}
