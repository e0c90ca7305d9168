//! Rotation quaternion consumed by [`crate::vector2::transform_by_quaternion`].

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A rotation quaternion stored as `x, y, z, w`.
///
/// Transforms assume the quaternion is unit length; nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Quaternion {
    /// X component of the vector part.
    pub x: f32,
    /// Y component of the vector part.
    pub y: f32,
    /// Z component of the vector part.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its raw components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(value: glam::Quat) -> Self {
        Self::new(value.x, value.y, value.z, value.w)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(value: Quaternion) -> Self {
        glam::Quat::from_xyzw(value.x, value.y, value.z, value.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
        assert_eq!(glam::Quat::from(Quaternion::IDENTITY), glam::Quat::IDENTITY);
    }

    #[test]
    fn glam_conversion_keeps_components() {
        let q = glam::Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let converted = Quaternion::from(q);
        assert_eq!(converted.z, q.z);
        assert_eq!(converted.w, q.w);
    }
}
