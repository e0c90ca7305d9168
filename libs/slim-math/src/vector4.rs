//! Four-component vector produced by the `Vector2` transforms.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A homogeneous four-component vector.
///
/// # Examples
/// ```
/// use slim_math::Vector4;
///
/// let v = Vector4::new(1.0, 2.0, 0.0, 1.0);
/// assert_eq!(v.w, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Vector4 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// W component.
    pub w: f32,
}

impl Vector4 {
    /// Creates a vector from its four components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(value: glam::Vec4) -> Self {
        Self::new(value.x, value.y, value.z, value.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(value: Vector4) -> Self {
        glam::Vec4::new(value.x, value.y, value.z, value.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glam_conversion_keeps_components() {
        let v = Vector4::from(glam::Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(glam::Vec4::from(v), glam::Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn layout_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<Vector4>(), 16);
    }
}
