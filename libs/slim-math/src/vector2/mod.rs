//! 2D vector value type.
//!
//! [`Vector2`] holds two `f32`s laid out as `x` then `y` with no padding, so
//! slices of vectors can be handed to graphics APIs unchanged. Methods on the
//! type cover construction, component access, length and normalization. The
//! remaining operations are free functions grouped by concern and re-exported
//! here:
//!
//! - [`arithmetic`]: add, subtract, scale, divide, dot, distance, min/max, clamp
//! - [`interpolation`]: lerp, smooth step, Hermite, Catmull-Rom, barycentric
//! - [`transform`]: quaternion and matrix transforms
//!
//! Operator overloads in `ops` forward to the arithmetic functions.

use std::fmt;
use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use config::constants::{approx_zero, Tolerance};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

pub mod arithmetic;
pub mod interpolation;
pub mod transform;

mod ops;

pub use arithmetic::*;
pub use interpolation::*;
pub use transform::*;

/// A two-component `f32` vector.
///
/// Equality is exact IEEE-754 comparison of both components: `0.0 == -0.0`
/// and a vector containing NaN is never equal to itself.
///
/// # Examples
/// ```
/// use slim_math::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.to_string(), "X:3 Y:4");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Vector2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vector2 {
    /// Size of the type in bytes (two packed `f32`s).
    pub const SIZE_IN_BYTES: usize = std::mem::size_of::<Self>();

    /// The zero vector `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The vector `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// The X unit vector `(1, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// The Y unit vector `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    const MAX_INDEX: usize = 1;

    /// Creates a vector from its two components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `value`.
    ///
    /// # Examples
    /// ```
    /// use slim_math::Vector2;
    /// assert_eq!(Vector2::splat(2.5), Vector2::new(2.5, 2.5));
    /// ```
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// Returns the components as `[x, y]`.
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Reads a component by index: `0` is `x`, `1` is `y`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for any other index.
    ///
    /// # Examples
    /// ```
    /// use slim_math::{MathError, Vector2};
    ///
    /// let v = Vector2::new(1.0, 2.0);
    /// assert_eq!(v.get(1), Ok(2.0));
    /// assert!(matches!(v.get(2), Err(MathError::IndexOutOfRange { index: 2, .. })));
    /// ```
    pub fn get(&self, index: usize) -> MathResult<f32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Self::index_error(index)),
        }
    }

    /// Writes a component by index: `0` is `x`, `1` is `y`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for any other index; the vector
    /// is left untouched.
    pub fn set(&mut self, index: usize, value: f32) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(Self::index_error(index)),
        }
        Ok(())
    }

    fn index_error(index: usize) -> MathError {
        MathError::IndexOutOfRange {
            type_name: "Vector2",
            index,
            max: Self::MAX_INDEX,
        }
    }

    /// Euclidean length, `sqrt(x² + y²)`.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length, `x² + y²`. Cheaper than [`Self::length`] for comparisons.
    pub fn length_squared(&self) -> f32 {
        (self.x * self.x) + (self.y * self.y)
    }

    /// Scales this vector to unit length in place.
    ///
    /// A zero-length vector is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use slim_math::Vector2;
    ///
    /// let mut v = Vector2::new(0.0, 5.0);
    /// v.normalize();
    /// assert_eq!(v, Vector2::UNIT_Y);
    ///
    /// let mut zero = Vector2::ZERO;
    /// zero.normalize();
    /// assert_eq!(zero, Vector2::ZERO);
    /// ```
    pub fn normalize(&mut self) {
        let length = self.length();
        if length != 0.0 {
            let inv = 1.0 / length;
            self.x *= inv;
            self.y *= inv;
        }
    }

    /// Returns a unit-length copy of this vector, or the vector itself when
    /// its length is zero.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Whether the length is one within [`config::constants::ZERO_TOLERANCE`].
    pub fn is_normalized(&self) -> bool {
        approx_zero(self.length_squared() - 1.0)
    }

    /// Component-wise comparison within the default tolerance.
    ///
    /// # Examples
    /// ```
    /// use slim_math::Vector2;
    /// assert!(Vector2::new(1.0, 2.0).near_equal(Vector2::new(1.0 + 1e-7, 2.0)));
    /// ```
    pub fn near_equal(&self, other: Self) -> bool {
        self.near_equal_within(other, Tolerance::default())
    }

    /// Component-wise comparison within `tolerance`.
    pub fn near_equal_within(&self, other: Self, tolerance: Tolerance) -> bool {
        tolerance.contains(self.x, other.x) && tolerance.contains(self.y, other.y)
    }
}

/// Maps `-0.0` onto `0.0` so values that compare equal hash equally.
fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x)
            .wrapping_add(canonical_bits(self.y))
            .hash(state);
    }
}

/// Renders as `X:{x} Y:{y}`. A precision such as `{:.2}` applies to both
/// components.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "X:{:.*} Y:{:.*}",
                precision, self.x, precision, self.y
            ),
            None => write!(f, "X:{} Y:{}", self.x, self.y),
        }
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(value: Vector2) -> Self {
        value.to_array()
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(value: glam::Vec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(value: Vector2) -> Self {
        glam::Vec2::new(value.x, value.y)
    }
}
