//! Component-wise arithmetic and geometric queries on [`Vector2`].
//!
//! None of these validate their inputs. Dividing by zero yields infinity or
//! NaN exactly as the underlying `f32` operations do.

use super::Vector2;

/// Sum of two vectors.
pub fn add(left: Vector2, right: Vector2) -> Vector2 {
    Vector2::new(left.x + right.x, left.y + right.y)
}

/// Difference of two vectors.
pub fn subtract(left: Vector2, right: Vector2) -> Vector2 {
    Vector2::new(left.x - right.x, left.y - right.y)
}

/// Scales a vector by a scalar.
pub fn multiply(vector: Vector2, scale: f32) -> Vector2 {
    Vector2::new(vector.x * scale, vector.y * scale)
}

/// Component-wise product of two vectors.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Vector2};
/// let v = vector2::modulate(Vector2::new(2.0, 3.0), Vector2::new(4.0, 5.0));
/// assert_eq!(v, Vector2::new(8.0, 15.0));
/// ```
pub fn modulate(left: Vector2, right: Vector2) -> Vector2 {
    Vector2::new(left.x * right.x, left.y * right.y)
}

/// Divides a vector by a scalar.
pub fn divide(vector: Vector2, scale: f32) -> Vector2 {
    Vector2::new(vector.x / scale, vector.y / scale)
}

/// Reverses the direction of a vector.
pub fn negate(vector: Vector2) -> Vector2 {
    Vector2::new(-vector.x, -vector.y)
}

/// Dot product, `a.x * b.x + a.y * b.y`.
pub fn dot(left: Vector2, right: Vector2) -> f32 {
    (left.x * right.x) + (left.y * right.y)
}

/// Distance between two points.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Vector2};
/// assert_eq!(vector2::distance(Vector2::ZERO, Vector2::new(3.0, 4.0)), 5.0);
/// ```
pub fn distance(value1: Vector2, value2: Vector2) -> f32 {
    subtract(value1, value2).length()
}

/// Squared distance between two points.
pub fn distance_squared(value1: Vector2, value2: Vector2) -> f32 {
    subtract(value1, value2).length_squared()
}

/// Lesser of each component. Ties and NaN pick the component of `right`.
pub fn minimize(left: Vector2, right: Vector2) -> Vector2 {
    Vector2::new(
        if left.x < right.x { left.x } else { right.x },
        if left.y < right.y { left.y } else { right.y },
    )
}

/// Greater of each component. Ties and NaN pick the component of `right`.
pub fn maximize(left: Vector2, right: Vector2) -> Vector2 {
    Vector2::new(
        if left.x > right.x { left.x } else { right.x },
        if left.y > right.y { left.y } else { right.y },
    )
}

/// Restricts each component of `value` to `[min, max]`.
///
/// The upper bound is applied before the lower bound, so an inverted range
/// (`min > max` on some axis) resolves to `min` on that axis.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Vector2};
///
/// let v = vector2::clamp(Vector2::new(-5.0, 5.0), Vector2::ZERO, Vector2::ONE);
/// assert_eq!(v, Vector2::new(0.0, 1.0));
///
/// // Inverted range collapses to min.
/// let v = vector2::clamp(Vector2::splat(0.5), Vector2::splat(2.0), Vector2::splat(1.0));
/// assert_eq!(v, Vector2::splat(2.0));
/// ```
pub fn clamp(value: Vector2, min: Vector2, max: Vector2) -> Vector2 {
    Vector2::new(
        clamp_component(value.x, min.x, max.x),
        clamp_component(value.y, min.y, max.y),
    )
}

fn clamp_component(value: f32, min: f32, max: f32) -> f32 {
    let value = if value > max { max } else { value };
    if value < min {
        min
    } else {
        value
    }
}
