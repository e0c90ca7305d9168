//! Interpolation curves between [`Vector2`] values.
//!
//! Every curve is evaluated independently on `x` and `y`.

use super::Vector2;

/// Linear interpolation, `start + (end - start) * amount`.
///
/// `amount` is not clamped, so values outside `[0, 1]` extrapolate.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Vector2};
/// let mid = vector2::lerp(Vector2::ZERO, Vector2::new(10.0, 20.0), 0.5);
/// assert_eq!(mid, Vector2::new(5.0, 10.0));
/// ```
pub fn lerp(start: Vector2, end: Vector2, amount: f32) -> Vector2 {
    Vector2::new(
        start.x + ((end.x - start.x) * amount),
        start.y + ((end.y - start.y) * amount),
    )
}

/// Cubic ease between two values.
///
/// `amount` is clamped to `[0, 1]` and remapped through `t²(3 - 2t)` before
/// a linear interpolation.
pub fn smooth_step(start: Vector2, end: Vector2, amount: f32) -> Vector2 {
    let amount = if amount > 1.0 {
        1.0
    } else if amount < 0.0 {
        0.0
    } else {
        amount
    };
    let amount = (amount * amount) * (3.0 - (2.0 * amount));

    lerp(start, end, amount)
}

/// Cubic Hermite spline through `value1` and `value2` with the given
/// tangents.
///
/// # Examples
/// ```
/// use slim_math::{vector2, Vector2};
///
/// let p1 = Vector2::new(1.0, 2.0);
/// let p2 = Vector2::new(5.0, -3.0);
/// assert_eq!(vector2::hermite(p1, Vector2::ONE, p2, Vector2::ONE, 0.0), p1);
/// assert_eq!(vector2::hermite(p1, Vector2::ONE, p2, Vector2::ONE, 1.0), p2);
/// ```
pub fn hermite(
    value1: Vector2,
    tangent1: Vector2,
    value2: Vector2,
    tangent2: Vector2,
    amount: f32,
) -> Vector2 {
    let squared = amount * amount;
    let cubed = amount * squared;
    let part1 = ((2.0 * cubed) - (3.0 * squared)) + 1.0;
    let part2 = (-2.0 * cubed) + (3.0 * squared);
    let part3 = (cubed - (2.0 * squared)) + amount;
    let part4 = cubed - squared;

    let blend = |p1: f32, t1: f32, p2: f32, t2: f32| {
        (((p1 * part1) + (p2 * part2)) + (t1 * part3)) + (t2 * part4)
    };

    Vector2::new(
        blend(value1.x, tangent1.x, value2.x, tangent2.x),
        blend(value1.y, tangent1.y, value2.y, tangent2.y),
    )
}

/// Catmull-Rom spline segment between `value2` and `value3`, shaped by the
/// neighbouring control points `value1` and `value4`.
pub fn catmull_rom(
    value1: Vector2,
    value2: Vector2,
    value3: Vector2,
    value4: Vector2,
    amount: f32,
) -> Vector2 {
    let squared = amount * amount;
    let cubed = amount * squared;

    let blend = |p1: f32, p2: f32, p3: f32, p4: f32| {
        0.5 * ((((2.0 * p2) + ((-p1 + p3) * amount))
            + (((((2.0 * p1) - (5.0 * p2)) + (4.0 * p3)) - p4) * squared))
            + ((((-p1 + (3.0 * p2)) - (3.0 * p3)) + p4) * cubed))
    };

    Vector2::new(
        blend(value1.x, value2.x, value3.x, value4.x),
        blend(value1.y, value2.y, value3.y, value4.y),
    )
}

/// Point at barycentric coordinates `(amount1, amount2)` in the triangle
/// `value1, value2, value3`.
///
/// `amount1` weights `value2` and `amount2` weights `value3`.
pub fn barycentric(
    value1: Vector2,
    value2: Vector2,
    value3: Vector2,
    amount1: f32,
    amount2: f32,
) -> Vector2 {
    Vector2::new(
        (value1.x + (amount1 * (value2.x - value1.x))) + (amount2 * (value3.x - value1.x)),
        (value1.y + (amount1 * (value2.y - value1.y))) + (amount2 * (value3.y - value1.y)),
    )
}
