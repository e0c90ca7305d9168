//! # Error Types
//!
//! Error types for slim-math. Arithmetic never fails: division by zero and
//! similar edge cases follow IEEE-754. The only checked operation is indexed
//! component access.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when accessing math types.
///
/// ## Example
///
/// ```rust
/// use slim_math::{MathError, Vector2};
///
/// match Vector2::new(1.0, 2.0).get(5) {
///     Ok(value) => println!("component: {value}"),
///     Err(MathError::IndexOutOfRange { index, .. }) => eprintln!("bad index {index}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A component index fell outside the valid range.
    ///
    /// Valid indices run from `0` to `max`, inclusive.
    #[error("Index {index} is out of range for {type_name}; indices run from 0 to {max}, inclusive")]
    IndexOutOfRange {
        /// Name of the type that was indexed.
        type_name: &'static str,
        /// The rejected index.
        index: usize,
        /// Largest valid index.
        max: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for slim-math operations.
///
/// ## Example
///
/// ```rust
/// use slim_math::{MathResult, Vector2};
///
/// fn first_component(v: Vector2) -> MathResult<f32> {
///     v.get(0)
/// }
///
/// assert_eq!(first_component(Vector2::UNIT_X), Ok(1.0));
/// ```
pub type MathResult<T> = Result<T, MathError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::IndexOutOfRange {
            type_name: "Vector2",
            index: 7,
            max: 1,
        };
        let message = err.to_string();
        assert!(message.contains("Vector2"));
        assert!(message.contains('7'));
        assert!(message.contains("from 0 to 1"));
    }

    /// Errors must cross thread boundaries freely.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MathError>();
    }
}
