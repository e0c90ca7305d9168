//! # Precision Constants
//!
//! Floating-point tolerances shared across the workspace, plus a validated
//! [`Tolerance`] wrapper for callers that pick their own.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance below which an `f32` is treated as zero.
///
/// Sized for single precision: roughly eight ULPs at magnitude one.
///
/// # Example
///
/// ```rust
/// use config::constants::ZERO_TOLERANCE;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() < ZERO_TOLERANCE
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-7));
/// ```
pub const ZERO_TOLERANCE: f32 = 1e-6;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f32 values are approximately equal within ZERO_TOLERANCE.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-7));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < ZERO_TOLERANCE
}

/// Checks if a f32 value is approximately zero within ZERO_TOLERANCE.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-7));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f32) -> bool {
    value.abs() < ZERO_TOLERANCE
}

// =============================================================================
// VALIDATED TOLERANCE
// =============================================================================

/// A strictly positive, finite comparison tolerance.
///
/// # Examples
/// ```
/// use config::constants::Tolerance;
/// let tolerance = Tolerance::new(1.0e-3).expect("valid tolerance");
/// assert_eq!(tolerance.get(), 1.0e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f32);

impl Tolerance {
    /// Builds a tolerance, rejecting zero, negative and non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Tolerance;
    /// assert!(Tolerance::new(0.0).is_err());
    /// assert!(Tolerance::new(f32::NAN).is_err());
    /// ```
    pub fn new(value: f32) -> Result<Self, ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidTolerance(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw tolerance.
    pub fn get(self) -> f32 {
        self.0
    }

    /// Whether `a` and `b` differ by less than this tolerance.
    pub fn contains(self, a: f32, b: f32) -> bool {
        (a - b).abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(ZERO_TOLERANCE)
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
