//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of the precision constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_zero_tolerance_is_positive() {
    assert!(ZERO_TOLERANCE > 0.0, "ZERO_TOLERANCE must be positive");
}

#[test]
fn test_zero_tolerance_above_machine_epsilon() {
    assert!(
        ZERO_TOLERANCE > f32::EPSILON,
        "ZERO_TOLERANCE should exceed f32::EPSILON"
    );
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + 1e-7));
    assert!(!approx_equal(1.0, 1.001));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-7));
    assert!(!approx_zero(1e-3));
}
