//! # Config Crate
//!
//! Centralized precision settings for the slim-math workspace. Tolerances
//! used by approximate comparisons are defined here so every crate agrees
//! on what "close enough" means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, ZERO_TOLERANCE};
//!
//! let residue: f32 = 1e-7;
//! assert!(residue.abs() < ZERO_TOLERANCE);
//! assert!(approx_zero(residue));
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
