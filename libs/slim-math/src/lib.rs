//! Layout-stable vector math primitives.
//!
//! The centerpiece is [`Vector2`], a two-component `f32` vector with the
//! usual arithmetic, interpolation curves and matrix/quaternion transforms.
//! [`Vector4`], [`Matrix`] and [`Quaternion`] are the plain structs those
//! transforms consume and produce.
//!
//! ```rust
//! use slim_math::{vector2, Matrix, Vector2};
//!
//! let a = Vector2::new(0.0, 0.0);
//! let b = Vector2::new(10.0, 20.0);
//! assert_eq!(vector2::lerp(a, b, 0.5), Vector2::new(5.0, 10.0));
//! assert_eq!(vector2::transform_normal(Vector2::UNIT_X, &Matrix::IDENTITY), Vector2::UNIT_X);
//! ```

pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod vector2;
pub mod vector4;

pub use error::{MathError, MathResult};
pub use matrix::Matrix;
pub use quaternion::Quaternion;
pub use vector2::Vector2;
pub use vector4::Vector4;
