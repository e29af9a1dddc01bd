//! # Error Types
//!
//! Errors returned by the checked vector operations. The unchecked
//! operations never fail; they hand degenerate input to the backend and
//! return whatever it produces.
//!
//! ## Error Policy
//!
//! - Checked operations never mutate the vector when they fail
//! - No fallback value is substituted on failure
//! - Errors carry the offending quantity for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during checked vector operations.
///
/// ## Example
///
/// ```rust
/// use vec3_rs::{Vec3Error, Vector3};
///
/// let mut v = Vector3::ZERO;
/// match v.try_normalize() {
///     Ok(unit) => println!("unit: {unit}"),
///     Err(Vec3Error::ZeroLength { length_squared }) => {
///         assert_eq!(length_squared, 0.0);
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Vec3Error {
    /// Normalize was requested for a vector too short to have a direction.
    #[error("cannot normalize a zero-length vector (length squared {length_squared})")]
    ZeroLength {
        /// Squared length of the rejected vector
        length_squared: f32,
    },

    /// An inverse transform was requested for a non-invertible matrix.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant of the rejected matrix
        determinant: f32,
    },

    /// A precision configuration was built with an unusable tolerance.
    #[error("tolerance must be positive and finite: {0}")]
    InvalidPrecision(f32),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for checked vector operations.
pub type Vec3Result<T> = Result<T, Vec3Error>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let zero = Vec3Error::ZeroLength { length_squared: 0.0 };
        assert!(zero.to_string().contains("zero-length"));

        let singular = Vec3Error::SingularMatrix { determinant: 0.0 };
        assert!(singular.to_string().contains("singular"));

        let precision = Vec3Error::InvalidPrecision(-1.0);
        assert!(precision.to_string().contains("-1"));
    }

    /// Test error types are Send + Sync so they can cross rayon workers.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vec3Error>();
    }
}
