//! Tolerance settings for the checked and approximate vector operations.
//!
//! The operator `==` always uses the workspace defaults; callers that need a
//! different tolerance pass a `PrecisionConfig` to the `*_with` methods.

use config::constants::{SINGULAR_EPSILON, VEC3_EPSILON, ZERO_LENGTH_EPSILON};
use serde::{Deserialize, Serialize};

use crate::error::{Vec3Error, Vec3Result};

/// Precision configuration for vector comparisons and degeneracy checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecisionConfig {
    /// Per-component tolerance for approximate equality
    pub epsilon: f32,
    /// Squared length below which a vector cannot be normalized
    pub zero_length: f32,
    /// Determinant magnitude below which a matrix cannot be inverted
    pub singular: f32,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            epsilon: VEC3_EPSILON,
            zero_length: ZERO_LENGTH_EPSILON,
            singular: SINGULAR_EPSILON,
        }
    }
}

impl PrecisionConfig {
    /// Builds a configuration, rejecting tolerances that are not positive
    /// and finite.
    ///
    /// # Examples
    /// ```
    /// use vec3_rs::{PrecisionConfig, Vec3Error};
    ///
    /// let cfg = PrecisionConfig::new(1.0e-3, 1.0e-10, 1.0e-6).unwrap();
    /// assert_eq!(cfg.epsilon, 1.0e-3);
    /// assert_eq!(
    ///     PrecisionConfig::new(0.0, 1.0e-10, 1.0e-6).unwrap_err(),
    ///     Vec3Error::InvalidPrecision(0.0)
    /// );
    /// ```
    pub fn new(epsilon: f32, zero_length: f32, singular: f32) -> Vec3Result<Self> {
        for value in [epsilon, zero_length, singular] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Vec3Error::InvalidPrecision(value));
            }
        }
        Ok(Self {
            epsilon,
            zero_length,
            singular,
        })
    }

    /// Creates a tight configuration for values that have seen few operations
    pub fn strict() -> Self {
        Self {
            epsilon: 1.0e-6,
            zero_length: 1.0e-20,
            singular: 1.0e-12,
        }
    }

    /// Creates a forgiving configuration for values that went through long
    /// transform chains
    pub fn loose() -> Self {
        Self {
            epsilon: 1.0e-2,
            zero_length: 1.0e-6,
            singular: 1.0e-5,
        }
    }
}
