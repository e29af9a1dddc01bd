//! # Configuration Constants
//!
//! Tolerances shared by the vector layer. All values are `f32` to match the
//! scalar type of `Vector3`.
//!
//! ## Categories
//!
//! - **Precision**: Component-wise comparison tolerance
//! - **Degeneracy**: Thresholds below which normalize and inverse are rejected

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for component-wise vector comparisons.
///
/// Two vectors compare equal when every pair of components differs by less
/// than this value. It is deliberately looser than `f32::EPSILON` so that the
/// rounding introduced by a couple of matrix products still compares equal.
///
/// # Example
///
/// ```rust
/// use config::constants::VEC3_EPSILON;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() < VEC3_EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.00001));
/// assert!(!approximately_equal(1.0, 1.01));
/// ```
pub const VEC3_EPSILON: f32 = 1.0e-4;

// =============================================================================
// DEGENERACY CONSTANTS
// =============================================================================

/// Squared-length threshold below which a vector is treated as zero.
///
/// Only the checked normalize consults this value; the unchecked one hands
/// any input straight to the backend.
///
/// # Example
///
/// ```rust
/// use config::constants::ZERO_LENGTH_EPSILON;
///
/// let length_squared: f32 = 0.0;
/// assert!(length_squared < ZERO_LENGTH_EPSILON);
/// ```
pub const ZERO_LENGTH_EPSILON: f32 = 1.0e-12;

/// Determinant magnitude below which a 4×4 matrix is treated as singular.
///
/// # Example
///
/// ```rust
/// use config::constants::SINGULAR_EPSILON;
///
/// let determinant: f32 = 1.0;
/// assert!(determinant.abs() >= SINGULAR_EPSILON);
/// ```
pub const SINGULAR_EPSILON: f32 = 1.0e-8;
