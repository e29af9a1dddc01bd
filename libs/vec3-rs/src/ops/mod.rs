//! Named free functions mirroring the `Vector3` operators.
//!
//! Each function forwards to the corresponding operator or method and has
//! identical semantics. They exist for call sites that read better with
//! explicit names, such as folds and function pointers.
//!
//! ```
//! use vec3_rs::{ops, Vector3};
//!
//! let sum = [Vector3::X, Vector3::Y, Vector3::Z]
//!     .into_iter()
//!     .fold(Vector3::ZERO, ops::add);
//! assert_eq!(sum, Vector3::ONE);
//! ```

use glam::Mat4;

use crate::Vector3;

/// Component-wise sum, `a + b`.
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

/// Component-wise difference, `a - b`.
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

/// Dot product, the sum of component-wise products.
pub fn dot(a: &Vector3, b: &Vector3) -> f32 {
    a.dot(b)
}

/// Right-handed cross product.
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Uniform scale, `vector * scalar`. The operator form also accepts
/// `scalar * vector`.
pub fn scale(vector: Vector3, scalar: f32) -> Vector3 {
    vector * scalar
}

/// `matrix * vector`: transforms a copy of `vector` as a point.
pub fn transform_by_matrix(matrix: &Mat4, vector: Vector3) -> Vector3 {
    *matrix * vector
}

/// Approximate equality with the workspace epsilon, `a == b`.
pub fn equals_approx(a: &Vector3, b: &Vector3) -> bool {
    a == b
}
