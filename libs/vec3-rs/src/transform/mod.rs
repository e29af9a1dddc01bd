//! Transform helpers for applying matrices to one or many vectors.
//!
//! The slice variants run in parallel on the rayon global pool; every
//! element is transformed independently and keeps its position.

use glam::{Mat3, Mat4};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{Vec3Error, Vec3Result};
use crate::precision::PrecisionConfig;
use crate::Vector3;

/// Applies a 4×4 transform to a single vector as a point.
///
/// The helper delegates to `Vector3::transform` and exists so slice and
/// single-value call sites read the same.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use vec3_rs::{transform::apply_transform, Mat4, Vector3};
///
/// let mut v = Vector3::new(1.0, 1.0, 1.0);
/// apply_transform(&mut v, Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
/// assert_eq!(v, Vector3::new(6.0, 1.0, 1.0));
/// ```
pub fn apply_transform(vector: &mut Vector3, matrix: Mat4) -> Vector3 {
    vector.transform(&matrix)
}

/// Transforms every element as a point with perspective divide, in place.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use vec3_rs::{transform::transform_coords, Mat4, Vector3};
///
/// let mut points = vec![Vector3::ZERO, Vector3::X];
/// transform_coords(&mut points, &Mat4::from_scale(Vec3::splat(2.0)));
/// assert_eq!(points, vec![Vector3::ZERO, Vector3::new(2.0, 0.0, 0.0)]);
/// ```
pub fn transform_coords(points: &mut [Vector3], matrix: &Mat4) {
    trace!(count = points.len(), "transforming coordinates");
    points.par_iter_mut().for_each(|p| {
        p.transform_coord(matrix);
    });
}

/// Transforms every element as a direction (translation ignored), in place.
pub fn transform_normals(normals: &mut [Vector3], matrix: &Mat4) {
    trace!(count = normals.len(), "transforming normals");
    normals.par_iter_mut().for_each(|n| {
        n.transform_normal(matrix);
    });
}

/// Inverts `matrix`, rejecting it when the determinant magnitude is below
/// `precision.singular`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use vec3_rs::{transform::checked_inverse, Mat4, PrecisionConfig};
///
/// let scale = Mat4::from_scale(Vec3::splat(2.0));
/// let inverse = checked_inverse(&scale, &PrecisionConfig::default()).unwrap();
/// assert!(inverse.abs_diff_eq(Mat4::from_scale(Vec3::splat(0.5)), 1e-6));
/// assert!(checked_inverse(&Mat4::ZERO, &PrecisionConfig::default()).is_err());
/// ```
pub fn checked_inverse(matrix: &Mat4, precision: &PrecisionConfig) -> Vec3Result<Mat4> {
    let determinant = matrix.determinant();
    if determinant.is_nan() || determinant.abs() < precision.singular {
        debug!(determinant, "rejecting inverse of singular matrix");
        return Err(Vec3Error::SingularMatrix { determinant });
    }
    Ok(matrix.inverse())
}

/// Inverts the linear 3×3 part of `matrix`, rejecting it when that block's
/// determinant magnitude is below `precision.singular`. The fourth row and
/// column are ignored, so a matrix can pass `checked_inverse` and still fail
/// here.
///
/// # Examples
/// ```
/// use glam::{Vec3, Vec4};
/// use vec3_rs::{transform::checked_inverse_linear, Mat4, PrecisionConfig};
///
/// let moved = Mat4::from_translation(Vec3::new(4.0, 5.0, 6.0));
/// assert!(checked_inverse_linear(&moved, &PrecisionConfig::default()).is_ok());
///
/// let swapped = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::W, Vec4::Z);
/// assert!(checked_inverse_linear(&swapped, &PrecisionConfig::default()).is_err());
/// ```
pub fn checked_inverse_linear(matrix: &Mat4, precision: &PrecisionConfig) -> Vec3Result<Mat3> {
    let linear = Mat3::from_mat4(*matrix);
    let determinant = linear.determinant();
    if determinant.is_nan() || determinant.abs() < precision.singular {
        debug!(determinant, "rejecting inverse of singular linear part");
        return Err(Vec3Error::SingularMatrix { determinant });
    }
    Ok(linear.inverse())
}
