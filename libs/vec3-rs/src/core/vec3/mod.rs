//! Thin value type around `glam::Vec3` with method and operator sugar.
//!
//! `Vector3` keeps the memory layout of three packed `f32` and converts to
//! and from `glam::Vec3` for every computation, so the arithmetic itself
//! lives in the backend.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use config::constants::VEC3_EPSILON;
use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Vec3Error, Vec3Result};
use crate::precision::PrecisionConfig;
use crate::transform::{checked_inverse, checked_inverse_linear};

/// A position or direction in 3D space.
///
/// Equality is approximate: two vectors are `==` when every component
/// differs by less than `config::constants::VEC3_EPSILON`. The relation is
/// therefore not transitive, and `Eq`/`Hash` are not implemented.
///
/// # Examples
/// ```
/// use vec3_rs::Vector3;
///
/// let mut v = Vector3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// v.normalize();
/// assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its three components. No validation is done.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    fn backend(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the Euclidean length of the vector.
    pub fn length(&self) -> f32 {
        self.backend().length()
    }

    /// Returns the squared length, avoiding the square root.
    pub fn length_squared(&self) -> f32 {
        self.backend().length_squared()
    }

    /// Rescales the vector in place to unit length.
    ///
    /// The zero vector produces NaN components; use [`Vector3::try_normalize`]
    /// when the input may be degenerate.
    pub fn normalize(&mut self) {
        *self = self.backend().normalize().into();
    }

    /// Returns a unit-length copy, leaving `self` untouched.
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }

    /// Normalizes in place, rejecting vectors whose squared length is below
    /// the default zero-length threshold.
    ///
    /// # Examples
    /// ```
    /// use vec3_rs::Vector3;
    ///
    /// let mut v = Vector3::new(0.0, 2.0, 0.0);
    /// assert_eq!(v.try_normalize().unwrap(), Vector3::Y);
    /// assert!(Vector3::ZERO.try_normalize().is_err());
    /// ```
    pub fn try_normalize(&mut self) -> Vec3Result<Self> {
        self.try_normalize_with(&PrecisionConfig::default())
    }

    /// As [`Vector3::try_normalize`] with a caller-supplied threshold.
    pub fn try_normalize_with(&mut self, precision: &PrecisionConfig) -> Vec3Result<Self> {
        let length_squared = self.length_squared();
        if length_squared.is_nan() || length_squared < precision.zero_length {
            debug!(vector = %*self, length_squared, "rejecting normalize of degenerate vector");
            return Err(Vec3Error::ZeroLength { length_squared });
        }
        self.normalize();
        Ok(*self)
    }

    /// Transforms `self` as a point (`w = 1`) by the full matrix, keeping
    /// `xyz` without a perspective divide. Overwrites `self` and returns the
    /// new value.
    pub fn transform(&mut self, mat: &Mat4) -> Self {
        *self = (*mat * self.backend().extend(1.0)).truncate().into();
        *self
    }

    /// Transforms `self` as a point and projects the result back to `w = 1`.
    ///
    /// # Examples
    /// ```
    /// use vec3_rs::{Mat4, Vector3};
    /// use glam::Vec4;
    ///
    /// // w' = 2 for every input, so the result is halved
    /// let mat = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::new(0.0, 0.0, 0.0, 2.0));
    /// let mut v = Vector3::new(2.0, 4.0, 6.0);
    /// assert_eq!(v.transform_coord(&mat), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn transform_coord(&mut self, mat: &Mat4) -> Self {
        *self = mat.project_point3(self.backend()).into();
        *self
    }

    /// Transforms `self` as a direction: only the linear 3×3 part of the
    /// matrix applies, translation is ignored.
    pub fn transform_normal(&mut self, mat: &Mat4) -> Self {
        *self = (*mat * self.backend().extend(0.0)).truncate().into();
        *self
    }

    /// Returns `self` transformed as a point, leaving `self` untouched.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut out = *self;
        out.transform(mat)
    }

    /// Returns `self` transformed with perspective divide, leaving `self`
    /// untouched.
    pub fn transformed_coord(&self, mat: &Mat4) -> Self {
        let mut out = *self;
        out.transform_coord(mat)
    }

    /// Returns `self` transformed as a direction, leaving `self` untouched.
    pub fn transformed_normal(&self, mat: &Mat4) -> Self {
        let mut out = *self;
        out.transform_normal(mat)
    }

    /// Applies the inverse of `mat` to `self` as a point.
    ///
    /// A singular matrix yields non-finite components; see
    /// [`Vector3::try_inverse_transform`].
    pub fn inverse_transform(&mut self, mat: &Mat4) -> Self {
        self.transform(&mat.inverse())
    }

    /// Applies the inverse of the linear 3×3 part of `mat` to `self` as a
    /// direction. Translation and the projective row play no part.
    pub fn inverse_transform_normal(&mut self, mat: &Mat4) -> Self {
        *self = (Mat3::from_mat4(*mat).inverse() * self.backend()).into();
        *self
    }

    /// Applies the inverse of `mat` as a point, failing on singular matrices.
    ///
    /// # Examples
    /// ```
    /// use vec3_rs::{Mat4, Vec3Error, Vector3};
    ///
    /// let mut v = Vector3::new(1.0, 2.0, 3.0);
    /// let err = v.try_inverse_transform(&Mat4::ZERO).unwrap_err();
    /// assert!(matches!(err, Vec3Error::SingularMatrix { .. }));
    /// assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn try_inverse_transform(&mut self, mat: &Mat4) -> Vec3Result<Self> {
        self.try_inverse_transform_with(mat, &PrecisionConfig::default())
    }

    /// As [`Vector3::try_inverse_transform`] with a caller-supplied threshold.
    pub fn try_inverse_transform_with(
        &mut self,
        mat: &Mat4,
        precision: &PrecisionConfig,
    ) -> Vec3Result<Self> {
        let inverse = checked_inverse(mat, precision)?;
        Ok(self.transform(&inverse))
    }

    /// Applies the inverse of the linear part of `mat` as a direction,
    /// failing when that 3×3 block is singular.
    pub fn try_inverse_transform_normal(&mut self, mat: &Mat4) -> Vec3Result<Self> {
        self.try_inverse_transform_normal_with(mat, &PrecisionConfig::default())
    }

    /// As [`Vector3::try_inverse_transform_normal`] with a caller-supplied
    /// threshold.
    pub fn try_inverse_transform_normal_with(
        &mut self,
        mat: &Mat4,
        precision: &PrecisionConfig,
    ) -> Vec3Result<Self> {
        let inverse = checked_inverse_linear(mat, precision)?;
        *self = (inverse * self.backend()).into();
        Ok(*self)
    }

    /// Returns a vector perpendicular to `self` and `other` (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        self.backend().cross(other.backend()).into()
    }

    /// Returns the dot product, `|a||b| cos θ`.
    pub fn dot(&self, other: &Self) -> f32 {
        self.backend().dot(other.backend())
    }

    /// Component-wise comparison with the tolerance from `precision`.
    pub fn approx_eq_with(&self, other: &Self, precision: &PrecisionConfig) -> bool {
        let eps = precision.epsilon;
        (self.x - other.x).abs() < eps
            && (self.y - other.y).abs() < eps
            && (self.z - other.z).abs() < eps
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        v.backend()
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        (self.backend() + rhs.backend()).into()
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        (self.backend() - rhs.backend()).into()
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        (-self.backend()).into()
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        (self.backend() * rhs).into()
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// `mat * v` transforms a copy of `v` as a point; `v` is not modified.
impl Mul<Vector3> for Mat4 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.transformed(&self)
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &PrecisionConfig::default())
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        VEC3_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
