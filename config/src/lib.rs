//! # Config Crate
//!
//! Centralized numeric tolerances for the vec3-rs workspace. Every epsilon
//! used to compare or reject floating-point values is defined here so the
//! vector layer and its callers agree on what "equal" and "degenerate" mean.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SINGULAR_EPSILON, VEC3_EPSILON, ZERO_LENGTH_EPSILON};
//!
//! let a: f32 = 1.0;
//! let b = a + VEC3_EPSILON / 2.0;
//! assert!((a - b).abs() < VEC3_EPSILON);
//! assert!(ZERO_LENGTH_EPSILON < SINGULAR_EPSILON);
//! ```

pub mod constants;
