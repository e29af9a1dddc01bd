//! Core value types.
//!
//! Includes the `Vector3` value type and its operator impls.

pub mod vec3;
