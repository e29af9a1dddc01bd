//! 3D vector value type for the vec3-rs workspace.
//!
//! `Vector3` wraps three `f32` components and forwards every computation to
//! `glam`. Methods mutate in place where the operation is naturally a
//! rewrite of the value (normalize, the transform family); everything else
//! returns a new value.
//!
//! ```
//! use vec3_rs::{Mat4, Vector3};
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(a + b, Vector3::new(1.0, 1.0, 0.0));
//! assert_eq!(Mat4::IDENTITY * a, a);
//! ```

pub mod core;
pub mod error;
pub mod ops;
pub mod precision;
pub mod transform;

pub use crate::core::vec3::Vector3;
pub use crate::error::{Vec3Error, Vec3Result};
pub use crate::precision::PrecisionConfig;
pub use glam::Mat4;
