//! Small, single-precision linear algebra primitives.
//!
//! This crate provides three plain value types:
//!
//! - [`Vector2`]: a 2D vector with arithmetic, dot/cross products and rotation about the origin.
//! - [`Vector3`]: a 3D vector with arithmetic, dot/cross products and angle measurement.
//! - [`Quaternion`]: a rotation in 3D space, composable via the Hamilton product and applicable to
//!   [`Vector3`]s, convertible to roll/pitch/yaw Euler angles.
//!
//! # Conventions
//!
//! - All types use [`f32`] components and are `Copy`. Operations never allocate.
//! - The direction constants assume *screen-space* coordinates: X points right, Y points **down**
//!   and Z points forward, so `TOP` is `(0, -1)` and `DOWN` is `(0, 1)`.
//! - Angles are in radians. [`consts`] has conversion factors from and to degrees.
//! - `==` compares components exactly. Tolerant comparisons are available through the
//!   [`approx`](https://docs.rs/approx) traits, which are implemented for every type.
//!
//! # Degenerate inputs
//!
//! Operations are total functions: normalizing a zero-length vector, or computing an angle that
//! involves one, yields NaN or infinity rather than panicking or returning an error. The
//! [`checked`] module adds `try_*` variants of these operations that report such inputs as a
//! [`checked::Error`] instead.
//!
//! # Cargo features
//!
//! - `nalgebra`: enables [`From`] conversions between this crate's types and their
//!   [`nalgebra`](https://docs.rs/nalgebra) counterparts.
//!
//! # Examples
//!
//! ```
//! use tiny_linalg::*;
//! use approx::assert_abs_diff_eq;
//! use std::f32::consts::FRAC_PI_2;
//!
//! // Rotating by a positive angle turns "right" towards "down".
//! assert_abs_diff_eq!(Vector2::RIGHT.rotated(FRAC_PI_2), Vector2::DOWN);
//!
//! let q = Quaternion::from_axis_angle(Vector3::FORWARD, FRAC_PI_2);
//! assert_abs_diff_eq!(q * Vector3::RIGHT, Vector3::DOWN, epsilon = 1e-6);
//! assert_abs_diff_eq!(q.yaw(), FRAC_PI_2, epsilon = 1e-6);
//! ```

mod approx_eq;
pub mod checked;
pub mod consts;
#[cfg(feature = "nalgebra")]
mod interop;
mod quaternion;
mod vector2;
mod vector3;

pub use quaternion::*;
pub use vector2::*;
pub use vector3::*;
