//! Checked variants of operations that would otherwise propagate NaN or infinity.
//!
//! The regular operations in this crate are total: degenerate inputs (zero-length vectors,
//! non-unit quaternions fed to [`Quaternion::pitch`], ...) silently produce non-finite results.
//! The `try_*` methods defined here are an opt-in alternative that reports those cases as an
//! [`Error`] instead. For non-degenerate inputs they return the same values as their unchecked
//! counterparts, except where noted.

use thiserror::Error;

use crate::{Quaternion, Vector2, Vector3};

/// How far the `asin` argument of [`Quaternion::try_pitch`] may lie outside of `[-1, 1]` before it
/// is reported as an error instead of being clamped.
///
/// Unit quaternions describing a rotation at gimbal lock (pitch of ±π/2) can overshoot by a few
/// ULPs due to rounding. Anything beyond this indicates a quaternion that is not of unit length.
pub const DOMAIN_SLACK: f32 = 1e-4;

/// Errors reported by the checked operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input has length (or magnitude) zero and has no direction.
    #[error("{what} has zero length")]
    ZeroLength { what: &'static str },
    /// The length (or magnitude) of the input is infinite or NaN.
    #[error("{what} has non-finite length {length}")]
    NonFiniteLength { what: &'static str, length: f32 },
    /// The quaternion does not describe a pure rotation, so no pitch angle can be computed.
    #[error("pitch is undefined: asin argument {0} lies outside of [-1, 1] (is the quaternion normalized?)")]
    PitchOutOfDomain(f32),
}

/// Result type of the checked operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

fn check_length(what: &'static str, length: f32) -> Result<f32> {
    if !length.is_finite() {
        log::trace!("rejecting {what} with length {length}");
        return Err(Error::NonFiniteLength { what, length });
    }
    if length == 0.0 {
        log::trace!("rejecting zero-length {what}");
        return Err(Error::ZeroLength { what });
    }
    Ok(length)
}

impl Vector2 {
    /// Like [`Vector2::normalized`], but fails instead of returning non-finite components.
    pub fn try_normalized(self) -> Result<Self> {
        let length = check_length("vector", self.length())?;
        Ok(self / length)
    }
}

impl Vector3 {
    /// Like [`Vector3::normalized`], but fails instead of returning non-finite components.
    pub fn try_normalized(self) -> Result<Self> {
        let length = check_length("vector", self.length())?;
        Ok(self / length)
    }

    /// Like [`Vector3::angle`], but fails if either vector has zero or non-finite length.
    ///
    /// The cosine of the angle is clamped to `[-1, 1]`, so (anti)parallel vectors yield `0` or `π`
    /// instead of NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// assert!(Vector3::ZERO.try_angle(Vector3::RIGHT).is_err());
    /// assert_eq!(Vector3::RIGHT.try_angle(Vector3::RIGHT).unwrap(), 0.0);
    /// ```
    pub fn try_angle(self, other: Self) -> Result<f32> {
        let cos = self.try_normalized()?.dot(other.try_normalized()?);
        if cos.abs() > 1.0 {
            log::trace!("clamping angle cosine {cos} between {self} and {other}");
        }
        Ok(cos.clamp(-1.0, 1.0).acos())
    }
}

impl Quaternion {
    /// Like [`Quaternion::from_axis_angle`], but fails if `axis` has zero or non-finite length.
    pub fn try_from_axis_angle(axis: Vector3, radians: f32) -> Result<Self> {
        let length = check_length("rotation axis", axis.length())?;
        Ok(Self::from_axis_angle(axis / length, radians))
    }

    /// Like [`Quaternion::normalized`], but fails instead of returning non-finite components.
    pub fn try_normalized(self) -> Result<Self> {
        let m = check_length("quaternion", self.magnitude())?;
        Ok(Self::new(self.q0 / m, self.q1 / m, self.q2 / m, self.q3 / m))
    }

    /// Like [`Quaternion::pitch`], but tolerates rounding errors at gimbal lock.
    ///
    /// If the `asin` argument exceeds `[-1, 1]` by at most [`DOMAIN_SLACK`], it is clamped and the
    /// result is ±π/2. Larger deviations are reported as [`Error::PitchOutOfDomain`].
    pub fn try_pitch(&self) -> Result<f32> {
        let sin = self.pitch_sin();
        // Also rejects NaN.
        if !(sin.abs() <= 1.0 + DOMAIN_SLACK) {
            log::trace!("pitch of {self} is undefined (asin argument {sin})");
            return Err(Error::PitchOutOfDomain(sin));
        }
        if sin.abs() > 1.0 {
            log::trace!("clamping pitch asin argument {sin} of {self}");
        }
        Ok(sin.clamp(-1.0, 1.0).asin())
    }
}
