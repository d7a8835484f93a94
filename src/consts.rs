//! Angle constants.

/// π, rounded to single precision (`3.14159265358979`).
pub const PI: f32 = std::f32::consts::PI;

/// Multiply an angle in degrees by this to convert it to radians.
pub const DEGREE_TO_RADIAN: f32 = 2.0 * PI / 360.0;

/// Multiply an angle in radians by this to convert it to degrees.
pub const RADIAN_TO_DEGREE: f32 = 1.0 / DEGREE_TO_RADIAN;
