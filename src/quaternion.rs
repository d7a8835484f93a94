mod ops;

use std::fmt;

use crate::Vector3;

/// A quaternion `q0 + q1·i + q2·j + q3·k`, with real part `q0` and imaginary (vector) part
/// `(q1, q2, q3)`.
///
/// Unit-length quaternions are used to represent rotations in 3D space. Nothing enforces unit
/// length: [`Quaternion::new`] stores its arguments verbatim, and products of unit quaternions
/// drift away from length 1 over time due to rounding. Call [`Quaternion::normalize`] to restore
/// unit length. Rotating a vector with a non-unit quaternion scales it in addition to rotating it.
///
/// # Composition
///
/// Multiplying two quaternions computes their Hamilton product. `a * b` is the rotation that
/// applies `b` first, then `a`:
///
/// ```
/// # use tiny_linalg::*;
/// use approx::assert_abs_diff_eq;
/// use std::f32::consts::FRAC_PI_2;
///
/// let a = Quaternion::from_rotation_z(FRAC_PI_2);
/// let b = Quaternion::from_rotation_x(FRAC_PI_2);
/// let v = Vector3::DOWN;
/// assert_abs_diff_eq!((a * b) * v, a * (b * v), epsilon = 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    pub q0: f32,
    pub q1: f32,
    pub q2: f32,
    pub q3: f32,
}

unsafe impl bytemuck::Zeroable for Quaternion {}
unsafe impl bytemuck::Pod for Quaternion {}

impl Quaternion {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its real part `q0` and imaginary parts `q1`, `q2` and `q3`.
    ///
    /// The components are stored as-is, without normalization.
    #[inline]
    pub const fn new(q0: f32, q1: f32, q2: f32, q3: f32) -> Self {
        Self { q0, q1, q2, q3 }
    }

    /// Creates a unit quaternion that rotates by `radians` around `axis`.
    ///
    /// `axis` does not have to be normalized, but it must have non-zero length (otherwise the
    /// result is NaN). The rotation follows the right-hand rule: looking down the axis towards
    /// the origin, positive angles rotate counterclockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f32::consts::PI;
    ///
    /// let q = Quaternion::from_axis_angle(Vector3::FORWARD * 3.0, PI);
    /// assert_abs_diff_eq!(q * Vector3::RIGHT, Vector3::LEFT, epsilon = 1e-4);
    /// ```
    pub fn from_axis_angle(axis: Vector3, radians: f32) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = (radians / 2.0).sin_cos();
        Self::new(cos, sin * axis.x, sin * axis.y, sin * axis.z)
    }

    /// Creates a quaternion that rotates by `radians` around the X axis.
    pub fn from_rotation_x(radians: f32) -> Self {
        let (sin, cos) = (radians / 2.0).sin_cos();
        Self::new(cos, sin, 0.0, 0.0)
    }

    /// Creates a quaternion that rotates by `radians` around the Y axis.
    pub fn from_rotation_y(radians: f32) -> Self {
        let (sin, cos) = (radians / 2.0).sin_cos();
        Self::new(cos, 0.0, sin, 0.0)
    }

    /// Creates a quaternion that rotates by `radians` around the Z axis.
    pub fn from_rotation_z(radians: f32) -> Self {
        let (sin, cos) = (radians / 2.0).sin_cos();
        Self::new(cos, 0.0, 0.0, sin)
    }

    /// Creates a quaternion from roll, pitch and yaw angles (in radians).
    ///
    /// The resulting rotation applies the roll around X first, then the pitch around Y, then the
    /// yaw around Z. This is the inverse of [`Quaternion::euler_angles`] as long as `pitch` stays
    /// within `(-π/2, π/2)` and `roll` and `yaw` within `(-π, π]`.
    #[doc(alias = "euler")]
    pub fn from_euler_angles(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::from_rotation_z(yaw) * Self::from_rotation_y(pitch) * Self::from_rotation_x(roll)
    }

    /// Returns the conjugate `(q0, -q1, -q2, -q3)`.
    ///
    /// For unit quaternions, this is also the inverse, ie. the opposite rotation.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.q0, -self.q1, -self.q2, -self.q3)
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "length")]
    pub fn magnitude(&self) -> f32 {
        (self.q0 * self.q0 + self.q1 * self.q1 + self.q2 * self.q2 + self.q3 * self.q3).sqrt()
    }

    /// Returns a copy of this quaternion scaled to unit length.
    ///
    /// A zero quaternion yields non-finite components.
    pub fn normalized(self) -> Self {
        let m = self.magnitude();
        Self::new(self.q0 / m, self.q1 / m, self.q2 / m, self.q3 / m)
    }

    /// Scales `self` to unit length in place.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Rotation around the X axis, in radians (`-π..=π`).
    pub fn roll(&self) -> f32 {
        let Self { q0, q1, q2, q3 } = *self;
        (2.0 * (q2 * q3 + q0 * q1)).atan2(q0 * q0 - q1 * q1 - q2 * q2 + q3 * q3)
    }

    /// Rotation around the Y axis, in radians (`-π/2..=π/2`).
    ///
    /// The `asin` argument is not clamped: for quaternions that are not of unit length, or for
    /// rotations at gimbal lock (pitch of ±π/2) where rounding overshoots ±1, this returns NaN.
    /// [`Quaternion::try_pitch`] tolerates the latter.
    pub fn pitch(&self) -> f32 {
        self.pitch_sin().asin()
    }

    /// Rotation around the Z axis, in radians (`-π..=π`).
    pub fn yaw(&self) -> f32 {
        let Self { q0, q1, q2, q3 } = *self;
        (2.0 * (q1 * q2 + q0 * q3)).atan2(q0 * q0 + q1 * q1 - q2 * q2 - q3 * q3)
    }

    /// Returns `(roll, pitch, yaw)`.
    pub fn euler_angles(&self) -> (f32, f32, f32) {
        (self.roll(), self.pitch(), self.yaw())
    }

    pub(crate) fn pitch_sin(&self) -> f32 {
        2.0 * (self.q0 * self.q2 - self.q1 * self.q3)
    }

    fn vector(self) -> Vector3 {
        Vector3::new(self.q1, self.q2, self.q3)
    }
}

impl From<[f32; 4]> for Quaternion {
    /// Creates a quaternion from `[q0, q1, q2, q3]`.
    #[inline]
    fn from([q0, q1, q2, q3]: [f32; 4]) -> Self {
        Self::new(q0, q1, q2, q3)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        [q.q0, q.q1, q.q2, q.q3]
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.q0, self.q1, self.q2, self.q3)
    }
}
