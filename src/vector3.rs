use std::fmt;

mod ops;

/// A 3-dimensional vector with [`f32`] components.
///
/// Like [`Vector2`][crate::Vector2], the vertical axis follows the screen-space convention where
/// Y grows downwards: [`Vector3::TOP`] is `(0, -1, 0)`. Z points away from the viewer
/// ([`Vector3::FORWARD`]).
///
/// There is no rotation method on this type; rotate vectors by multiplying them with a
/// [`Quaternion`][crate::Quaternion].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

unsafe impl bytemuck::Zeroable for Vector3 {}
unsafe impl bytemuck::Pod for Vector3 {}

impl Vector3 {
    /// The zero vector `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// A unit vector pointing right, `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// A unit vector pointing left, `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// A unit vector pointing up the screen, `(0, -1, 0)`.
    pub const TOP: Self = Self::new(0.0, -1.0, 0.0);
    /// A unit vector pointing down the screen, `(0, 1, 0)`.
    pub const DOWN: Self = Self::new(0.0, 1.0, 0.0);
    /// A unit vector pointing forward, `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// A unit vector pointing back, `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the squared length of this vector.
    #[inline]
    pub fn length_sq(&self) -> f32 {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
    /// ```
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Zero-length vectors produce non-finite components.
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Normalizes `self` in place.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns the distance between the points `self` and `other`.
    pub fn distance_from(&self, other: Self) -> f32 {
        (other - *self).length()
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// assert_eq!(Vector3::RIGHT.cross(Vector3::DOWN), Vector3::FORWARD);
    /// assert_eq!(Vector3::DOWN.cross(Vector3::RIGHT), Vector3::BACK);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        #[rustfmt::skip]
        let cross = Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        );
        cross
    }

    /// Computes the unsigned angle between `self` and `other`, in radians (`0..=π`).
    ///
    /// Both vectors must have non-zero length, otherwise the result is NaN. Rounding can also push
    /// the cosine of nearly parallel vectors just past ±1, which yields NaN as well;
    /// [`Vector3::try_angle`] guards against both.
    pub fn angle(self, other: Self) -> f32 {
        self.normalized().dot(other.normalized()).acos()
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
