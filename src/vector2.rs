use std::fmt;

mod ops;

/// A 2-dimensional vector with [`f32`] components.
///
/// The named direction constants assume screen-space coordinates: X points to the right and Y
/// points *down*, so [`Vector2::TOP`] is `(0, -1)` and [`Vector2::DOWN`] is `(0, 1)`.
///
/// Equality is exact: two vectors compare equal only if both components compare equal as
/// [`f32`]s. Use the [`approx`] trait impls for tolerance-based comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

unsafe impl bytemuck::Zeroable for Vector2 {}
unsafe impl bytemuck::Pod for Vector2 {}

impl Vector2 {
    /// The zero vector `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// A unit vector pointing right, `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// A unit vector pointing left, `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// A unit vector pointing up the screen, `(0, -1)`.
    pub const TOP: Self = Self::new(0.0, -1.0);
    /// A unit vector pointing down the screen, `(0, 1)`.
    pub const DOWN: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// assert_eq!(Vector2::new(3.0, 4.0).length_sq(), 25.0);
    /// ```
    #[inline]
    pub fn length_sq(&self) -> f32 {
        (self.x * self.x) + (self.y * self.y)
    }

    /// Returns the length of this vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector yields non-finite components. See
    /// [`Vector2::try_normalized`] for a checked variant.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// assert_eq!(Vector2::new(0.0, -5.0).normalized(), Vector2::TOP);
    /// ```
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
        self.x * other.x + self.y * other.y
    }

    /// Computes the scalar cross product (perpendicular dot product) of `self` and `other`.
    ///
    /// This is the Z component of the 3D cross product of both vectors extended with Z=0, ie.
    /// twice the signed area of the triangle they span. Swapping the arguments negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// assert_eq!(Vector2::RIGHT.cross(Vector2::DOWN), 1.0);
    /// assert_eq!(Vector2::DOWN.cross(Vector2::RIGHT), -1.0);
    /// ```
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates `self` about the origin by `radians`.
    ///
    /// Positive angles turn [`Vector2::RIGHT`] towards [`Vector2::DOWN`], which is clockwise on
    /// a screen whose Y axis points down.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiny_linalg::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_abs_diff_eq!(Vector2::RIGHT.rotated(FRAC_PI_2), Vector2::DOWN);
    /// ```
    pub fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates `self` in place. See [`Vector2::rotated`].
    pub fn rotate(&mut self, radians: f32) -> &mut Self {
        *self = self.rotated(radians);
        self
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
