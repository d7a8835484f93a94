use std::ops::{Mul, MulAssign, Neg};

use crate::{Quaternion, Vector3};

/// Hamilton product: `self * rhs` applies `rhs` first, then `self`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);

        #[rustfmt::skip]
        let product = Self::new(
            (a.q0 * b.q0) - (a.q1 * b.q1) - (a.q2 * b.q2) - (a.q3 * b.q3),
            (a.q0 * b.q1) + (a.q1 * b.q0) + (a.q2 * b.q3) - (a.q3 * b.q2),
            (a.q0 * b.q2) + (a.q2 * b.q0) - (a.q1 * b.q3) + (a.q3 * b.q1),
            (a.q0 * b.q3) + (a.q3 * b.q0) + (a.q1 * b.q2) - (a.q2 * b.q1),
        );
        product
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector by computing `q * (0, v) * q*`.
///
/// The result is only a pure rotation if `self` has unit length.
impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        let pure = Quaternion::new(0.0, rhs.x, rhs.y, rhs.z);
        (self * pure * self.conjugate()).vector()
    }
}

/// Component-wise negation.
///
/// `-q` represents the same rotation as `q`.
impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.q0, -self.q1, -self.q2, -self.q3)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn compose_in_place() {
        let mut q = Quaternion::from_rotation_z(0.5);
        q *= Quaternion::from_rotation_z(0.25);
        assert_abs_diff_eq!(q, Quaternion::from_rotation_z(0.75), epsilon = 1e-6);
    }

    #[test]
    fn negated_rotation_is_identical() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.3, 1.0, -2.0), 2.0);
        let v = Vector3::new(-1.0, 4.0, 0.5);
        assert_abs_diff_eq!(q * v, (-q) * v, epsilon = 1e-6);
    }
}
