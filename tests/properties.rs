//! Algebraic identities checked against randomly generated (but seeded) inputs.

use std::f32::consts::{FRAC_PI_2, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use tiny_linalg::{Quaternion, Vector2, Vector3};

const ITERATIONS: usize = 500;

struct Gen {
    rng: fastrand::Rng,
}

impl Gen {
    fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Uniform in `-range..range`.
    fn f32(&mut self, range: f32) -> f32 {
        (self.rng.f32() * 2.0 - 1.0) * range
    }

    fn vec2(&mut self) -> Vector2 {
        Vector2::new(self.f32(100.0), self.f32(100.0))
    }

    fn vec3(&mut self) -> Vector3 {
        Vector3::new(self.f32(100.0), self.f32(100.0), self.f32(100.0))
    }

    /// A vector whose length is safely away from zero.
    fn nonzero_vec3(&mut self) -> Vector3 {
        loop {
            let v = self.vec3();
            if v.length() > 1.0 {
                return v;
            }
        }
    }

    fn nonzero_scalar(&mut self) -> f32 {
        loop {
            let s = self.f32(50.0);
            if s.abs() > 0.01 {
                return s;
            }
        }
    }

    fn rotation(&mut self) -> Quaternion {
        let axis = self.nonzero_vec3();
        Quaternion::from_axis_angle(axis, self.f32(PI))
    }
}

#[test]
fn vector2_identities() {
    let mut gen = Gen::new(0x2d);
    for _ in 0..ITERATIONS {
        let v = gen.vec2();
        let w = gen.vec2();
        let s = gen.nonzero_scalar();

        assert_eq!(v + Vector2::ZERO, v);
        assert_eq!(v - v, Vector2::ZERO);
        assert_eq!(-(-v), v);
        assert_eq!(s * v, v * s);
        assert_relative_eq!((v * s) / s, v, epsilon = 1e-4, max_relative = 1e-5);

        assert_eq!(v.dot(w), w.dot(v));
        assert_eq!(v.cross(w), -w.cross(v));
        assert_eq!(v.distance_from(w), w.distance_from(v));

        if v.length() > 1.0 {
            assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn vector2_rotation_preserves_length() {
    let mut gen = Gen::new(0x2e);
    for _ in 0..ITERATIONS {
        let v = gen.vec2();
        let angle = gen.f32(PI);
        let rotated = v.rotated(angle);
        assert_relative_eq!(rotated.length(), v.length(), epsilon = 1e-3, max_relative = 1e-5);
        assert_abs_diff_eq!(rotated.rotated(-angle), v, epsilon = 1e-3);

        // A quarter turn is perpendicular to the original vector.
        let perp = v.rotated(FRAC_PI_2).dot(v) / v.length_sq().max(1.0);
        assert_abs_diff_eq!(perp, 0.0, epsilon = 1e-5);
    }
}

#[test]
fn vector3_identities() {
    let mut gen = Gen::new(0x3d);
    for _ in 0..ITERATIONS {
        let v = gen.vec3();
        let w = gen.vec3();
        let s = gen.nonzero_scalar();

        assert_eq!(v + Vector3::ZERO, v);
        assert_eq!(v - v, Vector3::ZERO);
        assert_eq!(-(-v), v);
        assert_eq!(s * v, v * s);
        assert_relative_eq!((v * s) / s, v, epsilon = 1e-4, max_relative = 1e-5);

        assert_eq!(v.dot(w), w.dot(v));
        assert_eq!(v.cross(w), -w.cross(v));

        let mut u = v;
        u += w;
        u -= w;
        assert_abs_diff_eq!(u, v, epsilon = 1e-4);
    }
}

#[test]
fn vector3_normalize_and_angle() {
    let mut gen = Gen::new(0x3e);
    for _ in 0..ITERATIONS {
        let v = gen.nonzero_vec3();
        let w = gen.nonzero_vec3();

        assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-5);

        let angle = v.angle(w);
        if angle.is_finite() {
            assert!((0.0..=PI).contains(&angle));
            assert_abs_diff_eq!(angle, w.angle(v), epsilon = 1e-5);
        }
        let checked = v.try_angle(w).unwrap();
        assert!((0.0..=PI).contains(&checked));

        // The cross product is perpendicular to both inputs.
        let n = v.cross(w);
        if n.length() > 0.1 * v.length() * w.length() {
            assert_abs_diff_eq!(v.normalized().angle(n), FRAC_PI_2, epsilon = 1e-3);
            assert_abs_diff_eq!(w.normalized().angle(n), FRAC_PI_2, epsilon = 1e-3);
        }
    }
}

#[test]
fn quaternion_rotation() {
    let mut gen = Gen::new(0x4d);
    for _ in 0..ITERATIONS {
        let q = gen.rotation();
        let p = gen.rotation();
        let v = gen.vec3();

        assert_relative_eq!(q.magnitude(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(Quaternion::IDENTITY * v, v);

        let rotated = q * v;
        assert_relative_eq!(rotated.length(), v.length(), epsilon = 1e-3, max_relative = 1e-4);
        assert_abs_diff_eq!(q.conjugate() * rotated, v, epsilon = 1e-3);

        // `q * p` applies `p` first.
        assert_abs_diff_eq!((q * p) * v, q * (p * v), epsilon = 1e-3);
    }
}

#[test]
fn quaternion_normalize() {
    let mut gen = Gen::new(0x4e);
    for _ in 0..ITERATIONS {
        let q = Quaternion::new(gen.f32(10.0), gen.f32(10.0), gen.f32(10.0), gen.f32(10.0));
        if q.magnitude() < 0.1 {
            continue;
        }
        assert_relative_eq!(q.normalized().magnitude(), 1.0, epsilon = 1e-5);

        // Products of unit quaternions drift; normalizing restores unit length.
        let mut drifted = q.normalized();
        for _ in 0..100 {
            drifted = drifted * gen.rotation();
        }
        drifted.normalize();
        assert_relative_eq!(drifted.magnitude(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn euler_round_trip() {
    let mut gen = Gen::new(0x4f);
    for _ in 0..ITERATIONS {
        let roll = gen.f32(3.0);
        // Stay away from gimbal lock at ±π/2.
        let pitch = gen.f32(1.3);
        let yaw = gen.f32(3.0);

        let q = Quaternion::from_euler_angles(roll, pitch, yaw);
        let (r, p, y) = q.euler_angles();
        assert_abs_diff_eq!(r, roll, epsilon = 1e-3);
        assert_abs_diff_eq!(p, pitch, epsilon = 1e-3);
        assert_abs_diff_eq!(y, yaw, epsilon = 1e-3);
        assert_abs_diff_eq!(q.try_pitch().unwrap(), p);
    }
}

#[test]
fn euler_single_axis_matches_axis_angle() {
    let mut gen = Gen::new(0x50);
    for _ in 0..ITERATIONS {
        let angle = gen.f32(1.5);
        assert_abs_diff_eq!(
            Quaternion::from_axis_angle(Vector3::RIGHT, angle).roll(),
            angle,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            Quaternion::from_axis_angle(Vector3::DOWN, angle).pitch(),
            angle,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            Quaternion::from_axis_angle(Vector3::FORWARD, angle).yaw(),
            angle,
            epsilon = 1e-4
        );
    }
}
