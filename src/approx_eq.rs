//! Approximate equality via the [`approx`] crate.
//!
//! `==` on the types in this crate is exact. These impls provide the opt-in tolerant comparison
//! instead: two values are considered equal if *all* of their components are. The default
//! tolerances are those of [`f32`] (`f32::EPSILON` for absolute and relative comparisons, 4 ULPs).

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Quaternion, Vector2, Vector3};

macro_rules! componentwise_approx_eq {
    ($($ty:ty => [$($field:ident),+]),+ $(,)?) => {
        $(
            impl AbsDiffEq for $ty {
                type Epsilon = f32;

                fn default_epsilon() -> f32 {
                    f32::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                    $( self.$field.abs_diff_eq(&other.$field, epsilon) )&&+
                }
            }

            impl RelativeEq for $ty {
                fn default_max_relative() -> f32 {
                    f32::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                    $( self.$field.relative_eq(&other.$field, epsilon, max_relative) )&&+
                }
            }

            impl UlpsEq for $ty {
                fn default_max_ulps() -> u32 {
                    f32::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                    $( self.$field.ulps_eq(&other.$field, epsilon, max_ulps) )&&+
                }
            }
        )+
    };
}

componentwise_approx_eq!(
    Vector2 => [x, y],
    Vector3 => [x, y, z],
    Quaternion => [q0, q1, q2, q3],
);
