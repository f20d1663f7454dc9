use crate::math::*;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

// Component-wise comparisons over `as_array()`, so `assert_relative_eq!` and
// friends work on every vector and matrix type.
macro_rules! impl_approx {
    ($($t:ty),*) => {$(
        impl AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.as_array().iter().zip(other.as_array().iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.as_array()
                    .iter()
                    .zip(other.as_array().iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $t {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.as_array().iter().zip(other.as_array().iter()).all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    )*};
}

impl_approx!(Vec2, Vec3, Vec4, Mat22, Mat33, Mat44);
