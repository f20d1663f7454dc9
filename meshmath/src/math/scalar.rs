use std::f32::consts::PI;

/// Absolute tolerance used by every `approx_eq` in this module.
/// Fine for values around unit magnitude, too strict for large ones.
pub const EPSILON: f32 = f32::EPSILON;

pub fn deg2rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

pub fn rad2deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

// lerp(a, b, t) = t * b + (1 - t) * a
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    t * b + u * a
}

pub(crate) fn approx_eq_slices(a: &[f32], b: &[f32]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, PI / 2.0)]
    #[case(180.0, PI)]
    #[case(-45.0, -PI / 4.0)]
    fn test_deg2rad(#[case] degrees: f32, #[case] radians: f32) {
        assert!((deg2rad(degrees) - radians).abs() < 1e-6);
        assert!((rad2deg(radians) - degrees).abs() < 1e-4);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        // extrapolates outside [0, 1]
        assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
    }

    #[test]
    fn test_approx_eq_slices_is_absolute() {
        assert!(approx_eq_slices(&[1.0, 2.0], &[1.0, 2.0]));
        assert!(!approx_eq_slices(&[1.0], &[1.0 + 1e-5]));
        // one ulp at this magnitude is far larger than EPSILON
        let big = 1.0e6_f32;
        assert!(!approx_eq_slices(&[big], &[f32::from_bits(big.to_bits() + 1)]));
    }
}
