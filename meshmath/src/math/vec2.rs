use crate::math::*;
use bytemuck::{Pod, Zeroable};
use std::fmt;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::splat(0.0);
    pub const ONE: Vec2 = Vec2::splat(1.0);
    pub const X: Vec2 = Vec2::new(1.0, 0.0);
    pub const Y: Vec2 = Vec2::new(0.0, 1.0);
    pub const NEG_X: Vec2 = Vec2::new(-1.0, 0.0);
    pub const NEG_Y: Vec2 = Vec2::new(0.0, -1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    pub fn length(self) -> f32 {
        dot(self, self).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        dot(self, self)
    }

    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        self / len
    }

    pub fn clamped(self, min: f32, max: f32) -> Vec2 {
        if min > max {
            return self;
        }
        Vec2 { x: self.x.max(min).min(max), y: self.y.max(min).min(max) }
    }

    pub fn abs(self) -> Vec2 {
        Vec2 { x: self.x.abs(), y: self.y.abs() }
    }

    pub fn sqrt(self) -> Vec2 {
        Vec2 { x: self.x.sqrt(), y: self.y.sqrt() }
    }

    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2 { x: lerp(self.x, other.x, t), y: lerp(self.y, other.y, t) }
    }

    pub fn outer(self, other: Vec2) -> Mat22 {
        Mat22::from_cols(self * other.x, self * other.y)
    }

    pub fn approx_eq(self, other: Vec2) -> bool {
        approx_eq_slices(self.as_array(), other.as_array())
    }

    pub fn extend(self, z: f32) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z }
    }

    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    pub fn as_array_mut(&mut self) -> &mut [f32; 2] {
        bytemuck::cast_mut(self)
    }
}

// a * b
impl Dot for Vec2 {
    fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(a: [f32; 2]) -> Vec2 {
        Vec2 { x: a[0], y: a[1] }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> [f32; 2] {
        [v.x, v.y]
    }
}

impl std::ops::Index<usize> for Vec2 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.as_array()[i]
    }
}

impl std::ops::IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.as_array_mut()[i]
    }
}

// -Vec2
impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

// Vec2 + Vec2
impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x + other.x, y: self.y + other.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

// Vec2 - Vec2
impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x - other.x, y: self.y - other.y }
    }
}

impl std::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Vec2) {
        *self = *self - other;
    }
}

// Vec2 * Vec2
impl std::ops::Mul for Vec2 {
    type Output = Vec2;
    fn mul(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }
}

// Vec2 / Vec2
impl std::ops::Div for Vec2 {
    type Output = Vec2;
    fn div(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x / other.x, y: self.y / other.y }
    }
}

// Vec2 + f32
impl std::ops::Add<f32> for Vec2 {
    type Output = Vec2;
    fn add(self, scalar: f32) -> Vec2 {
        Vec2 { x: self.x + scalar, y: self.y + scalar }
    }
}

// Vec2 - f32
impl std::ops::Sub<f32> for Vec2 {
    type Output = Vec2;
    fn sub(self, scalar: f32) -> Vec2 {
        Vec2 { x: self.x - scalar, y: self.y - scalar }
    }
}

// Vec2 * f32
impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, scalar: f32) -> Vec2 {
        Vec2 { x: self.x * scalar, y: self.y * scalar }
    }
}

impl std::ops::MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

// f32 * Vec2
impl std::ops::Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, vec: Vec2) -> Vec2 {
        Vec2 { x: vec.x * self, y: vec.y * self }
    }
}

// Vec2 / f32
impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, scalar: f32) -> Vec2 {
        Vec2 { x: self.x / scalar, y: self.y / scalar }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:12.7} {:12.7}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 8.0);

        assert_eq!(v1 + v2, Vec2::new(4.0, 10.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 6.0));
        assert_eq!(v1 * v2, Vec2::new(3.0, 16.0));
        assert_eq!(v2 / v1, Vec2::new(3.0, 4.0));
        assert_eq!(v1 + 0.5, Vec2::new(1.5, 2.5));
        assert_eq!(v1 - 0.5, Vec2::new(0.5, 1.5));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vec2::new(1.5, 4.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2_length_and_normalized() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);

        let n = v.normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < f32::EPSILON);

        let z = Vec2::ZERO.normalized();
        assert!(z.x.is_nan() && z.y.is_nan());
    }

    #[test]
    fn test_vec2_indexing() {
        let mut v = Vec2::new(5.0, 6.0);
        assert_eq!(v[0], 5.0);
        v[1] = 1.0;
        assert_eq!(v, Vec2::new(5.0, 1.0));
    }

    #[test]
    fn test_vec2_outer() {
        let m = Vec2::new(1.0, 2.0).outer(Vec2::new(3.0, 4.0));
        assert_eq!(m.0, [3.0, 6.0, 4.0, 8.0]);
    }

    #[test]
    fn test_vec2_misc() {
        assert_eq!(Vec2::new(-3.0, 3.0).clamped(-1.0, 1.0), Vec2::new(-1.0, 1.0));
        assert_eq!(Vec2::new(-4.0, 9.0).abs().sqrt(), Vec2::new(2.0, 3.0));
        assert_eq!(Vec2::ZERO.lerp(Vec2::ONE, 0.5), Vec2::splat(0.5));
        assert_eq!(Vec2::X.extend(2.0), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(dot(Vec2::X, Vec2::Y), 0.0);
    }
}
