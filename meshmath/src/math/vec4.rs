use crate::math::*;
use bytemuck::{Pod, Zeroable};
use std::fmt;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::splat(0.0);
    pub const ONE: Vec4 = Vec4::splat(1.0);
    pub const X: Vec4 = Vec4::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Vec4 = Vec4::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Vec4 = Vec4::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
    pub const NEG_X: Vec4 = Vec4::new(-1.0, 0.0, 0.0, 0.0);
    pub const NEG_Y: Vec4 = Vec4::new(0.0, -1.0, 0.0, 0.0);
    pub const NEG_Z: Vec4 = Vec4::new(0.0, 0.0, -1.0, 0.0);
    pub const NEG_W: Vec4 = Vec4::new(0.0, 0.0, 0.0, -1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v, w: v }
    }

    pub fn length(self) -> f32 {
        dot(self, self).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        dot(self, self)
    }

    pub fn normalized(self) -> Vec4 {
        let len = self.length();
        self / len
    }

    pub fn clamped(self, min: f32, max: f32) -> Vec4 {
        if min > max {
            return self;
        }
        Vec4 {
            x: self.x.max(min).min(max),
            y: self.y.max(min).min(max),
            z: self.z.max(min).min(max),
            w: self.w.max(min).min(max),
        }
    }

    pub fn abs(self) -> Vec4 {
        Vec4 { x: self.x.abs(), y: self.y.abs(), z: self.z.abs(), w: self.w.abs() }
    }

    pub fn sqrt(self) -> Vec4 {
        Vec4 { x: self.x.sqrt(), y: self.y.sqrt(), z: self.z.sqrt(), w: self.w.sqrt() }
    }

    pub fn lerp(self, other: Vec4, t: f32) -> Vec4 {
        Vec4 {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            z: lerp(self.z, other.z, t),
            w: lerp(self.w, other.w, t),
        }
    }

    pub fn outer(self, other: Vec4) -> Mat44 {
        Mat44::from_cols(self * other.x, self * other.y, self * other.z, self * other.w)
    }

    pub fn approx_eq(self, other: Vec4) -> bool {
        approx_eq_slices(self.as_array(), other.as_array())
    }

    pub fn xy(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    pub fn xyz(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }
}

// a * b
impl Dot for Vec4 {
    fn dot(self, rhs: Vec4) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Vec4 {
        Vec4 { x: a[0], y: a[1], z: a[2], w: a[3] }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> [f32; 4] {
        [v.x, v.y, v.z, v.w]
    }
}

impl std::ops::Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.as_array()[i]
    }
}

impl std::ops::IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.as_array_mut()[i]
    }
}

// -Vec4
impl std::ops::Neg for Vec4 {
    type Output = Vec4;
    fn neg(self) -> Vec4 {
        Vec4 { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}

// Vec4 + Vec4
impl std::ops::Add for Vec4 {
    type Output = Vec4;
    fn add(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w: self.w + other.w }
    }
}

impl std::ops::AddAssign for Vec4 {
    fn add_assign(&mut self, other: Vec4) {
        *self = *self + other;
    }
}

// Vec4 - Vec4
impl std::ops::Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z, w: self.w - other.w }
    }
}

impl std::ops::SubAssign for Vec4 {
    fn sub_assign(&mut self, other: Vec4) {
        *self = *self - other;
    }
}

// Vec4 * Vec4
impl std::ops::Mul for Vec4 {
    type Output = Vec4;
    fn mul(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z, w: self.w * other.w }
    }
}

// Vec4 / Vec4
impl std::ops::Div for Vec4 {
    type Output = Vec4;
    fn div(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x / other.x, y: self.y / other.y, z: self.z / other.z, w: self.w / other.w }
    }
}

// Vec4 + f32
impl std::ops::Add<f32> for Vec4 {
    type Output = Vec4;
    fn add(self, scalar: f32) -> Vec4 {
        Vec4 { x: self.x + scalar, y: self.y + scalar, z: self.z + scalar, w: self.w + scalar }
    }
}

// Vec4 - f32
impl std::ops::Sub<f32> for Vec4 {
    type Output = Vec4;
    fn sub(self, scalar: f32) -> Vec4 {
        Vec4 { x: self.x - scalar, y: self.y - scalar, z: self.z - scalar, w: self.w - scalar }
    }
}

// Vec4 * f32
impl std::ops::Mul<f32> for Vec4 {
    type Output = Vec4;
    fn mul(self, scalar: f32) -> Vec4 {
        Vec4 { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar, w: self.w * scalar }
    }
}

impl std::ops::MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

// f32 * Vec4
impl std::ops::Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4 { x: vec.x * self, y: vec.y * self, z: vec.z * self, w: vec.w * self }
    }
}

// Vec4 / f32
impl std::ops::Div<f32> for Vec4 {
    type Output = Vec4;
    fn div(self, scalar: f32) -> Vec4 {
        Vec4 { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar, w: self.w / scalar }
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:12.7} {:12.7} {:12.7} {:12.7}", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_creation_and_equality() {
        let v1 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let v2 = Vec4 { x: 1.0, y: 2.0, z: 3.0, w: 4.0 };
        let v3 = Vec4::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
        assert_eq!(Vec4::X + Vec4::Y + Vec4::Z + Vec4::W, Vec4::ONE);
        assert_eq!(Vec4::NEG_W, -Vec4::W);
    }

    #[test]
    fn test_vec4_arithmetic() {
        let v1 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let v2 = Vec4::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(v1 + v2, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(v2 - v1, Vec4::splat(4.0));
        assert_eq!(v1 * v2, Vec4::new(5.0, 12.0, 21.0, 32.0));
        assert_eq!(v2 / Vec4::splat(2.0), Vec4::new(2.5, 3.0, 3.5, 4.0));
        assert_eq!(v1 * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * v1, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(v1 + 1.0, Vec4::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(v1 - 1.0, Vec4::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(v1 / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_dot_product() {
        let v1 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let v2 = Vec4::new(5.0, 6.0, 7.0, 8.0);

        // 1.0 * 5.0 + 2.0 * 6.0 + 3.0 * 7.0 + 4.0 * 8.0 = 5.0 + 12.0 + 21.0 + 32.0 = 70.0
        assert_eq!(dot(v1, v2), 70.0);
    }

    #[test]
    fn test_length_and_normalized() {
        assert_eq!(Vec4::new(3.0, 4.0, 0.0, 0.0).length(), 5.0);
        assert_eq!(Vec4::new(1.0, 2.0, 2.0, 4.0).length(), 5.0);

        let n = Vec4::new(1.0, 2.0, 2.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(Vec4::ZERO.normalized().w.is_nan());
    }

    #[test]
    fn test_swizzles() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v[3], 4.0);
    }

    #[test]
    fn test_outer() {
        let m = Vec4::new(1.0, 2.0, 3.0, 4.0).outer(Vec4::W);
        assert_eq!(m.col(3), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.col(0), Vec4::ZERO);
    }

    #[test]
    fn test_clamped_abs_sqrt_lerp() {
        let v = Vec4::new(-2.0, 0.5, 2.0, 9.0);
        assert_eq!(v.clamped(0.0, 1.0), Vec4::new(0.0, 0.5, 1.0, 1.0));
        assert_eq!(v.clamped(1.0, 0.0), v);
        assert_eq!(v.abs(), Vec4::new(2.0, 0.5, 2.0, 9.0));
        assert_eq!(Vec4::new(1.0, 4.0, 9.0, 16.0).sqrt(), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vec4::ZERO.lerp(Vec4::splat(4.0), 0.25), Vec4::ONE);
    }
}
