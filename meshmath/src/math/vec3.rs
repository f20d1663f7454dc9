use crate::math::*;
use bytemuck::{Pod, Zeroable};
use std::fmt;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::splat(0.0);
    pub const ONE: Vec3 = Vec3::splat(1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const NEG_X: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Vec3 = Vec3::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn length(self) -> f32 {
        dot(self, self).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        dot(self, self)
    }

    /// Zero-length input gives NaN components; callers that can see degenerate
    /// vectors have to check the length themselves.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        self / len
    }

    /// Clamps every component into `[min, max]`. An inverted range leaves the vector as is.
    pub fn clamped(self, min: f32, max: f32) -> Vec3 {
        if min > max {
            return self;
        }
        Vec3 { x: self.x.max(min).min(max), y: self.y.max(min).min(max), z: self.z.max(min).min(max) }
    }

    pub fn abs(self) -> Vec3 {
        Vec3 { x: self.x.abs(), y: self.y.abs(), z: self.z.abs() }
    }

    pub fn sqrt(self) -> Vec3 {
        Vec3 { x: self.x.sqrt(), y: self.y.sqrt(), z: self.z.sqrt() }
    }

    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        Vec3 { x: lerp(self.x, other.x, t), y: lerp(self.y, other.y, t), z: lerp(self.z, other.z, t) }
    }

    /// Column `j` of the result is `self * other[j]`.
    pub fn outer(self, other: Vec3) -> Mat33 {
        Mat33::from_cols(self * other.x, self * other.y, self * other.z)
    }

    pub fn approx_eq(self, other: Vec3) -> bool {
        approx_eq_slices(self.as_array(), other.as_array())
    }

    pub fn xy(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    pub fn extend(self, w: f32) -> Vec4 {
        Vec4 { x: self.x, y: self.y, z: self.z, w }
    }

    pub fn as_vector4(self) -> Vec4 {
        self.extend(0.0)
    }

    pub fn as_point4(self) -> Vec4 {
        self.extend(1.0)
    }

    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    pub fn as_array_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }
}

// a x b
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3 {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

// a * b
impl Dot for Vec3 {
    fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Vec3 {
        Vec3 { x: a[0], y: a[1], z: a[2] }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

impl std::ops::Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.as_array()[i]
    }
}

impl std::ops::IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.as_array_mut()[i]
    }
}

// -Vec3
impl std::ops::Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

// Vec3 + Vec3
impl std::ops::Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

// Vec3 += Vec3
impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

// Vec3 - Vec3
impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

// Vec3 -= Vec3
impl std::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

// Vec3 * Vec3, component-wise
impl std::ops::Mul for Vec3 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z }
    }
}

// Vec3 / Vec3, component-wise
impl std::ops::Div for Vec3 {
    type Output = Vec3;
    fn div(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x / other.x, y: self.y / other.y, z: self.z / other.z }
    }
}

// Vec3 + f32
impl std::ops::Add<f32> for Vec3 {
    type Output = Vec3;
    fn add(self, scalar: f32) -> Vec3 {
        Vec3 { x: self.x + scalar, y: self.y + scalar, z: self.z + scalar }
    }
}

// Vec3 - f32
impl std::ops::Sub<f32> for Vec3 {
    type Output = Vec3;
    fn sub(self, scalar: f32) -> Vec3 {
        Vec3 { x: self.x - scalar, y: self.y - scalar, z: self.z - scalar }
    }
}

// Vec3 * f32
impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, scalar: f32) -> Vec3 {
        Vec3 { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar }
    }
}

// Vec3 *= f32
impl std::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

// f32 * Vec3
impl std::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, vec: Vec3) -> Vec3 {
        Vec3 { x: vec.x * self, y: vec.y * self, z: vec.z * self }
    }
}

// Vec3 / f32
impl std::ops::Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, scalar: f32) -> Vec3 {
        Vec3 { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:12.7} {:12.7} {:12.7}", self.x, self.y, self.z)
    }
}
