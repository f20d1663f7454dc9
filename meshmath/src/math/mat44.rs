use crate::math::*;
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// 4x4 matrix, column-major: element `(row, col)` lives at `[col * 4 + row]`.
/// `as_array()` can be handed to a GL-style uniform upload without transposing.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat44(pub [f32; 16]);

impl Mat44 {
    pub fn identity() -> Mat44 {
        Mat44::diag(1.0)
    }

    pub fn zeros() -> Mat44 {
        Mat44([0.0; 16])
    }

    pub fn diag(x: f32) -> Mat44 {
        Mat44([
            x, 0.0, 0.0, 0.0, //
            0.0, x, 0.0, 0.0, //
            0.0, 0.0, x, 0.0, //
            0.0, 0.0, 0.0, x,
        ])
    }

    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Mat44 {
        Mat44([
            c0.x, c0.y, c0.z, c0.w, //
            c1.x, c1.y, c1.z, c1.w, //
            c2.x, c2.y, c2.z, c2.w, //
            c3.x, c3.y, c3.z, c3.w,
        ])
    }

    pub fn scale_uniform(s: f32) -> Mat44 {
        Mat44::scale_non_uniform(Vec3::splat(s))
    }

    pub fn scale_non_uniform(s: Vec3) -> Mat44 {
        Mat44([
            s.x, 0.0, 0.0, 0.0, //
            0.0, s.y, 0.0, 0.0, //
            0.0, 0.0, s.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn translation(t: Vec3) -> Mat44 {
        Mat44([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            t.x, t.y, t.z, 1.0,
        ])
    }

    /// Right-handed rotation by `angle` radians about `axis`. The axis is
    /// normalized here, a zero axis produces NaN.
    pub fn rotation(axis: Vec3, angle: f32) -> Mat44 {
        let Vec3 { x, y, z } = axis.normalized();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Mat44([
            c + x * x * t,
            x * y * t + z * s,
            x * z * t - y * s,
            0.0, //
            x * y * t - z * s,
            c + y * y * t,
            y * z * t + x * s,
            0.0, //
            x * z * t + y * s,
            y * z * t - x * s,
            c + z * z * t,
            0.0, //
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    pub fn col(&self, i: usize) -> Vec4 {
        let m = &self.0;
        Vec4::new(m[i * 4], m[i * 4 + 1], m[i * 4 + 2], m[i * 4 + 3])
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "index out of bounds: ({}, {})", row, col);
        self.0[col * 4 + row]
    }

    pub fn trace(&self) -> f32 {
        self.0[0] + self.0[5] + self.0[10] + self.0[15]
    }

    pub fn frobenius_norm(&self) -> f32 {
        self.0.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    pub fn determinant(&self) -> f32 {
        let a = &self.0;
        let c = self.cofactors();
        a[0] * c[0] + a[1] * c[4] + a[2] * c[8] + a[3] * c[12]
    }

    pub fn transpose(&self) -> Mat44 {
        let m = &self.0;
        Mat44([
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15],
        ])
    }

    // Transposed cofactor matrix (adjugate).
    fn cofactors(&self) -> [f32; 16] {
        let a = &self.0;
        let mut o = [0.0f32; 16];

        o[0] = a[5] * a[10] * a[15] - a[5] * a[11] * a[14] - a[9] * a[6] * a[15]
            + a[9] * a[7] * a[14]
            + a[13] * a[6] * a[11]
            - a[13] * a[7] * a[10];

        o[1] = -a[1] * a[10] * a[15] + a[1] * a[11] * a[14] + a[9] * a[2] * a[15]
            - a[9] * a[3] * a[14]
            - a[13] * a[2] * a[11]
            + a[13] * a[3] * a[10];

        o[2] =
            a[1] * a[6] * a[15] - a[1] * a[7] * a[14] - a[5] * a[2] * a[15] + a[5] * a[3] * a[14] + a[13] * a[2] * a[7]
                - a[13] * a[3] * a[6];

        o[3] =
            -a[1] * a[6] * a[11] + a[1] * a[7] * a[10] + a[5] * a[2] * a[11] - a[5] * a[3] * a[10] - a[9] * a[2] * a[7]
                + a[9] * a[3] * a[6];

        o[4] = -a[4] * a[10] * a[15] + a[4] * a[11] * a[14] + a[8] * a[6] * a[15]
            - a[8] * a[7] * a[14]
            - a[12] * a[6] * a[11]
            + a[12] * a[7] * a[10];

        o[5] = a[0] * a[10] * a[15] - a[0] * a[11] * a[14] - a[8] * a[2] * a[15]
            + a[8] * a[3] * a[14]
            + a[12] * a[2] * a[11]
            - a[12] * a[3] * a[10];

        o[6] = -a[0] * a[6] * a[15] + a[0] * a[7] * a[14] + a[4] * a[2] * a[15]
            - a[4] * a[3] * a[14]
            - a[12] * a[2] * a[7]
            + a[12] * a[3] * a[6];

        o[7] =
            a[0] * a[6] * a[11] - a[0] * a[7] * a[10] - a[4] * a[2] * a[11] + a[4] * a[3] * a[10] + a[8] * a[2] * a[7]
                - a[8] * a[3] * a[6];

        o[8] = a[4] * a[9] * a[15] - a[4] * a[11] * a[13] - a[8] * a[5] * a[15]
            + a[8] * a[7] * a[13]
            + a[12] * a[5] * a[11]
            - a[12] * a[7] * a[9];

        o[9] = -a[0] * a[9] * a[15] + a[0] * a[11] * a[13] + a[8] * a[1] * a[15]
            - a[8] * a[3] * a[13]
            - a[12] * a[1] * a[11]
            + a[12] * a[3] * a[9];

        o[10] =
            a[0] * a[5] * a[15] - a[0] * a[7] * a[13] - a[4] * a[1] * a[15] + a[4] * a[3] * a[13] + a[12] * a[1] * a[7]
                - a[12] * a[3] * a[5];

        o[11] =
            -a[0] * a[5] * a[11] + a[0] * a[7] * a[9] + a[4] * a[1] * a[11] - a[4] * a[3] * a[9] - a[8] * a[1] * a[7]
                + a[8] * a[3] * a[5];

        o[12] = -a[4] * a[9] * a[14] + a[4] * a[10] * a[13] + a[8] * a[5] * a[14]
            - a[8] * a[6] * a[13]
            - a[12] * a[5] * a[10]
            + a[12] * a[6] * a[9];

        o[13] = a[0] * a[9] * a[14] - a[0] * a[10] * a[13] - a[8] * a[1] * a[14]
            + a[8] * a[2] * a[13]
            + a[12] * a[1] * a[10]
            - a[12] * a[2] * a[9];

        o[14] = -a[0] * a[5] * a[14] + a[0] * a[6] * a[13] + a[4] * a[1] * a[14]
            - a[4] * a[2] * a[13]
            - a[12] * a[1] * a[6]
            + a[12] * a[2] * a[5];

        o[15] =
            a[0] * a[5] * a[10] - a[0] * a[6] * a[9] - a[4] * a[1] * a[10] + a[4] * a[2] * a[9] + a[8] * a[1] * a[6]
                - a[8] * a[2] * a[5];

        o
    }

    /// General inverse via the adjugate. Singular input gives inf/NaN entries.
    pub fn inverse(&self) -> Mat44 {
        let a = &self.0;
        let o = self.cofactors();
        let det = a[0] * o[0] + a[1] * o[4] + a[2] * o[8] + a[3] * o[12];
        let inv_det = 1.0 / det;
        Mat44(o.map(|v| v * inv_det))
    }

    /// Inverse of a rigid transform (rotation + translation): `[R^T | -R^T t]`.
    /// Cheaper than `inverse` but wrong for anything with scale or shear.
    pub fn se3_inverse(&self) -> Mat44 {
        let t = self.col(3).xyz();
        let mut r = *self;
        r.0[12..16].copy_from_slice(&[0.0, 0.0, 0.0, 1.0]);
        let mut inv = r.transpose();
        let t = -inv.transform_vector(t);
        inv.0[12..16].copy_from_slice(&[t.x, t.y, t.z, 1.0]);
        inv
    }

    /// `M * (p, 1)`, without the perspective divide.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * p.as_point4()).xyz()
    }

    /// `M * (v, 0)`: ignores translation.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * v.as_vector4()).xyz()
    }

    pub fn approx_eq(&self, other: &Mat44) -> bool {
        approx_eq_slices(&self.0, &other.0)
    }

    pub fn as_mat33(&self) -> Mat33 {
        let m = &self.0;
        Mat33([
            m[0], m[1], m[2], //
            m[4], m[5], m[6], //
            m[8], m[9], m[10],
        ])
    }

    pub fn as_mat22(&self) -> Mat22 {
        let m = &self.0;
        Mat22([
            m[0], m[1], //
            m[4], m[5],
        ])
    }

    pub fn as_array(&self) -> &[f32; 16] {
        &self.0
    }
}

impl Default for Mat44 {
    fn default() -> Self {
        Mat44::identity()
    }
}

// Mat44 + Mat44
impl std::ops::Add for Mat44 {
    type Output = Mat44;
    fn add(self, other: Mat44) -> Mat44 {
        Mat44(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }
}

// Mat44 - Mat44
impl std::ops::Sub for Mat44 {
    type Output = Mat44;
    fn sub(self, other: Mat44) -> Mat44 {
        Mat44(std::array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

// Mat44 + f32
impl std::ops::Add<f32> for Mat44 {
    type Output = Mat44;
    fn add(self, s: f32) -> Mat44 {
        Mat44(self.0.map(|v| v + s))
    }
}

// Mat44 - f32
impl std::ops::Sub<f32> for Mat44 {
    type Output = Mat44;
    fn sub(self, s: f32) -> Mat44 {
        Mat44(self.0.map(|v| v - s))
    }
}

// Mat44 * f32
impl std::ops::Mul<f32> for Mat44 {
    type Output = Mat44;
    fn mul(self, s: f32) -> Mat44 {
        Mat44(self.0.map(|v| v * s))
    }
}

// Mat44 / f32
impl std::ops::Div<f32> for Mat44 {
    type Output = Mat44;
    fn div(self, s: f32) -> Mat44 {
        Mat44(self.0.map(|v| v / s))
    }
}

// Vec4 = Mat44 * Vec4
impl std::ops::Mul<Vec4> for Mat44 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        let m = &self.0;
        Vec4 {
            x: m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            y: m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            z: m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            w: m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        }
    }
}

fn mul_col_major(a: &[f32; 16], b: &[f32; 16]) -> Mat44 {
    let mut result = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            for k in 0..4 {
                result[col * 4 + row] += a[k * 4 + row] * b[col * 4 + k];
            }
        }
    }
    Mat44(result)
}

// Mat44 = Mat44 * Mat44
impl std::ops::Mul for Mat44 {
    type Output = Mat44;

    fn mul(self, other: Mat44) -> Mat44 {
        mul_col_major(&self.0, &other.0)
    }
}

// Mat44 = &Mat44 * &Mat44
impl std::ops::Mul<&Mat44> for &Mat44 {
    type Output = Mat44;

    fn mul(self, other: &Mat44) -> Mat44 {
        mul_col_major(&self.0, &other.0)
    }
}

impl fmt::Display for Mat44 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "{:12.7} {:12.7} {:12.7} {:12.7}",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3)
            )?;
        }
        writeln!(f)
    }
}
