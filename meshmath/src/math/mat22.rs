use crate::math::*;
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// 2x2 matrix, column-major: element `(row, col)` lives at `[col * 2 + row]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat22(pub [f32; 4]);

impl Mat22 {
    pub fn identity() -> Mat22 {
        Mat22::diag(1.0)
    }

    pub fn zeros() -> Mat22 {
        Mat22([0.0; 4])
    }

    pub fn diag(x: f32) -> Mat22 {
        Mat22([
            x, 0.0, //
            0.0, x, //
        ])
    }

    pub fn from_cols(c0: Vec2, c1: Vec2) -> Mat22 {
        Mat22([
            c0.x, c0.y, //
            c1.x, c1.y, //
        ])
    }

    pub fn scale_uniform(s: f32) -> Mat22 {
        Mat22::diag(s)
    }

    pub fn scale_non_uniform(s: Vec2) -> Mat22 {
        Mat22([
            s.x, 0.0, //
            0.0, s.y, //
        ])
    }

    pub fn col(&self, i: usize) -> Vec2 {
        let m = &self.0;
        Vec2::new(m[i * 2], m[i * 2 + 1])
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 2 && col < 2, "index out of bounds: ({}, {})", row, col);
        self.0[col * 2 + row]
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0] * m[3] - m[2] * m[1]
    }

    pub fn trace(&self) -> f32 {
        self.0[0] + self.0[3]
    }

    pub fn frobenius_norm(&self) -> f32 {
        self.0.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    pub fn transpose(&self) -> Mat22 {
        let m = &self.0;
        Mat22([
            m[0], m[2], //
            m[1], m[3], //
        ])
    }

    /// Singular input gives inf/NaN entries, there is no fallback.
    pub fn inverse(&self) -> Mat22 {
        let m = &self.0;
        let inv_det = 1.0 / self.determinant();
        Mat22([
            m[3] * inv_det,
            -m[1] * inv_det, //
            -m[2] * inv_det,
            m[0] * inv_det,
        ])
    }

    pub fn approx_eq(&self, other: &Mat22) -> bool {
        approx_eq_slices(&self.0, &other.0)
    }

    /// Embeds into the upper-left corner of an identity 3x3.
    pub fn to_mat33(&self) -> Mat33 {
        let m = &self.0;
        Mat33([
            m[0], m[1], 0.0, //
            m[2], m[3], 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    pub fn to_mat44(&self) -> Mat44 {
        self.to_mat33().to_mat44()
    }

    pub fn as_array(&self) -> &[f32; 4] {
        &self.0
    }
}

impl Default for Mat22 {
    fn default() -> Self {
        Mat22::identity()
    }
}

// Mat22 + Mat22
impl std::ops::Add for Mat22 {
    type Output = Mat22;
    fn add(self, other: Mat22) -> Mat22 {
        Mat22(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }
}

// Mat22 - Mat22
impl std::ops::Sub for Mat22 {
    type Output = Mat22;
    fn sub(self, other: Mat22) -> Mat22 {
        Mat22(std::array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

// Mat22 + f32
impl std::ops::Add<f32> for Mat22 {
    type Output = Mat22;
    fn add(self, s: f32) -> Mat22 {
        Mat22(self.0.map(|v| v + s))
    }
}

// Mat22 - f32
impl std::ops::Sub<f32> for Mat22 {
    type Output = Mat22;
    fn sub(self, s: f32) -> Mat22 {
        Mat22(self.0.map(|v| v - s))
    }
}

// Mat22 * f32
impl std::ops::Mul<f32> for Mat22 {
    type Output = Mat22;
    fn mul(self, s: f32) -> Mat22 {
        Mat22(self.0.map(|v| v * s))
    }
}

// Mat22 / f32
impl std::ops::Div<f32> for Mat22 {
    type Output = Mat22;
    fn div(self, s: f32) -> Mat22 {
        Mat22(self.0.map(|v| v / s))
    }
}

// Vec2 = Mat22 * Vec2
impl std::ops::Mul<Vec2> for Mat22 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 {
        let m = &self.0;
        Vec2 { x: m[0] * v.x + m[2] * v.y, y: m[1] * v.x + m[3] * v.y }
    }
}

// Mat22 = Mat22 * Mat22
impl std::ops::Mul for Mat22 {
    type Output = Mat22;
    fn mul(self, other: Mat22) -> Mat22 {
        let mut result = [0.0f32; 4];
        for col in 0..2 {
            for row in 0..2 {
                for k in 0..2 {
                    result[col * 2 + row] += self.0[k * 2 + row] * other.0[col * 2 + k];
                }
            }
        }
        Mat22(result)
    }
}

impl fmt::Display for Mat22 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        writeln!(f, "{:12.7} {:12.7}", m[0], m[2])?;
        writeln!(f, "{:12.7} {:12.7}", m[1], m[3])?;
        writeln!(f)
    }
}
