use crate::math::*;
use bytemuck::{Pod, Zeroable};
use std::f32::consts::FRAC_PI_2;
use std::fmt;

/// 3x3 matrix, column-major: element `(row, col)` lives at `[col * 3 + row]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat33(pub [f32; 9]);

impl Mat33 {
    pub fn identity() -> Mat33 {
        Mat33::diag(1.0)
    }

    pub fn zeros() -> Mat33 {
        Mat33([0.0; 9])
    }

    pub fn diag(x: f32) -> Mat33 {
        Mat33([
            x, 0.0, 0.0, //
            0.0, x, 0.0, //
            0.0, 0.0, x,
        ])
    }

    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Mat33 {
        Mat33([
            c0.x, c0.y, c0.z, //
            c1.x, c1.y, c1.z, //
            c2.x, c2.y, c2.z,
        ])
    }

    pub fn scale_uniform(s: f32) -> Mat33 {
        Mat33::diag(s)
    }

    pub fn scale_non_uniform(s: Vec3) -> Mat33 {
        Mat33([
            s.x, 0.0, 0.0, //
            0.0, s.y, 0.0, //
            0.0, 0.0, s.z,
        ])
    }

    pub fn col(&self, i: usize) -> Vec3 {
        let m = &self.0;
        Vec3::new(m[i * 3], m[i * 3 + 1], m[i * 3 + 2])
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 3 && col < 3, "index out of bounds: ({}, {})", row, col);
        self.0[col * 3 + row]
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[3] * (m[1] * m[8] - m[2] * m[7]) + m[6] * (m[1] * m[5] - m[2] * m[4])
    }

    pub fn trace(&self) -> f32 {
        self.0[0] + self.0[4] + self.0[8]
    }

    pub fn frobenius_norm(&self) -> f32 {
        self.0.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Adjugate divided by the determinant. A singular matrix yields inf/NaN entries.
    pub fn inverse(&self) -> Self {
        let m = &self.0;
        let a = m[0];
        let b = m[1];
        let c = m[2];
        let d = m[3];
        let e = m[4];
        let f = m[5];
        let g = m[6];
        let h = m[7];
        let i = m[8];

        // The adjugate commutes with transposition, so the same expressions
        // work for column-major storage.
        let det = a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g);
        let inv_det = 1.0 / det;

        let inv = [
            (e * i - f * h) * inv_det,
            -(b * i - c * h) * inv_det,
            (b * f - c * e) * inv_det,
            -(d * i - f * g) * inv_det,
            (a * i - c * g) * inv_det,
            -(a * f - c * d) * inv_det,
            (d * h - e * g) * inv_det,
            -(a * h - b * g) * inv_det,
            (a * e - b * d) * inv_det,
        ];

        Self(inv)
    }

    pub fn transpose(&self) -> Mat33 {
        let m = &self.0;
        Mat33([
            m[0], m[3], m[6], //
            m[1], m[4], m[7], //
            m[2], m[5], m[8], //
        ])
    }

    pub fn approx_eq(&self, other: &Mat33) -> bool {
        approx_eq_slices(&self.0, &other.0)
    }

    pub fn as_mat22(&self) -> Mat22 {
        let m = &self.0;
        Mat22([
            m[0], m[1], //
            m[3], m[4],
        ])
    }

    /// Embeds into the upper-left corner of an identity 4x4.
    pub fn to_mat44(&self) -> Mat44 {
        let m = &self.0;
        Mat44([
            m[0], m[1], m[2], 0.0, //
            m[3], m[4], m[5], 0.0, //
            m[6], m[7], m[8], 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation `Rx(x) * Ry(y) * Rz(z)` from the angles in `euler` (radians).
    pub fn from_euler(euler: Vec3) -> Mat33 {
        let (sx, cx) = euler.x.sin_cos();
        let (sy, cy) = euler.y.sin_cos();
        let (sz, cz) = euler.z.sin_cos();
        Mat33([
            cy * cz,
            cx * sz + sx * sy * cz,
            sx * sz - cx * sy * cz, //
            -cy * sz,
            cx * cz - sx * sy * sz,
            sx * cz + cx * sy * sz, //
            sy,
            -sx * cy,
            cx * cy,
        ])
    }

    /// Inverse of [`Mat33::from_euler`]. At gimbal lock (`|r02| >= 1`) the
    /// z angle is pinned to zero and x absorbs the remaining rotation, so the
    /// matrix still round-trips but the angles may not.
    pub fn to_euler(&self) -> Vec3 {
        let r02 = self.at(0, 2);
        if r02 < 1.0 {
            if r02 > -1.0 {
                Vec3 {
                    x: (-self.at(1, 2)).atan2(self.at(2, 2)),
                    y: r02.asin(),
                    z: (-self.at(0, 1)).atan2(self.at(0, 0)),
                }
            } else {
                Vec3 { x: -self.at(1, 0).atan2(self.at(1, 1)), y: -FRAC_PI_2, z: 0.0 }
            }
        } else {
            Vec3 { x: self.at(1, 0).atan2(self.at(1, 1)), y: FRAC_PI_2, z: 0.0 }
        }
    }

    pub fn as_array(&self) -> &[f32; 9] {
        &self.0
    }
}

impl Default for Mat33 {
    fn default() -> Self {
        Mat33::identity()
    }
}

// Mat33 + Mat33
impl std::ops::Add for Mat33 {
    type Output = Mat33;
    fn add(self, other: Mat33) -> Mat33 {
        Mat33(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }
}

// Mat33 - Mat33
impl std::ops::Sub for Mat33 {
    type Output = Mat33;
    fn sub(self, other: Mat33) -> Mat33 {
        Mat33(std::array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

// Mat33 + f32
impl std::ops::Add<f32> for Mat33 {
    type Output = Mat33;
    fn add(self, s: f32) -> Mat33 {
        Mat33(self.0.map(|v| v + s))
    }
}

// Mat33 - f32
impl std::ops::Sub<f32> for Mat33 {
    type Output = Mat33;
    fn sub(self, s: f32) -> Mat33 {
        Mat33(self.0.map(|v| v - s))
    }
}

// Mat33 * f32
impl std::ops::Mul<f32> for Mat33 {
    type Output = Mat33;
    fn mul(self, s: f32) -> Mat33 {
        Mat33(self.0.map(|v| v * s))
    }
}

// Mat33 / f32
impl std::ops::Div<f32> for Mat33 {
    type Output = Mat33;
    fn div(self, s: f32) -> Mat33 {
        Mat33(self.0.map(|v| v / s))
    }
}

// Vec3 = Mat33 * Vec3
impl std::ops::Mul<Vec3> for Mat33 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.0;

        Vec3 {
            x: m[0] * v.x + m[3] * v.y + m[6] * v.z,
            y: m[1] * v.x + m[4] * v.y + m[7] * v.z,
            z: m[2] * v.x + m[5] * v.y + m[8] * v.z,
        }
    }
}

// Mat33 = Mat33 * Mat33
impl std::ops::Mul for Mat33 {
    type Output = Mat33;

    fn mul(self, other: Mat33) -> Mat33 {
        let mut result = [0.0; 9];

        for col in 0..3 {
            for row in 0..3 {
                result[col * 3 + row] = self.0[row] * other.0[col * 3]
                    + self.0[3 + row] * other.0[col * 3 + 1]
                    + self.0[6 + row] * other.0[col * 3 + 2];
            }
        }

        Mat33(result)
    }
}

impl fmt::Display for Mat33 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(f, "{:12.7} {:12.7} {:12.7}", self.at(row, 0), self.at(row, 1), self.at(row, 2))?;
        }
        writeln!(f)
    }
}
