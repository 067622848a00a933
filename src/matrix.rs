/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::mlaf::mlaf;
use crate::rgb::Rgb;
use num_traits::{AsPrimitive, MulAdd};
use std::ops::{Add, Div, Mul};

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3<T> {
    pub v: [T; 3],
}

pub type Vector3f = Vector3<f32>;

impl<T> PartialEq<Self> for Vector3<T>
where
    T: AsPrimitive<f32>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f32 = 0.0001f32;
        let dx = (self.v[0].as_() - other.v[0].as_()).abs();
        let dy = (self.v[1].as_() - other.v[1].as_()).abs();
        let dz = (self.v[2].as_() - other.v[2].as_()).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl<T: Copy> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { v: [x, y, z] }
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<Z, F: Fn(T) -> Z>(self, f: F) -> Vector3<Z> {
        Vector3 {
            v: [f(self.v[0]), f(self.v[1]), f(self.v[2])],
        }
    }
}

impl<T> Vector3<T>
where
    T: Copy + Mul<T, Output = T> + Add<T, Output = T> + MulAdd<T, Output = T>,
{
    /// Dot product
    #[inline]
    pub fn dot(&self, other: Vector3<T>) -> T {
        mlaf(
            mlaf(self.v[0] * other.v[0], self.v[1], other.v[1]),
            self.v[2],
            other.v[2],
        )
    }
}

/// Matrix math helper
///
/// Stored row-major: `v[row][column]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3f {
    pub v: [[f32; 3]; 3],
}

impl Matrix3f {
    pub const IDENTITY: Matrix3f = Matrix3f {
        v: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Compares two matrices element by element with a loose tolerance.
    #[inline]
    pub const fn test_equality(&self, other: Matrix3f) -> bool {
        const TOLERANCE: f32 = 0.001f32;
        let mut i = 0usize;
        while i < 3 {
            let mut j = 0usize;
            while j < 3 {
                if (self.v[i][j] - other.v[i][j]).abs() > TOLERANCE {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    #[inline]
    pub const fn determinant(&self) -> Option<f32> {
        let v = self.v;
        let a0 = v[0][0] * v[1][1] * v[2][2];
        let a1 = v[0][1] * v[1][2] * v[2][0];
        let a2 = v[0][2] * v[1][0] * v[2][1];

        let s0 = v[0][2] * v[1][1] * v[2][0];
        let s1 = v[0][1] * v[1][0] * v[2][2];
        let s2 = v[0][0] * v[1][2] * v[2][1];

        let j = a0 + a1 + a2 - s0 - s1 - s2;
        if j == 0. {
            return None;
        }
        Some(j)
    }

    /// Inverse by adjugate, `None` for a singular matrix.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        let v = self.v;
        let det = 1. / self.determinant()?;
        let a = v[0][0];
        let b = v[0][1];
        let c = v[0][2];
        let d = v[1][0];
        let e = v[1][1];
        let f = v[1][2];
        let g = v[2][0];
        let h = v[2][1];
        let i = v[2][2];

        Some(Matrix3f {
            v: [
                [
                    (e * i - f * h) * det,
                    (c * h - b * i) * det,
                    (b * f - c * e) * det,
                ],
                [
                    (f * g - d * i) * det,
                    (a * i - c * g) * det,
                    (c * d - a * f) * det,
                ],
                [
                    (d * h - e * g) * det,
                    (b * g - a * h) * det,
                    (a * e - b * d) * det,
                ],
            ],
        })
    }

    /// `M · v`: each output component is the dot product of `v` with one row.
    #[inline]
    pub fn mul_vector(&self, other: Vector3f) -> Vector3f {
        let x = Vector3f { v: self.v[0] }.dot(other);
        let y = Vector3f { v: self.v[1] }.dot(other);
        let z = Vector3f { v: self.v[2] }.dot(other);
        Vector3f { v: [x, y, z] }
    }

    #[inline]
    pub fn mat_mul(&self, other: Matrix3f) -> Self {
        let mut result = Matrix3f::default();

        for i in 0..3 {
            for j in 0..3 {
                result.v[i][j] = mlaf(
                    mlaf(self.v[i][0] * other.v[0][j], self.v[i][1], other.v[1][j]),
                    self.v[i][2],
                    other.v[2][j],
                );
            }
        }

        result
    }
}

/// Holds CIE XYZ representation
#[repr(C)]
#[derive(Clone, Debug, Copy, Default)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PartialEq<Self> for Xyz {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f32 = 0.0001f32;
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl Xyz {
    /// CIE standard illuminant D65, 2° observer, normalized to Y = 1
    pub const D65: Xyz = Xyz::new(0.95047, 1., 1.08883);
    /// CIE standard illuminant D50, 2° observer, normalized to Y = 1
    pub const D50: Xyz = Xyz::new(0.96422, 1., 0.82521);
    /// Equal-energy illuminant E
    pub const E: Xyz = Xyz::new(1., 1., 1.);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3f {
        Vector3f {
            v: [self.x, self.y, self.z],
        }
    }

    #[inline]
    pub const fn from_vector(v: Vector3f) -> Self {
        Self {
            x: v.v[0],
            y: v.v[1],
            z: v.v[2],
        }
    }

    /// Projects into linear RGB with an XYZ to RGB matrix.
    #[inline]
    pub fn to_linear_rgb(self, xyz_to_rgb: Matrix3f) -> Rgb<f32> {
        Rgb::from_vector(xyz_to_rgb.mul_vector(self.to_vector()))
    }

    #[inline]
    pub fn from_linear_rgb(rgb: Rgb<f32>, rgb_to_xyz: Matrix3f) -> Self {
        Xyz::from_vector(rgb_to_xyz.mul_vector(rgb.to_vector()))
    }
}

impl Mul<Xyz> for Xyz {
    type Output = Xyz;

    #[inline]
    fn mul(self, rhs: Xyz) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Div<Xyz> for Xyz {
    type Output = Xyz;

    #[inline]
    fn div(self, rhs: Xyz) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_of_identity_is_identity() {
        let inv = Matrix3f::IDENTITY.inverse().unwrap();
        assert!(inv.test_equality(Matrix3f::IDENTITY));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix3f {
            v: [[1., 2., 3.], [2., 4., 6.], [0., 1., 0.]],
        };
        assert!(m.determinant().is_none());
        assert!(m.inverse().is_none());
    }

    #[test]
    fn inverse_roundtrips() {
        let m = Matrix3f {
            v: [
                [0.4124564, 0.3575761, 0.1804375],
                [0.2126729, 0.7151522, 0.0721750],
                [0.0193339, 0.1191920, 0.9503041],
            ],
        };
        let product = m.mat_mul(m.inverse().unwrap());
        assert!(product.test_equality(Matrix3f::IDENTITY));
    }

    #[test]
    fn mul_vector_uses_rows() {
        let m = Matrix3f {
            v: [[1., 2., 3.], [0., 1., 0.], [0., 0., 2.]],
        };
        let r = m.mul_vector(Vector3f::new(1., 1., 1.));
        assert_eq!(r, Vector3f::new(6., 1., 2.));
        let r = m.mul_vector(Vector3f::new(0., 0., 1.));
        assert_eq!(r, Vector3f::new(3., 0., 2.));
    }

    #[test]
    fn map_applies_per_component() {
        let v = Vector3f::new(1., -2., 3.).map(|x| x * x);
        assert_eq!(v, Vector3f::new(1., 4., 9.));
    }

    #[test]
    fn linear_rgb_projects_through_rows() {
        let m = Matrix3f {
            v: [
                [3.2404542, -1.5371385, -0.4985314],
                [-0.9692660, 1.8760108, 0.0415560],
                [0.0556434, -0.2040259, 1.0572252],
            ],
        };
        // D65 white lands on unit RGB through the sRGB rows.
        let rgb = Xyz::D65.to_linear_rgb(m);
        assert!((rgb.r - 1.).abs() < 1e-4, "{rgb:?}");
        assert!((rgb.g - 1.).abs() < 1e-4, "{rgb:?}");
        assert!((rgb.b - 1.).abs() < 1e-4, "{rgb:?}");
        let xyz = Xyz::new(0.3, 0.4, 0.5);
        let rgb = xyz.to_linear_rgb(m);
        let expected = 3.2404542f32 * 0.3 - 1.5371385 * 0.4 - 0.4985314 * 0.5;
        assert!((rgb.r - expected).abs() < 1e-5);
        let back = Xyz::from_linear_rgb(rgb, m.inverse().unwrap());
        assert_eq!(back, xyz);
    }
}
