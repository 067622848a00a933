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
use crate::matrix::{Vector3f, Xyz};
use pxfm::{f_cbrtf, f_cosf, f_sinf};

/// Inverse lightness switches from cubic to linear at `t = 6/29`.
pub(crate) const LAB_DELTA: f32 = 6f32 / 29f32;
/// `LAB_DELTA^3`, the same breakpoint on the linear side.
pub(crate) const LAB_EPSILON: f32 = 216f32 / 24389f32;
pub(crate) const LAB_KAPPA: f32 = 24389f32 / 27f32;

/// Represents CIE L\*a\*b\* coordinates
///
/// Nothing is clamped: `l` is nominally `0..=100` but any value passes
/// through the conversions and yields a mathematically consistent result.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f32,
    /// Green (-) to red (+)
    pub a: f32,
    /// Blue (-) to yellow (+)
    pub b: f32,
}

#[inline]
/// CIE 1976 inverse lightness function
pub(crate) fn lab_inverse_f(t: f32) -> f32 {
    if t > LAB_DELTA {
        t * t * t
    } else {
        (116. * t - 16.) * (27. / 24389.)
    }
}

#[inline]
/// CIE 1976 forward lightness function
pub(crate) fn lab_forward_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        f_cbrtf(t)
    } else {
        (LAB_KAPPA * t + 16.) / 116.
    }
}

/// Converts L\*a\*b\* into XYZ relative to a unit white.
///
/// The result still has to be multiplied by a reference white to obtain
/// absolute tristimulus values.
#[inline]
pub fn xyz_from_lab(l: f32, a: f32, b: f32) -> Xyz {
    let fy = (l + 16.) / 116.;
    let f = Vector3f::new(fy + a / 500., fy, fy - b / 200.);
    Xyz::from_vector(f.map(lab_inverse_f))
}

impl Lab {
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Lab {
        Lab { l, a, b }
    }

    /// Maps a normalized hue/saturation/value triple onto the a/b plane.
    ///
    /// `hue` is in turns, `saturation` scales chroma up to 100 and `value`
    /// becomes lightness in `0..=100`. Hue 0 points along +b.
    #[inline]
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Lab {
        let angle = hue * std::f32::consts::TAU;
        let chroma = saturation * 100.;
        Lab::new(value * 100., chroma * f_sinf(angle), chroma * f_cosf(angle))
    }

    /// XYZ relative to a unit white, see [xyz_from_lab].
    #[inline]
    pub fn to_unscaled_xyz(&self) -> Xyz {
        xyz_from_lab(self.l, self.a, self.b)
    }

    /// Absolute XYZ for the given reference white.
    #[inline]
    pub fn to_xyz(&self, white: Xyz) -> Xyz {
        self.to_unscaled_xyz() * white
    }

    /// Converts absolute XYZ into L\*a\*b\* relative to `white`.
    #[inline]
    pub fn from_xyz(xyz: Xyz, white: Xyz) -> Lab {
        Lab::from_unscaled_xyz(xyz / white)
    }

    /// Converts XYZ already divided by the reference white.
    #[inline]
    pub fn from_unscaled_xyz(xyz: Xyz) -> Lab {
        let f = xyz.to_vector().map(lab_forward_f);
        let [fx, fy, fz] = f.v;
        Lab::new(116. * fy - 16., 500. * (fx - fy), 200. * (fy - fz))
    }

    /// CIE76 color difference
    #[inline]
    pub fn euclidean_distance(&self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}
