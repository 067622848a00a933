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
use crate::matrix::Vector3;
use num_traits::AsPrimitive;

/// Represents any RGB values, linear or companded
///
/// Values are never clamped, components outside 0..1 are out of gamut
/// for the working space they were produced for.
#[repr(C)]
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Default)]
pub struct Rgb<T> {
    /// Red component
    pub r: T,
    /// Green component
    pub g: T,
    /// Blue component
    pub b: T,
}

impl<T> Rgb<T> {
    pub const fn new(r: T, g: T, b: T) -> Rgb<T> {
        Rgb { r, g, b }
    }
}

impl<T> Rgb<T>
where
    T: Copy,
{
    #[inline]
    pub const fn to_vector(self) -> Vector3<T> {
        Vector3 {
            v: [self.r, self.g, self.b],
        }
    }

    #[inline]
    pub const fn from_vector(v: Vector3<T>) -> Rgb<T> {
        Rgb {
            r: v.v[0],
            g: v.v[1],
            b: v.v[2],
        }
    }

    /// Applies `f` to every channel.
    #[inline]
    pub fn map<Z, F: Fn(T) -> Z>(self, f: F) -> Rgb<Z> {
        Rgb::new(f(self.r), f(self.g), f(self.b))
    }
}

impl Rgb<f32> {
    #[inline]
    pub const fn white() -> Rgb<f32> {
        Rgb::new(1., 1., 1.)
    }

    #[inline]
    pub const fn black() -> Rgb<f32> {
        Rgb::new(0., 0., 0.)
    }

    /// True when every channel lies in `0..=1`.
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        (0. ..=1.).contains(&self.r)
            && (0. ..=1.).contains(&self.g)
            && (0. ..=1.).contains(&self.b)
    }
}

impl<T> Rgb<T>
where
    T: Copy + AsPrimitive<f32>,
{
    /// Largest absolute per-channel difference.
    pub fn max_channel_distance(&self, other: Rgb<T>) -> f32 {
        let dr = (self.r.as_() - other.r.as_()).abs();
        let dg = (self.g.as_() - other.g.as_()).abs();
        let db = (self.b.as_() - other.b.as_()).abs();
        dr.max(dg).max(db)
    }
}
