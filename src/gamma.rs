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
use crate::rgb::Rgb;
use pxfm::f_powf;

/// Linear segment ends here, on the linear-light side.
pub(crate) const PIECEWISE_BREAKPOINT: f32 = 0.00304;
pub(crate) const PIECEWISE_SLOPE: f32 = 12.92;
pub(crate) const PIECEWISE_SCALE: f32 = 1.055;
pub(crate) const PIECEWISE_OFFSET: f32 = 0.055;

/// Exponent used by every registered working space.
pub const DEFAULT_GAMMA: f32 = 2.4;

#[inline]
/// sRGB-style companding with a linear toe
fn piecewise_from_linear(linear: f32, gamma: f32) -> f32 {
    if linear <= PIECEWISE_BREAKPOINT {
        PIECEWISE_SLOPE * linear
    } else {
        PIECEWISE_SCALE * f_powf(linear, 1. / gamma) - PIECEWISE_OFFSET
    }
}

#[inline]
/// Inverse of [piecewise_from_linear]
fn piecewise_to_linear(encoded: f32, gamma: f32) -> f32 {
    if encoded <= PIECEWISE_SLOPE * PIECEWISE_BREAKPOINT {
        encoded / PIECEWISE_SLOPE
    } else {
        f_powf((encoded + PIECEWISE_OFFSET) / PIECEWISE_SCALE, gamma)
    }
}

#[inline]
/// Pure power law, mirrored around zero
fn power_from_linear(linear: f32, gamma: f32) -> f32 {
    f_powf(linear.abs(), 1. / gamma).copysign(linear)
}

#[inline]
fn power_to_linear(encoded: f32, gamma: f32) -> f32 {
    f_powf(encoded.abs(), gamma).copysign(encoded)
}

/// Non-linear transfer between linear light and encoded RGB.
///
/// The wrapped value is the gamma; encoding raises to `1 / gamma`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Companding {
    /// `12.92 * t` up to `t = 0.00304`, `1.055 * t^(1/gamma) - 0.055` above.
    Piecewise(f32),
    /// `t^(1/gamma)`, sign preserved for negative input.
    Power(f32),
}

impl Default for Companding {
    fn default() -> Self {
        Companding::Piecewise(DEFAULT_GAMMA)
    }
}

impl Companding {
    /// Encodes a single linear value.
    #[inline]
    pub fn compand(self, linear: f32) -> f32 {
        match self {
            Companding::Piecewise(gamma) => piecewise_from_linear(linear, gamma),
            Companding::Power(gamma) => power_from_linear(linear, gamma),
        }
    }

    /// Decodes a single encoded value back to linear light.
    #[inline]
    pub fn linearize(self, encoded: f32) -> f32 {
        match self {
            Companding::Piecewise(gamma) => piecewise_to_linear(encoded, gamma),
            Companding::Power(gamma) => power_to_linear(encoded, gamma),
        }
    }

    #[inline]
    pub fn compand_rgb(self, linear: Rgb<f32>) -> Rgb<f32> {
        linear.map(|t| self.compand(t))
    }

    #[inline]
    pub fn linearize_rgb(self, encoded: Rgb<f32>) -> Rgb<f32> {
        encoded.map(|t| self.linearize(t))
    }
}
