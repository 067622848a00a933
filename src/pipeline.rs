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
use crate::err::LabError;
use crate::gamma::Companding;
use crate::lab::{Lab, xyz_from_lab};
use crate::matrix::Xyz;
use crate::rgb::Rgb;
use crate::working_space::{WorkingSpace, lookup};

/// Declares how RGB is encoded after the matrix projection.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ConversionOptions {
    /// Transfer applied to linear RGB, defaults to the piecewise curve
    /// with gamma 2.4.
    pub companding: Companding,
}

/// Projects unit-white XYZ into companded RGB of `space`.
///
/// `unscaled` is what [xyz_from_lab] returns: it is multiplied by the
/// space's reference white, projected through its matrix and companded
/// with the default curve. The result is not clamped.
#[inline]
pub fn rgb_from_xyz(space: WorkingSpace, unscaled: Xyz) -> Rgb<f32> {
    rgb_from_xyz_with_options(space, unscaled, &ConversionOptions::default())
}

#[inline]
pub fn rgb_from_xyz_with_options(
    space: WorkingSpace,
    unscaled: Xyz,
    options: &ConversionOptions,
) -> Rgb<f32> {
    let descriptor = space.descriptor();
    let xyz = unscaled * descriptor.white();
    let linear = xyz.to_linear_rgb(descriptor.xyz_to_rgb_matrix());
    options.companding.compand_rgb(linear)
}

/// Converts L\*a\*b\* into companded RGB of `space`.
#[inline]
pub fn lab_to_rgb(space: WorkingSpace, l: f32, a: f32, b: f32) -> Rgb<f32> {
    rgb_from_xyz(space, xyz_from_lab(l, a, b))
}

/// Same as [lab_to_rgb] with the working space given by name.
pub fn lab_to_rgb_named(name: &str, l: f32, a: f32, b: f32) -> Result<Rgb<f32>, LabError> {
    let space = lookup(name)?;
    Ok(lab_to_rgb(space, l, a, b))
}

/// Same as [lab_to_rgb] with a non-default companding curve.
#[inline]
pub fn lab_to_rgb_with_options(
    space: WorkingSpace,
    l: f32,
    a: f32,
    b: f32,
    options: &ConversionOptions,
) -> Rgb<f32> {
    rgb_from_xyz_with_options(space, xyz_from_lab(l, a, b), options)
}

/// Display conversion: sRGB with its D65 white.
#[inline]
pub fn lab_to_srgb(l: f32, a: f32, b: f32) -> Rgb<f32> {
    lab_to_rgb(WorkingSpace::Srgb, l, a, b)
}

/// Converts a polar hue/saturation/value triple, see [Lab::from_hsv].
#[inline]
pub fn lab_hsv_to_rgb(space: WorkingSpace, hue: f32, saturation: f32, value: f32) -> Rgb<f32> {
    rgb_from_xyz(space, Lab::from_hsv(hue, saturation, value).to_unscaled_xyz())
}

/// Inverse of [lab_to_rgb].
///
/// Returns `None` only if the working space matrix is singular, which
/// none of the registered spaces is.
#[inline]
pub fn rgb_to_lab(space: WorkingSpace, rgb: Rgb<f32>) -> Option<Lab> {
    rgb_to_lab_with_options(space, rgb, &ConversionOptions::default())
}

pub fn rgb_to_lab_with_options(
    space: WorkingSpace,
    rgb: Rgb<f32>,
    options: &ConversionOptions,
) -> Option<Lab> {
    let rgb_to_xyz = space.rgb_to_xyz_matrix()?;
    let linear = options.companding.linearize_rgb(rgb);
    let xyz = Xyz::from_linear_rgb(linear, rgb_to_xyz);
    Some(Lab::from_xyz(xyz, space.white()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    fn assert_rgb_near(actual: Rgb<f32>, expected: Rgb<f32>, tolerance: f32) {
        assert!(
            actual.max_channel_distance(expected) < tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn black_for_every_space() {
        for space in WorkingSpace::ALL {
            assert_rgb_near(lab_to_rgb(space, 0., 0., 0.), Rgb::<f32>::black(), 1e-4);
        }
    }

    #[test]
    fn white_for_every_space() {
        for space in WorkingSpace::ALL {
            assert_rgb_near(lab_to_rgb(space, 100., 0., 0.), Rgb::<f32>::white(), 1e-3);
        }
    }

    #[test]
    fn lightness_is_monotonic() {
        for space in WorkingSpace::ALL {
            let mut previous = lab_to_rgb(space, 0., 0., 0.);
            for i in 1..=200 {
                let current = lab_to_rgb(space, i as f32 * 0.5, 0., 0.);
                assert!(current.r >= previous.r, "{space} r at L={}", i as f32 * 0.5);
                assert!(current.g >= previous.g, "{space} g at L={}", i as f32 * 0.5);
                assert!(current.b >= previous.b, "{space} b at L={}", i as f32 * 0.5);
                previous = current;
            }
        }
    }

    #[test]
    fn srgb_primaries() {
        let red = lab_to_rgb(WorkingSpace::Srgb, 53.24, 80.09, 67.20);
        assert_rgb_near(red, Rgb::new(1., 0., 0.), 0.02);
        let green = lab_to_rgb(WorkingSpace::Srgb, 87.73, -86.18, 83.18);
        assert_rgb_near(green, Rgb::new(0., 1., 0.), 0.02);
        let blue = lab_to_rgb(WorkingSpace::Srgb, 32.30, 79.19, -107.86);
        assert_rgb_near(blue, Rgb::new(0., 0., 1.), 0.02);
    }

    #[test]
    fn display_conversion_is_srgb() {
        let lab = Lab::new(41.2, -12.5, 33.);
        assert_eq!(
            lab_to_srgb(lab.l, lab.a, lab.b),
            lab_to_rgb(WorkingSpace::Srgb, lab.l, lab.a, lab.b)
        );
    }

    #[test]
    fn named_lookup() {
        let by_name = lab_to_rgb_named("Adobe RGB", 60., 20., -30.).unwrap();
        let by_tag = lab_to_rgb(WorkingSpace::AdobeRgb, 60., 20., -30.);
        assert_eq!(by_name, by_tag);
        assert_eq!(
            lab_to_rgb_named("nonexistent", 50., 0., 0.),
            Err(LabError::UnknownSpace("nonexistent".to_string()))
        );
    }

    #[test]
    fn rgb_from_xyz_applies_white_point() {
        // Unit white goes to the reference white of every space.
        for space in WorkingSpace::ALL {
            let rgb = rgb_from_xyz(space, Xyz::new(1., 1., 1.));
            assert_rgb_near(rgb, Rgb::<f32>::white(), 1e-3);
        }
    }

    #[test]
    fn out_of_gamut_is_not_clamped() {
        let rgb = lab_to_rgb(WorkingSpace::Srgb, 50., 120., -120.);
        assert!(!rgb.is_in_gamut());
        let rgb = lab_to_rgb(WorkingSpace::Srgb, 150., 0., 0.);
        assert!(rgb.r > 1. && rgb.g > 1. && rgb.b > 1.);
    }

    #[test]
    fn nan_propagates() {
        let rgb = lab_to_rgb(WorkingSpace::EciRgb, f32::NAN, 0., 0.);
        assert!(rgb.r.is_nan() && rgb.g.is_nan() && rgb.b.is_nan());
    }

    #[test]
    fn power_law_option() {
        let options = ConversionOptions {
            companding: Companding::Power(2.2),
        };
        let rgb = lab_to_rgb_with_options(WorkingSpace::AdobeRgb, 100., 0., 0., &options);
        assert_rgb_near(rgb, Rgb::<f32>::white(), 1e-3);
        let lab = Lab::new(45., 10., 20.);
        let rgb = lab_to_rgb_with_options(WorkingSpace::AdobeRgb, lab.l, lab.a, lab.b, &options);
        let back = rgb_to_lab_with_options(WorkingSpace::AdobeRgb, rgb, &options).unwrap();
        assert!(back.euclidean_distance(lab) < 1e-2);
    }

    #[test]
    fn default_options_match_plain_conversion() {
        let options = ConversionOptions::default();
        for space in WorkingSpace::ALL {
            assert_eq!(
                lab_to_rgb_with_options(space, 62., -18., 27., &options),
                lab_to_rgb(space, 62., -18., 27.)
            );
        }
    }

    #[test]
    fn hsv_zero_saturation_is_gray() {
        let rgb = lab_hsv_to_rgb(WorkingSpace::Srgb, 0.3, 0., 0.5);
        let gray = lab_to_rgb(WorkingSpace::Srgb, 50., 0., 0.);
        assert_rgb_near(rgb, gray, 1e-6);
        assert_abs_diff_eq!(rgb.r, rgb.g, epsilon = 1e-4);
        assert_abs_diff_eq!(rgb.g, rgb.b, epsilon = 1e-4);
    }

    #[test]
    fn roundtrip_in_gamut_samples() {
        let mut rng = rand::rng();
        for space in WorkingSpace::ALL {
            for _ in 0..500 {
                let rgb = Rgb::new(
                    rng.random_range(0f32..1f32),
                    rng.random_range(0f32..1f32),
                    rng.random_range(0f32..1f32),
                );
                let lab = rgb_to_lab(space, rgb).unwrap();
                let back = lab_to_rgb(space, lab.l, lab.a, lab.b);
                assert_rgb_near(back, rgb, 1e-3);
            }
        }
    }
}
