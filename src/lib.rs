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
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
//! CIE L\*a\*b\* to RGB conversion over standard RGB working spaces.
//!
//! The pipeline is `Lab -> XYZ -> linear RGB -> companded RGB`. Every
//! working space carries its own reference white and XYZ to RGB matrix,
//! all of them share the piecewise companding curve with gamma 2.4.
//!
//! ```
//! use labws::{WorkingSpace, lab_to_rgb, lookup};
//!
//! let red = lab_to_rgb(WorkingSpace::Srgb, 53.24, 80.09, 67.20);
//! assert!((red.r - 1.).abs() < 0.02);
//!
//! let space = lookup("ColorMatch RGB").unwrap();
//! let gray = lab_to_rgb(space, 50., 0., 0.);
//! assert!((gray.r - gray.b).abs() < 1e-4);
//! ```
mod err;
mod gamma;
mod lab;
mod matrix;
mod mlaf;
mod pipeline;
mod rgb;
mod working_space;

pub use err::LabError;
pub use gamma::{Companding, DEFAULT_GAMMA};
pub use lab::{Lab, xyz_from_lab};
pub use matrix::{Matrix3f, Vector3, Vector3f, Xyz};
pub use pipeline::{
    ConversionOptions, lab_hsv_to_rgb, lab_to_rgb, lab_to_rgb_named, lab_to_rgb_with_options,
    lab_to_srgb, rgb_from_xyz, rgb_from_xyz_with_options, rgb_to_lab, rgb_to_lab_with_options,
};
pub use rgb::Rgb;
pub use working_space::{WorkingSpace, WorkingSpaceDescriptor, lookup};
