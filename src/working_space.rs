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
use crate::matrix::{Matrix3f, Xyz};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Reference white and XYZ to RGB matrix of one RGB working space
///
/// Only the static registry builds these, so a white point can never be
/// paired with another space's matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingSpaceDescriptor {
    name: &'static str,
    aliases: &'static [&'static str],
    white: Xyz,
    xyz_to_rgb: Matrix3f,
}

impl WorkingSpaceDescriptor {
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn white(&self) -> Xyz {
        self.white
    }

    #[inline]
    pub const fn xyz_to_rgb_matrix(&self) -> Matrix3f {
        self.xyz_to_rgb
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Named RGB working spaces
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum WorkingSpace {
    #[default]
    Srgb = 0,
    AdobeRgb = 1,
    AppleRgb = 2,
    CieRgb = 3,
    EciRgb = 4,
    ColorMatchRgb = 5,
    BruceRgb = 6,
}

static WORKING_SPACES: [WorkingSpaceDescriptor; 7] = [
    WorkingSpaceDescriptor {
        name: "sRGB",
        aliases: &[],
        white: Xyz::D65,
        xyz_to_rgb: Matrix3f {
            v: [
                [3.2404542, -1.5371385, -0.4985314],
                [-0.9692660, 1.8760108, 0.0415560],
                [0.0556434, -0.2040259, 1.0572252],
            ],
        },
    },
    WorkingSpaceDescriptor {
        name: "Adobe RGB",
        aliases: &["Adobe", "AdobeRGB", "Adobe RGB (1998)"],
        white: Xyz::D65,
        xyz_to_rgb: Matrix3f {
            v: [
                [2.0413690, -0.5649464, -0.3446944],
                [-0.9692660, 1.8760108, 0.0415560],
                [0.0134474, -0.1183897, 1.0154096],
            ],
        },
    },
    WorkingSpaceDescriptor {
        name: "Apple RGB",
        aliases: &["Apple", "AppleRGB"],
        white: Xyz::D65,
        xyz_to_rgb: Matrix3f {
            v: [
                [2.9515373, -1.2894116, -0.4738445],
                [-1.0851093, 1.9908566, 0.0372026],
                [0.0854934, -0.2694964, 1.0912975],
            ],
        },
    },
    WorkingSpaceDescriptor {
        name: "CIE RGB",
        aliases: &["CIE", "CIERGB"],
        white: Xyz::E,
        xyz_to_rgb: Matrix3f {
            v: [
                [2.3706743, -0.9000405, -0.4706338],
                [-0.5138850, 1.4253036, 0.0885814],
                [0.0052982, -0.0146949, 1.0093968],
            ],
        },
    },
    WorkingSpaceDescriptor {
        name: "ECI RGB",
        aliases: &["ECI", "ECIRGB"],
        white: Xyz::D50,
        xyz_to_rgb: Matrix3f {
            v: [
                [1.7827618, -0.4969847, -0.2690101],
                [-0.9593623, 1.9477962, -0.0275807],
                [0.0859317, -0.1744674, 1.3228273],
            ],
        },
    },
    WorkingSpaceDescriptor {
        name: "ColorMatch RGB",
        aliases: &["ColorMatch", "ColorMatchRGB", "Match"],
        white: Xyz::D50,
        xyz_to_rgb: Matrix3f {
            v: [
                [2.6422874, -1.2234270, -0.3930143],
                [-1.1119763, 2.0590183, 0.0159614],
                [0.0821699, -0.2807254, 1.4559877],
            ],
        },
    },
    WorkingSpaceDescriptor {
        name: "Bruce RGB",
        aliases: &["Bruce", "BruceRGB"],
        white: Xyz::D65,
        xyz_to_rgb: Matrix3f {
            v: [
                [2.7454669, -1.1358136, -0.4350269],
                [-0.9692660, 1.8760108, 0.0415560],
                [0.0112723, -0.1139754, 1.0132541],
            ],
        },
    },
];

impl WorkingSpace {
    pub const ALL: [WorkingSpace; 7] = [
        WorkingSpace::Srgb,
        WorkingSpace::AdobeRgb,
        WorkingSpace::AppleRgb,
        WorkingSpace::CieRgb,
        WorkingSpace::EciRgb,
        WorkingSpace::ColorMatchRgb,
        WorkingSpace::BruceRgb,
    ];

    #[inline]
    pub fn descriptor(self) -> &'static WorkingSpaceDescriptor {
        &WORKING_SPACES[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name()
    }

    /// Reference white, Y normalized to 1
    #[inline]
    pub fn white(self) -> Xyz {
        self.descriptor().white()
    }

    #[inline]
    pub fn xyz_to_rgb_matrix(self) -> Matrix3f {
        self.descriptor().xyz_to_rgb_matrix()
    }

    /// Linear RGB to XYZ, the inverse of the registered matrix.
    #[inline]
    pub fn rgb_to_xyz_matrix(self) -> Option<Matrix3f> {
        self.xyz_to_rgb_matrix().inverse()
    }
}

/// Resolves a working space by name, ignoring ASCII case.
///
/// Accepts the canonical name (`"sRGB"`, `"Adobe RGB"`, ...) and short
/// aliases such as `"Adobe"` or `"Match"`.
pub fn lookup(name: &str) -> Result<WorkingSpace, LabError> {
    let name = name.trim();
    match WorkingSpace::ALL
        .iter()
        .copied()
        .find(|space| space.descriptor().matches(name))
    {
        Some(space) => {
            tracing::trace!(name, space = space.name(), "resolved working space");
            Ok(space)
        }
        None => {
            tracing::debug!(name, "unknown working space requested");
            Err(LabError::UnknownSpace(name.to_string()))
        }
    }
}

impl FromStr for WorkingSpace {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}

impl TryFrom<&str> for WorkingSpace {
    type Error = LabError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        lookup(value)
    }
}

impl Display for WorkingSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
