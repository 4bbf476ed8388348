//! colormatrix derives the constant matrices a CSS color library embeds:
//! RGB color spaces to and from CIE-XYZ, XYZ and linear sRGB to and from the
//! LMS space behind Oklab, and chromatic adaptation between white points.

#![deny(missing_docs)]

mod adapt;
mod color;
mod error;
pub mod format;
pub mod math;
mod oklab;
mod rgb;
mod xyz;

#[cfg(test)]
mod test;

pub use adapt::{derive_bradford, BRADFORD};
pub use color::{Component, Components};
pub use error::Error;
pub use math::{MatrixPair, Transform};
pub use oklab::{
    derive_oklab, derive_oklab_d65, xyz_to_lms, OklabMatrices, LMS_CBRT_TO_OKLAB_PUBLISHED, M0,
    OKLAB_TO_LMS_CBRT, SRGB_LINEAR_TO_XYZ,
};
pub use rgb::{derive_rgb_xyz, derive_rgb_xyz_by_name, Primaries, RgbSpace};
pub use xyz::{Chromaticity, WhitePoint, D50, D65};
