//! Derive the Oklab matrices for a given white point.
//!
//! The Oklab author published M1 against a white point slightly different
//! from the one CSS uses, and later provided a seed matrix (M0 below) from
//! which M1 can be recomputed for any white point.
//! <https://github.com/w3c/csswg-drafts/issues/6642#issuecomment-945714988>
//!
//! M2 and its inverse were published as single precision values. Inverting
//! the decimal values in double precision leaves noise after the seventh
//! digit, enough to keep achromatic colors from resolving to zero chroma. The
//! inverse M2 is exact for Oklab `(1, 0, 0)` to LMS `(1, 1, 1)` in single
//! precision, so it is narrowed to the `f32` values it was authored as and
//! the forward M2 is derived from that.

use log::debug;

use crate::{
    math::{self, from_rows, MatrixPair, Transform},
    xyz::{WhitePoint, D65},
    Components, Error,
};

/// Seed matrix from which XYZ to LMS is derived for a specific white point.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const M0: Transform = from_rows([
    [0.77849780, 0.34399940, -0.12249720],
    [0.03303601, 0.93076195,  0.03620204],
    [0.05092917, 0.27933344,  0.66973739],
]);

/// Linear sRGB to XYZ-D65, as derived from the sRGB primaries.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const SRGB_LINEAR_TO_XYZ: Transform = from_rows([
    [0.41239079926595934, 0.357584339383878,   0.1804807884018343 ],
    [0.21263900587151027, 0.715168678767756,   0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496607 ],
]);

/// Oklab to LMS^(1/3) as published (inverse M2).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const OKLAB_TO_LMS_CBRT: Transform = from_rows([
    [1.0,  0.3963377774,  0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS^(1/3) to Oklab as published (M2). Not used for derivation.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const LMS_CBRT_TO_OKLAB_PUBLISHED: Transform = from_rows([
    [0.2104542553,  0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050,  0.4505937099],
    [0.0259040371,  0.7827717662, -0.8086757660],
]);

/// All matrices needed to convert to and from Oklab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OklabMatrices {
    /// XYZ to LMS (forward) and LMS to XYZ (inverse).
    pub xyz_to_lms: MatrixPair,
    /// Linear sRGB to LMS (forward) and LMS to linear sRGB (inverse).
    pub srgb_linear_to_lms: MatrixPair,
    /// LMS^(1/3) to Oklab (forward) and Oklab to LMS^(1/3) (inverse).
    pub lms_cbrt_to_oklab: MatrixPair,
}

impl OklabMatrices {
    /// Convert XYZ to Oklab with these matrices.
    pub fn xyz_to_oklab(&self, xyz: Components) -> Components {
        let lms = math::transform(&self.xyz_to_lms.forward, xyz);
        math::transform(&self.lms_cbrt_to_oklab.forward, lms.map(|v| v.cbrt()))
    }

    /// Convert Oklab to XYZ with these matrices.
    pub fn oklab_to_xyz(&self, oklab: Components) -> Components {
        let lms = math::transform(&self.lms_cbrt_to_oklab.inverse, oklab);
        math::transform(&self.xyz_to_lms.inverse, lms.map(|v| v * v * v))
    }
}

/// Scale the rows of M0 so that `white_point` maps to LMS `(1, 1, 1)`.
pub fn xyz_to_lms(white_point: Components) -> Result<Transform, Error> {
    let lms_white = math::transform(&M0, white_point);
    debug!("M0 maps the white point to {:?}", lms_white);

    let scale = math::outer(lms_white, Components(1.0, 1.0, 1.0));
    Ok(math::divide(&M0, &scale))
}

/// Derive every Oklab matrix relative to `white_point`.
pub fn derive_oklab(white_point: Components) -> Result<OklabMatrices, Error> {
    let xyz_to_lms = MatrixPair::from_forward(xyz_to_lms(white_point)?)?;

    let srgb_linear_to_lms =
        MatrixPair::from_forward(math::multiply(&xyz_to_lms.forward, &SRGB_LINEAR_TO_XYZ))?;

    let lms_cbrt_to_oklab = MatrixPair::from_inverse(math::narrow(&OKLAB_TO_LMS_CBRT))?;

    Ok(OklabMatrices {
        xyz_to_lms,
        srgb_linear_to_lms,
        lms_cbrt_to_oklab,
    })
}

/// Derive every Oklab matrix relative to D65, the white point CSS uses.
pub fn derive_oklab_d65() -> Result<OklabMatrices, Error> {
    derive_oklab(D65::tristimulus()?)
}
