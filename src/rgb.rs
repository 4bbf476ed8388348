//! Derive the conversion matrices between RGB color spaces and CIE-XYZ from
//! the chromaticity of their primaries.

use std::str::FromStr;

use log::debug;

use crate::{
    math::{self, MatrixPair, Transform},
    xyz::{Chromaticity, WhitePoint, D50, D65},
    Components, Error,
};

/// The chromaticities of the red, green and blue primaries of an RGB space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primaries {
    /// The red primary.
    pub red: Chromaticity,
    /// The green primary.
    pub green: Chromaticity,
    /// The blue primary.
    pub blue: Chromaticity,
}

impl Primaries {
    const fn new(red: (f64, f64), green: (f64, f64), blue: (f64, f64)) -> Self {
        Self {
            red: Chromaticity::new(red.0, red.1),
            green: Chromaticity::new(green.0, green.1),
            blue: Chromaticity::new(blue.0, blue.1),
        }
    }

    /// The primary matrix: one row per primary, each row the tristimulus
    /// value of that primary.
    pub fn to_matrix(&self) -> Result<Transform, Error> {
        let r = self.red.to_xyz()?.to_array();
        let g = self.green.to_xyz()?.to_array();
        let b = self.blue.to_xyz()?.to_array();
        Ok(math::from_rows([r, g, b]))
    }
}

/// The RGB color spaces with predefined primaries.
/// <https://drafts.csswg.org/css-color-4/#predefined>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RgbSpace {
    /// sRGB, also the primaries of Rec.709.
    Srgb,
    /// display-p3
    DisplayP3,
    /// a98-rgb
    A98Rgb,
    /// rec2020
    Rec2020,
    /// prophoto-rgb
    ProPhotoRgb,
}

impl RgbSpace {
    /// Every supported space, in the order they are printed.
    pub const ALL: [RgbSpace; 5] = [
        RgbSpace::Srgb,
        RgbSpace::DisplayP3,
        RgbSpace::A98Rgb,
        RgbSpace::Rec2020,
        RgbSpace::ProPhotoRgb,
    ];

    /// The chromaticities of the primaries for this space.
    pub const fn primaries(&self) -> Primaries {
        match self {
            RgbSpace::Srgb => Primaries::new((0.64, 0.33), (0.30, 0.60), (0.15, 0.06)),
            RgbSpace::DisplayP3 => Primaries::new((0.68, 0.32), (0.265, 0.69), (0.150, 0.060)),
            RgbSpace::A98Rgb => Primaries::new((0.64, 0.33), (0.21, 0.71), (0.15, 0.06)),
            RgbSpace::Rec2020 => Primaries::new((0.708, 0.292), (0.17, 0.797), (0.131, 0.046)),
            RgbSpace::ProPhotoRgb => Primaries::new(
                (0.734699, 0.265301),
                (0.159597, 0.840403),
                (0.036598, 0.000105),
            ),
        }
    }

    /// The name used for this space in CSS.
    pub const fn name(&self) -> &'static str {
        match self {
            RgbSpace::Srgb => "srgb",
            RgbSpace::DisplayP3 => "display-p3",
            RgbSpace::A98Rgb => "a98-rgb",
            RgbSpace::Rec2020 => "rec2020",
            RgbSpace::ProPhotoRgb => "prophoto-rgb",
        }
    }

    /// A human readable title.
    pub const fn title(&self) -> &'static str {
        match self {
            RgbSpace::Srgb => "sRGB",
            RgbSpace::DisplayP3 => "Display P3",
            RgbSpace::A98Rgb => "Adobe 98",
            RgbSpace::Rec2020 => "Rec.2020",
            RgbSpace::ProPhotoRgb => "ProPhoto",
        }
    }

    /// Name of the white point the space is defined against.
    pub const fn white_point_name(&self) -> &'static str {
        match self {
            RgbSpace::ProPhotoRgb => D50::NAME,
            _ => D65::NAME,
        }
    }

    /// The tristimulus value of the white point the space is defined against.
    pub fn white_point(&self) -> Result<Components, Error> {
        match self {
            RgbSpace::ProPhotoRgb => D50::tristimulus(),
            _ => D65::tristimulus(),
        }
    }
}

impl FromStr for RgbSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RgbSpace::ALL
            .into_iter()
            .find(|space| space.name() == s)
            .ok_or_else(|| Error::UnsupportedSpace(s.to_owned()))
    }
}

impl std::fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive the RGB to XYZ (forward) and XYZ to RGB (inverse) matrices of
/// `space` relative to `white_point`.
///
/// The scale of each primary is chosen so that RGB `(1, 1, 1)` lands exactly
/// on `white_point`.
pub fn derive_rgb_xyz(white_point: Components, space: RgbSpace) -> Result<MatrixPair, Error> {
    let primaries = space.primaries().to_matrix()?;

    // Solve `s * P = w` for the row vector `s`.
    let scale = math::transform(&math::transpose(&math::inverse(&primaries)?), white_point);
    debug!("{}: primary scale {:?}", space, scale);

    let scaled = math::multiply(&math::diagonal(scale), &primaries);
    MatrixPair::from_forward(math::transpose(&scaled))
}

/// Same as [`derive_rgb_xyz`], with the space given by its CSS name.
pub fn derive_rgb_xyz_by_name(white_point: Components, name: &str) -> Result<MatrixPair, Error> {
    derive_rgb_xyz(white_point, name.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_components_eq, assert_matrix_eq, math::transform_3x3};

    fn derive_for(space: RgbSpace) -> MatrixPair {
        derive_rgb_xyz(space.white_point().unwrap(), space).unwrap()
    }

    #[test]
    fn white_maps_to_white_point() {
        for space in RgbSpace::ALL {
            let pair = derive_for(space);
            let white = math::transform(&pair.forward, Components(1.0, 1.0, 1.0));
            assert_components_eq!(white, space.white_point().unwrap(), 1e-9);
        }
    }

    #[test]
    fn forward_and_inverse_are_inverses() {
        for space in RgbSpace::ALL {
            let pair = derive_for(space);
            assert!(pair.residual() < 1e-9, "{}: {}", space, pair.residual());
            assert!(pair.is_consistent(1e-9));
        }
    }

    #[test]
    fn srgb_matches_published_matrix() {
        let pair = derive_for(RgbSpace::Srgb);
        let rows = math::rows(&pair.forward);
        approx::assert_abs_diff_eq!(rows[0][0], 0.41239080, epsilon = 1e-6);

        // The same constants a color library stores in euclid layout.
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );
        assert_matrix_eq!(pair.forward, TO_XYZ, 1e-12);

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );
        assert_matrix_eq!(pair.inverse, FROM_XYZ, 1e-12);
    }

    #[test]
    fn prophoto_matches_published_matrix() {
        let pair = derive_for(RgbSpace::ProPhotoRgb);

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.7977666449006423, 0.2880748288194013,     0.0,
            0.1351812974005331, 0.7118352342418731,     0.0,
            0.0313477341283922, 0.0000899369387256457, 0.8251046025104602,
        );
        // The blue primary sits almost on the x axis, which costs a few digits.
        assert_matrix_eq!(pair.forward, TO_XYZ, 1e-10);
    }

    #[test]
    fn white_point_selection_matters() {
        let srgb = derive_rgb_xyz(D65::tristimulus().unwrap(), RgbSpace::Srgb).unwrap();
        let prophoto = derive_rgb_xyz(D50::tristimulus().unwrap(), RgbSpace::ProPhotoRgb).unwrap();
        assert_ne!(srgb.forward, prophoto.forward);

        let srgb_d50 = derive_rgb_xyz(D50::tristimulus().unwrap(), RgbSpace::Srgb).unwrap();
        assert_ne!(srgb.forward, srgb_d50.forward);
    }

    #[test]
    fn names_round_trip() {
        for space in RgbSpace::ALL {
            assert_eq!(space.name().parse::<RgbSpace>(), Ok(space));
        }
    }

    #[test]
    fn unsupported_name_fails() {
        let white = D65::tristimulus().unwrap();
        for name in ["", "sRGB", "xyz-d65", "oklab", "rec-2020"] {
            assert_eq!(
                derive_rgb_xyz_by_name(white, name),
                Err(Error::UnsupportedSpace(name.to_owned()))
            );
        }
        assert!(derive_rgb_xyz_by_name(white, "display-p3").is_ok());
    }

    #[test]
    fn degenerate_primary_fails() {
        let primaries = Primaries::new((0.64, 0.33), (0.30, 0.0), (0.15, 0.06));
        assert_eq!(
            primaries.to_matrix(),
            Err(Error::DegenerateChromaticity { x: 0.30, y: 0.0 })
        );
    }
}
