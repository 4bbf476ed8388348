//! Chromaticity coordinates and the CIE-XYZ white points derived from them.

use crate::{Component, Components, Error};

/// A point on the CIE 1931 chromaticity diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chromaticity {
    /// The x coordinate.
    pub x: Component,
    /// The y coordinate.
    pub y: Component,
}

impl Chromaticity {
    /// Create a new chromaticity from its x and y coordinates.
    pub const fn new(x: Component, y: Component) -> Self {
        Self { x, y }
    }

    /// Lift the chromaticity to a tristimulus value with a luminance (Y) of 1.
    pub fn to_xyz(&self) -> Result<Components, Error> {
        let Self { x, y } = *self;
        if y == 0.0 || !x.is_finite() || !y.is_finite() {
            return Err(Error::DegenerateChromaticity { x, y });
        }

        Ok(Components(x / y, 1.0, (1.0 - x - y) / y))
    }
}

/// A reference white, identified by its chromaticity.
pub trait WhitePoint {
    /// Name of the illuminant, used when printing.
    const NAME: &'static str;

    /// Chromaticity of the illuminant.
    const CHROMATICITY: Chromaticity;

    /// Tristimulus value of the white point with Y normalized to 1.
    fn tristimulus() -> Result<Components, Error> {
        Self::CHROMATICITY.to_xyz()
    }
}

/// The CIE standard illuminant D50.
///
/// Uses the four digit chromaticity `(0.3457, 0.3585)` that ICC and CSS use.
/// Other published values are not used by any derivation but listed here for
/// reference:
///
/// - ASTM E308-01 XYZ: `(0.96422, 1.00000, 0.82521)`
/// - CIE 15:2004 table T.3 chromaticity: `(0.34567, 0.35851)`
/// - CIE 15:2004 table T.3 XYZ: `(0.9642, 1.0000, 0.8251)`
#[derive(Clone, Debug)]
pub struct D50;

impl WhitePoint for D50 {
    const NAME: &'static str = "D50";
    const CHROMATICITY: Chromaticity = Chromaticity::new(0.3457, 0.3585);
}

/// The CIE standard illuminant D65.
///
/// Uses the four digit chromaticity `(0.3127, 0.3290)` from the sRGB standard.
/// Other published values are not used by any derivation but listed here for
/// reference:
///
/// - ASTM E308-01 XYZ: `(0.95047, 1.00000, 1.08883)`
/// - CIE 15:2004 table T.3 chromaticity: `(0.31272, 0.32903)`
/// - CIE 15:2004 table T.3 XYZ: `(0.9504, 1.0000, 1.0888)`
#[derive(Clone, Debug)]
pub struct D65;

impl WhitePoint for D65 {
    const NAME: &'static str = "D65";
    const CHROMATICITY: Chromaticity = Chromaticity::new(0.3127, 0.3290);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_components_eq;

    #[test]
    fn white_points_from_chromaticity() {
        #[allow(clippy::excessive_precision)]
        let d65 = Components(0.9504559270516716, 1.0, 1.0890577507598784);
        assert_components_eq!(D65::tristimulus().unwrap(), d65, 1e-15);

        #[allow(clippy::excessive_precision)]
        let d50 = Components(0.9642956764295677, 1.0, 0.8251046025104602);
        assert_components_eq!(D50::tristimulus().unwrap(), d50, 1e-15);
    }

    #[test]
    fn luminance_is_normalized() {
        let xyz = Chromaticity::new(0.64, 0.33).to_xyz().unwrap();
        assert_eq!(xyz.1, 1.0);
        assert_eq!(xyz.0, 0.64 / 0.33);
    }

    #[test]
    fn zero_y_is_an_error() {
        let result = Chromaticity::new(0.2, 0.0).to_xyz();
        assert_eq!(
            result,
            Err(Error::DegenerateChromaticity { x: 0.2, y: 0.0 })
        );
    }
}
