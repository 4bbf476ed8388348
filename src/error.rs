use crate::Component;

/// Everything that can go wrong while deriving a matrix.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The requested color space is not one of the supported RGB spaces.
    UnsupportedSpace(String),
    /// A chromaticity with a zero y-coordinate can not be lifted to XYZ.
    DegenerateChromaticity {
        /// The x-coordinate of the offending chromaticity.
        x: Component,
        /// The y-coordinate of the offending chromaticity.
        y: Component,
    },
    /// A matrix with a zero determinant was presented for inversion.
    SingularMatrix,
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsupportedSpace(name) => write!(f, "Unsupported color space: {}", name),
            Error::DegenerateChromaticity { x, y } => write!(
                f,
                "Degenerate chromaticity ({}, {}): y must not be zero",
                x, y
            ),
            Error::SingularMatrix => write!(f, "Matrix is singular and can not be inverted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = Error::UnsupportedSpace("cmyk".to_owned());
        assert_eq!(e.to_string(), "Unsupported color space: cmyk");

        let e = Error::DegenerateChromaticity { x: 0.5, y: 0.0 };
        assert!(e.to_string().contains("(0.5, 0)"));
    }
}
