//! Scalar and vector types shared by every derivation.

/// A 64-bit floating point value that every matrix entry is stored as.
///
/// Derivations always run in double precision. Narrowing to single precision
/// only ever happens explicitly, see [`crate::math::narrow`].
pub type Component = f64;

/// Represent the three components of a tristimulus value or any other
/// 3-vector fed through a matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine two sets of components pairwise.
    pub fn zip(&self, other: &Self, f: impl Fn(Component, Component) -> Component) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// The components as an array, in order.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[Component; 3]> for Components {
    fn from(value: [Component; 3]) -> Self {
        Self(value[0], value[1], value[2])
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(&rhs, |a, b| a - b)
    }
}
