//! Math utility functions.
//!
//! Matrices are stored as [`euclid::default::Transform3D`] values with the
//! 3x3 part in the upper-left corner. euclid multiplies row vectors, so the
//! stored layout is the transpose of the usual notation where a matrix
//! multiplies a column vector. [`from_rows`] and [`rows`] translate between
//! the two; everything else in the crate talks in rows.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::{Component, Components, Error};

/// A 3x3 matrix embedded in a euclid transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// A matrix written out in rows, as it is usually printed.
pub type Rows = [[Component; 3]; 3];

/// Build a [`Transform`] from 9 values given in euclid layout (each group of
/// three is a column of the matrix in row notation).
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Build a [`Transform`] from a matrix written out in rows.
#[rustfmt::skip]
pub const fn from_rows(rows: Rows) -> Transform {
    transform_3x3(
        rows[0][0], rows[1][0], rows[2][0],
        rows[0][1], rows[1][1], rows[2][1],
        rows[0][2], rows[1][2], rows[2][2],
    )
}

/// Return the matrix held by `transform` written out in rows.
pub fn rows(transform: &Transform) -> Rows {
    let t = transform;
    [
        [t.m11, t.m21, t.m31],
        [t.m12, t.m22, t.m32],
        [t.m13, t.m23, t.m33],
    ]
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// The matrix product `a * b`, which applies `b` first and `a` second.
pub fn multiply(a: &Transform, b: &Transform) -> Transform {
    b.then(a)
}

/// Invert a matrix, failing when it is singular.
pub fn inverse(transform: &Transform) -> Result<Transform, Error> {
    transform.inverse().ok_or(Error::SingularMatrix)
}

/// Swap rows and columns.
pub fn transpose(transform: &Transform) -> Transform {
    let r = rows(transform);
    from_rows([
        [r[0][0], r[1][0], r[2][0]],
        [r[0][1], r[1][1], r[2][1]],
        [r[0][2], r[1][2], r[2][2]],
    ])
}

/// The outer product `a * b^T`: entry `(i, j)` is `a[i] * b[j]`.
pub fn outer(a: Components, b: Components) -> Transform {
    let (a, b) = (a.to_array(), b.to_array());
    from_rows(std::array::from_fn(|i| std::array::from_fn(|j| a[i] * b[j])))
}

/// A diagonal matrix with the given components on the diagonal.
pub fn diagonal(d: Components) -> Transform {
    let Components(x, y, z) = d;
    from_rows([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z]])
}

/// Apply `f` to every pair of entries at the same position.
pub fn zip_entries(
    a: &Transform,
    b: &Transform,
    f: impl Fn(Component, Component) -> Component,
) -> Transform {
    let (a, b) = (rows(a), rows(b));
    from_rows(std::array::from_fn(|i| {
        std::array::from_fn(|j| f(a[i][j], b[i][j]))
    }))
}

/// Element-wise division of `a` by `b`.
pub fn divide(a: &Transform, b: &Transform) -> Transform {
    zip_entries(a, b, |a, b| a / b)
}

/// Round every entry to the nearest IEEE-754 single precision value and widen
/// it back to double precision.
pub fn narrow(transform: &Transform) -> Transform {
    let r = rows(transform);
    from_rows(r.map(|row| row.map(|v| v as f32 as Component)))
}

/// Check whether two values are within `epsilon` of each other.
pub fn almost_equal<T: Float>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}

/// The largest absolute difference between `transform` and the identity.
pub fn identity_residual(transform: &Transform) -> Component {
    let r = rows(transform);
    let mut worst: Component = 0.0;
    for (i, row) in r.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            worst = worst.max((v - expected).abs());
        }
    }
    worst
}

/// A forward matrix together with its algebraic inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixPair {
    /// The forward transform.
    pub forward: Transform,
    /// The inverse of the forward transform.
    pub inverse: Transform,
}

impl MatrixPair {
    /// Pair `forward` with its computed inverse.
    pub fn from_forward(forward: Transform) -> Result<Self, Error> {
        let inverse = inverse(&forward)?;
        Ok(Self { forward, inverse })
    }

    /// Pair a known inverse with its computed forward transform.
    pub fn from_inverse(inverse: Transform) -> Result<Self, Error> {
        let forward = self::inverse(&inverse)?;
        Ok(Self { forward, inverse })
    }

    /// How far `forward * inverse` is from the identity.
    pub fn residual(&self) -> Component {
        identity_residual(&multiply(&self.forward, &self.inverse))
    }

    /// True when `forward * inverse` is the identity within `epsilon`.
    pub fn is_consistent(&self, epsilon: Component) -> bool {
        almost_equal(self.residual(), 0.0, epsilon)
    }
}
