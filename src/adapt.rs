//! Chromatic adaptation between white points.

use log::debug;

use crate::{
    math::{self, from_rows, MatrixPair, Transform},
    Components, Error,
};

/// The Bradford cone response matrix.
#[rustfmt::skip]
pub const BRADFORD: Transform = from_rows([
    [ 0.8951,  0.2664, -0.1614],
    [-0.7502,  1.7135,  0.0367],
    [ 0.0389, -0.0685,  1.0296],
]);

/// Derive the Bradford adaptation from `source` to `destination`.
///
/// The forward matrix maps XYZ relative to `source` to XYZ relative to
/// `destination`; the inverse adapts back.
pub fn derive_bradford(source: Components, destination: Components) -> Result<MatrixPair, Error> {
    let source_cone = math::transform(&BRADFORD, source);
    let destination_cone = math::transform(&BRADFORD, destination);
    debug!(
        "Bradford cone responses {:?} -> {:?}",
        source_cone, destination_cone
    );

    let scale = math::diagonal(destination_cone.zip(&source_cone, |d, s| d / s));
    let adapt = math::multiply(
        &math::inverse(&BRADFORD)?,
        &math::multiply(&scale, &BRADFORD),
    );

    MatrixPair::from_forward(adapt)
}
