//! Render matrices as text with a fixed number of decimals.
//!
//! Entries never use scientific notation, so a printed matrix can be pasted
//! into source code as is.

use std::fmt;

use crate::{
    math::{rows, Transform},
    Component,
};

/// How a matrix is laid out when printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Bracketed rows, one row of the matrix per line, every entry signed.
    #[default]
    Rows,
    /// The arguments of a `transform_3x3` call, in euclid layout.
    Rust,
}

/// A matrix ready to be printed with [`fmt::Display`].
pub struct MatrixDisplay<'a> {
    transform: &'a Transform,
    precision: usize,
    style: Style,
}

/// Prepare `transform` for printing with `precision` decimals.
pub fn matrix(transform: &Transform, precision: usize, style: Style) -> MatrixDisplay<'_> {
    MatrixDisplay {
        transform,
        precision,
        style,
    }
}

/// Format a single entry with an explicit sign.
pub fn signed(value: Component, precision: usize) -> String {
    format!("{:+.*}", precision, value)
}

/// Format a single entry as a Rust literal. Non-negative values get a space
/// where the sign would go to keep columns aligned.
fn literal(value: Component, precision: usize) -> String {
    if value.is_sign_negative() {
        format!("{:.*}", precision, value)
    } else {
        format!(" {:.*}", precision, value)
    }
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = rows(self.transform);
        match self.style {
            Style::Rows => {
                for (i, row) in r.iter().enumerate() {
                    let open = if i == 0 { "[[" } else { " [" };
                    let close = if i == 2 { "]]" } else { "]\n" };
                    let entries: Vec<String> =
                        row.iter().map(|v| signed(*v, self.precision)).collect();
                    write!(f, "{}{}{}", open, entries.join(" "), close)?;
                }
                Ok(())
            }
            Style::Rust => {
                writeln!(f, "transform_3x3(")?;
                // euclid stores the transpose, so columns are written out.
                for j in 0..3 {
                    let entries: Vec<String> = (0..3)
                        .map(|i| literal(r[i][j], self.precision))
                        .collect();
                    writeln!(f, "    {},", entries.join(", "))?;
                }
                write!(f, ")")
            }
        }
    }
}
