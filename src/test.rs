/// Check that two matrices are equal entry by entry within `epsilon`.
#[macro_export]
macro_rules! assert_matrix_eq {
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let actual = $crate::math::rows(&$actual);
        let expected = $crate::math::rows(&$expected);
        for (actual, expected) in actual.iter().zip(expected.iter()) {
            for (actual, expected) in actual.iter().zip(expected.iter()) {
                approx::assert_abs_diff_eq!(*actual, *expected, epsilon = $epsilon);
            }
        }
    }};
}

/// Check that two sets of components are equal within `epsilon`.
#[macro_export]
macro_rules! assert_components_eq {
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let actual: $crate::Components = $actual;
        let expected: $crate::Components = $expected;
        approx::assert_abs_diff_eq!(actual.0, expected.0, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.1, expected.1, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.2, expected.2, epsilon = $epsilon);
    }};
}
