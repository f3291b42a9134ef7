/// Check for equality between two components, by default allowing for
/// rounding errors well below anything a color conversion cares about.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0e-9);
    }};
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
