/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a closed polygonal [Boundary](crate::boundary::Boundary) with the [NonZero
/// winding rule](crate::boundary::WindingRule::NonZero) from a list of `(x, y)` tuples.
///
/// # Examples
///
/// ```
/// # use planar_regions::closed_polygon;
/// let triangle = closed_polygon![(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)];
/// assert_eq!(triangle.segments().len(), 4);
/// ```
#[macro_export]
macro_rules! closed_polygon {
    ($(($x:expr, $y:expr)),* $(,)?) => {{
        let pts = vec![$($crate::core::math::vec2($x, $y)),*];
        $crate::boundary::Boundary::from_polygon(&pts)
    }};
}
