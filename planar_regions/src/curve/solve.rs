use crate::core::traits::Real;
use roots::{find_roots_cubic, find_roots_linear, find_roots_quadratic};

/// Returns the real roots of `c0 + c1 * x + c2 * x^2`.
///
/// Coefficients are given low-to-high degree. A fuzzy-zero leading coefficient degrades to the
/// linear solver rather than dividing by (near) zero. Root ordering is implementation defined;
/// consumers test set membership within tolerance, not order.
///
/// # Examples
///
/// ```
/// # use planar_regions::curve::solve_quadratic;
/// // x^2 - 1 = 0
/// let mut roots = solve_quadratic(-1.0, 0.0, 1.0);
/// roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(roots, vec![-1.0, 1.0]);
/// ```
pub fn solve_quadratic<T>(c0: T, c1: T, c2: T) -> Vec<T>
where
    T: Real,
{
    if c2.fuzzy_eq_zero() {
        if c1.fuzzy_eq_zero() {
            // constant equation, either no roots or infinitely many (report none)
            return Vec::new();
        }
        return roots_to_vec(find_roots_linear(to_f64(c1), to_f64(c0)).as_ref());
    }

    roots_to_vec(find_roots_quadratic(to_f64(c2), to_f64(c1), to_f64(c0)).as_ref())
}

/// Returns the real roots of `c0 + c1 * x + c2 * x^2 + c3 * x^3`.
///
/// Coefficients are given low-to-high degree. A fuzzy-zero leading coefficient degrades to
/// [solve_quadratic]. Root ordering is implementation defined.
pub fn solve_cubic<T>(c0: T, c1: T, c2: T, c3: T) -> Vec<T>
where
    T: Real,
{
    if c3.fuzzy_eq_zero() {
        return solve_quadratic(c0, c1, c2);
    }

    roots_to_vec(find_roots_cubic(to_f64(c3), to_f64(c2), to_f64(c1), to_f64(c0)).as_ref())
}

#[inline]
fn to_f64<T>(v: T) -> f64
where
    T: Real,
{
    num_traits::cast(v).unwrap()
}

#[inline]
fn roots_to_vec<T>(roots: &[f64]) -> Vec<T>
where
    T: Real,
{
    roots
        .iter()
        .map(|&r| T::from(r).unwrap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    #[test]
    fn quadratic_degrades_to_linear() {
        // 0 * x^2 + 2x - 4 = 0
        let roots = solve_quadratic(-4.0, 2.0, 0.0);
        assert_eq!(roots.len(), 1);
        assert_fuzzy_eq!(roots[0], 2.0);
    }

    #[test]
    fn quadratic_no_real_roots() {
        // x^2 + 1 = 0
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn cubic_three_roots() {
        // (x - 1)(x + 1)(x - 2) = x^3 - 2x^2 - x + 2
        let roots = sorted(solve_cubic(2.0, -1.0, -2.0, 1.0));
        assert_eq!(roots.len(), 3);
        assert_fuzzy_eq!(roots[0], -1.0, 1e-6);
        assert_fuzzy_eq!(roots[1], 1.0, 1e-6);
        assert_fuzzy_eq!(roots[2], 2.0, 1e-6);
    }

    #[test]
    fn cubic_degrades_to_quadratic() {
        // 0 * x^3 + x^2 - 4 = 0
        let roots = sorted(solve_cubic(-4.0, 0.0, 1.0, 0.0));
        assert_eq!(roots.len(), 2);
        assert_fuzzy_eq!(roots[0], -2.0, 1e-6);
        assert_fuzzy_eq!(roots[1], 2.0, 1e-6);
    }
}
