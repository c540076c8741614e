use super::edge::{Edge, EdgeKind};
use crate::core::math::{line_line_intr, parametric_from_point, LineLineIntr, Vector2};
use crate::core::traits::Real;
use crate::curve::{solve_cubic, CubicBezier};

// recursion depth bound for cubic/cubic subdivision; each level halves both curves so the
// parameter resolution at the bound is far below any positional epsilon in use
const MAX_SUBDIVISION_DEPTH: u32 = 32;

/// Computes the intersection parameter pairs `(t1, t2)` between two edges.
///
/// Collinear overlaps contribute the overlap's two endpoints so the arrangement splits
/// coincident spans at their shared extents.
pub(crate) fn edge_edge_intrs<T>(e1: &Edge<T>, e2: &Edge<T>, pos_equal_eps: T) -> Vec<(T, T)>
where
    T: Real,
{
    let mut result = match (&e1.kind, &e2.kind) {
        (EdgeKind::Line, EdgeKind::Line) => line_line_edge_intrs(e1, e2, pos_equal_eps),
        (EdgeKind::Line, EdgeKind::Cubic { .. }) => {
            line_cubic_intrs(e1, &e2.as_cubic(), pos_equal_eps)
        }
        (EdgeKind::Cubic { .. }, EdgeKind::Line) => {
            swap_pairs(line_cubic_intrs(e2, &e1.as_cubic(), pos_equal_eps))
        }
        (EdgeKind::Cubic { .. }, EdgeKind::Cubic { .. }) => {
            cubic_cubic_intrs(&e1.as_cubic(), &e2.as_cubic(), pos_equal_eps)
        }
    };
    dedup_pairs(&mut result, e1, pos_equal_eps);
    result
}

fn swap_pairs<T>(pairs: Vec<(T, T)>) -> Vec<(T, T)> {
    pairs.into_iter().map(|(a, b)| (b, a)).collect()
}

// merges pairs that land on the same position (adjacent subdivision pieces can both
// report an intersection lying near their shared boundary)
fn dedup_pairs<T>(pairs: &mut Vec<(T, T)>, e1: &Edge<T>, pos_equal_eps: T)
where
    T: Real,
{
    let merge_eps = T::from(10.0).unwrap() * pos_equal_eps;
    let mut i = 0;
    while i < pairs.len() {
        let p = e1.point_at(pairs[i].0);
        let mut j = i + 1;
        while j < pairs.len() {
            if e1.point_at(pairs[j].0).fuzzy_eq_eps(p, merge_eps) {
                pairs.swap_remove(j);
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}

fn line_line_edge_intrs<T>(e1: &Edge<T>, e2: &Edge<T>, eps: T) -> Vec<(T, T)>
where
    T: Real,
{
    match line_line_intr(e1.start, e1.end, e2.start, e2.end, eps) {
        LineLineIntr::TrueIntersect { seg1_t, seg2_t } => vec![(seg1_t, seg2_t)],
        LineLineIntr::Overlapping { seg2_t0, seg2_t1 } => {
            let map_back = |t2: T| {
                let p = e2.start.lerp(e2.end, t2);
                let t1 = parametric_from_point(e1.start, e1.end, p, eps);
                (num_traits::clamp(t1, T::zero(), T::one()), t2)
            };
            vec![map_back(seg2_t0), map_back(seg2_t1)]
        }
        LineLineIntr::NoIntersect | LineLineIntr::FalseIntersect { .. } => Vec::new(),
    }
}

// solves the cubic against the line's implicit equation; pairs are (t_line, t_cubic)
fn line_cubic_intrs<T>(line: &Edge<T>, curve: &CubicBezier<T>, eps: T) -> Vec<(T, T)>
where
    T: Real,
{
    let a = line.end.y - line.start.y;
    let b = line.start.x - line.end.x;
    let c = line.end.x * line.start.y - line.start.x * line.end.y;

    let (cx, cy) = curve.coefficients();
    let poly = [
        a * cx[0] + b * cy[0] + c,
        a * cx[1] + b * cy[1],
        a * cx[2] + b * cy[2],
        a * cx[3] + b * cy[3],
    ];

    if poly.iter().all(|v| v.fuzzy_eq_zero_eps(eps)) {
        return collinear_line_cubic_overlap(line, curve, eps);
    }

    let line_len = (line.end - line.start).length();
    let mut result = Vec::new();
    for t in solve_cubic(poly[0], poly[1], poly[2], poly[3]) {
        if t < T::zero() || t > T::one() {
            continue;
        }
        let p = curve.point_at(t);
        let s = parametric_from_point(line.start, line.end, p, eps);
        // apply the epsilon at position scale along the line
        if (s * line_len).fuzzy_in_range_eps(T::zero(), line_len, eps) {
            result.push((num_traits::clamp(s, T::zero(), T::one()), t));
        }
    }
    result
}

// degenerate case: the cubic's geometry lies along the line's carrier; report the overlap
// extents (line endpoints on the curve and curve endpoints on the line)
fn collinear_line_cubic_overlap<T>(line: &Edge<T>, curve: &CubicBezier<T>, eps: T) -> Vec<(T, T)>
where
    T: Real,
{
    let mut result = Vec::new();
    let line_len = (line.end - line.start).length();

    for (t2, p) in [(T::zero(), curve.start), (T::one(), curve.end)] {
        let s = parametric_from_point(line.start, line.end, p, eps);
        if (s * line_len).fuzzy_in_range_eps(T::zero(), line_len, eps) {
            result.push((num_traits::clamp(s, T::zero(), T::one()), t2));
        }
    }

    // map the line's endpoints onto the curve along its dominant axis
    let (cx, cy) = curve.coefficients();
    let x_dominant = (curve.end.x - curve.start.x).abs() >= (curve.end.y - curve.start.y).abs();
    for (s, p) in [(T::zero(), line.start), (T::one(), line.end)] {
        let roots = if x_dominant {
            solve_cubic(cx[0] - p.x, cx[1], cx[2], cx[3])
        } else {
            solve_cubic(cy[0] - p.y, cy[1], cy[2], cy[3])
        };
        for t in roots {
            if t >= T::zero() && t <= T::one() && curve.point_at(t).fuzzy_eq_eps(p, eps) {
                result.push((s, t));
                break;
            }
        }
    }
    result
}

fn cubic_cubic_intrs<T>(c1: &CubicBezier<T>, c2: &CubicBezier<T>, eps: T) -> Vec<(T, T)>
where
    T: Real,
{
    let mut result = Vec::new();
    subdivide_intrs(
        c1,
        T::zero(),
        T::one(),
        c2,
        T::zero(),
        T::one(),
        MAX_SUBDIVISION_DEPTH,
        eps,
        &mut result,
    );
    result
}

// conservative control cage bounds, cheaper than exact extents for pruning
fn cage_bounds<T>(c: &CubicBezier<T>) -> (Vector2<T>, Vector2<T>)
where
    T: Real,
{
    let min = |a: T, b: T| num_traits::real::Real::min(a, b);
    let max = |a: T, b: T| num_traits::real::Real::max(a, b);
    let lo = Vector2::new(
        min(min(c.start.x, c.ctrl1.x), min(c.ctrl2.x, c.end.x)),
        min(min(c.start.y, c.ctrl1.y), min(c.ctrl2.y, c.end.y)),
    );
    let hi = Vector2::new(
        max(max(c.start.x, c.ctrl1.x), max(c.ctrl2.x, c.end.x)),
        max(max(c.start.y, c.ctrl1.y), max(c.ctrl2.y, c.end.y)),
    );
    (lo, hi)
}

#[allow(clippy::too_many_arguments)]
fn subdivide_intrs<T>(
    c1: &CubicBezier<T>,
    a0: T,
    a1: T,
    c2: &CubicBezier<T>,
    b0: T,
    b1: T,
    depth: u32,
    eps: T,
    out: &mut Vec<(T, T)>,
) where
    T: Real,
{
    let (min1, max1) = cage_bounds(c1);
    let (min2, max2) = cage_bounds(c2);
    if min1.x > max2.x + eps || min2.x > max1.x + eps || min1.y > max2.y + eps || min2.y > max1.y + eps
    {
        return;
    }

    let flat_eps_sq = eps * eps;
    let flat1 = c1.flatness_squared() <= flat_eps_sq;
    let flat2 = c2.flatness_squared() <= flat_eps_sq;

    if depth == 0 || (flat1 && flat2) {
        // both pieces are straight to within eps, intersect the chords and map the chord
        // parameters back into the original curves' parameter spaces
        let map_a = |t: T| a0 + t * (a1 - a0);
        let map_b = |t: T| b0 + t * (b1 - b0);
        match line_line_intr(c1.start, c1.end, c2.start, c2.end, eps) {
            LineLineIntr::TrueIntersect { seg1_t, seg2_t } => {
                out.push((map_a(seg1_t), map_b(seg2_t)));
            }
            LineLineIntr::Overlapping { seg2_t0, seg2_t1 } => {
                for t2 in [seg2_t0, seg2_t1] {
                    let p = c2.start.lerp(c2.end, t2);
                    let t1 = parametric_from_point(c1.start, c1.end, p, eps);
                    out.push((
                        map_a(num_traits::clamp(t1, T::zero(), T::one())),
                        map_b(t2),
                    ));
                }
            }
            _ => {}
        }
        return;
    }

    let am = (a0 + a1) * T::half();
    let bm = (b0 + b1) * T::half();
    match (flat1, flat2) {
        (true, false) => {
            let (l2, r2) = c2.subdivide();
            subdivide_intrs(c1, a0, a1, &l2, b0, bm, depth - 1, eps, out);
            subdivide_intrs(c1, a0, a1, &r2, bm, b1, depth - 1, eps, out);
        }
        (false, true) => {
            let (l1, r1) = c1.subdivide();
            subdivide_intrs(&l1, a0, am, c2, b0, b1, depth - 1, eps, out);
            subdivide_intrs(&r1, am, a1, c2, b0, b1, depth - 1, eps, out);
        }
        _ => {
            let (l1, r1) = c1.subdivide();
            let (l2, r2) = c2.subdivide();
            subdivide_intrs(&l1, a0, am, &l2, b0, bm, depth - 1, eps, out);
            subdivide_intrs(&l1, a0, am, &r2, bm, b1, depth - 1, eps, out);
            subdivide_intrs(&r1, am, a1, &l2, b0, bm, depth - 1, eps, out);
            subdivide_intrs(&r1, am, a1, &r2, bm, b1, depth - 1, eps, out);
        }
    }
}
