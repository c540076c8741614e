use static_aabb2d_index::StaticAABB2DIndexBuilder;

use super::edge::Edge;
use super::intersect::edge_edge_intrs;
use super::RegionLoop;
use crate::boundary::{Boundary, Segment, WindingRule};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::curve::QuadraticBezier;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boolean set operation over two regions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// `A OR B`.
    Union,
    /// `A AND B`.
    Intersect,
    /// `A AND NOT B`.
    Subtract,
    /// `A XOR B`.
    Xor,
}

impl BooleanOp {
    /// The operation's membership function over per-operand membership.
    #[inline]
    pub fn combine(self, in_a: bool, in_b: bool) -> bool {
        match self {
            BooleanOp::Union => in_a || in_b,
            BooleanOp::Intersect => in_a && in_b,
            BooleanOp::Subtract => in_a && !in_b,
            BooleanOp::Xor => in_a != in_b,
        }
    }
}

/// Numeric tuning for region construction and boolean combination.
#[derive(Debug, Clone, Copy)]
pub struct RegionOptions<T = f64> {
    /// Fuzzy epsilon used when comparing positions for equality.
    pub pos_equal_eps: T,
    /// Minimum distance off an edge at which side membership is sampled.
    pub membership_offset: T,
    /// Fuzzy epsilon used when joining surviving edges into closed loops.
    pub loop_join_eps: T,
}

impl<T> RegionOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
            membership_offset: T::from(1e-4).unwrap(),
            loop_join_eps: T::from(1e-4).unwrap(),
        }
    }
}

impl<T> Default for RegionOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// One input to the combine engine: a flat pool of closed-loop edges plus the winding rule
/// under which those edges are interpreted.
#[derive(Debug, Clone)]
pub(crate) struct Operand<T> {
    pub edges: Vec<Edge<T>>,
    pub winding_rule: WindingRule,
}

impl<T> Operand<T>
where
    T: Real,
{
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            winding_rule: WindingRule::NonZero,
        }
    }

    /// Converts a boundary segment stream into closed edge loops: subpaths are implicitly
    /// closed, quadratics are degree elevated, zero length edges are dropped.
    pub fn from_boundary(boundary: &Boundary<T>, pos_equal_eps: T) -> Self {
        let mut edges = Vec::new();
        let mut subpath_start = Vector2::zero();
        let mut current = Vector2::zero();
        let mut has_subpath = false;

        let push = |edges: &mut Vec<Edge<T>>, e: Edge<T>| {
            if !e.is_zero_length(pos_equal_eps) {
                edges.push(e);
            }
        };
        let close_subpath =
            |edges: &mut Vec<Edge<T>>, start: Vector2<T>, current: Vector2<T>, open: bool| {
                if open && !current.fuzzy_eq_eps(start, pos_equal_eps) {
                    edges.push(Edge::line(current, start));
                }
            };

        for seg in boundary.segments() {
            match *seg {
                Segment::MoveTo(p) => {
                    close_subpath(&mut edges, subpath_start, current, has_subpath);
                    subpath_start = p;
                    current = p;
                    has_subpath = true;
                }
                Segment::LineTo(p) => {
                    push(&mut edges, Edge::line(current, p));
                    current = p;
                }
                Segment::QuadTo(c, p) => {
                    let elevated = QuadraticBezier::new(current, c, p).to_cubic();
                    push(
                        &mut edges,
                        Edge::cubic(elevated.start, elevated.ctrl1, elevated.ctrl2, elevated.end),
                    );
                    current = p;
                }
                Segment::CubicTo(c1, c2, p) => {
                    push(&mut edges, Edge::cubic(current, c1, c2, p));
                    current = p;
                }
                Segment::Close => {
                    close_subpath(&mut edges, subpath_start, current, has_subpath);
                    current = subpath_start;
                }
            }
        }
        close_subpath(&mut edges, subpath_start, current, has_subpath);

        Self {
            edges,
            winding_rule: boundary.winding_rule(),
        }
    }

    pub fn from_loops(loops: &[RegionLoop<T>]) -> Self {
        Self {
            edges: loops.iter().flat_map(|l| l.edges.iter().copied()).collect(),
            winding_rule: WindingRule::NonZero,
        }
    }

    /// Point membership under the operand's winding rule (ray cast toward +x).
    pub fn inside(&self, point: Vector2<T>) -> bool {
        let mut winding = 0i32;
        let mut crossings = 0u32;
        for e in &self.edges {
            let (w, c) = e.ray_crossings(point);
            winding += w;
            crossings += c;
        }
        match self.winding_rule {
            WindingRule::NonZero => winding != 0,
            WindingRule::EvenOdd => crossings % 2 == 1,
        }
    }
}

/// The combine engine: resolves crossings among both operands' edges, keeps the edges
/// whose two sides differ in result membership, orients them result-interior-left, and
/// stitches them into canonical closed loops.
pub(crate) fn combine<T>(
    a: &Operand<T>,
    b: &Operand<T>,
    op: BooleanOp,
    options: &RegionOptions<T>,
) -> Vec<RegionLoop<T>>
where
    T: Real,
{
    let resolved = resolve_crossings(a, b, options);
    let surviving = select_result_edges(&resolved, a, b, op, options);
    stitch_loops(surviving, options)
}

// splits every edge of both operands at every pairwise intersection so edges meet only at
// shared endpoints, pruned by a spatial index over edge bounds
fn resolve_crossings<T>(a: &Operand<T>, b: &Operand<T>, options: &RegionOptions<T>) -> Vec<Edge<T>>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let all_edges: Vec<Edge<T>> = a.edges.iter().chain(b.edges.iter()).copied().collect();
    if all_edges.is_empty() {
        return all_edges;
    }

    let edge_bounds: Vec<_> = all_edges.iter().map(|e| e.bounds()).collect();
    let aabb_index = {
        let mut builder = StaticAABB2DIndexBuilder::new(all_edges.len());
        for &(min, max) in edge_bounds.iter() {
            builder.add(min.x - eps, min.y - eps, max.x + eps, max.y + eps);
        }
        builder.build().unwrap()
    };

    let mut split_params: Vec<Vec<T>> = vec![Vec::new(); all_edges.len()];
    let mut query_results = Vec::new();
    let mut query_stack = Vec::with_capacity(8);
    for (i, &(min, max)) in edge_bounds.iter().enumerate() {
        query_results.clear();
        let mut visitor = |j: usize| {
            if j > i {
                query_results.push(j);
            }
        };
        aabb_index.visit_query_with_stack(
            min.x - eps,
            min.y - eps,
            max.x + eps,
            max.y + eps,
            &mut visitor,
            &mut query_stack,
        );

        for &j in query_results.iter() {
            for (t1, t2) in edge_edge_intrs(&all_edges[i], &all_edges[j], eps) {
                split_params[i].push(t1);
                split_params[j].push(t2);
            }
        }
    }

    let mut resolved = Vec::with_capacity(all_edges.len());
    for (edge, mut params) in all_edges.into_iter().zip(split_params) {
        params.sort_by(|x, y| x.partial_cmp(y).unwrap());
        let mut remaining = edge;
        let mut t_prev = T::zero();
        for t in params {
            if t <= t_prev || (T::one() - t_prev).fuzzy_eq_zero() {
                continue;
            }
            let local = (t - t_prev) / (T::one() - t_prev);
            if local >= T::one() {
                continue;
            }
            let (left, right) = remaining.split(local);
            if !left.is_zero_length(eps) {
                resolved.push(left);
            }
            remaining = right;
            t_prev = t;
        }
        if !remaining.is_zero_length(eps) {
            resolved.push(remaining);
        }
    }
    resolved
}

// keeps the resolved edges whose side membership differs under the operation, oriented so
// the result interior lies on the edge's left, then drops coincident duplicates
fn select_result_edges<T>(
    resolved: &[Edge<T>],
    a: &Operand<T>,
    b: &Operand<T>,
    op: BooleanOp,
    options: &RegionOptions<T>,
) -> Vec<Edge<T>>
where
    T: Real,
{
    let mut surviving = Vec::new();
    for edge in resolved {
        let mid = edge.point_at(T::half());
        let tangent = edge.tangent_at(T::half());
        if tangent.length_squared().fuzzy_eq_zero() {
            continue;
        }
        let normal = tangent.unit_perp();
        let chord = (edge.end - edge.start).length();
        let offset = num_traits::real::Real::max(
            options.membership_offset,
            chord * T::from(1e-3).unwrap(),
        );

        let left_pt = mid + normal.scale(offset);
        let right_pt = mid - normal.scale(offset);
        let left_in = op.combine(a.inside(left_pt), b.inside(left_pt));
        let right_in = op.combine(a.inside(right_pt), b.inside(right_pt));
        if left_in == right_in {
            continue;
        }
        surviving.push(if left_in { *edge } else { edge.reversed() });
    }

    // coincident spans contribute one surviving edge per operand, keep a single copy
    let dup_eps = options.pos_equal_eps * T::from(10.0).unwrap();
    let mut i = 0;
    while i < surviving.len() {
        let mut j = i + 1;
        while j < surviving.len() {
            if surviving[i]
                .as_cubic()
                .fuzzy_eq_eps(&surviving[j].as_cubic(), dup_eps)
            {
                surviving.swap_remove(j);
            } else {
                j += 1;
            }
        }
        i += 1;
    }
    surviving
}

// walks surviving edges into closed loops by endpoint proximity; at shared vertexes the
// leftmost (most counter-clockwise) turn keeps the interior on the loop's left
fn stitch_loops<T>(edges: Vec<Edge<T>>, options: &RegionOptions<T>) -> Vec<RegionLoop<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    if edges.is_empty() {
        return result;
    }
    let join_eps = options.loop_join_eps;

    // index over edge start points
    let aabb_index = {
        let mut builder = StaticAABB2DIndexBuilder::new(edges.len());
        for e in edges.iter() {
            builder.add(
                e.start.x - join_eps,
                e.start.y - join_eps,
                e.start.x + join_eps,
                e.start.y + join_eps,
            );
        }
        builder.build().unwrap()
    };

    let mut visited = vec![false; edges.len()];
    let mut query_results = Vec::new();
    let mut query_stack = Vec::with_capacity(8);

    for seed in 0..edges.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        let mut chain = vec![edges[seed]];

        let mut loop_count = 0;
        let max_loop_count = edges.len();
        let closed = loop {
            if loop_count > max_loop_count {
                // prevent infinite loop
                break false;
            }
            loop_count += 1;

            let end = chain.last().map(|e| e.end).unwrap_or_default();
            if end.fuzzy_eq_eps(chain[0].start, join_eps) {
                break true;
            }

            query_results.clear();
            let mut visitor = |j: usize| {
                if !visited[j] && edges[j].start.fuzzy_eq_eps(end, join_eps) {
                    query_results.push(j);
                }
            };
            aabb_index.visit_query_with_stack(
                end.x - join_eps,
                end.y - join_eps,
                end.x + join_eps,
                end.y + join_eps,
                &mut visitor,
                &mut query_stack,
            );

            let incoming = chain.last().map(|e| e.tangent_at(T::one())).unwrap_or_default();
            let mut best: Option<(usize, T)> = None;
            for &j in query_results.iter() {
                let outgoing = edges[j].tangent_at(T::zero());
                let turn = incoming.perp_dot(outgoing).atan2(incoming.dot(outgoing));
                if best.map(|(_, t)| turn > t).unwrap_or(true) {
                    best = Some((j, turn));
                }
            }

            match best {
                Some((j, _)) => {
                    visited[j] = true;
                    chain.push(edges[j]);
                }
                // dangling end from epsilon effects, discard the chain
                None => break false,
            }
        };

        if !closed {
            continue;
        }
        if let Some(region_loop) = finalize_loop(chain, options) {
            result.push(region_loop);
        }
    }
    result
}

// welds endpoints exactly, merges collinear consecutive line edges, drops degenerates
fn finalize_loop<T>(mut chain: Vec<Edge<T>>, options: &RegionOptions<T>) -> Option<RegionLoop<T>>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    for i in 1..chain.len() {
        let weld = chain[i - 1].end;
        chain[i].start = weld;
    }
    let first_start = chain[0].start;
    if let Some(last) = chain.last_mut() {
        // close exactly back to the loop start
        last.end = first_start;
    }

    let mergeable = |a: &Edge<T>, b: &Edge<T>| {
        if !a.is_line() || !b.is_line() {
            return false;
        }
        let d1 = (a.end - a.start).normalize();
        let d2 = (b.end - b.start).normalize();
        d1.perp_dot(d2).fuzzy_eq_zero_eps(eps) && d1.dot(d2) > T::zero()
    };

    let mut merged: Vec<Edge<T>> = Vec::with_capacity(chain.len());
    for e in chain {
        if e.is_zero_length(eps) {
            continue;
        }
        match merged.last_mut() {
            Some(last) if mergeable(last, &e) => last.end = e.end,
            _ => merged.push(e),
        }
    }
    // wraparound merge between the final and first edges
    while merged.len() >= 2 {
        let first = merged[0];
        let last = *merged.last().unwrap();
        if mergeable(&last, &first) {
            merged[0].start = last.start;
            merged.pop();
        } else {
            break;
        }
    }

    match merged.len() {
        0 => None,
        1 if merged[0].is_line() => None,
        _ => Some(RegionLoop { edges: merged }),
    }
}
