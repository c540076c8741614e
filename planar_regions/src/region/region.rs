use super::combine::{combine, Operand};
use super::edge::{Edge, EdgeKind};
use super::{BooleanOp, RegionOptions};
use crate::boundary::{Boundary, Segment, WindingRule};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::curve::CubicBezier;
use crate::errors::Error;
use crate::shapes::{Rect, Shape};
use crate::transform::AffineTransform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One closed chain of edges: `edges[i].end == edges[i + 1].start` and the last edge ends
/// at the first edge's start. Oriented so the region interior lies to the left of every
/// edge (outer loops and holes turn opposite ways automatically).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RegionLoop<T = f64> {
    pub edges: Vec<Edge<T>>,
}

impl<T> RegionLoop<T>
where
    T: Real,
{
    /// Axis-aligned extents of the loop as `(min, max)` corner points.
    pub fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        let mut result: Option<(Vector2<T>, Vector2<T>)> = None;
        for e in &self.edges {
            let (min, max) = e.bounds();
            result = Some(match result {
                Some((lo, hi)) => (
                    Vector2::new(
                        num_traits::real::Real::min(lo.x, min.x),
                        num_traits::real::Real::min(lo.y, min.y),
                    ),
                    Vector2::new(
                        num_traits::real::Real::max(hi.x, max.x),
                        num_traits::real::Real::max(hi.y, max.y),
                    ),
                ),
                None => (min, max),
            });
        }
        result
    }
}

/// A planar point set in canonical form: simple, mutually non-crossing closed loops of
/// line/cubic edges with the interior to the left of every edge.
///
/// Built from a source boundary (resolving self intersections and applying the source
/// winding rule) and mutated only through boolean combination or transform application,
/// so the representation stays self consistent. The empty region has no loops.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region<T = f64> {
    loops: Vec<RegionLoop<T>>,
}

impl<T> Region<T>
where
    T: Real,
{
    /// The empty region.
    #[inline]
    pub fn new() -> Self {
        Self { loops: Vec::new() }
    }

    /// Canonicalizes `boundary` into a region: self intersections are resolved and the
    /// boundary's winding rule decides interior membership.
    pub fn from_boundary(boundary: &Boundary<T>) -> Self {
        Self::from_boundary_opt(boundary, &RegionOptions::new())
    }

    pub fn from_boundary_opt(boundary: &Boundary<T>, options: &RegionOptions<T>) -> Self {
        let operand = Operand::from_boundary(boundary, options.pos_equal_eps);
        Self {
            loops: combine(&operand, &Operand::empty(), BooleanOp::Union, options),
        }
    }

    /// Region covering the given shape's outline.
    pub fn from_shape<S>(shape: &S) -> Self
    where
        S: Shape<T>,
    {
        Self::from_boundary(&shape.boundary())
    }

    #[inline]
    pub fn loops(&self) -> &[RegionLoop<T>] {
        &self.loops
    }

    /// Boolean combination of two regions producing a new canonical region.
    pub fn boolean(&self, op: BooleanOp, other: &Region<T>) -> Self {
        self.boolean_opt(op, other, &RegionOptions::new())
    }

    pub fn boolean_opt(&self, op: BooleanOp, other: &Region<T>, options: &RegionOptions<T>) -> Self {
        let a = Operand::from_loops(&self.loops);
        let b = Operand::from_loops(&other.loops);
        Self {
            loops: combine(&a, &b, op, options),
        }
    }

    #[inline]
    pub fn union(&self, other: &Region<T>) -> Self {
        self.boolean(BooleanOp::Union, other)
    }

    #[inline]
    pub fn intersect(&self, other: &Region<T>) -> Self {
        self.boolean(BooleanOp::Intersect, other)
    }

    #[inline]
    pub fn subtract(&self, other: &Region<T>) -> Self {
        self.boolean(BooleanOp::Subtract, other)
    }

    #[inline]
    pub fn xor(&self, other: &Region<T>) -> Self {
        self.boolean(BooleanOp::Xor, other)
    }

    /// True when every edge is straight.
    pub fn is_polygonal(&self) -> bool {
        self.loops.iter().all(|l| l.edges.iter().all(Edge::is_line))
    }

    /// True when the region is exactly one axis-aligned four edge loop (the empty region
    /// counts as rectangular).
    pub fn is_rectangular(&self) -> bool {
        if self.loops.is_empty() {
            return true;
        }
        if self.loops.len() != 1 {
            return false;
        }
        let edges = &self.loops[0].edges;
        edges.len() == 4
            && edges.iter().all(|e| {
                e.is_line()
                    && ((e.end.x - e.start.x).fuzzy_eq_zero()
                        || (e.end.y - e.start.y).fuzzy_eq_zero())
            })
    }

    /// Signed-crossing (nonzero winding) membership test against the canonical loops.
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        let mut winding = 0i32;
        for l in &self.loops {
            for e in &l.edges {
                winding += e.ray_crossings(point).0;
            }
        }
        winding != 0
    }

    /// Axis-aligned extents as `(min, max)` corner points, `None` when empty.
    pub fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        let mut result: Option<(Vector2<T>, Vector2<T>)> = None;
        for l in &self.loops {
            if let Some((min, max)) = l.bounds() {
                result = Some(match result {
                    Some((lo, hi)) => (
                        Vector2::new(
                            num_traits::real::Real::min(lo.x, min.x),
                            num_traits::real::Real::min(lo.y, min.y),
                        ),
                        Vector2::new(
                            num_traits::real::Real::max(hi.x, max.x),
                            num_traits::real::Real::max(hi.y, max.y),
                        ),
                    ),
                    None => (min, max),
                });
            }
        }
        result
    }

    /// The canonical loops as a boundary segment stream ([WindingRule::NonZero]).
    pub fn to_boundary(&self) -> Boundary<T> {
        let mut segments = Vec::new();
        for l in &self.loops {
            let Some(first) = l.edges.first() else {
                continue;
            };
            segments.push(Segment::MoveTo(first.start));
            for (i, e) in l.edges.iter().enumerate() {
                let is_last = i + 1 == l.edges.len();
                match e.kind {
                    // the final straight edge back to the start is carried by Close
                    EdgeKind::Line if is_last => {}
                    EdgeKind::Line => segments.push(Segment::LineTo(e.end)),
                    EdgeKind::Cubic { ctrl1, ctrl2 } => {
                        segments.push(Segment::CubicTo(ctrl1, ctrl2, e.end));
                    }
                }
            }
            segments.push(Segment::Close);
        }
        Boundary::from_segments(WindingRule::NonZero, segments)
    }

    /// Returns the region mapped through `transform`.
    ///
    /// Affine maps preserve lines and Beziers so nonsingular transforms map the loops
    /// directly (reversing them under a reflection to keep the interior on the left). A
    /// near-singular transform collapses the geometry to a zero-area set, which
    /// re-resolves to the empty region.
    pub fn transformed(&self, transform: &AffineTransform<T>) -> Self {
        let det = transform.determinant();
        if det.abs().fuzzy_eq_zero() {
            return Self::from_boundary(&self.to_boundary().transformed(transform));
        }
        let flip = det < T::zero();
        let loops = self
            .loops
            .iter()
            .map(|l| {
                let edges: Vec<Edge<T>> = if flip {
                    l.edges
                        .iter()
                        .rev()
                        .map(|e| e.reversed().transformed(transform))
                        .collect()
                } else {
                    l.edges.iter().map(|e| e.transformed(transform)).collect()
                };
                RegionLoop { edges }
            })
            .collect();
        Self { loops }
    }

    /// Applies `transform` in place.
    pub fn transform(&mut self, transform: &AffineTransform<T>) {
        *self = self.transformed(transform);
    }

    /// In-place mapping through the inverse of `transform`.
    pub fn inverse_transform(&mut self, transform: &AffineTransform<T>) -> Result<(), Error> {
        let inv = transform.inverse()?;
        self.transform(&inv);
        Ok(())
    }
}

// closed test for an edge against a rectangle, subdividing cubics until flat
fn edge_intersects_rect<T>(edge: &Edge<T>, rect: &Rect<T>, eps: T) -> bool
where
    T: Real,
{
    if edge.is_line() {
        return rect.intersects_line_seg(edge.start, edge.end);
    }
    fn recurse<T>(c: &CubicBezier<T>, rect: &Rect<T>, eps: T, depth: u32) -> bool
    where
        T: Real,
    {
        let (min, max) = c.extents();
        if min.x > rect.max_x() || max.x < rect.min_x() || min.y > rect.max_y() || max.y < rect.min_y()
        {
            return false;
        }
        if depth == 0 || c.flatness_squared() <= eps * eps {
            return rect.intersects_line_seg(c.start, c.end);
        }
        let (l, r) = c.subdivide();
        recurse(&l, rect, eps, depth - 1) || recurse(&r, rect, eps, depth - 1)
    }
    recurse(&edge.as_cubic(), rect, eps, 24)
}

impl<T> Shape<T> for Region<T>
where
    T: Real,
{
    fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        Region::bounds(self)
    }

    fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    fn contains_point(&self, point: Vector2<T>) -> bool {
        Region::contains_point(self, point)
    }

    fn contains_rect(&self, rect: &Rect<T>) -> bool {
        if self.loops.is_empty() || rect.is_empty() {
            return false;
        }
        if !rect.corners().iter().all(|&p| self.contains_point(p)) {
            return false;
        }
        // corners inside and no boundary edge passing through the rect interior; edges
        // merely touching the border are tolerated by insetting the probe rect
        let eps = RegionOptions::<T>::new().pos_equal_eps;
        let two_eps = T::two() * eps;
        let inset = Rect::new(
            rect.x + eps,
            rect.y + eps,
            rect.width - two_eps,
            rect.height - two_eps,
        );
        if inset.is_empty() {
            return true;
        }
        !self
            .loops
            .iter()
            .flat_map(|l| l.edges.iter())
            .any(|e| edge_intersects_rect(e, &inset, eps))
    }

    fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        if self.loops.is_empty() || rect.is_empty() {
            return false;
        }
        if rect.corners().iter().any(|&p| self.contains_point(p)) {
            return true;
        }
        let eps = RegionOptions::<T>::new().pos_equal_eps;
        self.loops
            .iter()
            .flat_map(|l| l.edges.iter())
            .any(|e| edge_intersects_rect(e, rect, eps))
    }

    fn boundary(&self) -> Boundary<T> {
        self.to_boundary()
    }
}
