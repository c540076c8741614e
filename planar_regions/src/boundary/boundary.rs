use super::{FlattenIter, Segment, SegmentIter, WindingRule};
use crate::core::math::{min_max, Vector2};
use crate::core::traits::Real;
use crate::curve::{CubicBezier, QuadraticBezier};
use crate::errors::Error;
use crate::transform::AffineTransform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered segment stream (possibly several subpaths) plus a winding rule.
///
/// Invariant: every subpath begins with [Segment::MoveTo] and draw ops require a current
/// point, enforced by the checked builder methods ([Boundary::line_to] and friends return
/// [Error::NoCurrentPoint] before an initial [Boundary::move_to]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boundary<T = f64> {
    segments: Vec<Segment<T>>,
    winding_rule: WindingRule,
}

impl<T> Boundary<T>
where
    T: Real,
{
    /// New empty boundary with the given winding rule.
    pub fn new(winding_rule: WindingRule) -> Self {
        Self {
            segments: Vec::new(),
            winding_rule,
        }
    }

    /// New empty boundary with the given winding rule and segment capacity reserved.
    pub fn with_capacity(winding_rule: WindingRule, capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            winding_rule,
        }
    }

    /// Closed polygonal boundary ([WindingRule::NonZero]) through the given vertices.
    ///
    /// An empty slice yields an empty boundary.
    pub fn from_polygon(vertexes: &[Vector2<T>]) -> Self {
        let mut result = Self::with_capacity(WindingRule::NonZero, vertexes.len() + 1);
        let mut iter = vertexes.iter();
        if let Some(&first) = iter.next() {
            result.segments.push(Segment::MoveTo(first));
            for &v in iter {
                result.segments.push(Segment::LineTo(v));
            }
            result.segments.push(Segment::Close);
        }
        result
    }

    /// Boundary assembled from an already well formed segment stream.
    ///
    /// The stream is trusted to uphold the subpath invariant (use the checked builder ops
    /// when constructing segment by segment).
    pub fn from_segments<I>(winding_rule: WindingRule, segments: I) -> Self
    where
        I: IntoIterator<Item = Segment<T>>,
    {
        Self {
            segments: segments.into_iter().collect(),
            winding_rule,
        }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    #[inline]
    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        self.winding_rule = winding_rule;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Current point of the in-progress subpath: the end of the last draw op, the last
    /// `MoveTo` point, or the subpath start after a `Close`. `None` before any `MoveTo`.
    pub fn current_point(&self) -> Option<Vector2<T>> {
        let mut subpath_start = None;
        let mut current = None;
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo(p) => {
                    subpath_start = Some(p);
                    current = Some(p);
                }
                Segment::Close => {
                    current = subpath_start;
                }
                _ => {
                    current = seg.end_point();
                }
            }
        }
        current
    }

    /// Begin a new subpath at `point`.
    pub fn move_to(&mut self, point: Vector2<T>) -> &mut Self {
        self.segments.push(Segment::MoveTo(point));
        self
    }

    /// Straight line from the current point to `point`.
    pub fn line_to(&mut self, point: Vector2<T>) -> Result<&mut Self, Error> {
        self.check_current_point()?;
        self.segments.push(Segment::LineTo(point));
        Ok(self)
    }

    /// Quadratic Bezier from the current point through `ctrl` to `point`.
    pub fn quad_to(&mut self, ctrl: Vector2<T>, point: Vector2<T>) -> Result<&mut Self, Error> {
        self.check_current_point()?;
        self.segments.push(Segment::QuadTo(ctrl, point));
        Ok(self)
    }

    /// Cubic Bezier from the current point through `ctrl1`, `ctrl2` to `point`.
    pub fn cubic_to(
        &mut self,
        ctrl1: Vector2<T>,
        ctrl2: Vector2<T>,
        point: Vector2<T>,
    ) -> Result<&mut Self, Error> {
        self.check_current_point()?;
        self.segments.push(Segment::CubicTo(ctrl1, ctrl2, point));
        Ok(self)
    }

    /// Close the current subpath back to its start point.
    pub fn close(&mut self) -> Result<&mut Self, Error> {
        self.check_current_point()?;
        self.segments.push(Segment::Close);
        Ok(self)
    }

    fn check_current_point(&self) -> Result<(), Error> {
        if self.current_point().is_none() {
            return Err(Error::NoCurrentPoint);
        }
        Ok(())
    }

    /// Axis-aligned extents of the boundary as `(min, max)` corner points, `None` if empty.
    ///
    /// Curved segments contribute their exact extents (parametric extrema), not their
    /// control points.
    pub fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        let mut result: Option<(Vector2<T>, Vector2<T>)> = None;
        let mut include = |min: Vector2<T>, max: Vector2<T>| match result {
            Some((ref mut lo, ref mut hi)) => {
                lo.x = num_traits::real::Real::min(lo.x, min.x);
                lo.y = num_traits::real::Real::min(lo.y, min.y);
                hi.x = num_traits::real::Real::max(hi.x, max.x);
                hi.y = num_traits::real::Real::max(hi.y, max.y);
            }
            None => {
                result = Some((min, max));
            }
        };

        let mut current = Vector2::zero();
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo(p) => {
                    include(p, p);
                    current = p;
                }
                Segment::LineTo(p) => {
                    let (min_x, max_x) = min_max(current.x, p.x);
                    let (min_y, max_y) = min_max(current.y, p.y);
                    include(Vector2::new(min_x, min_y), Vector2::new(max_x, max_y));
                    current = p;
                }
                Segment::QuadTo(c, p) => {
                    let (min, max) = QuadraticBezier::new(current, c, p).extents();
                    include(min, max);
                    current = p;
                }
                Segment::CubicTo(c1, c2, p) => {
                    let (min, max) = CubicBezier::new(current, c1, c2, p).extents();
                    include(min, max);
                    current = p;
                }
                Segment::Close => {}
            }
        }
        result
    }

    /// Returns the boundary with every segment mapped through `transform`.
    pub fn transformed(&self, transform: &AffineTransform<T>) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|s| s.transformed(transform))
                .collect(),
            winding_rule: self.winding_rule,
        }
    }

    /// Forward-only cursor over the boundary's segments.
    pub fn iter(&self) -> SegmentIter<'_, T> {
        SegmentIter::new(self)
    }

    /// Cursor with every yielded segment mapped through `transform`.
    pub fn iter_transformed(&self, transform: AffineTransform<T>) -> SegmentIter<'_, T> {
        SegmentIter::transformed(self, transform)
    }

    /// Cursor substituting curves with line segments within `flatness` of the true curve.
    pub fn iter_flattened(
        &self,
        flatness: T,
        recursion_limit: u32,
    ) -> Result<FlattenIter<'_, T>, Error> {
        FlattenIter::new(self.iter(), flatness, recursion_limit)
    }

    /// Append all of `other`'s subpaths to this boundary (winding rule kept from `self`).
    pub fn append(&mut self, other: &Boundary<T>) {
        self.segments.extend_from_slice(other.segments());
    }
}
