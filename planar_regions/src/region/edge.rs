use crate::core::math::{dist_squared, Vector2};
use crate::core::traits::Real;
use crate::curve::{solve_cubic, CubicBezier};
use crate::transform::AffineTransform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry of a region edge.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EdgeKind<T = f64> {
    /// Straight segment between the edge endpoints.
    Line,
    /// Cubic Bezier between the edge endpoints (quadratic input is degree elevated on
    /// region construction).
    Cubic {
        ctrl1: Vector2<T>,
        ctrl2: Vector2<T>,
    },
}

/// One directed edge of a region loop: explicit endpoints plus the curve geometry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
    pub kind: EdgeKind<T>,
}

impl<T> Edge<T>
where
    T: Real,
{
    #[inline]
    pub fn line(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self {
            start,
            end,
            kind: EdgeKind::Line,
        }
    }

    #[inline]
    pub fn cubic(start: Vector2<T>, ctrl1: Vector2<T>, ctrl2: Vector2<T>, end: Vector2<T>) -> Self {
        Self {
            start,
            end,
            kind: EdgeKind::Cubic { ctrl1, ctrl2 },
        }
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self.kind, EdgeKind::Line)
    }

    /// The edge as a cubic Bezier (lines get their collinear degree elevation).
    pub fn as_cubic(&self) -> CubicBezier<T> {
        match self.kind {
            EdgeKind::Line => {
                let third = T::one() / T::three();
                let d = (self.end - self.start).scale(third);
                CubicBezier::new(self.start, self.start + d, self.end - d, self.end)
            }
            EdgeKind::Cubic { ctrl1, ctrl2 } => {
                CubicBezier::new(self.start, ctrl1, ctrl2, self.end)
            }
        }
    }

    pub fn point_at(&self, t: T) -> Vector2<T> {
        match self.kind {
            EdgeKind::Line => self.start.lerp(self.end, t),
            EdgeKind::Cubic { .. } => self.as_cubic().point_at(t),
        }
    }

    pub fn tangent_at(&self, t: T) -> Vector2<T> {
        match self.kind {
            EdgeKind::Line => self.end - self.start,
            EdgeKind::Cubic { .. } => {
                let tangent = self.as_cubic().tangent_at(t);
                if tangent.length_squared().fuzzy_eq_zero() {
                    // cusp or degenerate control cage, fall back to the chord direction
                    self.end - self.start
                } else {
                    tangent
                }
            }
        }
    }

    /// Splits the edge at parameter `t` into two edges covering `[0, t]` and `[t, 1]`.
    pub fn split(&self, t: T) -> (Edge<T>, Edge<T>) {
        match self.kind {
            EdgeKind::Line => {
                let mid = self.start.lerp(self.end, t);
                (Edge::line(self.start, mid), Edge::line(mid, self.end))
            }
            EdgeKind::Cubic { .. } => {
                let (l, r) = self.as_cubic().split(t);
                (
                    Edge::cubic(l.start, l.ctrl1, l.ctrl2, l.end),
                    Edge::cubic(r.start, r.ctrl1, r.ctrl2, r.end),
                )
            }
        }
    }

    /// Axis-aligned extents of the edge as `(min, max)` corner points.
    pub fn bounds(&self) -> (Vector2<T>, Vector2<T>) {
        match self.kind {
            EdgeKind::Line => {
                let min = Vector2::new(
                    num_traits::real::Real::min(self.start.x, self.end.x),
                    num_traits::real::Real::min(self.start.y, self.end.y),
                );
                let max = Vector2::new(
                    num_traits::real::Real::max(self.start.x, self.end.x),
                    num_traits::real::Real::max(self.start.y, self.end.y),
                );
                (min, max)
            }
            EdgeKind::Cubic { .. } => self.as_cubic().extents(),
        }
    }

    pub fn reversed(&self) -> Self {
        match self.kind {
            EdgeKind::Line => Edge::line(self.end, self.start),
            EdgeKind::Cubic { ctrl1, ctrl2 } => Edge::cubic(self.end, ctrl2, ctrl1, self.start),
        }
    }

    pub fn transformed(&self, transform: &AffineTransform<T>) -> Self {
        let start = transform.transform_point(self.start);
        let end = transform.transform_point(self.end);
        match self.kind {
            EdgeKind::Line => Edge::line(start, end),
            EdgeKind::Cubic { ctrl1, ctrl2 } => Edge::cubic(
                start,
                transform.transform_point(ctrl1),
                transform.transform_point(ctrl2),
                end,
            ),
        }
    }

    /// True when the edge is geometrically a point (within `eps` positionally).
    pub fn is_zero_length(&self, eps: T) -> bool {
        if !self.start.fuzzy_eq_eps(self.end, eps) {
            return false;
        }
        match self.kind {
            EdgeKind::Line => true,
            EdgeKind::Cubic { .. } => {
                let (min, max) = self.bounds();
                dist_squared(min, max) < eps * eps
            }
        }
    }

    /// Signed and unsigned crossing contribution of the horizontal ray from `point` toward
    /// +x against this edge: `(winding_delta, crossing_count)`.
    ///
    /// Crossings at the edge's `t = 1` endpoint are attributed to the successor edge (the
    /// parameter interval is half open) so shared loop vertices count once. Grazing
    /// (tangential) contacts contribute nothing.
    pub fn ray_crossings(&self, point: Vector2<T>) -> (i32, u32) {
        match self.kind {
            EdgeKind::Line => {
                let (a, b) = (self.start, self.end);
                let cross = (b - a).perp_dot(point - a);
                if a.y <= point.y {
                    if b.y > point.y && cross > T::zero() {
                        return (1, 1);
                    }
                } else if b.y <= point.y && cross < T::zero() {
                    return (-1, 1);
                }
                (0, 0)
            }
            EdgeKind::Cubic { .. } => {
                let curve = self.as_cubic();
                let (cx, cy) = curve.coefficients();
                let roots = solve_cubic(cy[0] - point.y, cy[1], cy[2], cy[3]);
                let mut winding = 0;
                let mut count = 0;
                for t in roots {
                    if t < T::zero() || t >= T::one() {
                        continue;
                    }
                    let x = cx[0] + t * (cx[1] + t * (cx[2] + t * cx[3]));
                    if x <= point.x {
                        continue;
                    }
                    let dy = cy[1] + t * (T::two() * cy[2] + T::three() * t * cy[3]);
                    if dy > T::zero() {
                        winding += 1;
                        count += 1;
                    } else if dy < T::zero() {
                        winding -= 1;
                        count += 1;
                    }
                }
                (winding, count)
            }
        }
    }
}
