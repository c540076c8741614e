use super::arc::push_arc_cubics;
use super::{Rect, Shape};
use crate::boundary::{Boundary, Segment, WindingRule};
use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rectangle with elliptical corner arcs of diameter `arc_width` by `arc_height` (clamped
/// to the rectangle's dimensions).
///
/// Geometrically the shape is the Minkowski sum of the deflated inner rectangle and a
/// quarter-arc corner ellipse, which gives closed-form predicates: a point is inside when
/// the sum of its per-axis normalized gaps to the inner rectangle is at most one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RoundRect<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
    pub arc_width: T,
    pub arc_height: T,
}

// normalized squared gap along one axis, zero when inside the inner interval
fn axis_term<T>(gap: T, radius: T) -> T
where
    T: Real,
{
    if gap <= T::zero() {
        T::zero()
    } else {
        let n = gap / radius;
        n * n
    }
}

impl<T> RoundRect<T>
where
    T: Real,
{
    pub fn new(x: T, y: T, width: T, height: T, arc_width: T, arc_height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
            arc_width,
            arc_height,
        }
    }

    // corner radii clamped to non-negative and at most half the dimensions
    fn corner_radii(&self) -> (T, T) {
        let rx = num_traits::clamp(self.arc_width, T::zero(), self.width) * T::half();
        let ry = num_traits::clamp(self.arc_height, T::zero(), self.height) * T::half();
        (rx, ry)
    }

    // inner rectangle interval bounds: (ix0, ix1, iy0, iy1)
    fn inner_extents(&self) -> (T, T, T, T) {
        let (rx, ry) = self.corner_radii();
        (
            self.x + rx,
            self.x + self.width - rx,
            self.y + ry,
            self.y + self.height - ry,
        )
    }
}

impl<T> Shape<T> for RoundRect<T>
where
    T: Real,
{
    fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        if self.is_empty() {
            return None;
        }
        Some((
            Vector2::new(self.x, self.y),
            Vector2::new(self.x + self.width, self.y + self.height),
        ))
    }

    fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    fn contains_point(&self, point: Vector2<T>) -> bool {
        if self.is_empty()
            || point.x < self.x
            || point.x > self.x + self.width
            || point.y < self.y
            || point.y > self.y + self.height
        {
            return false;
        }
        let (rx, ry) = self.corner_radii();
        let (ix0, ix1, iy0, iy1) = self.inner_extents();
        let gx = num_traits::real::Real::max(ix0 - point.x, point.x - ix1);
        let gy = num_traits::real::Real::max(iy0 - point.y, point.y - iy1);
        axis_term(gx, rx) + axis_term(gy, ry) <= T::one()
    }

    fn contains_rect(&self, rect: &Rect<T>) -> bool {
        // convex, so corner containment suffices
        !self.is_empty()
            && !rect.is_empty()
            && rect.corners().iter().all(|&p| self.contains_point(p))
    }

    fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        if self.is_empty() || rect.is_empty() {
            return false;
        }
        let outer = Rect::new(self.x, self.y, self.width, self.height);
        if !outer.overlaps(rect) {
            return false;
        }
        // minimize the separable gap function over the overlap rectangle, per axis
        let (rx, ry) = self.corner_radii();
        let (ix0, ix1, iy0, iy1) = self.inner_extents();
        let min = |a: T, b: T| num_traits::real::Real::min(a, b);
        let max = |a: T, b: T| num_traits::real::Real::max(a, b);
        let (ox0, ox1) = (max(rect.min_x(), self.x), min(rect.max_x(), self.x + self.width));
        let (oy0, oy1) = (max(rect.min_y(), self.y), min(rect.max_y(), self.y + self.height));
        let gx = max(ix0 - ox1, ox0 - ix1);
        let gy = max(iy0 - oy1, oy0 - iy1);
        axis_term(gx, rx) + axis_term(gy, ry) <= T::one()
    }

    fn boundary(&self) -> Boundary<T> {
        if self.is_empty() {
            return Boundary::default();
        }
        let (rx, ry) = self.corner_radii();
        let (ix0, ix1, iy0, iy1) = self.inner_extents();
        let (x1, y1) = (self.x + self.width, self.y + self.height);

        // walk counter-clockwise in the Y-down angle convention, one quarter arc per
        // corner, skipping degenerate straight edges
        let deg = |v: f64| T::from(v).unwrap();
        let mut segments = Vec::new();
        let line_to = |segments: &mut Vec<Segment<T>>, p: Vector2<T>| {
            if let Some(last) = segments.last().and_then(|s: &Segment<T>| s.end_point()) {
                if last.fuzzy_eq(p) {
                    return;
                }
            }
            segments.push(Segment::LineTo(p));
        };

        let rounded = !rx.fuzzy_eq_zero() && !ry.fuzzy_eq_zero();
        let arc = |segments: &mut Vec<Segment<T>>, center: Vector2<T>, start: f64| {
            if rounded {
                push_arc_cubics(segments, center, rx, ry, deg(start), deg(90.0));
            }
        };

        segments.push(Segment::MoveTo(Vector2::new(x1, iy0)));
        arc(&mut segments, Vector2::new(ix1, iy0), 0.0);
        line_to(&mut segments, Vector2::new(ix0, self.y));
        arc(&mut segments, Vector2::new(ix0, iy0), 90.0);
        line_to(&mut segments, Vector2::new(self.x, iy1));
        arc(&mut segments, Vector2::new(ix0, iy1), 180.0);
        line_to(&mut segments, Vector2::new(ix1, y1));
        arc(&mut segments, Vector2::new(ix1, iy1), 270.0);
        segments.push(Segment::Close);
        Boundary::from_segments(WindingRule::NonZero, segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn corner_notch_is_outside() {
        let rr = RoundRect::new(0.0, 0.0, 10.0, 10.0, 4.0, 4.0);
        // the sharp corner of the outer rect is rounded away
        assert!(!rr.contains_point(vec2(0.1, 0.1)));
        assert!(rr.contains_point(vec2(2.0, 2.0)));
        assert!(rr.contains_point(vec2(5.0, 0.0)));
        assert!(rr.contains_point(vec2(0.0, 5.0)));
    }

    #[test]
    fn rect_in_corner_notch_does_not_intersect() {
        let rr = RoundRect::new(0.0, 0.0, 10.0, 10.0, 8.0, 8.0);
        // overlaps the outer bounds but sits wholly in the rounded away notch
        assert!(!rr.intersects_rect(&Rect::new(0.0, 0.0, 0.5, 0.5)));
        assert!(rr.intersects_rect(&Rect::new(0.0, 0.0, 3.0, 3.0)));
    }

    #[test]
    fn arc_dims_clamp_to_ellipse() {
        // arcs larger than the rect collapse it to an ellipse
        let rr = RoundRect::new(0.0, 0.0, 4.0, 2.0, 10.0, 10.0);
        assert!(!rr.contains_point(vec2(0.2, 0.2)));
        assert!(rr.contains_point(vec2(2.0, 1.0)));
    }
}
