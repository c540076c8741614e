use super::arc::{ellipse_point, push_arc_cubics};
use super::{Rect, Shape};
use crate::boundary::{Boundary, Segment, WindingRule};
use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned ellipse inscribed in the box `(x, y, width, height)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ellipse<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Ellipse<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        Vector2::new(
            self.x + self.width * T::half(),
            self.y + self.height * T::half(),
        )
    }

    #[inline]
    fn radii(&self) -> (T, T) {
        (self.width * T::half(), self.height * T::half())
    }

    // squared normalized distance of `point` from the center (<= 1 means inside)
    fn normalized_dist_squared(&self, point: Vector2<T>) -> T {
        let (rx, ry) = self.radii();
        let c = self.center();
        let nx = (point.x - c.x) / rx;
        let ny = (point.y - c.y) / ry;
        nx * nx + ny * ny
    }
}

impl<T> Shape<T> for Ellipse<T>
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
        !self.is_empty() && self.normalized_dist_squared(point) <= T::one()
    }

    fn contains_rect(&self, rect: &Rect<T>) -> bool {
        // the ellipse is convex so corner containment suffices
        !self.is_empty()
            && !rect.is_empty()
            && rect.corners().iter().all(|&p| self.contains_point(p))
    }

    fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        if self.is_empty() || rect.is_empty() {
            return false;
        }
        // nearest point of the rect to the center, per axis; the per-axis scaling to the
        // unit circle makes the clamp exact for an axis-aligned ellipse
        let c = self.center();
        let nearest = Vector2::new(
            num_traits::clamp(c.x, rect.min_x(), rect.max_x()),
            num_traits::clamp(c.y, rect.min_y(), rect.max_y()),
        );
        self.normalized_dist_squared(nearest) <= T::one()
    }

    fn boundary(&self) -> Boundary<T> {
        if self.is_empty() {
            return Boundary::default();
        }
        let (rx, ry) = self.radii();
        let c = self.center();
        let mut segments = Vec::with_capacity(6);
        segments.push(Segment::MoveTo(ellipse_point(c, rx, ry, T::zero())));
        push_arc_cubics(&mut segments, c, rx, ry, T::zero(), T::from(360.0).unwrap());
        segments.push(Segment::Close);
        Boundary::from_segments(WindingRule::NonZero, segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn contains_is_the_normalized_disc_test() {
        let e = Ellipse::new(0.0, 0.0, 4.0, 2.0);
        assert!(e.contains_point(vec2(2.0, 1.0)));
        assert!(e.contains_point(vec2(4.0, 1.0)));
        assert!(!e.contains_point(vec2(3.9, 0.1)));
    }

    #[test]
    fn rect_intersection_uses_nearest_point() {
        let e = Ellipse::new(0.0, 0.0, 4.0, 2.0);
        assert!(e.intersects_rect(&Rect::new(3.5, 0.5, 2.0, 1.0)));
        // corner box outside the ellipse even though it overlaps the bounds
        assert!(!e.intersects_rect(&Rect::new(3.7, -0.5, 2.0, 0.6)));
    }

    #[test]
    fn boundary_is_four_cubics() {
        let e = Ellipse::new(0.0, 0.0, 4.0, 2.0);
        let segs = e.boundary();
        assert_eq!(segs.segments().len(), 6);
        assert!(segs.segments()[1..5].iter().all(|s| s.is_curve()));
    }
}
