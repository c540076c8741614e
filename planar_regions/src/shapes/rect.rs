use super::Shape;
use crate::boundary::Boundary;
use crate::core::math::{line_line_intr, LineLineIntr, Vector2};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and dimensions.
///
/// Degenerate dimensions (`width <= 0` or `height <= 0`) make the rectangle empty; empty
/// rectangles contain nothing and have no bounds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T>
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

    /// Rectangle spanning the two corner points (in any order).
    pub fn from_extents(a: Vector2<T>, b: Vector2<T>) -> Self {
        let min_x = num_traits::real::Real::min(a.x, b.x);
        let min_y = num_traits::real::Real::min(a.y, b.y);
        Self::new(
            min_x,
            min_y,
            num_traits::real::Real::max(a.x, b.x) - min_x,
            num_traits::real::Real::max(a.y, b.y) - min_y,
        )
    }

    #[inline]
    pub fn min_x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        Vector2::new(
            self.x + self.width * T::half(),
            self.y + self.height * T::half(),
        )
    }

    /// The four corner points, counter-clockwise from the top-left.
    pub fn corners(&self) -> [Vector2<T>; 4] {
        [
            Vector2::new(self.x, self.y),
            Vector2::new(self.max_x(), self.y),
            Vector2::new(self.max_x(), self.max_y()),
            Vector2::new(self.x, self.max_y()),
        ]
    }

    /// True when the two rectangles overlap in a region of positive area.
    pub fn overlaps(&self, other: &Rect<T>) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// True when the closed rectangle and the closed line segment `a -> b` share a point.
    pub fn intersects_line_seg(&self, a: Vector2<T>, b: Vector2<T>) -> bool {
        if self.is_empty() {
            return false;
        }
        if self.contains_point(a) || self.contains_point(b) {
            return true;
        }
        let corners = self.corners();
        for i in 0..4 {
            let intr = line_line_intr(a, b, corners[i], corners[(i + 1) % 4], T::fuzzy_epsilon());
            if !matches!(intr, LineLineIntr::NoIntersect | LineLineIntr::FalseIntersect { .. }) {
                return true;
            }
        }
        false
    }
}

impl<T> Shape<T> for Rect<T>
where
    T: Real,
{
    fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        if self.is_empty() {
            return None;
        }
        Some((
            Vector2::new(self.x, self.y),
            Vector2::new(self.max_x(), self.max_y()),
        ))
    }

    fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    fn contains_point(&self, point: Vector2<T>) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x <= self.max_x()
            && point.y >= self.y
            && point.y <= self.max_y()
    }

    fn contains_rect(&self, rect: &Rect<T>) -> bool {
        !self.is_empty()
            && !rect.is_empty()
            && rect.x >= self.x
            && rect.y >= self.y
            && rect.max_x() <= self.max_x()
            && rect.max_y() <= self.max_y()
    }

    fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        self.overlaps(rect)
    }

    fn boundary(&self) -> Boundary<T> {
        if self.is_empty() {
            return Boundary::default();
        }
        Boundary::from_polygon(&self.corners())
    }
}
