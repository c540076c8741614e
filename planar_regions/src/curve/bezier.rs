use super::solve_quadratic;
use crate::core::math::{line_seg_dist_squared, min_max, Vector2};
use crate::core::traits::Real;
use crate::transform::AffineTransform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quadratic Bezier curve defined by start point, one control point, and end point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticBezier<T = f64> {
    pub start: Vector2<T>,
    pub ctrl: Vector2<T>,
    pub end: Vector2<T>,
}

/// Cubic Bezier curve defined by start point, two control points, and end point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicBezier<T = f64> {
    pub start: Vector2<T>,
    pub ctrl1: Vector2<T>,
    pub ctrl2: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T> QuadraticBezier<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, ctrl: Vector2<T>, end: Vector2<T>) -> Self {
        Self { start, ctrl, end }
    }

    /// Evaluate the curve position at parametric value `t` (de Casteljau construction).
    pub fn point_at(&self, t: T) -> Vector2<T> {
        let p01 = self.start.lerp(self.ctrl, t);
        let p12 = self.ctrl.lerp(self.end, t);
        p01.lerp(p12, t)
    }

    /// Derivative (tangent direction) of the curve at parametric value `t`.
    pub fn tangent_at(&self, t: T) -> Vector2<T> {
        let d0 = self.ctrl - self.start;
        let d1 = self.end - self.ctrl;
        d0.lerp(d1, t).scale(T::two())
    }

    /// Subdivide the curve at `t = 0.5` using the de Casteljau midpoint construction.
    ///
    /// This is exact (repeated averaging of adjacent control points, no trigonometry) and
    /// preserves the endpoints.
    pub fn subdivide(&self) -> (Self, Self) {
        let half = T::half();
        let l_ctrl = (self.start + self.ctrl).scale(half);
        let r_ctrl = (self.ctrl + self.end).scale(half);
        let mid = (l_ctrl + r_ctrl).scale(half);
        (
            Self::new(self.start, l_ctrl, mid),
            Self::new(mid, r_ctrl, self.end),
        )
    }

    /// Split the curve at an arbitrary parametric value `t`, returning the two half curves.
    pub fn split(&self, t: T) -> (Self, Self) {
        let p01 = self.start.lerp(self.ctrl, t);
        let p12 = self.ctrl.lerp(self.end, t);
        let mid = p01.lerp(p12, t);
        (
            Self::new(self.start, p01, mid),
            Self::new(mid, p12, self.end),
        )
    }

    /// Squared flatness of the curve: the squared distance from the control point to the chord
    /// connecting the endpoints.
    ///
    /// Cheap (no square root); compared against `tolerance * tolerance` as the subdivision
    /// termination test.
    #[inline]
    pub fn flatness_squared(&self) -> T {
        line_seg_dist_squared(self.start, self.end, self.ctrl)
    }

    /// Axis-aligned extents of the curve as `(min, max)` corner points.
    ///
    /// Computed by solving the derivative for interior extrema in `(0, 1)` and taking min/max
    /// over the endpoints and valid extrema.
    pub fn extents(&self) -> (Vector2<T>, Vector2<T>) {
        let axis_extents = |s: T, c: T, e: T| {
            let (mut lo, mut hi) = min_max(s, e);
            // derivative is linear: 2 * ((c - s) + t * (s - 2c + e))
            let denom = s - T::two() * c + e;
            if !denom.fuzzy_eq_zero() {
                let t = (s - c) / denom;
                if t > T::zero() && t < T::one() {
                    let omt = T::one() - t;
                    let v = omt * omt * s + T::two() * omt * t * c + t * t * e;
                    if v < lo {
                        lo = v;
                    }
                    if v > hi {
                        hi = v;
                    }
                }
            }
            (lo, hi)
        };

        let (min_x, max_x) = axis_extents(self.start.x, self.ctrl.x, self.end.x);
        let (min_y, max_y) = axis_extents(self.start.y, self.ctrl.y, self.end.y);
        (Vector2::new(min_x, min_y), Vector2::new(max_x, max_y))
    }

    /// Degree elevate to an exactly equivalent cubic curve.
    pub fn to_cubic(&self) -> CubicBezier<T> {
        let third = T::one() / T::three();
        let two_thirds = T::two() / T::three();
        CubicBezier::new(
            self.start,
            self.start.scale(third) + self.ctrl.scale(two_thirds),
            self.end.scale(third) + self.ctrl.scale(two_thirds),
            self.end,
        )
    }

    /// Returns the same curve traversed in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.ctrl, self.start)
    }

    /// Returns the curve with every control point mapped through `transform`.
    ///
    /// Affine maps preserve Beziers, so this is the exact image of the curve.
    pub fn transformed(&self, transform: &AffineTransform<T>) -> Self {
        Self::new(
            transform.transform_point(self.start),
            transform.transform_point(self.ctrl),
            transform.transform_point(self.end),
        )
    }
}

impl<T> CubicBezier<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, ctrl1: Vector2<T>, ctrl2: Vector2<T>, end: Vector2<T>) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Evaluate the curve position at parametric value `t` (de Casteljau construction).
    pub fn point_at(&self, t: T) -> Vector2<T> {
        let p01 = self.start.lerp(self.ctrl1, t);
        let p12 = self.ctrl1.lerp(self.ctrl2, t);
        let p23 = self.ctrl2.lerp(self.end, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        p012.lerp(p123, t)
    }

    /// Derivative (tangent direction) of the curve at parametric value `t`.
    pub fn tangent_at(&self, t: T) -> Vector2<T> {
        let d0 = self.ctrl1 - self.start;
        let d1 = self.ctrl2 - self.ctrl1;
        let d2 = self.end - self.ctrl2;
        let d01 = d0.lerp(d1, t);
        let d12 = d1.lerp(d2, t);
        d01.lerp(d12, t).scale(T::three())
    }

    /// Subdivide the curve at `t = 0.5` using the de Casteljau midpoint construction.
    ///
    /// This is exact (repeated averaging of adjacent control points, no trigonometry) and
    /// preserves the endpoints.
    pub fn subdivide(&self) -> (Self, Self) {
        let half = T::half();
        let l1 = (self.start + self.ctrl1).scale(half);
        let m = (self.ctrl1 + self.ctrl2).scale(half);
        let r2 = (self.ctrl2 + self.end).scale(half);
        let l2 = (l1 + m).scale(half);
        let r1 = (m + r2).scale(half);
        let mid = (l2 + r1).scale(half);
        (
            Self::new(self.start, l1, l2, mid),
            Self::new(mid, r1, r2, self.end),
        )
    }

    /// Split the curve at an arbitrary parametric value `t`, returning the two half curves.
    pub fn split(&self, t: T) -> (Self, Self) {
        let p01 = self.start.lerp(self.ctrl1, t);
        let p12 = self.ctrl1.lerp(self.ctrl2, t);
        let p23 = self.ctrl2.lerp(self.end, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let mid = p012.lerp(p123, t);
        (
            Self::new(self.start, p01, p012, mid),
            Self::new(mid, p123, p23, self.end),
        )
    }

    /// Squared flatness of the curve: the maximum squared distance from either interior control
    /// point to the chord connecting the endpoints.
    #[inline]
    pub fn flatness_squared(&self) -> T {
        let d1 = line_seg_dist_squared(self.start, self.end, self.ctrl1);
        let d2 = line_seg_dist_squared(self.start, self.end, self.ctrl2);
        if d1 > d2 {
            d1
        } else {
            d2
        }
    }

    /// Per-axis polynomial coefficients of the curve, low-to-high degree: `(x, y)` each as
    /// `[c0, c1, c2, c3]` with `w(t) = c0 + c1*t + c2*t^2 + c3*t^3`.
    pub fn coefficients(&self) -> ([T; 4], [T; 4]) {
        let axis = |s: T, c1: T, c2: T, e: T| {
            [
                s,
                T::three() * (c1 - s),
                T::three() * (s - T::two() * c1 + c2),
                e - s + T::three() * (c1 - c2),
            ]
        };
        (
            axis(self.start.x, self.ctrl1.x, self.ctrl2.x, self.end.x),
            axis(self.start.y, self.ctrl1.y, self.ctrl2.y, self.end.y),
        )
    }

    /// Axis-aligned extents of the curve as `(min, max)` corner points.
    ///
    /// Computed by solving the derivative for interior extrema in `(0, 1)` and taking min/max
    /// over the endpoints and valid extrema.
    pub fn extents(&self) -> (Vector2<T>, Vector2<T>) {
        let axis_extents = |s: T, c1: T, c2: T, e: T, point_at: &dyn Fn(T) -> T| {
            let (mut lo, mut hi) = min_max(s, e);
            // derivative coefficients (low-to-high): 3(c1-s), 6(s-2c1+c2), 3(-s+3c1-3c2+e)
            let d0 = T::three() * (c1 - s);
            let d1 = T::three() * T::two() * (s - T::two() * c1 + c2);
            let d2 = T::three() * (e - s + T::three() * (c1 - c2));
            for t in solve_quadratic(d0, d1, d2) {
                if t > T::zero() && t < T::one() {
                    let v = point_at(t);
                    if v < lo {
                        lo = v;
                    }
                    if v > hi {
                        hi = v;
                    }
                }
            }
            (lo, hi)
        };

        let (min_x, max_x) = axis_extents(
            self.start.x,
            self.ctrl1.x,
            self.ctrl2.x,
            self.end.x,
            &|t| self.point_at(t).x,
        );
        let (min_y, max_y) = axis_extents(
            self.start.y,
            self.ctrl1.y,
            self.ctrl2.y,
            self.end.y,
            &|t| self.point_at(t).y,
        );
        (Vector2::new(min_x, min_y), Vector2::new(max_x, max_y))
    }

    /// Returns the same curve traversed in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.ctrl2, self.ctrl1, self.start)
    }

    /// Returns the curve with every control point mapped through `transform`.
    ///
    /// Affine maps preserve Beziers, so this is the exact image of the curve.
    pub fn transformed(&self, transform: &AffineTransform<T>) -> Self {
        Self::new(
            transform.transform_point(self.start),
            transform.transform_point(self.ctrl1),
            transform.transform_point(self.ctrl2),
            transform.transform_point(self.end),
        )
    }

    /// Fuzzy equality over all four control points.
    pub fn fuzzy_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.start.fuzzy_eq_eps(other.start, eps)
            && self.ctrl1.fuzzy_eq_eps(other.ctrl1, eps)
            && self.ctrl2.fuzzy_eq_eps(other.ctrl2, eps)
            && self.end.fuzzy_eq_eps(other.end, eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn quad_subdivide_midpoint_construction() {
        let q = QuadraticBezier::new(vec2(0.0, 0.0), vec2(2.0, 6.0), vec2(6.0, 2.0));
        let (l, r) = q.subdivide();
        assert!(l.start.fuzzy_eq(vec2(0.0, 0.0)));
        assert!(l.ctrl.fuzzy_eq(vec2(1.0, 3.0)));
        assert!(l.end.fuzzy_eq(vec2(2.5, 3.5)));
        assert!(r.start.fuzzy_eq(vec2(2.5, 3.5)));
        assert!(r.ctrl.fuzzy_eq(vec2(4.0, 4.0)));
        assert!(r.end.fuzzy_eq(vec2(6.0, 2.0)));
    }

    #[test]
    fn split_matches_evaluation() {
        let c = CubicBezier::new(
            vec2(0.0, 0.0),
            vec2(1.0, 2.0),
            vec2(3.0, 2.0),
            vec2(4.0, 0.0),
        );
        let (l, r) = c.split(0.25);
        assert!(l.end.fuzzy_eq(c.point_at(0.25)));
        // the halves trace the same curve
        assert!(l.point_at(0.5).fuzzy_eq(c.point_at(0.125)));
        assert!(r.point_at(0.5).fuzzy_eq(c.point_at(0.25 + 0.75 * 0.5)));
    }

    #[test]
    fn degree_elevation_preserves_curve() {
        let q = QuadraticBezier::new(vec2(0.0, 0.0), vec2(2.0, 6.0), vec2(6.0, 2.0));
        let c = q.to_cubic();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!(c.point_at(t).fuzzy_eq(q.point_at(t)));
        }
    }

    #[test]
    fn cubic_extents_cover_extrema() {
        // symmetric arch peaking between the endpoints
        let c = CubicBezier::new(
            vec2(0.0, 0.0),
            vec2(1.0, 2.0),
            vec2(3.0, 2.0),
            vec2(4.0, 0.0),
        );
        let (min, max) = c.extents();
        assert_fuzzy_eq!(min.x, 0.0);
        assert_fuzzy_eq!(min.y, 0.0);
        assert_fuzzy_eq!(max.x, 4.0);
        assert_fuzzy_eq!(max.y, c.point_at(0.5).y);
    }

    #[test]
    fn flatness_of_straight_control_polygon_is_zero() {
        let c = CubicBezier::new(
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            vec2(2.0, 2.0),
            vec2(3.0, 3.0),
        );
        assert!(c.flatness_squared().fuzzy_eq_zero());
    }
}
