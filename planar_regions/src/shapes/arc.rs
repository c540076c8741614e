use super::{Rect, Shape};
use crate::boundary::{Boundary, Segment, WindingRule};
use crate::core::math::{is_left, Vector2};
use crate::core::traits::Real;
use crate::curve::solve_quadratic;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an arc's boundary is closed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArcClosure {
    /// No closing segment, the subpath remains open.
    Open,
    /// A single straight segment between the arc's endpoints.
    Chord,
    /// Two radii to the center of the bounding ellipse.
    Pie,
}

/// Elliptical arc within the axis-aligned bounding box `(x, y, width, height)`.
///
/// Angles are in degrees: 0 at the rightmost point of the bounding ellipse, increasing
/// counter-clockwise in the Y-down frame, so `P(a) = (cx + rx*cos a, cy - ry*sin a)`.
/// Negative extents sweep the opposite way. The containment predicates treat `Open` arcs
/// like `Chord` arcs (an open outline still encloses the chord-cut region).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
    pub start_angle: T,
    pub extent_angle: T,
    pub closure: ArcClosure,
}

/// Point on the axis-aligned ellipse at `angle_deg` under the Y-down angle convention.
pub(crate) fn ellipse_point<T>(center: Vector2<T>, rx: T, ry: T, angle_deg: T) -> Vector2<T>
where
    T: Real,
{
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vector2::new(center.x + rx * cos, center.y - ry * sin)
}

/// Appends cubic segments tracing the elliptical arc from `start_deg` sweeping
/// `extent_deg`, one cubic per at most 90 degrees, control distance `4/3 * tan(sweep/4)`.
///
/// The caller must already be positioned at the arc's start point.
pub(crate) fn push_arc_cubics<T>(
    out: &mut Vec<Segment<T>>,
    center: Vector2<T>,
    rx: T,
    ry: T,
    start_deg: T,
    extent_deg: T,
) where
    T: Real,
{
    if extent_deg.fuzzy_eq_zero() {
        return;
    }
    let ninety = T::from(90.0).unwrap();
    let piece_count: usize = num_traits::cast((extent_deg.abs() / ninety).ceil()).unwrap_or(1);
    let piece_count = piece_count.max(1);
    let step = extent_deg / T::from(piece_count).unwrap();

    // controls computed on the unit circle in standard math orientation then mapped into
    // the Y-down ellipse frame (affine maps preserve Beziers, so the mapping is exact)
    let map = |u: Vector2<T>| Vector2::new(center.x + rx * u.x, center.y - ry * u.y);
    for i in 0..piece_count {
        let a = (start_deg + T::from(i).unwrap() * step).to_radians();
        let b = a + step.to_radians();
        let k = T::four() / T::three() * ((b - a) / T::four()).tan();
        let (sin_a, cos_a) = a.sin_cos();
        let (sin_b, cos_b) = b.sin_cos();
        let c1 = Vector2::new(cos_a - k * sin_a, sin_a + k * cos_a);
        let c2 = Vector2::new(cos_b + k * sin_b, sin_b - k * cos_b);
        let end = Vector2::new(cos_b, sin_b);
        out.push(Segment::CubicTo(map(c1), map(c2), map(end)));
    }
}

/// Parametric values `t` in `[0, 1]` where the segment `a -> b` crosses the ellipse.
pub(crate) fn ellipse_seg_intersections<T>(
    center: Vector2<T>,
    rx: T,
    ry: T,
    a: Vector2<T>,
    b: Vector2<T>,
) -> Vec<T>
where
    T: Real,
{
    if rx.fuzzy_eq_zero() || ry.fuzzy_eq_zero() {
        return Vec::new();
    }
    // substitute the segment's parametric form into the normalized ellipse equation
    let ex = (a.x - center.x) / rx;
    let ey = (a.y - center.y) / ry;
    let fx = (b.x - a.x) / rx;
    let fy = (b.y - a.y) / ry;
    let c0 = ex * ex + ey * ey - T::one();
    let c1 = T::two() * (ex * fx + ey * fy);
    let c2 = fx * fx + fy * fy;
    solve_quadratic(c0, c1, c2)
        .into_iter()
        .filter(|&t| t >= T::zero() && t <= T::one())
        .collect()
}

impl<T> Arc<T>
where
    T: Real,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: T,
        y: T,
        width: T,
        height: T,
        start_angle: T,
        extent_angle: T,
        closure: ArcClosure,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            start_angle,
            extent_angle,
            closure,
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

    /// Point on the bounding ellipse at `angle_deg`.
    pub fn point_at_angle(&self, angle_deg: T) -> Vector2<T> {
        let (rx, ry) = self.radii();
        ellipse_point(self.center(), rx, ry, angle_deg)
    }

    /// The arc's start point (`point_at_angle(start_angle)`).
    #[inline]
    pub fn start_point(&self) -> Vector2<T> {
        self.point_at_angle(self.start_angle)
    }

    /// The arc's end point (`point_at_angle(start_angle + extent_angle)`).
    #[inline]
    pub fn end_point(&self) -> Vector2<T> {
        self.point_at_angle(self.start_angle + self.extent_angle)
    }

    /// True when the angular sweep covers `angle_deg` (angles taken mod 360).
    pub fn contains_angle(&self, angle_deg: T) -> bool {
        let full = T::from(360.0).unwrap();
        let extent = self.extent_angle;
        if extent.abs() >= full {
            return true;
        }
        let mut rel = (angle_deg - self.start_angle) % full;
        if rel < T::zero() {
            rel = rel + full;
        }
        if extent >= T::zero() {
            rel <= extent || rel.fuzzy_eq(full)
        } else {
            rel.fuzzy_eq_zero() || rel >= full + extent
        }
    }

    // angle of a point in the arc's convention, in [0, 360)
    fn angle_of(&self, point: Vector2<T>) -> T {
        let (rx, ry) = self.radii();
        let c = self.center();
        let dx = (point.x - c.x) / rx;
        let dy = -(point.y - c.y) / ry;
        let full = T::from(360.0).unwrap();
        let mut deg = dy.atan2(dx).to_degrees() % full;
        if deg < T::zero() {
            deg = deg + full;
        }
        deg
    }

    fn ellipse_contains(&self, point: Vector2<T>) -> bool {
        let (rx, ry) = self.radii();
        let c = self.center();
        let nx = (point.x - c.x) / rx;
        let ny = (point.y - c.y) / ry;
        nx * nx + ny * ny <= T::one()
    }

    // true when `point` lies on the arc side of the chord (or on the chord itself)
    fn on_arc_side_of_chord(&self, point: Vector2<T>) -> bool {
        let s = self.start_point();
        let e = self.end_point();
        let mid = self.point_at_angle(self.start_angle + self.extent_angle * T::half());
        let side_mid = is_left(s, e, mid);
        let cross = (e - s).perp_dot(point - s);
        if cross.fuzzy_eq_zero() {
            return true;
        }
        (cross > T::zero()) == side_mid
    }
}

impl<T> Shape<T> for Arc<T>
where
    T: Real,
{
    fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        if self.is_empty() {
            return None;
        }
        self.boundary().bounds()
    }

    fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero() || self.extent_angle.fuzzy_eq_zero()
    }

    fn contains_point(&self, point: Vector2<T>) -> bool {
        if self.is_empty() || !self.ellipse_contains(point) {
            return false;
        }
        if self.extent_angle.abs() >= T::from(360.0).unwrap() {
            return true;
        }
        match self.closure {
            ArcClosure::Pie => self.contains_angle(self.angle_of(point)),
            ArcClosure::Chord | ArcClosure::Open => self.on_arc_side_of_chord(point),
        }
    }

    fn contains_rect(&self, rect: &Rect<T>) -> bool {
        if self.is_empty() || rect.is_empty() {
            return false;
        }
        if !rect.corners().iter().all(|&p| self.contains_point(p)) {
            return false;
        }
        // a pie sweeping past a half turn is non-convex: the rect must also stay clear of
        // the removed wedge, whose boundary is the two radii
        if self.closure == ArcClosure::Pie && self.extent_angle.abs() > T::from(180.0).unwrap() {
            let c = self.center();
            if rect.intersects_line_seg(c, self.start_point())
                || rect.intersects_line_seg(c, self.end_point())
            {
                return false;
            }
        }
        true
    }

    fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        if self.is_empty() || rect.is_empty() {
            return false;
        }
        if rect.corners().iter().any(|&p| self.contains_point(p)) {
            return true;
        }
        if rect.contains_point(self.start_point()) || rect.contains_point(self.end_point()) {
            return true;
        }
        match self.closure {
            ArcClosure::Pie => {
                let c = self.center();
                if rect.intersects_line_seg(c, self.start_point())
                    || rect.intersects_line_seg(c, self.end_point())
                {
                    return true;
                }
            }
            ArcClosure::Chord | ArcClosure::Open => {
                if rect.intersects_line_seg(self.start_point(), self.end_point()) {
                    return true;
                }
            }
        }
        // remaining case: a rect edge crossing the elliptic part of the outline
        let (rx, ry) = self.radii();
        let c = self.center();
        let corners = rect.corners();
        for i in 0..4 {
            let (a, b) = (corners[i], corners[(i + 1) % 4]);
            for t in ellipse_seg_intersections(c, rx, ry, a, b) {
                let p = a.lerp(b, t);
                if self.contains_angle(self.angle_of(p)) {
                    return true;
                }
            }
        }
        false
    }

    fn boundary(&self) -> Boundary<T> {
        if self.is_empty() {
            return Boundary::default();
        }
        let full = T::from(360.0).unwrap();
        let extent = num_traits::clamp(self.extent_angle, -full, full);
        let (rx, ry) = self.radii();
        let c = self.center();

        let mut segments = Vec::new();
        segments.push(Segment::MoveTo(ellipse_point(c, rx, ry, self.start_angle)));
        push_arc_cubics(&mut segments, c, rx, ry, self.start_angle, extent);
        match self.closure {
            ArcClosure::Open => {}
            ArcClosure::Chord => segments.push(Segment::Close),
            ArcClosure::Pie => {
                segments.push(Segment::LineTo(c));
                segments.push(Segment::Close);
            }
        }
        Boundary::from_segments(WindingRule::NonZero, segments)
    }
}
