use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::transform::AffineTransform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule converting a signed edge-crossing count into an inside/outside decision.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WindingRule {
    /// Inside wherever the signed crossing count is nonzero.
    NonZero,
    /// Inside wherever the crossing count is odd.
    EvenOdd,
}

impl Default for WindingRule {
    fn default() -> Self {
        WindingRule::NonZero
    }
}

/// One element of a boundary's segment stream.
///
/// A subpath is a `MoveTo` followed by zero or more draw segments, optionally ended by
/// `Close`. Draw segments carry only the points beyond the current point; the current point
/// is implied by the preceding segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment<T = f64> {
    /// Begin a new subpath at the given point.
    MoveTo(Vector2<T>),
    /// Straight line from the current point.
    LineTo(Vector2<T>),
    /// Quadratic Bezier from the current point (control, end).
    QuadTo(Vector2<T>, Vector2<T>),
    /// Cubic Bezier from the current point (control1, control2, end).
    CubicTo(Vector2<T>, Vector2<T>, Vector2<T>),
    /// Straight line back to the subpath's start point, ending the subpath.
    Close,
}

impl<T> Segment<T>
where
    T: Real,
{
    /// End point of the segment, or `None` for `Close` (its end point is the subpath start,
    /// which the segment itself does not carry).
    pub fn end_point(&self) -> Option<Vector2<T>> {
        match *self {
            Segment::MoveTo(p) => Some(p),
            Segment::LineTo(p) => Some(p),
            Segment::QuadTo(_, p) => Some(p),
            Segment::CubicTo(_, _, p) => Some(p),
            Segment::Close => None,
        }
    }

    /// True for the curved segment kinds (`QuadTo`, `CubicTo`).
    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self, Segment::QuadTo(..) | Segment::CubicTo(..))
    }

    /// Returns the segment with every carried point mapped through `transform`.
    pub fn transformed(&self, transform: &AffineTransform<T>) -> Self {
        match *self {
            Segment::MoveTo(p) => Segment::MoveTo(transform.transform_point(p)),
            Segment::LineTo(p) => Segment::LineTo(transform.transform_point(p)),
            Segment::QuadTo(c, p) => {
                Segment::QuadTo(transform.transform_point(c), transform.transform_point(p))
            }
            Segment::CubicTo(c1, c2, p) => Segment::CubicTo(
                transform.transform_point(c1),
                transform.transform_point(c2),
                transform.transform_point(p),
            ),
            Segment::Close => Segment::Close,
        }
    }
}
