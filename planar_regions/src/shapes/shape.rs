use super::Rect;
use crate::boundary::Boundary;
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::errors::Error;
use crate::transform::AffineTransform;

/// Capability surface shared by the parametric shapes and regions: bounds, containment and
/// intersection predicates, and the ability to yield a boundary (optionally pre-transformed
/// or pre-flattened).
///
/// Predicates use closed-form inequalities per shape rather than materialized boundaries, so
/// they are exact up to floating point (no flattening artifacts). Empty shapes contain
/// nothing, intersect nothing, and have no bounds.
pub trait Shape<T>
where
    T: Real,
{
    /// Axis-aligned extents as `(min, max)` corner points, `None` when empty.
    fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)>;

    fn is_empty(&self) -> bool;

    fn contains_point(&self, point: Vector2<T>) -> bool;

    /// True when the whole of `rect` lies inside the shape (empty `rect` is never contained).
    fn contains_rect(&self, rect: &Rect<T>) -> bool;

    /// True when the shape and `rect` share at least one point of positive-area overlap.
    fn intersects_rect(&self, rect: &Rect<T>) -> bool;

    /// The shape's outline as a boundary segment stream.
    fn boundary(&self) -> Boundary<T>;

    /// The outline with every point mapped through `transform`.
    fn boundary_transformed(&self, transform: &AffineTransform<T>) -> Boundary<T> {
        self.boundary().transformed(transform)
    }

    /// The outline with curves substituted by line segments within `flatness`.
    fn boundary_flattened(&self, flatness: T, recursion_limit: u32) -> Result<Boundary<T>, Error> {
        let source = self.boundary();
        let winding_rule = source.winding_rule();
        let segments: Vec<_> = source.iter_flattened(flatness, recursion_limit)?.collect();
        Ok(Boundary::from_segments(winding_rule, segments))
    }
}
