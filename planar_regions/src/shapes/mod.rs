//! Parametric shapes: compact descriptors that generate boundaries and answer exact
//! closed-form containment/intersection queries without materializing an outline.

mod arc;
mod ellipse;
mod rect;
mod round_rect;
mod shape;

pub use arc::{Arc, ArcClosure};
pub use ellipse::Ellipse;
pub use rect::Rect;
pub use round_rect::RoundRect;
pub use shape::Shape;
