//! 2D planar geometry kernel: affine transforms, quadratic/cubic Bezier math, boundary
//! representation and curve-flattening iteration, parametric shapes, and a constructive
//! region algebra computing boolean combinations of arbitrary curved/polygonal regions.
//!
//! All types are plain mutable values computed synchronously in memory; nothing is
//! synchronized for concurrent mutation (not thread safe by design, share behind external
//! synchronization if needed).
//!
//! # Examples
//!
//! ```
//! use planar_regions::{BooleanOp, Rect, Region, Shape};
//!
//! let a = Region::from_shape(&Rect::new(0.0, 0.0, 4.0, 4.0));
//! let b = Region::from_shape(&Rect::new(2.0, 2.0, 4.0, 4.0));
//!
//! let union = a.boolean(BooleanOp::Union, &b);
//! assert!(union.contains_point(planar_regions::vec2(5.0, 5.0)));
//!
//! let hole = a.boolean(BooleanOp::Subtract, &b);
//! assert!(!hole.contains_point(planar_regions::vec2(3.0, 3.0)));
//! ```

#[macro_use]
mod macros;

pub mod boundary;
pub mod core;
pub mod curve;
pub mod errors;
pub mod region;
pub mod shapes;
pub mod transform;

pub use crate::boundary::{Boundary, FlattenIter, Segment, SegmentIter, WindingRule};
pub use crate::core::math::{vec2, Vector2};
pub use crate::core::traits::*;
pub use crate::curve::{solve_cubic, solve_quadratic, CubicBezier, QuadraticBezier};
pub use crate::errors::Error;
pub use crate::region::{BooleanOp, Edge, EdgeKind, Region, RegionLoop, RegionOptions};
pub use crate::shapes::{Arc, ArcClosure, Ellipse, Rect, RoundRect, Shape};
pub use crate::transform::{AffineTransform, TransformClass};
