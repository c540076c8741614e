//! Boundary (outline) representation and iteration: the segment stream data model, the
//! checked builder ops, the forward-only segment cursor, and the curve-flattening adapter.

#[allow(clippy::module_inception)]
mod boundary;
mod flatten;
mod iterator;
mod segment;

pub use boundary::Boundary;
pub use flatten::FlattenIter;
pub use iterator::SegmentIter;
pub use segment::{Segment, WindingRule};
