//! Constructive region algebra: boundaries (of any shape) are canonicalized into sets of
//! simple non-crossing curve loops that support boolean combination (union, intersection,
//! subtraction, symmetric difference), containment queries, and transform application.
//!
//! The combine engine resolves all pairwise edge crossings (keeping curves as curves),
//! samples result membership on both sides of every resolved edge, keeps the edges whose
//! sides differ, and stitches them into loops oriented interior-left.

mod combine;
mod edge;
mod intersect;
#[allow(clippy::module_inception)]
mod region;

pub use combine::{BooleanOp, RegionOptions};
pub use edge::{Edge, EdgeKind};
pub use region::{Region, RegionLoop};
