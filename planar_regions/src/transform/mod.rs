//! Affine transform algebra: 2x3 matrices with composition, classification, inversion, and
//! point/vector mapping.
mod affine;
mod class;

pub use affine::AffineTransform;
pub use class::TransformClass;
