//! Parametric curve math: quadratic/cubic Bezier primitives (evaluation, de Casteljau
//! subdivision, flatness) and real polynomial root solving.
mod bezier;
mod solve;

pub use bezier::{CubicBezier, QuadraticBezier};
pub use solve::{solve_cubic, solve_quadratic};
