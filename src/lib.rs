//! Cubic Bézier easing curves as used by animation timing functions.
//!
//! A timing function is a cubic Bézier curve from (0, 0) to (1, 1) shaped by two
//! interior control points. Evaluating it means finding the curve parameter `t`
//! for a progress value `x` and returning `y(t)`, which is what
//! [`CubicBezierEasing::solve`] does.
//!
//! ```rust
//! use bezier_easing::CubicBezierEasing;
//!
//! let ease = CubicBezierEasing::<f64>::new(0.25, 0.1, 0.25, 1.0).unwrap();
//! assert!((ease.solve(0.5) - 0.8024).abs() < 1e-3);
//! assert_eq!(ease.solve(1.0), 1.0);
//! ```
//!
//! The crate is `#![no_std]`, never allocates and works with `f32` or `f64`.
#![no_std]

extern crate num_traits;
extern crate tinyvec;

use core::fmt::Debug;

use num_traits::Float;

pub mod cubic_bezier;
pub mod easing;
pub mod error;
pub(crate) mod roots;
pub mod sample_table;

pub use cubic_bezier::CubicBezier;
pub use easing::{ControlPoints, CubicBezierEasing, Easing};
pub use error::EasingError;
pub use sample_table::SampleTable;

/// The scalar backends a curve can be solved in (in practice `f32` and `f64`).
pub trait Scalar: Float + From<f32> + Default + Debug {}

impl<T> Scalar for T where T: Float + From<f32> + Default + Debug {}

/// Number of evenly spaced samples of x(t) kept per curve.
pub const SAMPLE_TABLE_SIZE: usize = 11;

/// Newton-Raphson steps attempted before falling back to bisection.
pub(crate) const NEWTON_ITERATIONS: usize = 8;
/// Below this slope of x(t) Newton-Raphson is not trusted.
pub(crate) const NEWTON_MIN_SLOPE: f32 = 0.001;
/// Largest residual |x(t) - x| accepted from Newton-Raphson.
pub(crate) const NEWTON_TOLERANCE: f32 = 1e-6;
/// Bisection stops once |x(t) - x| is below this.
pub(crate) const SUBDIVISION_PRECISION: f32 = 1e-10;
/// Upper bound on bisection steps, each halving a 1/10 wide bracket.
pub(crate) const SUBDIVISION_MAX_ITERATIONS: usize = 32;
