//! Library of monotone cubic Hermite spline interpolation.
//! Tangents are estimated so that the curve follows the trend of the samples
//! and does not overshoot between them, which plain cubic splines tend to do.
//!
//! Samples must have strictly increasing x values. Queries outside the
//! sampled range are rejected, the spline never extrapolates. Tangents may
//! also be supplied directly to build a general Hermite spline.
//!
//! # Example
//! ```
//! use monotone_spline::Spline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![0.0, 1.0, 8.0, 27.0];
//! let spline = Spline::monotone(x, y).unwrap();
//!
//! assert_approx_eq!(3.375, spline.interpolate(1.5).unwrap(), 1e-6);
//! assert_eq!(8.0, spline.interpolate(2.0).unwrap());
//! assert!(spline.interpolate(3.5).is_err());
//! ```

mod error;
mod hermite;
mod sample;
mod spline;
mod tangent;

pub use error::SplineError;
pub use sample::SampleSet;
pub use spline::Spline;
pub use tangent::monotone_tangents;
