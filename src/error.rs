use thiserror::Error;

/// Errors reported by spline construction and evaluation.
#[derive(Debug, PartialEq, Error)]
pub enum SplineError {
    /// Sample data cannot describe a spline. The message names the cause.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Segment starting at the given sample index has zero or negative width.
    #[error("degenerate interval at segment {0}: consecutive x values are equal")]
    DegenerateInterval(usize),

    /// Query lies outside the sampled range.
    #[error("x = {x} is out of range [{min}, {max}]")]
    OutOfDomain { x: f64, min: f64, max: f64 },
}
