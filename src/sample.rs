use crate::error::SplineError;

/// Samples that a spline passes through.
///
/// `SampleSet::new` validates that there are at least two samples, that x
/// and y have the same length and that x is strictly increasing. Evaluation
/// relies on these invariants instead of re-checking them.
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// Creates a `SampleSet` from x and y values of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvalidInput`] when lengths differ:
    /// ```
    /// use monotone_spline::SampleSet;
    ///
    /// let result = SampleSet::new(vec![0.0, 1.0, 2.0], vec![1.0, 4.0]);
    /// assert!(result.is_err());
    /// ```
    /// when fewer than two samples are given, or when x values are not
    /// strictly increasing:
    /// ```
    /// use monotone_spline::SampleSet;
    ///
    /// let result = SampleSet::new(vec![0.0, 2.0, 2.0], vec![1.0, 4.0, 9.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::InvalidInput(format!(
                "x and y must have equal length, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(SplineError::InvalidInput(format!(
                "spline needs at least 2 samples, got {}",
                x.len()
            )));
        }
        // Strict comparison also rejects NaN x values.
        if let Some(index) = (0..x.len() - 1).find(|&i| !(x[i] < x[i + 1])) {
            return Err(SplineError::InvalidInput(format!(
                "x values must be strictly increasing, violated at index {index}"
            )));
        }
        Ok(SampleSet { x, y })
    }

    /// Number of samples, at least 2.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; a `SampleSet` holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_new() {
        let samples = SampleSet::new(vec![0.0, 1.5, 4.0], vec![2.0, -1.0, 3.0]).unwrap();

        assert_eq!(3, samples.len());
        assert_eq!(&[0.0, 1.5, 4.0], samples.x());
        assert_eq!(&[2.0, -1.0, 3.0], samples.y());
        assert_eq!(0.0, samples.min_x());
        assert_eq!(4.0, samples.max_x());
        assert!(!samples.is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let result = SampleSet::new(vec![0.0, 1.0, 2.0], vec![1.0, 4.0]);

        assert!(matches!(result, Err(SplineError::InvalidInput(_))));
    }

    #[test]
    fn test_too_few_samples() {
        let result = SampleSet::new(vec![1.0], vec![2.0]);

        assert!(matches!(result, Err(SplineError::InvalidInput(_))));
    }

    #[test]
    fn test_decreasing_x() {
        let result = SampleSet::new(vec![2.0, 1.0], vec![0.0, 0.0]);

        assert!(matches!(result, Err(SplineError::InvalidInput(_))));
    }

    #[test]
    fn test_equal_x() {
        let result = SampleSet::new(vec![0.0, 2.0, 2.0], vec![1.0, 4.0, 9.0]);

        assert!(matches!(result, Err(SplineError::InvalidInput(_))));
    }

    #[test]
    fn test_nan_x() {
        let result = SampleSet::new(vec![0.0, f64::NAN, 2.0], vec![1.0, 4.0, 9.0]);

        assert!(matches!(result, Err(SplineError::InvalidInput(_))));
    }
}
