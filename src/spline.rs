use crate::error::SplineError;
use crate::hermite;
use crate::sample::SampleSet;
use crate::tangent::monotone_tangents;

/// Piecewise cubic Hermite interpolant over a [`SampleSet`].
///
/// Once built the spline is immutable and evaluation takes `&self`.
pub struct Spline {
    samples: SampleSet,
    tangents: Vec<f64>,
}

impl Spline {
    /// Builds a spline with tangents from [`monotone_tangents`], so the curve
    /// follows the trend of the samples without overshooting between them.
    pub fn monotone(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SplineError> {
        let samples = SampleSet::new(x, y)?;
        let tangents = monotone_tangents(&samples);
        Ok(Spline { samples, tangents })
    }

    /// Builds a spline with caller supplied tangents, one per sample.
    pub fn hermite(x: Vec<f64>, y: Vec<f64>, tangents: Vec<f64>) -> Result<Self, SplineError> {
        let samples = SampleSet::new(x, y)?;
        if tangents.len() != samples.len() {
            return Err(SplineError::InvalidInput(format!(
                "tangents length {} does not match {} samples",
                tangents.len(),
                samples.len()
            )));
        }
        Ok(Spline { samples, tangents })
    }

    /// Value of the spline at `x`, which must lie within [`Spline::domain`].
    pub fn interpolate(&self, x: f64) -> Result<f64, SplineError> {
        if !self.is_in_range(x) {
            return Err(SplineError::OutOfDomain {
                x,
                min: self.samples.min_x(),
                max: self.samples.max_x(),
            });
        }
        let index = self.locate_segment(x);
        self.segment_value(index, x)
    }

    /// Values of the spline at each query. Fails without evaluating anything
    /// when any query is out of range.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        if let Some(&x) = x_vector.iter().find(|x| !self.is_in_range(**x)) {
            return Err(SplineError::OutOfDomain {
                x,
                min: self.samples.min_x(),
                max: self.samples.max_x(),
            });
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for &x in x_vector {
            index = self.locate_with_hint(index, x);
            results.push(self.segment_value(index, x)?);
        }
        Ok(results)
    }

    /// Sampled x range as `(min, max)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.samples.min_x(), self.samples.max_x())
    }

    /// Tangent at each sample.
    pub fn tangents(&self) -> &[f64] {
        &self.tangents
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.samples.min_x() <= x && x <= self.samples.max_x()
    }

    fn segment_value(&self, index: usize, x: f64) -> Result<f64, SplineError> {
        let xs = self.samples.x();
        let ys = self.samples.y();
        let last = xs.len() - 1;

        // A query at the right end of the domain returns the last sample.
        if index == last {
            return Ok(ys[last]);
        }

        let dx = xs[index + 1] - xs[index];
        if dx <= 0.0 {
            return Err(SplineError::DegenerateInterval(index));
        }
        let t = (x - xs[index]) / dx;
        Ok(hermite::evaluate(
            t,
            dx,
            ys[index],
            self.tangents[index],
            ys[index + 1],
            self.tangents[index + 1],
        ))
    }

    // Bisects down to two candidate samples, then picks the one whose segment
    // brackets x. A query equal to the last sample maps to the last index.
    fn locate_segment(&self, x: f64) -> usize {
        let xs = self.samples.x();
        let mut min = 0;
        let mut max = xs.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if xs[mid] <= x {
                min = mid;
            } else {
                max = mid;
            }
        }
        if self.in_segment(min, x) {
            min
        } else {
            min + 1
        }
    }

    fn locate_with_hint(&self, hint: usize, x: f64) -> usize {
        let last = self.samples.len() - 1;
        if hint < last && self.in_segment(hint, x) {
            return hint;
        }
        if hint + 1 < last && self.in_segment(hint + 1, x) {
            return hint + 1;
        }
        self.locate_segment(x)
    }

    fn in_segment(&self, index: usize, x: f64) -> bool {
        let xs = self.samples.x();
        xs[index] <= x && x < xs[index + 1]
    }
}
