//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Connects consecutive nodes with straight lines. Node values are returned
/// exactly, and queries outside `[xs[0], xs[n-1]]` are rejected.
///
/// # Example
///
/// ```rust
/// use zerocurve_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![90.0, 120.0], vec![0.06, 0.09]).unwrap();
/// assert!((interp.interpolate(100.0).unwrap() - 0.07).abs() < 1e-12);
///
/// let grid = interp.sample_integer_grid(90, 120).unwrap();
/// assert_eq!(grid.len(), 31);
/// assert_eq!(grid[30], 0.09);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths differ, or
    /// the x values are not finite and strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("values must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self { xs, ys })
    }

    /// Returns the nodes as `(x, y)` pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Evaluates the interpolant at every integer in `[first, last]`.
    ///
    /// One forward pass over the segments; cheaper than calling
    /// [`interpolate`](Interpolator::interpolate) per point on dense grids.
    ///
    /// # Errors
    ///
    /// Returns `ExtrapolationNotAllowed` if either end of the grid falls
    /// outside the node range, and `InvalidInput` if `first > last`.
    pub fn sample_integer_grid(&self, first: i64, last: i64) -> MathResult<Vec<f64>> {
        if first > last {
            return Err(MathError::invalid_input(format!(
                "empty grid: first {first} > last {last}"
            )));
        }
        self.check_range(first as f64)?;
        self.check_range(last as f64)?;

        let mut values = Vec::with_capacity((last - first + 1) as usize);
        let mut segment = self.find_segment(first as f64);

        for x in first..=last {
            let x = x as f64;
            while segment + 2 < self.xs.len() && x > self.xs[segment + 1] {
                segment += 1;
            }
            values.push(self.eval_segment(segment, x));
        }

        Ok(values)
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if self.in_range(x) {
            Ok(())
        } else {
            Err(MathError::extrapolation(x, self.min_x(), self.max_x()))
        }
    }

    /// Finds the index i such that xs[i] <= x <= xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        let upper = self.xs.partition_point(|&probe| probe < x);
        upper.saturating_sub(1).min(self.xs.len() - 2)
    }

    fn eval_segment(&self, i: usize, x: f64) -> f64 {
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        if x == x0 {
            y0
        } else if x == x1 {
            y1
        } else {
            y0 + (x - x0) / (x1 - x0) * (y1 - y0)
        }
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        Ok(self.eval_segment(self.find_segment(x), x))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let i = self.find_segment(x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
