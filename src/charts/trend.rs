//! Least-squares trendlines for scatter overlays.

use serde::Serialize;

use crate::error::{DashboardError, Result};

/// One `(x, y)` observation. Serializes as `{x, y}`, the point shape the
/// scatter charts consume.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
	pub x: f64,
	pub y: f64,
}

impl Sample {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

/// `y = slope * x + intercept`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendLine {
	pub slope: f64,
	pub intercept: f64,
}

#[derive(Default)]
struct Sums {
	n: f64,
	x: f64,
	y: f64,
	xy: f64,
	xx: f64,
	yy: f64,
}

impl Sums {
	fn of(samples: &[Sample]) -> Self {
		samples.iter().fold(Sums::default(), |s, p| Sums {
			n: s.n + 1.0,
			x: s.x + p.x,
			y: s.y + p.y,
			xy: s.xy + p.x * p.y,
			xx: s.xx + p.x * p.x,
			yy: s.yy + p.y * p.y,
		})
	}

	fn x_spread(&self) -> f64 {
		self.n * self.xx - self.x * self.x
	}

	fn y_spread(&self) -> f64 {
		self.n * self.yy - self.y * self.y
	}
}

impl TrendLine {
	/// Fits the ordinary least-squares line through `samples`.
	///
	/// Fails with [`DashboardError::UndefinedTrend`] when every sample has the
	/// same x (including the single-sample case) instead of inventing a slope,
	/// and with [`DashboardError::NonFiniteSample`] on a NaN or infinite value.
	pub fn fit(samples: &[Sample]) -> Result<Self> {
		if samples.is_empty() {
			return Err(DashboardError::EmptySeries);
		}
		if let Some(index) = samples.iter().position(|p| !p.is_finite()) {
			return Err(DashboardError::NonFiniteSample {
				index,
				x: samples[index].x,
				y: samples[index].y,
			});
		}
		let sums = Sums::of(samples);
		let denominator = sums.x_spread();
		let slope = (sums.n * sums.xy - sums.x * sums.y) / denominator;
		// Rounding can leave a tiny non-zero spread for repeated x values.
		let constant_x = samples.iter().all(|p| p.x == samples[0].x);
		if constant_x || !slope.is_finite() {
			return Err(DashboardError::UndefinedTrend {
				points: samples.len(),
			});
		}
		let intercept = (sums.y - slope * sums.x) / sums.n;
		Ok(Self { slope, intercept })
	}

	pub fn at(&self, x: f64) -> f64 {
		self.slope * x + self.intercept
	}

	/// Two points spanning the x domain of `samples`, enough to draw the line.
	pub fn span(&self, samples: &[Sample]) -> Option<[Sample; 2]> {
		let min = samples.iter().map(|p| p.x).reduce(f64::min)?;
		let max = samples.iter().map(|p| p.x).reduce(f64::max)?;
		Some([Sample::new(min, self.at(min)), Sample::new(max, self.at(max))])
	}

}

/// Pearson correlation coefficient, `None` when either axis has no variance.
pub fn correlation(samples: &[Sample]) -> Option<f64> {
	let sums = Sums::of(samples);
	let denominator = (sums.x_spread() * sums.y_spread()).sqrt();
	let r = (sums.n * sums.xy - sums.x * sums.y) / denominator;
	(denominator > 0.0 && r.is_finite()).then_some(r)
}

#[cfg(test)]
mod tests {
	use float_cmp::approx_eq;

	use super::*;

	fn samples(points: &[(f64, f64)]) -> Vec<Sample> {
		points.iter().map(|&(x, y)| Sample::new(x, y)).collect()
	}

	#[test]
	fn identity_line() {
		let line = TrendLine::fit(&samples(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])).unwrap();
		assert!(approx_eq!(f64, line.slope, 1.0, epsilon = 1e-12));
		assert!(approx_eq!(f64, line.intercept, 0.0, epsilon = 1e-12));
	}

	#[test]
	fn constant_x_is_undefined() {
		let err = TrendLine::fit(&samples(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)])).unwrap_err();
		assert_eq!(err, DashboardError::UndefinedTrend { points: 3 });
	}

	#[test]
	fn single_point_is_undefined() {
		assert!(matches!(
			TrendLine::fit(&samples(&[(2.0, 7.0)])),
			Err(DashboardError::UndefinedTrend { points: 1 })
		));
	}

	#[test]
	fn empty_is_rejected() {
		assert_eq!(TrendLine::fit(&[]).unwrap_err(), DashboardError::EmptySeries);
	}

	#[test]
	fn result_does_not_depend_on_order() {
		let forward = samples(&[(18.32, 3.8), (21.53, 4.2), (23.75, 4.2), (24.12, 4.5)]);
		let mut reversed = forward.clone();
		reversed.reverse();
		let (a, b) = (
			TrendLine::fit(&forward).unwrap(),
			TrendLine::fit(&reversed).unwrap(),
		);
		assert!(approx_eq!(f64, a.slope, b.slope, epsilon = 1e-9));
		assert!(approx_eq!(f64, a.intercept, b.intercept, epsilon = 1e-9));
	}

	#[test]
	fn fits_a_noisy_line() {
		let points = samples(&[(0.0, 1.0), (1.0, 3.1), (2.0, 4.9), (3.0, 7.0)]);
		let line = TrendLine::fit(&points).unwrap();
		assert!(approx_eq!(f64, line.slope, 1.98, epsilon = 1e-9));
		assert!(approx_eq!(f64, line.intercept, 1.03, epsilon = 1e-9));
	}

	#[test]
	fn non_finite_samples_are_named() {
		let err = TrendLine::fit(&samples(&[(1.0, f64::NAN), (2.0, 1.0)])).unwrap_err();
		assert!(matches!(
			err,
			DashboardError::NonFiniteSample { index: 0, x, y } if x == 1.0 && y.is_nan()
		));
		assert!(err.to_string().contains("sample 0"), "{err}");

		let err = TrendLine::fit(&samples(&[(1.0, 2.0), (f64::INFINITY, 3.0)])).unwrap_err();
		assert!(matches!(err, DashboardError::NonFiniteSample { index: 1, .. }));
	}

	#[test]
	fn span_covers_the_x_domain() {
		let points = samples(&[(3.0, 0.0), (1.0, 0.0), (2.0, 3.0)]);
		let line = TrendLine {
			slope: 2.0,
			intercept: 1.0,
		};
		assert_eq!(
			line.span(&points),
			Some([Sample::new(1.0, 3.0), Sample::new(3.0, 7.0)])
		);
		assert_eq!(line.span(&[]), None);
	}

	#[test]
	fn correlation_of_perfect_and_flat_series() {
		let r = correlation(&samples(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)])).unwrap();
		assert!(approx_eq!(f64, r, 1.0, epsilon = 1e-12));
		let r = correlation(&samples(&[(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)])).unwrap();
		assert!(approx_eq!(f64, r, -1.0, epsilon = 1e-12));
		assert_eq!(correlation(&samples(&[(1.0, 2.0), (2.0, 2.0)])), None);
	}
}
