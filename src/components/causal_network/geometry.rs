//! Layout math for the causal network: percentage positions to pixels,
//! arrowheads and label placement.

use std::f64::consts::PI;

/// Radius of every node circle, in logical pixels.
pub const NODE_RADIUS: f64 = 20.0;
/// Length of each arrowhead leg.
pub const ARROW_SIZE: f64 = 8.0;
/// Half-angle between an arrowhead leg and the reversed edge direction.
pub const ARROW_SPREAD: f64 = PI / 6.0;
/// Edge line width per unit of absolute strength.
pub const STRENGTH_WIDTH: f64 = 4.0;
/// Opacity of edge lines and arrowheads.
pub const EDGE_ALPHA: f64 = 0.6;
/// How far the lag label sits above the edge midpoint.
pub const LAG_LABEL_RISE: f64 = 5.0;
/// Baselines of the two node label lines, below the node centre.
pub const LABEL_LINE_OFFSETS: [f64; 2] = [35.0, 47.0];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// Maps a percentage position onto a `width` x `height` surface.
pub fn to_pixel(x_pct: f64, y_pct: f64, width: f64, height: f64) -> Point {
	Point::new(x_pct / 100.0 * width, y_pct / 100.0 * height)
}

/// Filled triangle sitting on the target end of an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
	/// Direction of travel, `atan2(dy, dx)`.
	pub angle: f64,
	pub tip: Point,
	pub left: Point,
	pub right: Point,
}

impl Arrowhead {
	pub fn between(from: Point, to: Point, size: f64) -> Self {
		let angle = (to.y - from.y).atan2(to.x - from.x);
		let leg = |theta: f64| Point::new(to.x - size * theta.cos(), to.y - size * theta.sin());
		Self {
			angle,
			tip: to,
			left: leg(angle - ARROW_SPREAD),
			right: leg(angle + ARROW_SPREAD),
		}
	}

	pub fn vertices(&self) -> [Point; 3] {
		[self.tip, self.left, self.right]
	}
}

pub fn edge_width(strength: f64) -> f64 {
	strength.abs() * STRENGTH_WIDTH
}

pub fn lag_label_anchor(from: Point, to: Point) -> Point {
	let mid = from.midpoint(to);
	Point::new(mid.x, mid.y - LAG_LABEL_RISE)
}

/// Splits a node label into at most two display lines.
///
/// The first word goes on line one and any remaining words share line two.
pub fn label_lines(label: &str) -> (Option<&str>, Option<&str>) {
	let label = label.trim();
	match label.split_once(char::is_whitespace) {
		Some((first, rest)) => {
			let rest = rest.trim_start();
			(Some(first), (!rest.is_empty()).then_some(rest))
		}
		None if label.is_empty() => (None, None),
		None => (Some(label), None),
	}
}

#[cfg(test)]
mod tests {
	use float_cmp::approx_eq;

	use super::*;

	#[test]
	fn centre_maps_to_half_dimensions() {
		assert_eq!(to_pixel(50.0, 50.0, 200.0, 100.0), Point::new(100.0, 50.0));
		assert_eq!(to_pixel(0.0, 100.0, 640.0, 300.0), Point::new(0.0, 300.0));
	}

	#[test]
	fn horizontal_arrowhead_is_mirrored_about_the_line() {
		let head = Arrowhead::between(Point::new(0.0, 50.0), Point::new(100.0, 50.0), ARROW_SIZE);
		let (sin, cos) = ARROW_SPREAD.sin_cos();

		assert!(approx_eq!(f64, head.angle, 0.0));
		assert_eq!(head.tip, Point::new(100.0, 50.0));
		assert!(approx_eq!(f64, head.left.x, 100.0 - cos * ARROW_SIZE, epsilon = 1e-12));
		assert!(approx_eq!(f64, head.right.x, 100.0 - cos * ARROW_SIZE, epsilon = 1e-12));
		assert!(approx_eq!(f64, head.left.y, 50.0 + sin * ARROW_SIZE, epsilon = 1e-12));
		assert!(approx_eq!(f64, head.right.y, 50.0 - sin * ARROW_SIZE, epsilon = 1e-12));
		assert!(approx_eq!(f64, head.left.y - 50.0, 50.0 - head.right.y, epsilon = 1e-12));
	}

	#[test]
	fn vertical_arrowhead_points_down() {
		let head = Arrowhead::between(Point::new(10.0, 0.0), Point::new(10.0, 40.0), ARROW_SIZE);
		assert!(approx_eq!(f64, head.angle, PI / 2.0));
		assert!(head.left.y < 40.0 && head.right.y < 40.0);
		assert!(approx_eq!(f64, head.left.x - 10.0, 10.0 - head.right.x, epsilon = 1e-12));
	}

	#[test]
	fn width_uses_strength_magnitude() {
		assert!(approx_eq!(f64, edge_width(-0.574), 2.296, epsilon = 1e-12));
		assert_eq!(edge_width(0.0), 0.0);
	}

	#[test]
	fn lag_label_sits_above_midpoint() {
		let anchor = lag_label_anchor(Point::new(0.0, 0.0), Point::new(100.0, 60.0));
		assert_eq!(anchor, Point::new(50.0, 25.0));
	}

	#[test]
	fn splits_labels_into_two_lines() {
		assert_eq!(label_lines("Dengue Cases"), (Some("Dengue"), Some("Cases")));
		assert_eq!(label_lines("Humidity"), (Some("Humidity"), None));
		assert_eq!(
			label_lines("Surface  Water Level"),
			(Some("Surface"), Some("Water Level"))
		);
		assert_eq!(label_lines("  "), (None, None));
	}
}
