//! Scroll- and pointer-linked transforms for the home shell.

/// Scroll distance over which the scroll indicator fades out.
pub const INDICATOR_FADE_DISTANCE: f64 = 400.0;
/// Maximum pointer-driven image shift on a project card, in pixels.
pub const CARD_SHIFT: f64 = 10.0;

/// How far the hero has scrolled past the top of the viewport, as a
/// fraction of its height. `None` while the hero is off screen.
pub fn hero_progress(top: f64, bottom: f64, height: f64, viewport_height: f64) -> Option<f64> {
	(top < viewport_height && bottom > 0.0 && height > 0.0).then(|| -top / height)
}

pub fn hero_transform(progress: f64) -> String {
	format!(
		"scale({}) translateY({}px)",
		round4(1.1 + progress * 0.1),
		round4(progress * 50.0)
	)
}

fn round4(v: f64) -> f64 {
	(v * 10_000.0).round() / 10_000.0
}

pub fn scroll_indicator_opacity(scroll_y: f64) -> f64 {
	(1.0 - scroll_y / INDICATOR_FADE_DISTANCE).max(0.0)
}

/// Image shift for a pointer at `(x, y)` inside a `width` x `height` card,
/// proportional to the distance from the card centre.
pub fn card_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
	let (cx, cy) = (width / 2.0, height / 2.0);
	if cx <= 0.0 || cy <= 0.0 {
		return (0.0, 0.0);
	}
	(((x - cx) / cx) * CARD_SHIFT, ((y - cy) / cy) * CARD_SHIFT)
}

pub fn card_transform(x: f64, y: f64, width: f64, height: f64) -> String {
	let (dx, dy) = card_offset(x, y, width, height);
	format!("scale(1.05) translate({dx}px, {dy}px)")
}

#[cfg(test)]
mod tests {
	use float_cmp::approx_eq;

	use super::*;

	#[test]
	fn hero_progress_only_while_visible() {
		assert_eq!(hero_progress(0.0, 800.0, 800.0, 900.0), Some(0.0));
		let p = hero_progress(-400.0, 400.0, 800.0, 900.0).unwrap();
		assert!(approx_eq!(f64, p, 0.5));
		assert_eq!(hero_progress(-800.0, 0.0, 800.0, 900.0), None);
		assert_eq!(hero_progress(950.0, 1750.0, 800.0, 900.0), None);
	}

	#[test]
	fn hero_transform_at_half_scroll() {
		assert_eq!(hero_transform(0.5), "scale(1.15) translateY(25px)");
	}

	#[test]
	fn indicator_fades_and_clamps() {
		assert_eq!(scroll_indicator_opacity(0.0), 1.0);
		assert_eq!(scroll_indicator_opacity(200.0), 0.5);
		assert_eq!(scroll_indicator_opacity(1200.0), 0.0);
	}

	#[test]
	fn card_offset_is_centred() {
		assert_eq!(card_offset(150.0, 100.0, 300.0, 200.0), (0.0, 0.0));
		assert_eq!(card_offset(300.0, 0.0, 300.0, 200.0), (10.0, -10.0));
		assert_eq!(card_offset(5.0, 5.0, 0.0, 0.0), (0.0, 0.0));
		assert_eq!(
			card_transform(0.0, 200.0, 300.0, 200.0),
			"scale(1.05) translate(-10px, 10px)"
		);
	}
}
