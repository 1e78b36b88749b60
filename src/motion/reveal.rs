/// Easing shared by every reveal transition.
pub const EASE_OUT_EXPO: &str = "cubic-bezier(0.19, 1, 0.22, 1)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum RevealState {
	#[default]
	Unobserved,
	Observing,
	Triggered,
}

/// Run-once visibility subscription for a single element.
///
/// The effect fires on the first visible report while observing; after that
/// the subscription is spent and ignores further reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
	state: RevealState,
}

impl Reveal {
	pub fn observe(&mut self) {
		if self.state == RevealState::Unobserved {
			self.state = RevealState::Observing;
		}
	}

	/// Returns `true` exactly once: on the first visible report while observing.
	pub fn on_visibility(&mut self, visible: bool) -> bool {
		if visible && self.state == RevealState::Observing {
			self.state = RevealState::Triggered;
			true
		} else {
			false
		}
	}

	/// Stops observing an element that has not been revealed yet.
	pub fn cancel(&mut self) {
		if self.state == RevealState::Observing {
			self.state = RevealState::Unobserved;
		}
	}

	pub fn is_done(&self) -> bool {
		self.state == RevealState::Triggered
	}
}

/// How and when a group of elements animates into view.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSpec {
	/// Fraction of viewport height the element's top must rise above.
	pub threshold: f64,
	/// Delay before the first element, in seconds.
	pub delay: f64,
	/// Extra delay per element index, in seconds.
	pub stagger: f64,
	/// Duration of the transform transition, in seconds.
	pub duration: f64,
	/// Duration of the opacity transition, in seconds.
	pub fade: f64,
}

impl Default for RevealSpec {
	fn default() -> Self {
		Self {
			threshold: 0.75,
			delay: 0.0,
			stagger: 0.0,
			duration: 1.0,
			fade: 0.8,
		}
	}
}

impl RevealSpec {
	pub fn at(threshold: f64) -> Self {
		Self {
			threshold,
			..Self::default()
		}
	}

	pub fn staggered(mut self, stagger: f64) -> Self {
		self.stagger = stagger;
		self
	}

	pub fn delayed(mut self, delay: f64) -> Self {
		self.delay = delay;
		self
	}

	pub fn timed(mut self, duration: f64, fade: f64) -> Self {
		self.duration = duration;
		self.fade = fade;
		self
	}

	pub fn delay_for(&self, index: usize) -> f64 {
		self.delay + index as f64 * self.stagger
	}

	/// Inline `transition` value for the element at `index`.
	pub fn transition(&self, index: usize) -> String {
		let delay = round_ms(self.delay_for(index));
		format!(
			"opacity {}s ease {delay}s, transform {}s {EASE_OUT_EXPO} {delay}s",
			self.fade, self.duration
		)
	}

	/// Root margin that shrinks the viewport's bottom edge up to the threshold
	/// line, so intersection starts when the element top crosses it.
	pub fn root_margin(&self) -> String {
		let inset = ((1.0 - self.threshold.clamp(0.0, 1.0)) * 100.0).round();
		format!("0px 0px -{inset}% 0px")
	}

	/// The scroll-position test the observer approximates.
	pub fn is_due(&self, top: f64, viewport_height: f64) -> bool {
		top < viewport_height * self.threshold
	}
}

fn round_ms(seconds: f64) -> f64 {
	(seconds * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_once_then_stays_triggered() {
		let mut reveal = Reveal::default();
		assert!(!reveal.on_visibility(true), "must observe before firing");

		reveal.observe();
		assert_eq!(reveal.state, RevealState::Observing);
		assert!(!reveal.on_visibility(false));
		assert!(reveal.on_visibility(true));
		assert!(reveal.is_done());

		assert!(!reveal.on_visibility(true));
		reveal.observe();
		reveal.cancel();
		assert_eq!(reveal.state, RevealState::Triggered);
	}

	#[test]
	fn cancel_returns_to_unobserved() {
		let mut reveal = Reveal::default();
		reveal.observe();
		reveal.cancel();
		assert_eq!(reveal.state, RevealState::Unobserved);
		assert!(!reveal.on_visibility(true));
	}

	#[test]
	fn staggered_transition_strings() {
		let spec = RevealSpec::at(0.7).staggered(0.1);
		assert_eq!(
			spec.transition(0),
			"opacity 0.8s ease 0s, transform 1s cubic-bezier(0.19, 1, 0.22, 1) 0s"
		);
		assert_eq!(
			spec.transition(3),
			"opacity 0.8s ease 0.3s, transform 1s cubic-bezier(0.19, 1, 0.22, 1) 0.3s"
		);
	}

	#[test]
	fn threshold_maps_to_bottom_margin() {
		assert_eq!(RevealSpec::at(0.75).root_margin(), "0px 0px -25% 0px");
		assert_eq!(RevealSpec::at(1.0).root_margin(), "0px 0px -0% 0px");
	}

	#[test]
	fn due_when_top_passes_threshold_line() {
		let spec = RevealSpec::at(0.8);
		assert!(spec.is_due(500.0, 800.0));
		assert!(!spec.is_due(640.0, 800.0));
	}
}
