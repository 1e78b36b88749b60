//! Undoing what a page wired into the browser.
//!
//! Window listeners, observers, timers and Chart.js instances all outlive the
//! view that created them unless something removes them. A [`Teardown`]
//! collects them and detaches each one when it is dropped;
//! [`detach_on_cleanup`] ties that drop to the reactive owner that wired them.

use leptos::prelude::on_cleanup;
use log::{debug, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::error::Result;

/// Something wired into the document that must be undone on unmount.
pub trait Detach {
	fn detach(&self);
}

/// Everything one page has wired. Parts are detached newest first on drop.
#[derive(Default)]
pub struct Teardown {
	parts: Vec<Box<dyn Detach>>,
}

impl Teardown {
	pub fn push(&mut self, part: impl Detach + 'static) {
		self.parts.push(Box::new(part));
	}

	/// Takes over the parts of `other`, which is left empty.
	pub fn absorb(&mut self, mut other: Teardown) {
		self.parts.append(&mut other.parts);
	}

	/// Keeps what `result` wired, or logs why the effect is unavailable. The
	/// page renders without it either way.
	pub fn keep(&mut self, page: &str, effect: &str, result: Result<Teardown>) {
		match result {
			Ok(wired) => self.absorb(wired),
			Err(err) => warn!("{page}: {effect} unavailable: {err}"),
		}
	}

	pub fn len(&self) -> usize {
		self.parts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parts.is_empty()
	}
}

impl Drop for Teardown {
	fn drop(&mut self) {
		while let Some(part) = self.parts.pop() {
			part.detach();
		}
	}
}

/// An event listener, removed from its target on detach.
pub struct Listener {
	target: EventTarget,
	event: &'static str,
	handler: Closure<dyn FnMut(Event)>,
}

impl Listener {
	pub fn add(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self> {
		let handler = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event,
			handler,
		})
	}
}

impl Detach for Listener {
	fn detach(&self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.handler.as_ref().unchecked_ref());
	}
}

/// Drops `teardown` when the current reactive owner is cleaned up: before the
/// enclosing effect runs again, and when the page unmounts.
pub fn detach_on_cleanup(page: &'static str, teardown: Teardown) {
	if teardown.is_empty() {
		return;
	}
	// Cleanups must be `Send`; everything here stays on the one browser thread.
	let teardown = SendWrapper::new(teardown);
	on_cleanup(move || {
		debug!("{page}: detaching {} bindings", teardown.len());
		drop(teardown);
	});
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::error::DashboardError;

	type Log = Rc<RefCell<Vec<&'static str>>>;

	struct Recorded(&'static str, Log);

	impl Detach for Recorded {
		fn detach(&self) {
			self.1.borrow_mut().push(self.0);
		}
	}

	fn wired(log: &Log, names: &[&'static str]) -> Teardown {
		let mut teardown = Teardown::default();
		for &name in names {
			teardown.push(Recorded(name, log.clone()));
		}
		teardown
	}

	#[test]
	fn drop_detaches_everything_newest_first() {
		let log = Log::default();
		let teardown = wired(&log, &["scroll", "resize", "chart"]);
		assert!(log.borrow().is_empty());

		drop(teardown);
		assert_eq!(*log.borrow(), vec!["chart", "resize", "scroll"]);
	}

	#[test]
	fn absorbed_parts_detach_once_with_the_new_owner() {
		let log = Log::default();
		let mut page = wired(&log, &["hero"]);
		page.absorb(wired(&log, &["cards", "cta"]));
		assert!(log.borrow().is_empty(), "absorbed teardown must not detach early");
		assert_eq!(page.len(), 3);

		drop(page);
		assert_eq!(*log.borrow(), vec!["cta", "cards", "hero"]);
	}

	#[test]
	fn failed_effect_is_skipped_and_the_rest_kept() {
		let log = Log::default();
		let mut page = Teardown::default();
		page.keep("home", "hero parallax", Err(DashboardError::Js("no window".into())));
		page.keep("home", "card parallax", Ok(wired(&log, &["cards"])));
		assert_eq!(page.len(), 1);

		drop(page);
		assert_eq!(*log.borrow(), vec!["cards"]);
	}

	#[test]
	fn remounting_a_page_does_not_stack_bindings() {
		let log = Log::default();
		for _ in 0..3 {
			let visit = wired(&log, &["scroll"]);
			drop(visit);
		}
		assert_eq!(*log.borrow(), vec!["scroll"; 3]);
	}
}
