//! Browser wiring for reveals, parallax and hover effects.
//!
//! Every binder returns the [`Teardown`] for what it registered, so the page
//! can release it on unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
	ScrollLogicalPosition, Window,
};

use super::parallax;
use super::reveal::{Reveal, RevealSpec};
use crate::error::{DashboardError, Result};
use crate::teardown::{Detach, Listener, Teardown};

/// Class added to an element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

fn window() -> Result<Window> {
	web_sys::window().ok_or_else(|| DashboardError::Js("no window".into()))
}

fn select_all(selector: &str) -> Result<Vec<Element>> {
	let document = window()?
		.document()
		.ok_or_else(|| DashboardError::Js("no document".into()))?;
	let list = document.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

fn set_style(el: &Element, property: &str, value: &str) {
	if let Some(el) = el.dyn_ref::<HtmlElement>() {
		let _ = el.style().set_property(property, value);
	}
}

/// Final state of every reveal: in place, opaque, with the staggered transition.
fn reveal_element(el: &Element, spec: &RevealSpec, index: usize) {
	set_style(el, "transition", &spec.transition(index));
	set_style(el, "opacity", "1");
	set_style(el, "transform", "translateY(0)");
	let _ = el.class_list().add_1(VISIBLE_CLASS);
}

fn viewport_height(window: &Window) -> f64 {
	window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0)
}

type Targets = Rc<RefCell<Vec<(Element, Reveal)>>>;

struct Observer {
	observer: IntersectionObserver,
	targets: Targets,
	selector: String,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Detach for Observer {
	fn detach(&self) {
		self.observer.disconnect();
		let mut targets = self.targets.borrow_mut();
		for (_, reveal) in targets.iter_mut() {
			reveal.cancel();
		}
		let revealed = targets.iter().filter(|(_, r)| r.is_done()).count();
		debug!("reveal: `{}` detached, {revealed}/{} revealed", self.selector, targets.len());
	}
}

/// Reveals each element matching `selector` the first time it scrolls into
/// view. No match is a no-op.
pub fn reveal_on_scroll(selector: &str, spec: RevealSpec) -> Result<Teardown> {
	let mut teardown = Teardown::default();
	let elements = select_all(selector)?;
	if elements.is_empty() {
		warn!("reveal: nothing matches `{selector}`, skipping");
		return Ok(teardown);
	}

	let window = window()?;
	let targets: Targets = Rc::new(RefCell::new(
		elements.iter().map(|el| (el.clone(), Reveal::default())).collect(),
	));
	let targets_cb = targets.clone();
	let spec_cb = spec.clone();
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			let viewport = viewport_height(&window);
			let mut targets = targets_cb.borrow_mut();
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				let target: JsValue = entry.target().into();
				let Some(index) = targets
					.iter()
					.position(|(el, _)| AsRef::<JsValue>::as_ref(el) == &target)
				else {
					continue;
				};
				let (el, reveal) = &mut targets[index];
				// Elements already scrolled past the threshold line count too.
				let top = entry.bounding_client_rect().top();
				let due = entry.is_intersecting() || spec_cb.is_due(top, viewport);
				if reveal.on_visibility(due) {
					reveal_element(el, &spec_cb, index);
					observer.unobserve(el);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_root_margin(&spec.root_margin());
	options.set_threshold(&JsValue::from_f64(0.0));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	for (el, reveal) in targets.borrow_mut().iter_mut() {
		observer.observe(el);
		reveal.observe();
	}
	teardown.push(Observer {
		observer,
		targets,
		selector: selector.to_string(),
		_callback: callback,
	});

	debug!("reveal: observing {} `{selector}`", elements.len());
	Ok(teardown)
}

struct Timeout {
	window: Window,
	handle: i32,
	_run: Closure<dyn FnMut()>,
}

impl Detach for Timeout {
	fn detach(&self) {
		self.window.clear_timeout_with_handle(self.handle);
	}
}

/// Reveals every element matching `selector` after `after_ms`, regardless of
/// scroll position. Used for above-the-fold content on load.
pub fn reveal_after(selector: &str, spec: RevealSpec, after_ms: i32) -> Result<Teardown> {
	let mut teardown = Teardown::default();
	let elements = select_all(selector)?;
	if elements.is_empty() {
		warn!("reveal: nothing matches `{selector}`, skipping");
		return Ok(teardown);
	}
	let window = window()?;
	let run = Closure::<dyn FnMut()>::once(move || {
		for (index, el) in elements.iter().enumerate() {
			reveal_element(el, &spec, index);
		}
	});
	let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		run.as_ref().unchecked_ref(),
		after_ms,
	)?;
	teardown.push(Timeout {
		window,
		handle,
		_run: run,
	});
	Ok(teardown)
}

fn apply_scroll_effects(
	window: &Window,
	hero: &Option<Element>,
	hero_img: &Option<Element>,
	indicator: &Option<Element>,
) {
	let viewport = viewport_height(window);
	if let (Some(hero), Some(img)) = (hero, hero_img) {
		let rect = hero.get_bounding_client_rect();
		if let Some(p) = parallax::hero_progress(rect.top(), rect.bottom(), rect.height(), viewport)
		{
			set_style(img, "transform", &parallax::hero_transform(p));
		}
	}
	if let Some(indicator) = indicator {
		let scroll_y = window.page_y_offset().unwrap_or(0.0);
		set_style(
			indicator,
			"opacity",
			&parallax::scroll_indicator_opacity(scroll_y).to_string(),
		);
	}
}

/// The window scroll listener plus the animation frame it may have queued.
struct ScrollEffects {
	listener: Listener,
	window: Window,
	pending: Rc<Cell<Option<i32>>>,
	_frame: Rc<Closure<dyn FnMut()>>,
}

impl Detach for ScrollEffects {
	fn detach(&self) {
		self.listener.detach();
		if let Some(id) = self.pending.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
	}
}

fn request_frame(window: &Window, frame: &Closure<dyn FnMut()>, pending: &Cell<Option<i32>>) {
	if pending.get().is_some() {
		return;
	}
	if let Ok(id) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
		pending.set(Some(id));
	}
}

/// Hero parallax and scroll-indicator fade, recomputed at most once per frame.
pub fn bind_scroll_effects(hero: &str, hero_img: &str, indicator: &str) -> Result<Teardown> {
	let mut teardown = Teardown::default();
	let window = window()?;
	let first = |selector: &str| select_all(selector).map(|v| v.into_iter().next());
	let (hero, hero_img, indicator) = (first(hero)?, first(hero_img)?, first(indicator)?);
	if hero.is_none() && indicator.is_none() {
		warn!("scroll effects: no hero or indicator on this page, skipping");
		return Ok(teardown);
	}

	let pending = Rc::new(Cell::new(None));
	let (pending_frame, window_frame) = (pending.clone(), window.clone());
	let frame: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::new(move || {
		pending_frame.set(None);
		apply_scroll_effects(&window_frame, &hero, &hero_img, &indicator);
	}));

	let (window_scroll, frame_scroll, pending_scroll) =
		(window.clone(), frame.clone(), pending.clone());
	let listener = Listener::add(&window, "scroll", move |_| {
		request_frame(&window_scroll, &frame_scroll, &pending_scroll);
	})?;
	request_frame(&window, &frame, &pending);
	teardown.push(ScrollEffects {
		listener,
		window,
		pending,
		_frame: frame,
	});
	Ok(teardown)
}

/// Applies `enter` styles to the `child` of each `container` on mouse enter
/// and `leave` styles on mouse leave.
pub fn bind_hover(
	container: &str,
	child: &str,
	enter: &[(&str, &str)],
	leave: &[(&str, &str)],
) -> Result<Teardown> {
	let owned = |styles: &[(&str, &str)]| -> Rc<Vec<(String, String)>> {
		Rc::new(
			styles
				.iter()
				.map(|(p, v)| (p.to_string(), v.to_string()))
				.collect(),
		)
	};
	let (enter, leave) = (owned(enter), owned(leave));
	let mut teardown = Teardown::default();
	for el in &select_all(container)? {
		let Some(target) = el.query_selector(child)? else {
			continue;
		};
		for (event, styles) in [("mouseenter", enter.clone()), ("mouseleave", leave.clone())] {
			let target = target.clone();
			teardown.push(Listener::add(el, event, move |_| {
				for (property, value) in styles.iter() {
					set_style(&target, property, value);
				}
			})?);
		}
	}
	Ok(teardown)
}

/// Shifts the image inside each card towards the pointer and resets it on
/// leave.
pub fn bind_card_parallax(card: &str, image: &str) -> Result<Teardown> {
	let mut teardown = Teardown::default();
	for card in &select_all(card)? {
		let Some(img) = card.query_selector(image)? else {
			continue;
		};
		let (card_move, img_move) = (card.clone(), img.clone());
		teardown.push(Listener::add(card, "mousemove", move |ev: Event| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let rect = card_move.get_bounding_client_rect();
			let (x, y) = (
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
			set_style(
				&img_move,
				"transform",
				&parallax::card_transform(x, y, rect.width(), rect.height()),
			);
		})?);
		teardown.push(Listener::add(card, "mouseleave", move |_| {
			set_style(&img, "transform", "scale(1)")
		})?);
	}
	Ok(teardown)
}

/// The element selector an in-page link points at: `#team` for `#team`,
/// nothing for a bare `#` or any other href.
pub fn anchor_selector(href: &str) -> Option<&str> {
	(href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Scrolls smoothly to the target of every in-page `#id` link instead of
/// jumping. Links whose target is missing keep the default behavior.
pub fn bind_smooth_anchors() -> Result<Teardown> {
	let mut teardown = Teardown::default();
	for anchor in &select_all("a[href^=\"#\"]")? {
		let link = anchor.clone();
		teardown.push(Listener::add(anchor, "click", move |ev: Event| {
			let href = link.get_attribute("href").unwrap_or_default();
			let Some(selector) = anchor_selector(&href) else {
				return;
			};
			let Ok(Some(target)) = link
				.owner_document()
				.map_or(Ok(None), |doc| doc.query_selector(selector))
			else {
				return;
			};
			ev.prevent_default();
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			options.set_block(ScrollLogicalPosition::Start);
			target.scroll_into_view_with_scroll_into_view_options(&options);
		})?);
	}
	Ok(teardown)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_named_fragments_are_scroll_targets() {
		assert_eq!(anchor_selector("#work"), Some("#work"));
		assert_eq!(anchor_selector("#"), None);
		assert_eq!(anchor_selector(""), None);
		assert_eq!(anchor_selector("/studio#team"), None);
	}
}
