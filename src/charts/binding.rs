//! Mounting chart declarations onto page elements.
//!
//! Binding goes through an injected lookup and mount step so that a page
//! with a missing element still initialises every other chart.

use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::config::ChartConfig;
use crate::error::{DashboardError, Result};
use crate::teardown::Detach;

#[wasm_bindgen]
extern "C" {
	/// A live Chart.js instance.
	#[wasm_bindgen(js_name = Chart)]
	pub type ChartHandle;

	#[wasm_bindgen(constructor, js_class = "Chart", catch)]
	fn create(
		target: &HtmlCanvasElement,
		config: &JsValue,
	) -> std::result::Result<ChartHandle, JsValue>;

	/// Releases the chart and its listeners.
	#[wasm_bindgen(method)]
	pub fn destroy(this: &ChartHandle);
}

impl Detach for ChartHandle {
	fn detach(&self) {
		self.destroy();
	}
}

/// A chart declaration paired with the id of the element it renders into.
#[derive(Clone, Debug)]
pub struct ChartBinding {
	pub target_id: String,
	pub config: ChartConfig,
}

impl ChartBinding {
	pub fn new(target_id: impl Into<String>, config: ChartConfig) -> Self {
		Self {
			target_id: target_id.into(),
			config,
		}
	}
}

/// What happened to each binding in a [`bind_all`] pass.
#[derive(Debug)]
pub struct BindReport<H> {
	pub mounted: Vec<(String, H)>,
	pub missing: Vec<String>,
	pub failed: Vec<(String, DashboardError)>,
}

impl<H> BindReport<H> {
	pub fn mounted_ids(&self) -> impl Iterator<Item = &str> {
		self.mounted.iter().map(|(id, _)| id.as_str())
	}
}

/// Mounts each binding whose target `lookup` can find.
///
/// A missing target or a failed mount is logged and recorded, and the
/// remaining bindings are still processed.
pub fn bind_all<T, H>(
	bindings: &[ChartBinding],
	mut lookup: impl FnMut(&str) -> Option<T>,
	mut mount: impl FnMut(&T, &ChartConfig) -> Result<H>,
) -> BindReport<H> {
	let mut report = BindReport {
		mounted: Vec::new(),
		missing: Vec::new(),
		failed: Vec::new(),
	};
	for binding in bindings {
		let id = binding.target_id.clone();
		let Some(target) = lookup(&id) else {
			warn!("{}", DashboardError::TargetMissing(id.clone()));
			report.missing.push(id);
			continue;
		};
		match mount(&target, &binding.config) {
			Ok(handle) => report.mounted.push((id, handle)),
			Err(err) => {
				let title = binding.config.options.title().unwrap_or("untitled");
				warn!("chart `{id}` ({title}) failed to mount: {err}");
				report.failed.push((id, err));
			}
		}
	}
	report
}

/// Finds a canvas element by id in the current document.
pub fn find_canvas(id: &str) -> Option<HtmlCanvasElement> {
	web_sys::window()?
		.document()?
		.get_element_by_id(id)?
		.dyn_into()
		.ok()
}

/// Creates a Chart.js chart on `canvas`.
pub fn mount_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<ChartHandle> {
	Ok(ChartHandle::create(canvas, &config.to_js()?)?)
}

/// Whether the Chart.js global is present on the page.
pub fn chart_library_loaded() -> bool {
	js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

/// Binds every chart against the live document.
pub fn mount_on_document(page: &str, bindings: &[ChartBinding]) -> BindReport<ChartHandle> {
	if !chart_library_loaded() {
		error!("{page}: Chart.js is not loaded, no charts mounted");
		return BindReport {
			mounted: Vec::new(),
			missing: Vec::new(),
			failed: bindings
				.iter()
				.map(|b| (b.target_id.clone(), DashboardError::Js("Chart is not defined".into())))
				.collect(),
		};
	}
	let report = bind_all(bindings, find_canvas, mount_chart);
	info!(
		"{page}: {} of {} charts mounted ({} missing, {} failed)",
		report.mounted.len(),
		bindings.len(),
		report.missing.len(),
		report.failed.len()
	);
	debug!("{page}: mounted {:?}", report.mounted_ids().collect::<Vec<_>>());
	report
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::charts::config::{ChartKind, ChartTheme, Dataset};

	fn binding(id: &str) -> ChartBinding {
		let config = ChartConfig::new(
			ChartKind::Bar,
			["a", "b"],
			vec![Dataset::values(id, [1.0, 2.0])],
			ChartTheme::default().base_options(),
		)
		.unwrap();
		ChartBinding::new(id, config)
	}

	fn document(ids: &[&str]) -> HashMap<String, usize> {
		ids.iter().enumerate().map(|(i, id)| (id.to_string(), i)).collect()
	}

	#[test]
	fn missing_target_does_not_stop_the_rest() {
		let bindings: Vec<_> = ["forecast", "causal", "horizon", "extent", "training"]
			.into_iter()
			.map(binding)
			.collect();
		let doc = document(&["forecast", "horizon", "extent", "training"]);

		let mut mounts = 0;
		let report = bind_all(
			&bindings,
			|id| doc.get(id).copied(),
			|&el, config| {
				mounts += 1;
				Ok((el, config.data.datasets[0].label.clone()))
			},
		);

		assert_eq!(mounts, 4);
		assert_eq!(report.missing, vec!["causal".to_string()]);
		assert_eq!(
			report.mounted_ids().collect::<Vec<_>>(),
			vec!["forecast", "horizon", "extent", "training"]
		);
		assert!(report.failed.is_empty());
	}

	#[test]
	fn mount_failure_is_recorded_and_skipped() {
		let bindings: Vec<_> = ["a", "b", "c"].into_iter().map(binding).collect();
		let doc = document(&["a", "b", "c"]);

		let report = bind_all(
			&bindings,
			|id| doc.get(id).copied(),
			|&el, _| {
				if el == 1 {
					Err(DashboardError::Js("boom".into()))
				} else {
					Ok(el)
				}
			},
		);

		assert_eq!(report.mounted_ids().collect::<Vec<_>>(), vec!["a", "c"]);
		assert_eq!(report.failed.len(), 1);
		assert_eq!(report.failed[0].0, "b");
	}

	#[test]
	fn empty_document_mounts_nothing() {
		let bindings: Vec<_> = ["a", "b"].into_iter().map(binding).collect();
		let report = bind_all(&bindings, |_| None::<()>, |_, _| Ok(()));
		assert!(report.mounted.is_empty());
		assert_eq!(report.missing.len(), 2);
	}
}
