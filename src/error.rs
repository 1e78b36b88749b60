//! Error type shared by the dashboard components.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while building or mounting a visualization.
///
/// Data contract violations (`DuplicateNode`, `UnknownNode`,
/// `SeriesLengthMismatch`, ...) are raised when a graph or chart is
/// constructed, never halfway through drawing it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
	/// Two nodes in one diagram share an id.
	#[error("duplicate node id `{0}`")]
	DuplicateNode(String),

	/// An edge points at a node id that is not in the diagram.
	#[error("edge {edge} references unknown node `{id}`")]
	UnknownNode {
		/// Position of the offending edge in the edge list.
		edge: usize,
		/// The id that failed to resolve.
		id: String,
	},

	/// Edge strength is NaN, infinite or outside [-1, 1].
	#[error("edge {edge} has strength {strength}, expected a value in [-1, 1]")]
	InvalidStrength {
		/// Position of the offending edge in the edge list.
		edge: usize,
		/// The rejected strength.
		strength: f64,
	},

	/// The highlighted node id is not in the diagram.
	#[error("focus node `{0}` is not part of the diagram")]
	UnknownFocus(String),

	/// A value series does not line up with the chart's label axis.
	#[error("dataset `{dataset}` has {values} values for {labels} labels")]
	SeriesLengthMismatch {
		/// Legend label of the dataset.
		dataset: String,
		/// Number of category labels on the chart.
		labels: usize,
		/// Number of values in the dataset.
		values: usize,
	},

	/// A chart was declared without any dataset.
	#[error("chart has no datasets")]
	EmptyChart,

	/// The trend estimator was given no samples.
	#[error("cannot fit a trend through an empty series")]
	EmptySeries,

	/// A sample holds a NaN or infinite coordinate.
	#[error("sample {index} is not a finite point: ({x}, {y})")]
	NonFiniteSample {
		/// Position of the offending sample.
		index: usize,
		/// Its x value.
		x: f64,
		/// Its y value.
		y: f64,
	},

	/// All samples share one x value, so the slope is undefined.
	#[error("trend is undefined for {points} samples with no variance in x")]
	UndefinedTrend {
		/// Number of samples in the degenerate series.
		points: usize,
	},

	/// The element a visualization should render into is not in the document.
	#[error("target element `{0}` not found")]
	TargetMissing(String),

	/// The browser rejected a call.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for DashboardError {
	fn from(value: JsValue) -> Self {
		DashboardError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

impl From<serde_json::Error> for DashboardError {
	fn from(error: serde_json::Error) -> Self {
		DashboardError::Js(error.to_string())
	}
}

/// Result alias used across the crate.
pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
