//! Typed chart declarations, serialized to the object shape Chart.js reads.
//!
//! A [`ChartTheme`] is the shared styling every dashboard starts from. It is
//! never mutated: each chart gets its own [`ChartOptions`] by merging an
//! [`OptionsOverride`] over the themed base.

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::trend::Sample;
use crate::error::{DashboardError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
	Bar,
	Line,
	Pie,
	Doughnut,
	Scatter,
}

impl ChartKind {
	/// Pie and doughnut charts have no cartesian axes.
	pub fn is_radial(self) -> bool {
		matches!(self, ChartKind::Pie | ChartKind::Doughnut)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
	Linear,
	Logarithmic,
}

/// Either index-aligned values (gaps as `None`) or explicit points.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
	Values(Vec<Option<f64>>),
	Points(Vec<Sample>),
}

/// One color for the whole dataset, or one per bar/slice.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
	Solid(String),
	PerItem(Vec<String>),
}

impl From<&str> for Paint {
	fn from(color: &str) -> Self {
		Paint::Solid(color.to_string())
	}
}

impl From<Vec<&str>> for Paint {
	fn from(colors: Vec<&str>) -> Self {
		Paint::PerItem(colors.into_iter().map(String::from).collect())
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
	pub label: String,
	pub data: Series,
	/// Overrides the chart kind, e.g. a line overlay on a scatter chart.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<ChartKind>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub border_color: Option<Paint>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub background_color: Option<Paint>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub border_width: Option<f64>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub border_dash: Vec<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tension: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub point_radius: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub point_hover_radius: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fill: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub border_radius: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hover_offset: Option<f64>,
}

impl Dataset {
	fn with_series(label: impl Into<String>, data: Series) -> Self {
		Self {
			label: label.into(),
			data,
			kind: None,
			border_color: None,
			background_color: None,
			border_width: None,
			border_dash: Vec::new(),
			tension: None,
			point_radius: None,
			point_hover_radius: None,
			fill: None,
			border_radius: None,
			hover_offset: None,
		}
	}

	pub fn values(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
		Self::with_series(label, Series::Values(values.into_iter().map(Some).collect()))
	}

	/// Values where `None` leaves a gap on the category axis.
	pub fn sparse(label: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
		Self::with_series(label, Series::Values(values.into_iter().collect()))
	}

	pub fn points(label: impl Into<String>, points: impl IntoIterator<Item = Sample>) -> Self {
		Self::with_series(label, Series::Points(points.into_iter().collect()))
	}

	pub fn kind(mut self, kind: ChartKind) -> Self {
		self.kind = Some(kind);
		self
	}

	pub fn border(mut self, paint: impl Into<Paint>) -> Self {
		self.border_color = Some(paint.into());
		self
	}

	pub fn background(mut self, paint: impl Into<Paint>) -> Self {
		self.background_color = Some(paint.into());
		self
	}

	pub fn width(mut self, width: f64) -> Self {
		self.border_width = Some(width);
		self
	}

	pub fn dashed(mut self) -> Self {
		self.border_dash = vec![5.0, 5.0];
		self
	}

	pub fn tension(mut self, tension: f64) -> Self {
		self.tension = Some(tension);
		self
	}

	pub fn point_radius(mut self, radius: f64) -> Self {
		self.point_radius = Some(radius);
		self
	}

	pub fn hover_radius(mut self, radius: f64) -> Self {
		self.point_hover_radius = Some(radius);
		self
	}

	pub fn fill(mut self, fill: bool) -> Self {
		self.fill = Some(fill);
		self
	}

	pub fn rounded(mut self, radius: f64) -> Self {
		self.border_radius = Some(radius);
		self
	}

	pub fn hover_offset(mut self, offset: f64) -> Self {
		self.hover_offset = Some(offset);
		self
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Font {
	pub family: String,
	pub size: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weight: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendLabels {
	pub color: String,
	pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
	pub display: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position: Option<String>,
	pub labels: LegendLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
	pub background_color: String,
	pub title_color: String,
	pub body_color: String,
	pub border_color: String,
	pub border_width: f64,
	pub title_font: Font,
	pub body_font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Padding {
	pub top: f64,
	pub bottom: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
	pub display: bool,
	pub text: String,
	pub color: String,
	pub font: Font,
	pub padding: Padding,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
	pub legend: Legend,
	pub tooltip: Tooltip,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<Title>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
	pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ticks {
	pub color: String,
	pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
	pub display: bool,
	pub text: String,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub scale: Option<ScaleKind>,
	pub grid: Grid,
	pub ticks: Ticks,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<AxisTitle>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub begin_at_zero: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stacked: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
	pub x: Axis,
	pub y: Axis,
}

/// Shared dashboard styling: dark background, teal accent, mono tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
	pub text: String,
	pub muted: String,
	pub subtle: String,
	pub grid: String,
	pub accent: String,
	pub tooltip_background: String,
	pub mono_font: String,
	pub display_font: String,
}

impl Default for ChartTheme {
	fn default() -> Self {
		Self {
			text: "#E2E8F0".into(),
			muted: "#94A3B8".into(),
			subtle: "#64748B".into(),
			grid: "rgba(255, 255, 255, 0.05)".into(),
			accent: "#14B8A6".into(),
			tooltip_background: "rgba(10, 25, 47, 0.95)".into(),
			mono_font: "'IBM Plex Mono', monospace".into(),
			display_font: "'Space Grotesk', sans-serif".into(),
		}
	}
}

impl ChartTheme {
	fn mono(&self, size: f64) -> Font {
		Font {
			family: self.mono_font.clone(),
			size,
			weight: None,
		}
	}

	fn display(&self, size: f64, weight: Option<u16>) -> Font {
		Font {
			family: self.display_font.clone(),
			size,
			weight,
		}
	}

	fn axis(&self) -> Axis {
		Axis {
			scale: None,
			grid: Grid {
				color: self.grid.clone(),
			},
			ticks: Ticks {
				color: self.subtle.clone(),
				font: self.mono(9.0),
			},
			title: None,
			min: None,
			max: None,
			begin_at_zero: None,
			stacked: None,
		}
	}

	/// The base options every chart starts from.
	pub fn base_options(&self) -> ChartOptions {
		ChartOptions {
			responsive: true,
			maintain_aspect_ratio: false,
			index_axis: None,
			plugins: Plugins {
				legend: Legend {
					display: true,
					position: None,
					labels: LegendLabels {
						color: self.muted.clone(),
						font: self.mono(11.0),
					},
				},
				tooltip: Tooltip {
					background_color: self.tooltip_background.clone(),
					title_color: self.text.clone(),
					body_color: self.muted.clone(),
					border_color: self.accent.clone(),
					border_width: 1.0,
					title_font: self.display(13.0, None),
					body_font: self.mono(11.0),
				},
				title: None,
			},
			scales: Some(Scales {
				x: self.axis(),
				y: self.axis(),
			}),
			theme: self.clone(),
		}
	}

	/// Shorthand for `base_options().merged(overrides)`.
	pub fn options(&self, overrides: &OptionsOverride) -> ChartOptions {
		self.base_options().merged(overrides)
	}
}

/// Per-axis settings a chart may layer over the theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisOverride {
	pub title: Option<String>,
	pub scale: Option<ScaleKind>,
	pub min: Option<f64>,
	pub max: Option<f64>,
	pub begin_at_zero: Option<bool>,
	pub stacked: Option<bool>,
}

impl AxisOverride {
	pub fn titled(title: impl Into<String>) -> Self {
		Self {
			title: Some(title.into()),
			..Self::default()
		}
	}

	pub fn from_zero(mut self) -> Self {
		self.begin_at_zero = Some(true);
		self
	}

	pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
		self.min = min;
		self.max = max;
		self
	}

	pub fn scale(mut self, scale: ScaleKind) -> Self {
		self.scale = Some(scale);
		self
	}

	pub fn stacked(mut self) -> Self {
		self.stacked = Some(true);
		self
	}
}

/// Per-chart settings layered over the theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsOverride {
	pub title: Option<String>,
	pub legend: Option<bool>,
	pub legend_position: Option<String>,
	/// Lay bars out along the y axis.
	pub horizontal: bool,
	pub x: AxisOverride,
	pub y: AxisOverride,
}

impl OptionsOverride {
	pub fn titled(title: impl Into<String>) -> Self {
		Self {
			title: Some(title.into()),
			..Self::default()
		}
	}

	pub fn without_legend(mut self) -> Self {
		self.legend = Some(false);
		self
	}

	pub fn legend_at(mut self, position: impl Into<String>) -> Self {
		self.legend_position = Some(position.into());
		self
	}

	pub fn horizontal(mut self) -> Self {
		self.horizontal = true;
		self
	}

	pub fn x(mut self, axis: AxisOverride) -> Self {
		self.x = axis;
		self
	}

	pub fn y(mut self, axis: AxisOverride) -> Self {
		self.y = axis;
		self
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
	pub responsive: bool,
	pub maintain_aspect_ratio: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index_axis: Option<String>,
	pub plugins: Plugins,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scales: Option<Scales>,
	#[serde(skip)]
	theme: ChartTheme,
}

impl ChartOptions {
	/// Returns a copy of `self` with `overrides` applied; `self` is untouched.
	pub fn merged(&self, overrides: &OptionsOverride) -> ChartOptions {
		let mut out = self.clone();
		let theme = &self.theme;

		if let Some(text) = &overrides.title {
			out.plugins.title = Some(Title {
				display: true,
				text: text.clone(),
				color: theme.text.clone(),
				font: theme.display(14.0, Some(600)),
				padding: Padding {
					top: 10.0,
					bottom: 20.0,
				},
			});
		}
		if let Some(display) = overrides.legend {
			out.plugins.legend.display = display;
		}
		if overrides.horizontal {
			out.index_axis = Some("y".into());
		}
		if let Some(position) = &overrides.legend_position {
			out.plugins.legend.position = Some(position.clone());
		}
		if let Some(scales) = out.scales.as_mut() {
			merge_axis(&mut scales.x, &overrides.x, theme);
			merge_axis(&mut scales.y, &overrides.y, theme);
		}
		out
	}

	pub fn title(&self) -> Option<&str> {
		self.plugins.title.as_ref().map(|t| t.text.as_str())
	}
}

fn merge_axis(axis: &mut Axis, o: &AxisOverride, theme: &ChartTheme) {
	if let Some(text) = &o.title {
		axis.title = Some(AxisTitle {
			display: true,
			text: text.clone(),
			color: theme.muted.clone(),
		});
	}
	axis.scale = o.scale.or(axis.scale);
	axis.min = o.min.or(axis.min);
	axis.max = o.max.or(axis.max);
	axis.begin_at_zero = o.begin_at_zero.or(axis.begin_at_zero);
	axis.stacked = o.stacked.or(axis.stacked);
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub labels: Vec<String>,
	pub datasets: Vec<Dataset>,
}

/// A complete, validated chart declaration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
	#[serde(rename = "type")]
	pub kind: ChartKind,
	pub data: ChartData,
	pub options: ChartOptions,
}

impl ChartConfig {
	/// Checks that every value series lines up with `labels`.
	///
	/// Point series carry their own x values and are exempt. Radial kinds
	/// drop the cartesian scales from `options`.
	pub fn new<L: Into<String>>(
		kind: ChartKind,
		labels: impl IntoIterator<Item = L>,
		datasets: Vec<Dataset>,
		mut options: ChartOptions,
	) -> Result<Self> {
		if datasets.is_empty() {
			return Err(DashboardError::EmptyChart);
		}
		let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
		for ds in &datasets {
			if let Series::Values(values) = &ds.data {
				if values.len() != labels.len() {
					return Err(DashboardError::SeriesLengthMismatch {
						dataset: ds.label.clone(),
						labels: labels.len(),
						values: values.len(),
					});
				}
			}
		}
		if kind.is_radial() {
			options.scales = None;
		}
		Ok(Self {
			kind,
			data: ChartData { labels, datasets },
			options,
		})
	}

	/// Scatter chart: datasets carry their own points, no category labels.
	pub fn scatter(datasets: Vec<Dataset>, options: ChartOptions) -> Result<Self> {
		Self::new(ChartKind::Scatter, Vec::<String>::new(), datasets, options)
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// The plain JS object handed to the `Chart` constructor.
	pub fn to_js(&self) -> Result<JsValue> {
		Ok(js_sys::JSON::parse(&self.to_json()?)?)
	}
}
