use leptos::prelude::*;

use super::palette::*;
use super::{ChartPanel, DemoLayout, DemoSection, use_dashboard};
use crate::charts::{
	AxisOverride, ChartBinding, ChartConfig, ChartKind, ChartTheme, Dataset, OptionsOverride,
	ScaleKind,
};
use crate::error::Result;

const METRICS: [&str; 5] = ["Accuracy", "Precision", "Recall", "F1-Score", "IoU"];
const HAWKEYE: [f64; 5] = [96.8, 94.2, 95.7, 94.9, 87.3];
const BASELINE: [f64; 5] = [78.5, 68.2, 71.3, 69.7, 52.1];

const METHODS: [&str; 3] = ["Manual Analysis", "Traditional CNN", "HAWKEYE ViT"];
const METHOD_MINUTES: [f64; 3] = [10_080.0, 240.0, 30.0];

const SOURCES: [&str; 3] = ["Sentinel-1 SAR", "Sentinel-2 Optical", "DEM Terrain"];
const CONTRIBUTION: [f64; 3] = [45.0, 38.0, 17.0];

const TOTAL_AREA_KM2: f64 = 2847.0;
const FLOODED_AREA_KM2: f64 = 412.8;
const FLOODED_PERCENT: f64 = 14.5;

const TRAIN_LOSS: [f64; 15] = [
	0.68, 0.52, 0.41, 0.35, 0.31, 0.28, 0.25, 0.23, 0.21, 0.19, 0.18, 0.17, 0.16, 0.155, 0.15,
];
const VAL_LOSS: [f64; 15] = [
	0.71, 0.55, 0.44, 0.38, 0.34, 0.31, 0.29, 0.27, 0.26, 0.24, 0.23, 0.22, 0.21, 0.21, 0.20,
];

/// Human-scale duration: days from a day up, hours from an hour up.
fn format_minutes(minutes: f64) -> String {
	if minutes >= 1440.0 {
		format!("{:.1} days", minutes / 1440.0)
	} else if minutes >= 60.0 {
		format!("{:.1} hours", minutes / 60.0)
	} else {
		format!("{minutes} minutes")
	}
}

/// How many times faster the last method is than the first.
fn speedup() -> f64 {
	METHOD_MINUTES[0] / METHOD_MINUTES[METHOD_MINUTES.len() - 1]
}

fn performance(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Bar,
		METRICS,
		vec![
			Dataset::values("HAWKEYE Vision Transformer", HAWKEYE)
				.background(TEAL)
				.border(TEAL)
				.width(1.0)
				.rounded(4.0),
			Dataset::values("Traditional Baseline", BASELINE)
				.background(SLATE)
				.border(SLATE)
				.width(1.0)
				.rounded(4.0),
		],
		theme.options(
			&OptionsOverride::titled(format!(
				"HAWKEYE vs Traditional Methods ({}% Accuracy)",
				HAWKEYE[0]
			))
			.y(AxisOverride::titled("Performance Score (%)")
				.from_zero()
				.range(None, Some(100.0))),
		),
	)?;
	Ok(ChartBinding::new("chart-performance-metrics", config))
}

fn processing_speed(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Bar,
		METHODS,
		vec![
			Dataset::values("Processing Time (minutes)", METHOD_MINUTES)
				.background(vec![RED, ORANGE, TEAL])
				.width(0.0)
				.rounded(4.0),
		],
		theme.options(
			&OptionsOverride::titled(format!("{:.0}× Faster: 7 Days → 30 Minutes", speedup()))
				.without_legend()
				.horizontal()
				.x(AxisOverride::titled("Time (log scale)").scale(ScaleKind::Logarithmic)),
		),
	)?;
	Ok(ChartBinding::new("chart-processing-speed", config))
}

fn modalities(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Doughnut,
		SOURCES,
		vec![
			Dataset::values("Contribution (%)", CONTRIBUTION)
				.background(vec![TEAL, PURPLE, ORANGE])
				.border(NAVY)
				.width(3.0)
				.hover_offset(10.0),
		],
		theme.options(
			&OptionsOverride::titled("Multi-Modal Data Fusion (3 Satellite Sources)")
				.legend_at("bottom"),
		),
	)?;
	Ok(ChartBinding::new("chart-data-modalities", config))
}

fn extent(theme: &ChartTheme) -> Result<ChartBinding> {
	let labels = [
		format!("Flooded Area ({FLOODED_AREA_KM2} km²)"),
		format!("Normal Area ({:.1} km²)", TOTAL_AREA_KM2 - FLOODED_AREA_KM2),
	];
	let config = ChartConfig::new(
		ChartKind::Pie,
		labels,
		vec![
			Dataset::values("Share of area (%)", [FLOODED_PERCENT, 100.0 - FLOODED_PERCENT])
				.background(vec![RED, GREEN])
				.border(NAVY)
				.width(3.0)
				.hover_offset(10.0),
		],
		theme.options(
			&OptionsOverride::titled(format!(
				"Detected Flood Extent ({FLOODED_PERCENT}% of Total Area)"
			))
			.legend_at("bottom"),
		),
	)?;
	Ok(ChartBinding::new("chart-flood-extent", config))
}

fn training(theme: &ChartTheme) -> Result<ChartBinding> {
	let loss = |label: &str, values: [f64; 15], color: &str, wash: &str| {
		Dataset::values(label, values)
			.border(color)
			.background(wash)
			.width(3.0)
			.tension(0.4)
			.point_radius(4.0)
			.hover_radius(6.0)
			.fill(true)
	};
	let config = ChartConfig::new(
		ChartKind::Line,
		(1..=TRAIN_LOSS.len()).map(|epoch| epoch.to_string()),
		vec![
			loss("Training Loss", TRAIN_LOSS, TEAL, TEAL_WASH),
			loss("Validation Loss", VAL_LOSS, PURPLE, PURPLE_WASH),
		],
		theme.options(
			&OptionsOverride::titled(format!(
				"Vision Transformer Training Convergence ({} Epochs)",
				TRAIN_LOSS.len()
			))
			.x(AxisOverride::titled("Epoch"))
			.y(AxisOverride::titled("Cross-Entropy Loss").range(Some(0.0), Some(0.75))),
		),
	)?;
	Ok(ChartBinding::new("chart-training-loss", config))
}

pub(super) fn charts(_today: i64) -> Vec<Result<ChartBinding>> {
	let theme = ChartTheme::default();
	vec![
		performance(&theme),
		processing_speed(&theme),
		modalities(&theme),
		extent(&theme),
		training(&theme),
	]
}

#[component]
pub fn FloodDemo() -> impl IntoView {
	use_dashboard("flood", charts);

	let timings = METHODS
		.iter()
		.zip(METHOD_MINUTES)
		.map(|(method, minutes)| {
			view! {
				<li>
					<span class="stat-label">{*method}</span>
					<span class="stat-value">{format_minutes(minutes)}</span>
				</li>
			}
		})
		.collect_view();

	view! {
		<DemoLayout
			eyebrow="Flood Intelligence"
			title="Flood extent in thirty minutes, not seven days"
			summary="A vision transformer fusing radar, optical and terrain data maps flooded land at 96.8% accuracy while the water is still rising."
		>
			<DemoSection heading="Accuracy against the baseline">
				<ChartPanel id="chart-performance-metrics" />
			</DemoSection>
			<DemoSection heading="Time to a usable map">
				<ChartPanel id="chart-processing-speed" height=280 />
				<ul class="stat-list">{timings}</ul>
			</DemoSection>
			<DemoSection heading="Inputs and outcome">
				<div class="chart-grid">
					<ChartPanel id="chart-data-modalities" height=320 />
					<ChartPanel id="chart-flood-extent" height=320 />
				</div>
			</DemoSection>
			<DemoSection heading="Training">
				<ChartPanel id="chart-training-loss" />
			</DemoSection>
		</DemoLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn durations_pick_the_largest_unit() {
		assert_eq!(format_minutes(10_080.0), "7.0 days");
		assert_eq!(format_minutes(240.0), "4.0 hours");
		assert_eq!(format_minutes(30.0), "30 minutes");
	}

	#[test]
	fn titles_are_derived_from_the_data() {
		let theme = ChartTheme::default();
		assert_eq!(
			processing_speed(&theme).unwrap().config.options.title(),
			Some("336× Faster: 7 Days → 30 Minutes")
		);
		assert_eq!(
			performance(&theme).unwrap().config.options.title(),
			Some("HAWKEYE vs Traditional Methods (96.8% Accuracy)")
		);
		let pie = extent(&theme).unwrap();
		assert_eq!(pie.config.data.labels[1], "Normal Area (2434.2 km²)");
		assert!(pie.config.options.scales.is_none());
	}

	#[test]
	fn speed_chart_uses_a_log_axis() {
		let binding = processing_speed(&ChartTheme::default()).unwrap();
		let scales = binding.config.options.scales.unwrap();
		assert_eq!(scales.x.scale, Some(ScaleKind::Logarithmic));
		assert_eq!(binding.config.options.index_axis.as_deref(), Some("y"));
	}
}
