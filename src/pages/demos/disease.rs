use leptos::prelude::*;
use log::warn;

use super::palette::*;
use super::{ChartPanel, DemoLayout, DemoSection, day_labels, use_dashboard};
use crate::charts::{
	AxisOverride, ChartBinding, ChartConfig, ChartKind, ChartTheme, Dataset, OptionsOverride,
};
use crate::components::causal_network::{
	CausalEdge, CausalGraph, CausalNetworkCanvas, CausalNode,
};
use crate::error::Result;

const HISTORY_DAYS: usize = 90;

/// Daily dengue cases over the last 90 days.
const ACTUAL: [f64; HISTORY_DAYS] = [
	45., 52., 48., 61., 58., 67., 72., 81., 89., 95., //
	102., 98., 105., 112., 118., 125., 132., 128., 135., 141., //
	148., 156., 163., 158., 165., 172., 168., 175., 181., 178., //
	172., 165., 158., 151., 145., 138., 132., 125., 119., 112., //
	106., 98., 92., 85., 79., 73., 67., 61., 56., 51., //
	47., 43., 39., 36., 33., 31., 28., 26., 24., 22., //
	21., 19., 18., 17., 16., 15., 14., 13., 12., 12., //
	11., 11., 10., 10., 9., 9., 8., 8., 8., 7., //
	7., 7., 6., 6., 6., 5., 5., 5., 5., 4.,
];

const PREDICTED: [f64; 7] = [4., 4., 4., 3., 3., 3., 3.];

const HORIZONS: [&str; 3] = ["7-Day", "14-Day", "30-Day"];
const MAPE: [f64; 3] = [9.8, 12.5, 17.2];

/// The id drawn with the accent palette.
pub(crate) const FOCUS_NODE: &str = "dengue";

pub(crate) fn causal_graph() -> Result<CausalGraph> {
	CausalGraph::new(
		vec![
			CausalNode::new("temp", "Max Temperature", 50.0, 20.0),
			CausalNode::new("humidity", "Humidity", 20.0, 50.0),
			CausalNode::new("rainfall", "Rainfall", 80.0, 50.0),
			CausalNode::new("economic", "Economic Activity", 20.0, 80.0),
			CausalNode::new("dengue", "Dengue Cases", 50.0, 80.0),
			CausalNode::new("water", "Surface Water", 80.0, 80.0),
		],
		vec![
			CausalEdge::new("temp", "dengue", 0.324, 7, TEAL),
			CausalEdge::new("humidity", "dengue", 0.187, 3, PURPLE),
			CausalEdge::new("economic", "dengue", -0.574, 0, RED),
			CausalEdge::new("rainfall", "water", 0.512, 1, ORANGE),
			CausalEdge::new("water", "dengue", 0.231, 5, GREEN),
		],
	)?
	.with_focus(FOCUS_NODE)
}

fn forecast(today: i64, theme: &ChartTheme) -> Result<ChartBinding> {
	let mut labels = day_labels(today, -(HISTORY_DAYS as i64), HISTORY_DAYS);
	labels.extend(day_labels(today, 1, PREDICTED.len()));

	let history = ACTUAL
		.iter()
		.map(|&v| Some(v))
		.chain(PREDICTED.iter().map(|_| None));
	let ahead = ACTUAL
		.iter()
		.map(|_| None)
		.chain(PREDICTED.iter().map(|&v| Some(v)));

	let config = ChartConfig::new(
		ChartKind::Line,
		labels,
		vec![
			Dataset::sparse("Historical Cases", history)
				.border(TEAL)
				.background(TEAL_WASH)
				.width(2.0)
				.tension(0.4)
				.point_radius(0.0)
				.fill(true),
			Dataset::sparse("7-Day Forecast", ahead)
				.border(ORANGE)
				.background(ORANGE_WASH)
				.width(2.0)
				.dashed()
				.tension(0.4)
				.point_radius(0.0)
				.fill(false),
		],
		theme.options(
			&OptionsOverride::titled("Dengue Cases: Historical + 7-Day Forecast")
				.y(AxisOverride::titled("Daily Cases").from_zero()),
		),
	)?;
	Ok(ChartBinding::new("chart-forecast-7day", config))
}

fn horizons(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Bar,
		HORIZONS,
		vec![
			Dataset::values("MAPE (%)", MAPE)
				.background(vec![
					"rgba(20, 184, 166, 0.8)",
					"rgba(139, 92, 246, 0.8)",
					"rgba(251, 146, 60, 0.8)",
				])
				.border(vec![TEAL, PURPLE, ORANGE])
				.width(2.0),
		],
		theme.options(
			&OptionsOverride::titled("Forecast Accuracy by Horizon")
				.without_legend()
				.y(AxisOverride::titled("Mean Absolute % Error")
					.from_zero()
					.range(None, Some(20.0))),
		),
	)?;
	Ok(ChartBinding::new("chart-multi-horizon", config))
}

pub(super) fn charts(today: i64) -> Vec<Result<ChartBinding>> {
	let theme = ChartTheme::default();
	vec![forecast(today, &theme), horizons(&theme)]
}

#[component]
pub fn DiseaseDemo() -> impl IntoView {
	use_dashboard("disease", charts);

	let network = match causal_graph() {
		Ok(graph) => Some(graph),
		Err(err) => {
			warn!("disease: causal network skipped: {err}");
			None
		}
	};

	view! {
		<DemoLayout
			eyebrow="Disease Intelligence"
			title="Dengue early warning, seven days out"
			summary="Climate, water and economic signals fused into a multi-horizon case forecast with discovered causal lags."
		>
			<DemoSection heading="Historical cases and forecast">
				<ChartPanel id="chart-forecast-7day" />
			</DemoSection>
			<DemoSection heading="Discovered causal drivers">
				{network
					.map(|graph| {
						view! {
							<CausalNetworkCanvas
								graph=Signal::stored(graph)
								height=300.0
								id="chart-causal-network"
							/>
						}
					})}
				<p class="chart-note">"Edge width tracks effect strength; labels give the lag in days."</p>
			</DemoSection>
			<DemoSection heading="Accuracy by horizon">
				<ChartPanel id="chart-multi-horizon" height=300 />
			</DemoSection>
		</DemoLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_network_is_valid() {
		let graph = causal_graph().unwrap();
		assert_eq!(graph.nodes().len(), 6);
		assert_eq!(graph.edges().len(), 5);
		let focus = graph.nodes().iter().position(|n| n.id == FOCUS_NODE).unwrap();
		assert!(graph.is_focus(focus));
	}

	#[test]
	fn forecast_aligns_history_and_horizon() {
		let binding = forecast(19_723, &ChartTheme::default()).unwrap();
		let data = &binding.config.data;
		assert_eq!(data.labels.len(), HISTORY_DAYS + PREDICTED.len());
		assert_eq!(data.labels[0], "2023-10-03");
		assert_eq!(data.labels[HISTORY_DAYS], "2024-01-02");
	}
}
