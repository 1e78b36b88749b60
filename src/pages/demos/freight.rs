use leptos::prelude::*;

use super::palette::*;
use super::{ChartPanel, DemoLayout, DemoSection, use_dashboard};
use crate::charts::{
	AxisOverride, ChartBinding, ChartConfig, ChartKind, ChartTheme, Dataset, OptionsOverride,
};
use crate::error::Result;

struct ModelScore {
	model: &'static str,
	r2_7day: f64,
	r2_14day: f64,
	r2_30day: f64,
	mae_7day: f64,
	training_time: &'static str,
}

static MODELS: [ModelScore; 6] = [
	ModelScore {
		model: "CatBoost",
		r2_7day: 0.8069,
		r2_14day: 0.7350,
		r2_30day: 0.5930,
		mae_7day: 611.16,
		training_time: "2.3s",
	},
	ModelScore {
		model: "Ridge",
		r2_7day: 0.7261,
		r2_14day: 0.6890,
		r2_30day: 0.5420,
		mae_7day: 723.45,
		training_time: "0.1s",
	},
	ModelScore {
		model: "Gradient Boosting",
		r2_7day: 0.7131,
		r2_14day: 0.6750,
		r2_30day: 0.5180,
		mae_7day: 745.23,
		training_time: "5.7s",
	},
	ModelScore {
		model: "XGBoost",
		r2_7day: 0.4901,
		r2_14day: 0.4320,
		r2_30day: 0.3560,
		mae_7day: 982.14,
		training_time: "3.4s",
	},
	ModelScore {
		model: "LightGBM",
		r2_7day: 0.4645,
		r2_14day: 0.4120,
		r2_30day: 0.3320,
		mae_7day: 1045.67,
		training_time: "1.9s",
	},
	ModelScore {
		model: "Random Forest",
		r2_7day: 0.4230,
		r2_14day: 0.3890,
		r2_30day: 0.2970,
		mae_7day: 1123.45,
		training_time: "4.2s",
	},
];

/// Daily freight rate (USD) over the last 30 days, with the 7-day model's
/// predictions for the same days.
const ACTUAL: [f64; 30] = [
	2845., 2912., 2756., 2834., 2901., 2767., 2889., 2923., 2801., 2856., //
	2778., 2834., 2901., 2845., 2789., 2912., 2834., 2867., 2923., 2801., //
	2889., 2845., 2778., 2901., 2834., 2912., 2867., 2789., 2845., 2901.,
];
const PREDICTED: [f64; 30] = [
	2823., 2889., 2789., 2867., 2923., 2801., 2912., 2901., 2823., 2878., //
	2801., 2867., 2889., 2834., 2812., 2901., 2856., 2889., 2912., 2823., //
	2901., 2867., 2801., 2889., 2845., 2923., 2878., 2812., 2867., 2889.,
];

const STAGES: [&str; 7] = [
	"Start",
	"Chimera",
	"Abyss",
	"Initial Recovery",
	"Breakthrough",
	"Refinement",
	"Final",
];
const STAGE_R2: [f64; 7] = [0.0, 0.98, -0.15, 0.35, 0.67, 0.78, 0.8069];

struct Horizon {
	id: &'static str,
	title: &'static str,
	/// Longer horizons are drawn as a damped copy of the 7-day predictions.
	damping: f64,
	color: &'static str,
	wash: &'static str,
}

static HORIZONS: [Horizon; 3] = [
	Horizon {
		id: "chart-7day",
		title: "Last 30 Days Performance",
		damping: 1.0,
		color: ORANGE,
		wash: ORANGE_WASH,
	},
	Horizon {
		id: "chart-14day",
		title: "14-Day Horizon",
		damping: 0.98,
		color: PURPLE,
		wash: PURPLE_WASH,
	},
	Horizon {
		id: "chart-30day",
		title: "30-Day Horizon",
		damping: 0.95,
		color: RED,
		wash: "rgba(239, 68, 68, 0.1)",
	},
];

fn day_names(count: usize) -> Vec<String> {
	(1..=count).map(|d| format!("Day {d}")).collect()
}

fn horizon_chart(horizon: &Horizon, theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Line,
		day_names(ACTUAL.len()),
		vec![
			Dataset::values("Actual", ACTUAL)
				.border(TEAL)
				.background(TEAL_WASH)
				.width(2.0)
				.tension(0.4)
				.point_radius(0.0)
				.hover_radius(4.0),
			Dataset::values("Predicted", PREDICTED.iter().map(|v| v * horizon.damping))
				.border(horizon.color)
				.background(horizon.wash)
				.width(2.0)
				.dashed()
				.tension(0.4)
				.point_radius(0.0)
				.hover_radius(4.0),
		],
		theme.options(
			&OptionsOverride::titled(horizon.title).y(AxisOverride::titled("Freight Rate (USD)")),
		),
	)?;
	Ok(ChartBinding::new(horizon.id, config))
}

fn journey(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Line,
		STAGES,
		vec![
			Dataset::values("R² Score", STAGE_R2)
				.border(TEAL)
				.background("rgba(20, 184, 166, 0.2)")
				.width(3.0)
				.tension(0.4)
				.point_radius(6.0)
				.hover_radius(8.0)
				.fill(true),
		],
		theme.options(
			&OptionsOverride::titled("The Journey from Illusion to Truth")
				.y(AxisOverride::titled("R² Score").range(Some(-0.2), Some(1.0))),
		),
	)?;
	Ok(ChartBinding::new("chart-journey", config))
}

fn models(theme: &ChartTheme) -> Result<ChartBinding> {
	let series = |label: &str, color: &str, score: fn(&ModelScore) -> f64| {
		Dataset::values(label, MODELS.iter().map(score))
			.background(color)
			.border(color)
			.width(1.0)
	};
	let config = ChartConfig::new(
		ChartKind::Bar,
		MODELS.iter().map(|m| m.model),
		vec![
			series("7-Day R²", TEAL, |m| m.r2_7day),
			series("14-Day R²", PURPLE, |m| m.r2_14day),
			series("30-Day R²", ORANGE, |m| m.r2_30day),
		],
		theme.options(
			&OptionsOverride::titled("Multi-Horizon Performance Comparison").y(
				AxisOverride::titled("R² Score")
					.from_zero()
					.range(None, Some(1.0)),
			),
		),
	)?;
	Ok(ChartBinding::new("chart-models", config))
}

pub(super) fn charts(_today: i64) -> Vec<Result<ChartBinding>> {
	let theme = ChartTheme::default();
	let mut charts: Vec<_> = HORIZONS.iter().map(|h| horizon_chart(h, &theme)).collect();
	charts.push(journey(&theme));
	charts.push(models(&theme));
	charts
}

fn percent(r2: f64) -> String {
	format!("{:.1}%", r2 * 100.0)
}

fn dollars(amount: f64) -> String {
	format!("${amount:.2}")
}

#[component]
fn ModelTable() -> impl IntoView {
	let rows = MODELS
		.iter()
		.map(|m| {
			view! {
				<tr>
					<td><strong>{m.model}</strong></td>
					<td>{percent(m.r2_7day)}</td>
					<td>{percent(m.r2_14day)}</td>
					<td>{percent(m.r2_30day)}</td>
					<td>{dollars(m.mae_7day)}</td>
					<td>{m.training_time}</td>
				</tr>
			}
		})
		.collect_view();

	view! {
		<table class="model-table">
			<thead>
				<tr>
					<th>"Model"</th>
					<th>"7-Day R²"</th>
					<th>"14-Day R²"</th>
					<th>"30-Day R²"</th>
					<th>"7-Day MAE"</th>
					<th>"Training"</th>
				</tr>
			</thead>
			<tbody id="model-table-body">{rows}</tbody>
		</table>
	}
}

#[component]
pub fn FreightDemo() -> impl IntoView {
	use_dashboard("freight", charts);

	view! {
		<DemoLayout
			eyebrow="Freight Intelligence"
			title="Forecasting freight rates without fooling ourselves"
			summary="A leakage-free rebuild of a freight-rate forecaster: from a 98% R² illusion to an honest 80.7% that holds up in production."
		>
			<DemoSection heading="Seven days ahead">
				<ChartPanel id="chart-7day" />
			</DemoSection>
			<DemoSection heading="Longer horizons">
				<div class="chart-grid">
					<ChartPanel id="chart-14day" height=300 />
					<ChartPanel id="chart-30day" height=300 />
				</div>
			</DemoSection>
			<DemoSection heading="The crucible">
				<ChartPanel id="chart-journey" />
			</DemoSection>
			<DemoSection heading="Model comparison">
				<ChartPanel id="chart-models" />
				<ModelTable />
			</DemoSection>
		</DemoLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::charts::config::Series;

	#[test]
	fn table_cells_format_scores() {
		assert_eq!(percent(MODELS[0].r2_7day), "80.7%");
		assert_eq!(percent(MODELS[5].r2_30day), "29.7%");
		assert_eq!(dollars(MODELS[0].mae_7day), "$611.16");
		assert_eq!(dollars(MODELS[4].mae_7day), "$1045.67");
	}

	#[test]
	fn longer_horizons_damp_predictions() {
		let binding = horizon_chart(&HORIZONS[2], &ChartTheme::default()).unwrap();
		let Series::Values(values) = &binding.config.data.datasets[1].data else {
			panic!("predictions should be a value series");
		};
		assert_eq!(values[0], Some(PREDICTED[0] * 0.95));
		assert_eq!(binding.config.options.title(), Some("30-Day Horizon"));
	}

	#[test]
	fn comparison_has_one_series_per_horizon() {
		let binding = models(&ChartTheme::default()).unwrap();
		assert_eq!(binding.config.data.labels.len(), MODELS.len());
		assert_eq!(binding.config.data.datasets.len(), 3);
	}
}
