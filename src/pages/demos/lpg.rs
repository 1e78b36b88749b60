use leptos::prelude::*;

use super::palette::*;
use super::{ChartPanel, DemoLayout, DemoSection, day_labels, use_dashboard};
use crate::charts::{
	AxisOverride, ChartBinding, ChartConfig, ChartKind, ChartTheme, Dataset, OptionsOverride,
};
use crate::error::Result;

/// Daily cylinder demand for the 60 days before today.
const HISTORY: [f64; 60] = [
	2_100_000., 2_150_000., 2_080_000., 2_200_000., 2_180_000., 2_120_000., 2_250_000., //
	2_100_000., 2_050_000., 2_180_000., 2_220_000., 2_160_000., 2_100_000., 2_280_000., //
	2_150_000., 2_100_000., 2_200_000., 2_240_000., 2_180_000., 2_120_000., 2_300_000., //
	2_180_000., 2_120_000., 2_220_000., 2_260_000., 2_200_000., 2_140_000., 2_320_000., //
	2_200_000., 2_140_000., 2_240_000., 2_280_000., 2_220_000., 2_160_000., 2_340_000., //
	2_220_000., 2_160_000., 2_260_000., 2_300_000., 2_240_000., 2_180_000., 2_360_000., //
	2_240_000., 2_180_000., 2_280_000., 2_320_000., 2_260_000., 2_200_000., 2_380_000., //
	2_260_000., 2_200_000., 2_300_000., 2_340_000., 2_280_000., 2_220_000., 2_400_000., //
	2_280_000., 2_220_000., 2_320_000., 2_360_000.,
];

const FORECAST_7DAY: [f64; 7] = [
	2_300_000., 2_240_000., 2_340_000., 2_380_000., 2_320_000., 2_260_000., 2_420_000.,
];

const FORECAST_14DAY: [f64; 14] = [
	2_300_000., 2_240_000., 2_340_000., 2_380_000., 2_320_000., 2_260_000., 2_420_000., //
	2_320_000., 2_260_000., 2_360_000., 2_400_000., 2_340_000., 2_280_000., 2_440_000.,
];

/// Trend plus a slow seasonal swing.
fn forecast_30day() -> Vec<f64> {
	(0..30)
		.map(|i| {
			let i = f64::from(i);
			2_200_000.0 + i * 8_000.0 + (i / 3.0).sin() * 100_000.0
		})
		.collect()
}

const MODELS: [&str; 6] = ["LightGBM", "CatBoost", "XGBoost", "GBM", "Random Forest", "Ridge"];
const R2_7DAY: [f64; 6] = [0.920, 0.912, 0.865, 0.851, 0.798, 0.732];
const R2_14DAY: [f64; 6] = [0.875, 0.868, 0.823, 0.810, 0.756, 0.698];
const R2_30DAY: [f64; 6] = [0.783, 0.776, 0.734, 0.721, 0.672, 0.615];

const FEATURES: [&str; 8] = [
	"Lag_7",
	"Lag_14",
	"Lag_30",
	"Day_of_Week",
	"Temperature",
	"Festival_Indicator",
	"GDP_Growth",
	"Fuel_Price",
];
const IMPORTANCE: [f64; 8] = [18.5, 12.3, 7.2, 22.0, 15.0, 12.0, 8.5, 4.5];

struct Horizon {
	id: &'static str,
	title: &'static str,
	label: &'static str,
	/// Days of history shown before the forecast starts.
	context: usize,
	color: &'static str,
	wash: &'static str,
}

static HORIZONS: [Horizon; 3] = [
	Horizon {
		id: "chart-forecast-7day",
		title: "LPG Demand: Last 30 Days + 7-Day Forecast",
		label: "7-Day Forecast (92% R²)",
		context: 30,
		color: ORANGE,
		wash: ORANGE_WASH,
	},
	Horizon {
		id: "chart-forecast-14day",
		title: "14-Day Forecast Horizon",
		label: "14-Day Forecast (87.5% R²)",
		context: 20,
		color: PURPLE,
		wash: PURPLE_WASH,
	},
	Horizon {
		id: "chart-forecast-30day",
		title: "30-Day Strategic Planning Horizon",
		label: "30-Day Forecast (78.3% R²)",
		context: 15,
		color: RED,
		wash: "rgba(239, 68, 68, 0.1)",
	},
];

/// `MM-DD` labels: `context` days up to yesterday, then `ahead` days from
/// tomorrow.
fn window_labels(today: i64, context: usize, ahead: usize) -> Vec<String> {
	let mut dates = day_labels(today, -(context as i64), context);
	dates.extend(day_labels(today, 1, ahead));
	dates
		.into_iter()
		.map(|d| d.get(5..).unwrap_or(&d).to_string())
		.collect()
}

fn forecast_chart(
	horizon: &Horizon,
	forecast: &[f64],
	today: i64,
	theme: &ChartTheme,
) -> Result<ChartBinding> {
	let recent = &HISTORY[HISTORY.len().saturating_sub(horizon.context)..];
	let history = recent
		.iter()
		.map(|&v| Some(v))
		.chain(forecast.iter().map(|_| None));
	let ahead = recent
		.iter()
		.map(|_| None)
		.chain(forecast.iter().map(|&v| Some(v)));

	let config = ChartConfig::new(
		ChartKind::Line,
		window_labels(today, recent.len(), forecast.len()),
		vec![
			Dataset::sparse("Historical Demand", history)
				.border(TEAL)
				.background(TEAL_WASH)
				.width(2.0)
				.tension(0.4)
				.point_radius(0.0)
				.fill(true),
			Dataset::sparse(horizon.label, ahead)
				.border(horizon.color)
				.background(horizon.wash)
				.width(2.0)
				.dashed()
				.tension(0.4)
				.point_radius(4.0)
				.fill(false),
		],
		theme.options(
			&OptionsOverride::titled(horizon.title).y(AxisOverride::titled("Daily Cylinders")),
		),
	)?;
	Ok(ChartBinding::new(horizon.id, config))
}

fn as_percent(scores: [f64; 6]) -> impl Iterator<Item = f64> {
	scores.into_iter().map(|r2| r2 * 100.0)
}

fn model_comparison(theme: &ChartTheme) -> Result<ChartBinding> {
	let series = |label: &str, color: &str, scores: [f64; 6]| {
		Dataset::values(label, as_percent(scores))
			.background(color)
			.border(color)
			.width(1.0)
	};
	let config = ChartConfig::new(
		ChartKind::Bar,
		MODELS,
		vec![
			series("7-Day R²", TEAL, R2_7DAY),
			series("14-Day R²", PURPLE, R2_14DAY),
			series("30-Day R²", ORANGE, R2_30DAY),
		],
		theme.options(
			&OptionsOverride::titled("Model Horse Race: LightGBM Wins Across All Horizons")
				.y(AxisOverride::titled("R² Score (%)").range(None, Some(100.0))),
		),
	)?;
	Ok(ChartBinding::new("chart-model-comparison", config))
}

fn feature_importance(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Bar,
		FEATURES,
		vec![
			Dataset::values("Importance (%)", IMPORTANCE)
				.background(vec![
					TEAL, GREEN, PURPLE, ORANGE, YELLOW, RED, SLATE, SLATE_DARK,
				])
				.width(0.0),
		],
		theme.options(
			&OptionsOverride::default()
				.without_legend()
				.horizontal()
				.x(AxisOverride::titled("Feature Importance (%)").range(None, Some(25.0))),
		),
	)?;
	Ok(ChartBinding::new("chart-feature-importance", config))
}

pub(super) fn charts(today: i64) -> Vec<Result<ChartBinding>> {
	let theme = ChartTheme::default();
	let long = forecast_30day();
	let forecasts: [&[f64]; 3] = [&FORECAST_7DAY, &FORECAST_14DAY, &long];
	let mut charts: Vec<_> = HORIZONS
		.iter()
		.zip(forecasts)
		.map(|(horizon, forecast)| forecast_chart(horizon, forecast, today, &theme))
		.collect();
	charts.push(model_comparison(&theme));
	charts.push(feature_importance(&theme));
	charts
}

#[component]
pub fn LpgDemo() -> impl IntoView {
	use_dashboard("lpg", charts);

	view! {
		<DemoLayout
			eyebrow="Energy Intelligence"
			title="LPG demand, a week to a month ahead"
			summary="Gradient-boosted forecasts of daily cylinder demand, driven by lagged demand, calendar effects, weather and festivals."
		>
			<DemoSection heading="The week ahead">
				<ChartPanel id="chart-forecast-7day" />
			</DemoSection>
			<DemoSection heading="Longer horizons">
				<div class="chart-grid">
					<ChartPanel id="chart-forecast-14day" height=320 />
					<ChartPanel id="chart-forecast-30day" height=320 />
				</div>
			</DemoSection>
			<DemoSection heading="Model comparison">
				<ChartPanel id="chart-model-comparison" />
			</DemoSection>
			<DemoSection heading="What drives demand">
				<ChartPanel id="chart-feature-importance" height=340 />
			</DemoSection>
		</DemoLayout>
	}
}

#[cfg(test)]
mod tests {
	use float_cmp::approx_eq;

	use super::*;
	use crate::charts::config::Series;

	#[test]
	fn seasonal_forecast_starts_on_trend() {
		let long = forecast_30day();
		assert_eq!(long.len(), 30);
		assert!(approx_eq!(f64, long[0], 2_200_000.0, ulps = 2));
		let expected = 2_200_000.0 + 3.0 * 8_000.0 + 1f64.sin() * 100_000.0;
		assert!(approx_eq!(f64, long[3], expected, ulps = 2));
	}

	#[test]
	fn window_joins_history_to_forecast() {
		let binding = forecast_chart(&HORIZONS[1], &FORECAST_14DAY, 19_723, &ChartTheme::default())
			.unwrap();
		let data = &binding.config.data;
		assert_eq!(data.labels.len(), 20 + 14);
		assert_eq!(data.labels[19], "12-31");
		assert_eq!(data.labels[20], "01-02");

		let Series::Values(history) = &data.datasets[0].data else {
			panic!("history should be a value series");
		};
		assert_eq!(history[0], Some(HISTORY[40]));
		assert_eq!(history[20], None);
	}

	#[test]
	fn comparison_is_in_percent() {
		let binding = model_comparison(&ChartTheme::default()).unwrap();
		let Series::Values(values) = &binding.config.data.datasets[0].data else {
			panic!("scores should be a value series");
		};
		assert!(approx_eq!(f64, values[0].unwrap(), 92.0, epsilon = 1e-9));
	}
}
