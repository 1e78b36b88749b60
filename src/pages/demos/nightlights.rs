use leptos::prelude::*;
use log::warn;

use super::palette::*;
use super::{ChartPanel, DemoLayout, DemoSection, use_dashboard};
use crate::charts::{
	AxisOverride, ChartBinding, ChartConfig, ChartKind, ChartTheme, Dataset, OptionsOverride,
	Sample, TrendLine, correlation,
};
use crate::error::Result;

/// Annual mean radiance (nW/cm²/sr) against official GDP growth (%).
const RADIANCE_VS_GDP: [(f64, f64); 4] = [(18.32, 3.8), (21.53, 4.2), (23.75, 4.2), (24.12, 4.5)];

const MONTHLY_RADIANCE: [f64; 36] = [
	17.2, 17.8, 18.5, 18.9, 19.2, 18.3, 17.9, 18.1, 18.7, 19.3, 19.8, 20.1, //
	20.3, 20.9, 21.5, 21.8, 22.1, 21.2, 20.8, 21.0, 21.6, 22.2, 22.7, 23.0, //
	23.2, 23.8, 24.3, 24.6, 24.9, 23.9, 23.5, 23.7, 24.1, 24.5, 24.8, 25.1,
];

const MONTHS: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_labels(first_year: u32, count: usize) -> Vec<String> {
	(0..count)
		.map(|i| format!("{} {}", MONTHS[i % 12], first_year + (i / 12) as u32))
		.collect()
}

fn observed() -> Vec<Sample> {
	RADIANCE_VS_GDP
		.iter()
		.map(|&(x, y)| Sample::new(x, y))
		.collect()
}

/// The fitted overlay, or `None` when the trend is undefined.
fn trend_overlay(points: &[Sample]) -> Option<Dataset> {
	let line = match TrendLine::fit(points) {
		Ok(line) => line,
		Err(err) => {
			warn!("nightlights: trendline omitted: {err}");
			return None;
		}
	};
	let label = match correlation(points) {
		Some(r) => format!("Trendline (r={r:.2})"),
		None => "Trendline".to_string(),
	};
	let ends = line.span(points)?;
	Some(
		Dataset::points(label, ends)
			.kind(ChartKind::Line)
			.border(ORANGE)
			.width(2.0)
			.dashed()
			.fill(false)
			.point_radius(0.0),
	)
}

fn correlation_chart(points: &[Sample], theme: &ChartTheme) -> Result<ChartBinding> {
	let mut datasets = vec![
		Dataset::points("Observed Data", points.iter().copied())
			.background(TEAL)
			.border(TEAL)
			.width(2.0)
			.point_radius(8.0)
			.hover_radius(10.0),
	];
	datasets.extend(trend_overlay(points));

	let config = ChartConfig::scatter(
		datasets,
		theme.options(
			&OptionsOverride::titled("Nightlight Radiance vs GDP Growth")
				.x(AxisOverride::titled("Nightlight Radiance (nW/cm²/sr)"))
				.y(AxisOverride::titled("GDP Growth (%)")),
		),
	)?;
	Ok(ChartBinding::new("chart-correlation", config))
}

fn temporal_chart(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Line,
		month_labels(2022, MONTHLY_RADIANCE.len()),
		vec![
			Dataset::values("Nightlight Radiance", MONTHLY_RADIANCE)
				.border(TEAL)
				.background(TEAL_WASH)
				.width(3.0)
				.tension(0.4)
				.fill(true)
				.point_radius(0.0)
				.hover_radius(6.0),
		],
		theme.options(
			&OptionsOverride::titled("Three-Year Economic Pulse (2022-2024)")
				.y(AxisOverride::titled("Radiance (nW/cm²/sr)")),
		),
	)?;
	Ok(ChartBinding::new("chart-temporal", config))
}

pub(super) fn charts(_today: i64) -> Vec<Result<ChartBinding>> {
	let theme = ChartTheme::default();
	vec![correlation_chart(&observed(), &theme), temporal_chart(&theme)]
}

#[component]
pub fn NightlightsDemo() -> impl IntoView {
	use_dashboard("nightlights", charts);

	view! {
		<DemoLayout
			eyebrow="Economic Intelligence"
			title="Reading the economy from orbit"
			summary="VIIRS nightlight radiance tracks official GDP growth closely enough to nowcast it months ahead of the statistics office."
		>
			<DemoSection heading="Radiance against GDP growth">
				<ChartPanel id="chart-correlation" />
			</DemoSection>
			<DemoSection heading="Thirty-six months of radiance">
				<ChartPanel id="chart-temporal" />
			</DemoSection>
		</DemoLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::charts::config::Series;

	#[test]
	fn overlay_follows_the_fitted_line() {
		let points = observed();
		let overlay = trend_overlay(&points).unwrap();
		assert!(overlay.label.starts_with("Trendline (r=0."));
		let Series::Points(fitted) = &overlay.data else {
			panic!("trendline should be a point series");
		};
		assert_eq!(fitted.len(), 2);
		let line = TrendLine::fit(&points).unwrap();
		let (min, max) = points
			.iter()
			.fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
		assert_eq!(fitted[0], Sample::new(min, line.at(min)));
		assert_eq!(fitted[1], Sample::new(max, line.at(max)));
	}

	#[test]
	fn degenerate_data_drops_only_the_overlay() {
		let flat = vec![Sample::new(5.0, 1.0), Sample::new(5.0, 2.0)];
		assert!(trend_overlay(&flat).is_none());
		let binding = correlation_chart(&flat, &ChartTheme::default()).unwrap();
		assert_eq!(binding.config.data.datasets.len(), 1);
	}

	#[test]
	fn month_labels_roll_over_years() {
		let labels = month_labels(2022, 36);
		assert_eq!(labels[0], "Jan 2022");
		assert_eq!(labels[12], "Jan 2023");
		assert_eq!(labels[35], "Dec 2024");
	}
}
