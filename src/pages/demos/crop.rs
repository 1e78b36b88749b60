use leptos::prelude::*;

use super::palette::*;
use super::{ChartPanel, DemoLayout, DemoSection, use_dashboard};
use crate::charts::{
	AxisOverride, ChartBinding, ChartConfig, ChartKind, ChartTheme, Dataset, OptionsOverride,
	Sample,
};
use crate::error::Result;

struct Cluster {
	name: &'static str,
	share: f64,
	/// Mean NDVI / NDWI of the cluster centroid.
	ndvi: f64,
	ndwi: f64,
	area_km2: f64,
	color: &'static str,
}

static CLUSTERS: [Cluster; 4] = [
	Cluster {
		name: "Healthy Vegetation",
		share: 58.3,
		ndvi: 0.72,
		ndwi: 0.15,
		area_km2: 728.75,
		color: GREEN,
	},
	Cluster {
		name: "Water Bodies",
		share: 18.5,
		ndvi: 0.31,
		ndwi: 0.68,
		area_km2: 231.25,
		color: BLUE,
	},
	Cluster {
		name: "Bare Soil",
		share: 15.0,
		ndvi: 0.18,
		ndwi: 0.08,
		area_km2: 187.5,
		color: ORANGE,
	},
	Cluster {
		name: "Stressed Crops",
		share: 8.27,
		ndvi: 0.42,
		ndwi: 0.22,
		area_km2: 103.35,
		color: RED,
	},
];

const REGION_AREA_KM2: f64 = 1250.0;

const BANDS: [&str; 6] = [
	"Blue (B2)",
	"Green (B3)",
	"Red (B4)",
	"NIR (B8)",
	"SWIR1 (B11)",
	"SWIR2 (B12)",
];
const BAND_IMPORTANCE: [f64; 6] = [12., 15., 22., 38., 8., 5.];

const STAGES: [&str; 5] = [
	"Data Acquisition",
	"Preprocessing",
	"SimSiam Learning",
	"K-Means Clustering",
	"Validation",
];
const STAGE_SECONDS: [f64; 5] = [85., 42., 180., 35., 60.];

fn distribution(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Doughnut,
		CLUSTERS.iter().map(|c| c.name),
		vec![
			Dataset::values("Share of area (%)", CLUSTERS.iter().map(|c| c.share))
				.background(CLUSTERS.iter().map(|c| c.color).collect::<Vec<_>>())
				.border(NAVY)
				.width(3.0)
				.hover_offset(10.0),
		],
		theme.options(
			&OptionsOverride::titled("4 Clusters Discovered (K-Means, Zero Labels)")
				.legend_at("right"),
		),
	)?;
	Ok(ChartBinding::new("chart-cluster-distribution", config))
}

fn separation(theme: &ChartTheme) -> Result<ChartBinding> {
	let datasets = CLUSTERS
		.iter()
		.map(|c| {
			Dataset::points(c.name, [Sample::new(c.ndwi, c.ndvi)])
				.background(c.color)
				.border(c.color)
				.width(2.0)
				.point_radius(12.0)
				.hover_radius(15.0)
		})
		.collect();
	let config = ChartConfig::scatter(
		datasets,
		theme.options(
			&OptionsOverride::titled("Feature Space Separation (Zero Supervision)")
				.x(AxisOverride::titled("NDWI (Water Index)").range(Some(0.0), Some(0.8)))
				.y(AxisOverride::titled("NDVI (Vegetation Index)").range(Some(0.0), Some(0.8))),
		),
	)?;
	Ok(ChartBinding::new("chart-cluster-separation", config))
}

fn bands(theme: &ChartTheme) -> Result<ChartBinding> {
	let config = ChartConfig::new(
		ChartKind::Bar,
		BANDS,
		vec![
			Dataset::values("Feature Importance (%)", BAND_IMPORTANCE)
				.background(vec![BLUE, GREEN, RED, PURPLE, ORANGE, AMBER])
				.width(0.0)
				.rounded(4.0),
		],
		theme.options(
			&OptionsOverride::titled("Sentinel-2 Band Contribution (SimSiam Learned)")
				.without_legend()
				.y(AxisOverride::titled("Importance (%)").from_zero()),
		),
	)?;
	Ok(ChartBinding::new("chart-spectral-bands", config))
}

fn pipeline(theme: &ChartTheme) -> Result<ChartBinding> {
	let total_minutes = STAGE_SECONDS.iter().sum::<f64>() / 60.0;
	let config = ChartConfig::new(
		ChartKind::Bar,
		STAGES,
		vec![
			Dataset::values("Processing Time (seconds)", STAGE_SECONDS)
				.background(vec![BLUE, GREEN, PURPLE, ORANGE, TEAL])
				.width(0.0)
				.rounded(4.0),
		],
		theme.options(
			&OptionsOverride::titled(format!(
				"End-to-End Pipeline: {total_minutes:.1} Minutes Total"
			))
			.without_legend()
			.horizontal()
			.x(AxisOverride::titled("Time (seconds)").from_zero()),
		),
	)?;
	Ok(ChartBinding::new("chart-processing-pipeline", config))
}

fn stress(theme: &ChartTheme) -> Result<ChartBinding> {
	let stressed = &CLUSTERS[3];
	let datasets = CLUSTERS
		.iter()
		.map(|c| {
			Dataset::values(c.name, [c.area_km2])
				.background(c.color)
				.width(0.0)
		})
		.collect();
	let config = ChartConfig::new(
		ChartKind::Bar,
		["Jessore Region (1,250 km²)"],
		datasets,
		theme.options(
			&OptionsOverride::titled(format!(
				"{} km² Stressed Cropland Detected ({:.2}%)",
				stressed.area_km2,
				stressed.area_km2 / REGION_AREA_KM2 * 100.0
			))
			.x(AxisOverride::default().stacked())
			.y(AxisOverride::titled("Area (km²)")
				.stacked()
				.range(None, Some(REGION_AREA_KM2 + 100.0))),
		),
	)?;
	Ok(ChartBinding::new("chart-stress-area", config))
}

pub(super) fn charts(_today: i64) -> Vec<Result<ChartBinding>> {
	let theme = ChartTheme::default();
	vec![
		distribution(&theme),
		separation(&theme),
		bands(&theme),
		pipeline(&theme),
		stress(&theme),
	]
}

#[component]
pub fn CropDemo() -> impl IntoView {
	use_dashboard("crop", charts);

	view! {
		<DemoLayout
			eyebrow="Crop Intelligence"
			title="Finding stressed cropland with zero labels"
			summary="Self-supervised Sentinel-2 embeddings clustered into land-cover classes, mapping crop stress across 1,250 km² in under seven minutes."
		>
			<DemoSection heading="What the clusters found">
				<div class="chart-grid">
					<ChartPanel id="chart-cluster-distribution" height=320 />
					<ChartPanel id="chart-cluster-separation" height=320 />
				</div>
			</DemoSection>
			<DemoSection heading="Which bands mattered">
				<ChartPanel id="chart-spectral-bands" height=300 />
			</DemoSection>
			<DemoSection heading="Pipeline timing">
				<ChartPanel id="chart-processing-pipeline" height=280 />
			</DemoSection>
			<DemoSection heading="Stress by area">
				<ChartPanel id="chart-stress-area" height=320 />
			</DemoSection>
		</DemoLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn titles_are_derived_from_the_data() {
		let theme = ChartTheme::default();
		assert_eq!(
			pipeline(&theme).unwrap().config.options.title(),
			Some("End-to-End Pipeline: 6.7 Minutes Total")
		);
		assert_eq!(
			stress(&theme).unwrap().config.options.title(),
			Some("103.35 km² Stressed Cropland Detected (8.27%)")
		);
	}

	#[test]
	fn stress_bars_stack_to_the_region() {
		let total: f64 = CLUSTERS.iter().map(|c| c.area_km2).sum();
		assert!((total - REGION_AREA_KM2).abs() < 1.0);
		let binding = stress(&ChartTheme::default()).unwrap();
		let scales = binding.config.options.scales.unwrap();
		assert_eq!(scales.x.stacked, Some(true));
		assert_eq!(scales.y.max, Some(1350.0));
	}
}
