//! The intelligence dashboards. Each page owns its sample data and declares
//! its charts as [`ChartBinding`]s that are mounted once the view is in the
//! document.

use leptos::prelude::*;
use leptos_router::components::A;
use log::{info, warn};

use crate::charts::{ChartBinding, mount_on_document};
use crate::error::Result;
use crate::motion::{RevealSpec, reveal_on_scroll};
use crate::teardown::{Teardown, detach_on_cleanup};

mod crop;
mod disease;
mod flood;
mod freight;
mod lpg;
mod nightlights;

pub use crop::CropDemo;
pub use disease::DiseaseDemo;
pub use flood::FloodDemo;
pub use freight::FreightDemo;
pub use lpg::LpgDemo;
pub use nightlights::NightlightsDemo;

/// Series colors shared by every dashboard.
pub(crate) mod palette {
	pub const TEAL: &str = "#14B8A6";
	pub const TEAL_WASH: &str = "rgba(20, 184, 166, 0.1)";
	pub const PURPLE: &str = "#8B5CF6";
	pub const PURPLE_WASH: &str = "rgba(139, 92, 246, 0.1)";
	pub const ORANGE: &str = "#FB923C";
	pub const ORANGE_WASH: &str = "rgba(251, 146, 60, 0.1)";
	pub const RED: &str = "#EF4444";
	pub const GREEN: &str = "#10B981";
	pub const BLUE: &str = "#3B82F6";
	pub const AMBER: &str = "#F59E0B";
	pub const YELLOW: &str = "#FBBF24";
	pub const SLATE: &str = "#64748B";
	pub const SLATE_DARK: &str = "#475569";
	pub const NAVY: &str = "#0A192F";
}

/// A page's chart declarations, built against `today` (days since the Unix
/// epoch) so date axes can be labelled relative to it.
pub(crate) type ChartSet = fn(today: i64) -> Vec<Result<ChartBinding>>;

/// Formats days since the Unix epoch as `YYYY-MM-DD` (proleptic Gregorian).
pub(crate) fn iso_date(days: i64) -> String {
	let z = days + 719_468;
	let era = z.div_euclid(146_097);
	let doe = z.rem_euclid(146_097);
	let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
	let mp = (5 * doy + 2) / 153;
	let day = doy - (153 * mp + 2) / 5 + 1;
	let month = if mp < 10 { mp + 3 } else { mp - 9 };
	let year = yoe + era * 400 + i64::from(month <= 2);
	format!("{year:04}-{month:02}-{day:02}")
}

/// `count` consecutive dates starting `offset` days from `today`.
pub(crate) fn day_labels(today: i64, offset: i64, count: usize) -> Vec<String> {
	(0..count as i64).map(|i| iso_date(today + offset + i)).collect()
}

fn today() -> i64 {
	(js_sys::Date::now() / 86_400_000.0).floor() as i64
}

/// Drops declarations that failed validation, logging each, so the valid
/// ones still mount.
pub(crate) fn valid_bindings(page: &str, charts: Vec<Result<ChartBinding>>) -> Vec<ChartBinding> {
	charts
		.into_iter()
		.filter_map(|chart| match chart {
			Ok(binding) => Some(binding),
			Err(err) => {
				warn!("{page}: chart skipped: {err}");
				None
			}
		})
		.collect()
}

/// Mounts a page's charts and its `.fade-in` section reveals after render.
/// Both are torn down again when the page unmounts.
pub(crate) fn use_dashboard(page: &'static str, charts: ChartSet) {
	Effect::new(move |_| {
		let bindings = valid_bindings(page, charts(today()));
		let mut wired = Teardown::default();
		for (_, chart) in mount_on_document(page, &bindings).mounted {
			wired.push(chart);
		}
		wired.keep(page, "section reveals", reveal_on_scroll(".fade-in", RevealSpec::at(0.9)));
		detach_on_cleanup(page, wired);
		info!("{page} dashboard initialized");
	});
}

#[component]
pub fn ChartPanel(id: &'static str, #[prop(default = 360)] height: u32) -> impl IntoView {
	view! {
		<div class="chart-container" style=format!("position: relative; height: {height}px;")>
			<canvas id=id></canvas>
		</div>
	}
}

#[component]
pub fn DemoLayout(
	title: &'static str,
	eyebrow: &'static str,
	summary: &'static str,
	children: Children,
) -> impl IntoView {
	view! {
		<main class="demo-page">
			<header class="demo-hero">
				<A href="/" attr:class="back-link">"← All work"</A>
				<span class="demo-eyebrow">{eyebrow}</span>
				<h1 class="demo-title">{title}</h1>
				<p class="demo-summary">{summary}</p>
			</header>
			{children()}
		</main>
	}
}

#[component]
pub fn DemoSection(heading: &'static str, children: Children) -> impl IntoView {
	view! {
		<section class="demo-section fade-in">
			<h2>{heading}</h2>
			{children()}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn formats_epoch_days() {
		assert_eq!(iso_date(0), "1970-01-01");
		assert_eq!(iso_date(-1), "1969-12-31");
		assert_eq!(iso_date(19_723), "2024-01-01");
		assert_eq!(iso_date(19_782), "2024-02-29");
	}

	#[test]
	fn consecutive_labels_from_offset() {
		assert_eq!(
			day_labels(19_723, -2, 3),
			vec!["2023-12-30", "2023-12-31", "2024-01-01"]
		);
	}

	#[test]
	fn every_dashboard_declares_valid_charts() {
		let pages: [(&str, ChartSet); 6] = [
			("crop", crop::charts),
			("disease", disease::charts),
			("flood", flood::charts),
			("freight", freight::charts),
			("lpg", lpg::charts),
			("nightlights", nightlights::charts),
		];
		for (page, charts) in pages {
			let declared = charts(19_723);
			let count = declared.len();
			assert!(count > 0, "{page} declares no charts");
			for chart in &declared {
				assert!(chart.is_ok(), "{page}: {:?}", chart.as_ref().err());
			}
			assert_eq!(valid_bindings(page, declared).len(), count);
		}
	}

	#[test]
	fn chart_targets_are_unique_per_page() {
		let pages: [ChartSet; 6] = [
			crop::charts,
			disease::charts,
			flood::charts,
			freight::charts,
			lpg::charts,
			nightlights::charts,
		];
		for charts in pages {
			let mut ids: Vec<_> = valid_bindings("test", charts(0))
				.into_iter()
				.map(|b| b.target_id)
				.collect();
			let total = ids.len();
			ids.sort();
			ids.dedup();
			assert_eq!(ids.len(), total);
		}
	}
}
