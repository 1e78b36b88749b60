use leptos::prelude::*;
use leptos_router::components::A;
use log::info;

use super::bind_cta_buttons;
use crate::motion::{RevealSpec, bind_hover, bind_smooth_anchors, reveal_after, reveal_on_scroll};
use crate::teardown::{Teardown, detach_on_cleanup};

/// Hero lines wait for first paint before sliding in.
const HERO_DELAY_MS: i32 = 300;

/// Scroll reveals in document order: selector, viewport threshold, stagger.
const SECTION_REVEALS: [(&str, f64, f64); 13] = [
	(".story-label", 0.8, 0.0),
	(".story-title", 0.75, 0.0),
	(".story-column", 0.7, 0.1),
	(".section-heading", 0.8, 0.0),
	(".partner-category", 0.75, 0.1),
	(".philosophy-item", 0.7, 0.05),
	(".beliefs-title", 0.75, 0.0),
	(".belief-card", 0.7, 0.1),
	(".team-label", 0.8, 0.0),
	(".team-title", 0.75, 0.0),
	(".team-description", 0.7, 0.0),
	(".team-image", 0.65, 0.0),
	(".cta-title", 0.75, 0.0),
];

const STORY: [&str; 2] = [
	"We started with a question that kept coming back from the field: why do the people closest to a crisis get the data last? Satellites see floods the hour they happen, yet maps arrive a week later.",
	"So we build systems that close that gap. Models that learn without labels, forecasts that state their own error, and causal graphs that say why, not just what.",
];

const PARTNERS: [(&str, &[&str]); 3] = [
	("Earth observation", &["Sentinel-1", "Sentinel-2", "VIIRS"]),
	("Public health", &["District surveillance", "Climate services"]),
	("Industry", &["Freight desks", "LPG distributors"]),
];

const PHILOSOPHY: [(&str, &str, &str); 3] = [
	(
		"01",
		"Honest numbers",
		"A model that scores 98% on leaked data is worse than useless. We publish the score that survives.",
	),
	(
		"02",
		"Causes, not correlations",
		"Lagged causal discovery tells a health officer which lever to pull, and when.",
	),
	(
		"03",
		"Minutes, not weeks",
		"Every pipeline is judged by time to a decision, end to end.",
	),
];

const BELIEFS: [(&str, &str); 4] = [
	("Open data first", "Public satellites and public statistics go further than most think."),
	("Small teams, real systems", "Everything we show runs in production somewhere."),
	("Uncertainty is a feature", "Every forecast ships with its horizon and its error."),
	("Local context wins", "Models are tuned to the district, the crop, the port."),
];

#[component]
pub fn Studio() -> impl IntoView {
	Effect::new(move |_| {
		let mut wired = Teardown::default();
		wired.keep(
			"studio",
			"hero reveal",
			reveal_after(
				".hero-line",
				RevealSpec::default().staggered(0.1).timed(1.2, 1.2),
				HERO_DELAY_MS,
			),
		);
		wired.keep(
			"studio",
			"subtitle reveal",
			reveal_after(".hero-subtitle", RevealSpec::default().delayed(0.6), HERO_DELAY_MS),
		);
		for (selector, threshold, stagger) in SECTION_REVEALS {
			wired.keep(
				"studio",
				selector,
				reveal_on_scroll(selector, RevealSpec::at(threshold).staggered(stagger)),
			);
		}
		wired.keep(
			"studio",
			"philosophy zoom",
			bind_hover(
				".philosophy-item",
				".philosophy-image img",
				&[("transform", "scale(1.05)")],
				&[("transform", "scale(1)")],
			),
		);
		wired.keep("studio", "cta hover", bind_cta_buttons());
		wired.keep("studio", "anchor scrolling", bind_smooth_anchors());
		detach_on_cleanup("studio", wired);
		info!("studio initialized");
	});

	view! {
		<main class="studio">
			<section class="studio-hero">
				<h1 class="hero-title">
					<span class="hero-line">"Small studio."</span>
					<span class="hero-line">"Planet-scale"</span>
					<span class="hero-line">"questions."</span>
				</h1>
				<p class="hero-subtitle">
					"Applied machine learning for the moments when data arrives too late."
				</p>
				<a href="#team" class="hero-link">"Meet the team"</a>
			</section>

			<section class="story">
				<span class="story-label">"Our story"</span>
				<h2 class="story-title">"Closing the gap between seeing and acting"</h2>
				<div class="story-columns">
					{STORY
						.iter()
						.map(|&text| view! { <p class="story-column">{text}</p> })
						.collect_view()}
				</div>
			</section>

			<section class="partners">
				<h2 class="section-heading">"Who we work with"</h2>
				<div class="partner-grid">
					{PARTNERS
						.iter()
						.map(|&(category, names)| {
							view! {
								<div class="partner-category">
									<h3>{category}</h3>
									<ul>
										{names.iter().map(|&name| view! { <li>{name}</li> }).collect_view()}
									</ul>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="philosophy">
				{PHILOSOPHY
					.iter()
					.map(|&(index, title, body)| {
						view! {
							<article class="philosophy-item">
								<span class="philosophy-index">{index}</span>
								<div class="philosophy-image">
									<img
										src=format!("/assets/philosophy-{index}.jpg")
										alt=title
										loading="lazy"
									/>
								</div>
								<h3>{title}</h3>
								<p>{body}</p>
							</article>
						}
					})
					.collect_view()}
			</section>

			<section class="beliefs">
				<h2 class="beliefs-title">"What we believe"</h2>
				<div class="belief-grid">
					{BELIEFS
						.iter()
						.map(|&(title, body)| {
							view! {
								<div class="belief-card">
									<h3>{title}</h3>
									<p>{body}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="team" class="team">
				<span class="team-label">"The team"</span>
				<h2 class="team-title">"Engineers, epidemiologists, remote-sensing scientists"</h2>
				<p class="team-description">
					"We pair domain experts with ML engineers on every project, from the first notebook to the production dashboard."
				</p>
				<div class="team-image">
					<img src="/assets/team.jpg" alt="The team" loading="lazy" />
				</div>
			</section>

			<section class="cta">
				<h2 class="cta-title">"See the work"</h2>
				<A href="/" attr:class="cta-button">
					<span class="cta-circle"></span>
					<span class="cta-text">"Explore the dashboards"</span>
				</A>
			</section>

			<footer class="studio-footer">"© Intel Dashboards"</footer>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveal_thresholds_are_viewport_fractions() {
		for (selector, threshold, stagger) in SECTION_REVEALS {
			assert!(selector.starts_with('.'), "{selector}");
			assert!((0.0..=1.0).contains(&threshold), "{selector}");
			assert!(stagger >= 0.0, "{selector}");
		}
	}
}
