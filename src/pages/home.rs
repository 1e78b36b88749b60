use leptos::prelude::*;
use leptos_router::components::A;
use log::info;

use super::bind_cta_buttons;
use crate::motion::{
	RevealSpec, bind_card_parallax, bind_scroll_effects, bind_smooth_anchors, reveal_on_scroll,
};
use crate::teardown::{Teardown, detach_on_cleanup};

struct Project {
	href: &'static str,
	category: &'static str,
	title: &'static str,
	blurb: &'static str,
	image: &'static str,
}

static PROJECTS: [Project; 6] = [
	Project {
		href: "/demos/flood",
		category: "Flood Intelligence",
		title: "HAWKEYE",
		blurb: "Vision transformers map flood extent from radar and optical imagery in thirty minutes.",
		image: "/assets/flood.jpg",
	},
	Project {
		href: "/demos/disease",
		category: "Disease Intelligence",
		title: "Dengue Early Warning",
		blurb: "Causal drivers and a seven-day case forecast from climate and economic signals.",
		image: "/assets/disease.jpg",
	},
	Project {
		href: "/demos/crop",
		category: "Crop Intelligence",
		title: "Zero-Label Crop Stress",
		blurb: "Self-supervised Sentinel-2 embeddings that find stressed cropland without ground truth.",
		image: "/assets/crop.jpg",
	},
	Project {
		href: "/demos/nightlights",
		category: "Economic Intelligence",
		title: "Economy From Orbit",
		blurb: "Nightlight radiance as a leading indicator of GDP growth.",
		image: "/assets/nightlights.jpg",
	},
	Project {
		href: "/demos/freight",
		category: "Freight Intelligence",
		title: "The Crucible",
		blurb: "A freight-rate forecaster rebuilt from a leaky 98% to an honest 80.7%.",
		image: "/assets/freight.jpg",
	},
	Project {
		href: "/demos/lpg",
		category: "Energy Intelligence",
		title: "LPG Demand",
		blurb: "Daily cylinder demand forecast across three planning horizons.",
		image: "/assets/lpg.jpg",
	},
];

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
	view! {
		<A href=project.href attr:class="project-card">
			<div class="project-image">
				<img src=project.image alt=project.title loading="lazy" />
			</div>
			<div class="project-info">
				<span class="project-category">{project.category}</span>
				<h3 class="project-title">{project.title}</h3>
				<p class="project-blurb">{project.blurb}</p>
			</div>
		</A>
	}
}

#[component]
pub fn Home() -> impl IntoView {
	Effect::new(move |_| {
		let mut wired = Teardown::default();
		wired.keep(
			"home",
			"hero parallax",
			bind_scroll_effects(".hero", ".hero-image img", ".scroll-indicator"),
		);
		wired.keep(
			"home",
			"title reveal",
			reveal_on_scroll(".title-line", RevealSpec::at(0.8).staggered(0.1).timed(1.0, 1.0)),
		);
		wired.keep(
			"home",
			"project reveal",
			reveal_on_scroll(".project-card", RevealSpec::at(0.75).staggered(0.1)),
		);
		wired.keep(
			"home",
			"card parallax",
			bind_card_parallax(".project-card", ".project-image img"),
		);
		wired.keep("home", "cta hover", bind_cta_buttons());
		wired.keep("home", "anchor scrolling", bind_smooth_anchors());
		detach_on_cleanup("home", wired);
		info!("home initialized");
	});

	view! {
		<main class="home">
			<section class="hero">
				<div class="hero-image">
					<img src="/assets/hero.jpg" alt="" />
				</div>
				<div class="hero-content">
					<h1 class="hero-title">"Intelligence from orbit, data and causality"</h1>
					<p class="hero-subtitle">
						"Forecasting and earth-observation systems for floods, disease, crops, energy and trade."
					</p>
				</div>
				<a href="#work" class="scroll-indicator">"Scroll"</a>
			</section>

			<section id="work" class="work">
				<h2 class="work-title">
					<span class="title-line">"Selected"</span>
					<span class="title-line">"work"</span>
				</h2>
				<div class="project-grid">
					{PROJECTS
						.iter()
						.map(|project| view! { <ProjectCard project /> })
						.collect_view()}
				</div>
			</section>

			<section class="cta">
				<A href="/studio" attr:class="cta-button">
					<span class="cta-circle"></span>
					<span class="cta-text">"Meet the studio"</span>
				</A>
			</section>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_card_links_to_its_own_demo() {
		let mut hrefs: Vec<_> = PROJECTS.iter().map(|p| p.href).collect();
		assert!(hrefs.iter().all(|h| h.starts_with("/demos/")));
		hrefs.sort();
		hrefs.dedup();
		assert_eq!(hrefs.len(), PROJECTS.len());
	}
}
