//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod charts;
mod components;
mod error;
mod motion;
mod pages;
mod teardown;

// Top-Level pages
use crate::pages::demos::{
	CropDemo, DiseaseDemo, FloodDemo, FreightDemo, LpgDemo, NightlightsDemo,
};
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::studio::Studio;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The site router: home, studio, the six dashboards and a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Intelligence Dashboards" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/studio") view=Studio />
				<Route path=path!("/demos/crop") view=CropDemo />
				<Route path=path!("/demos/disease") view=DiseaseDemo />
				<Route path=path!("/demos/flood") view=FloodDemo />
				<Route path=path!("/demos/freight") view=FreightDemo />
				<Route path=path!("/demos/lpg") view=LpgDemo />
				<Route path=path!("/demos/nightlights") view=NightlightsDemo />
			</Routes>
		</Router>
	}
}
