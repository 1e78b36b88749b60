use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use log::warn;

/// Fallback for unmatched routes.
#[component]
pub fn NotFound() -> impl IntoView {
	let location = use_location();
	warn!("no route for {}", location.pathname.get_untracked());

	view! {
		<main class="not-found">
			<h1>"404"</h1>
			<p>"Nothing lives at " <code>{move || location.pathname.get()}</code> "."</p>
			<A href="/" attr:class="back-link">"← Back to the work"</A>
		</main>
	}
}
