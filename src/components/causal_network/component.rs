use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::types::CausalGraph;
use crate::error::{DashboardError, Result};
use crate::teardown::{Listener, Teardown, detach_on_cleanup};

/// Sizes the canvas backing store for the device pixel ratio and scales the
/// context so drawing happens in logical pixels. Returns the logical size.
fn fit_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	window: &Window,
	height: f64,
) -> Result<(f64, f64)> {
	let dpr = window.device_pixel_ratio().max(1.0);
	let width = canvas.offset_width() as f64;
	canvas.set_width((width * dpr) as u32);
	canvas.set_height((height * dpr) as u32);
	ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
	Ok((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| DashboardError::Js("2d context unavailable".into()))?
		.dyn_into()
		.map_err(|obj| DashboardError::from(JsValue::from(obj)))
}

fn redraw(
	graph: &CausalGraph,
	canvas: &HtmlCanvasElement,
	ctx: &mut CanvasRenderingContext2d,
	height: f64,
) -> Result<()> {
	let window = web_sys::window().ok_or_else(|| DashboardError::Js("no window".into()))?;
	let (w, h) = fit_canvas(canvas, ctx, &window, height)?;
	debug!("causal network redraw at {w}x{h}");
	render::render(graph, ctx, w, h);
	Ok(())
}

/// Canvas that draws a [`CausalGraph`] and redraws it whenever the window
/// is resized. The resize listener lives as long as the canvas.
#[component]
pub fn CausalNetworkCanvas(
	#[prop(into)] graph: Signal<CausalGraph>,
	#[prop(default = 300.0)] height: f64,
	#[prop(into, optional)] id: Option<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			warn!("causal network canvas is not mounted, skipping");
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let mut ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				warn!("causal network: {err}");
				return;
			}
		};
		let graph = graph.get();
		if let Err(err) = redraw(&graph, &canvas, &mut ctx, height) {
			warn!("causal network: {err}");
			return;
		}

		let Some(window) = web_sys::window() else {
			return;
		};
		// Cleaned up before the next run and on unmount.
		let mut wired = Teardown::default();
		let (canvas_resize, mut ctx_resize) = (canvas.clone(), ctx.clone());
		match Listener::add(&window, "resize", move |_| {
			if let Err(err) = redraw(&graph, &canvas_resize, &mut ctx_resize, height) {
				warn!("causal network resize: {err}");
			}
		}) {
			Ok(listener) => wired.push(listener),
			Err(err) => warn!("causal network resize: {err}"),
		}
		detach_on_cleanup("causal network", wired);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="causal-network-canvas"
			style=format!("display: block; width: 100%; height: {height}px;")
		/>
	}
}
