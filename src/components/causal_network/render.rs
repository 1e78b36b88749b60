use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::geometry::{
	ARROW_SIZE, Arrowhead, EDGE_ALPHA, LABEL_LINE_OFFSETS, NODE_RADIUS, Point, edge_width,
	label_lines, lag_label_anchor, to_pixel,
};
use super::types::CausalGraph;

const LAG_FONT: &str = "10px \"IBM Plex Mono\"";
const LABEL_FONT: &str = "11px \"IBM Plex Mono\"";
const LAG_COLOR: &str = "#94A3B8";
const LABEL_COLOR: &str = "#E2E8F0";
const FOCUS_COLOR: &str = "#14B8A6";
const NODE_FILL: &str = "#1a1f35";
const NODE_STROKE: &str = "#64748B";
const NODE_OUTLINE_WIDTH: f64 = 2.0;

/// The subset of a 2D canvas API the renderer draws through.
pub trait Surface {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn set_stroke_color(&mut self, color: &str);
	fn set_fill_color(&mut self, color: &str);
	fn set_line_width(&mut self, width: f64);
	fn set_alpha(&mut self, alpha: f64);
	fn set_font(&mut self, font: &str);
	fn begin_path(&mut self);
	fn move_to(&mut self, p: Point);
	fn line_to(&mut self, p: Point);
	fn close_path(&mut self);
	fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64);
	fn stroke(&mut self);
	fn fill(&mut self);
	/// Draws `text` horizontally centred on `at`.
	fn fill_text_centered(&mut self, text: &str, at: Point);
}

impl Surface for CanvasRenderingContext2d {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn set_stroke_color(&mut self, color: &str) {
		self.set_stroke_style_str(color);
	}

	fn set_fill_color(&mut self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_line_width(&mut self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.set_global_alpha(alpha);
	}

	fn set_font(&mut self, font: &str) {
		CanvasRenderingContext2d::set_font(self, font);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&mut self, p: Point) {
		CanvasRenderingContext2d::move_to(self, p.x, p.y);
	}

	fn line_to(&mut self, p: Point) {
		CanvasRenderingContext2d::line_to(self, p.x, p.y);
	}

	fn close_path(&mut self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
		// Only fails for a negative radius, which the renderer never passes.
		let _ = CanvasRenderingContext2d::arc(self, center.x, center.y, radius, start, end);
	}

	fn stroke(&mut self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn fill_text_centered(&mut self, text: &str, at: Point) {
		self.set_text_align("center");
		let _ = self.fill_text(text, at.x, at.y);
	}
}

/// Clears the surface and draws the whole diagram, edges first.
pub fn render<S: Surface + ?Sized>(graph: &CausalGraph, surface: &mut S, width: f64, height: f64) {
	surface.clear_rect(0.0, 0.0, width, height);
	draw_edges(graph, surface, width, height);
	draw_nodes(graph, surface, width, height);
}

fn draw_edges<S: Surface + ?Sized>(graph: &CausalGraph, s: &mut S, width: f64, height: f64) {
	for (edge, from, to) in graph.resolved_edges() {
		let start = to_pixel(from.x, from.y, width, height);
		let end = to_pixel(to.x, to.y, width, height);

		s.set_stroke_color(&edge.color);
		s.set_line_width(edge_width(edge.strength));
		s.set_alpha(EDGE_ALPHA);
		s.begin_path();
		s.move_to(start);
		s.line_to(end);
		s.stroke();

		let head = Arrowhead::between(start, end, ARROW_SIZE);
		s.set_fill_color(&edge.color);
		s.begin_path();
		let [tip, left, right] = head.vertices();
		s.move_to(tip);
		s.line_to(left);
		s.line_to(right);
		s.close_path();
		s.fill();

		s.set_alpha(1.0);
		s.set_fill_color(LAG_COLOR);
		s.set_font(LAG_FONT);
		s.fill_text_centered(&edge.lag_label(), lag_label_anchor(start, end));
	}
}

fn draw_nodes<S: Surface + ?Sized>(graph: &CausalGraph, s: &mut S, width: f64, height: f64) {
	s.set_alpha(1.0);
	for (idx, node) in graph.nodes().iter().enumerate() {
		let center = to_pixel(node.x, node.y, width, height);
		let (fill, stroke) = if graph.is_focus(idx) {
			(FOCUS_COLOR, FOCUS_COLOR)
		} else {
			(NODE_FILL, NODE_STROKE)
		};

		s.set_fill_color(fill);
		s.set_stroke_color(stroke);
		s.set_line_width(NODE_OUTLINE_WIDTH);
		s.begin_path();
		s.arc(center, NODE_RADIUS, 0.0, 2.0 * PI);
		s.fill();
		s.stroke();

		s.set_fill_color(LABEL_COLOR);
		s.set_font(LABEL_FONT);
		let (first, second) = label_lines(&node.label);
		for (line, offset) in [first, second].into_iter().zip(LABEL_LINE_OFFSETS) {
			if let Some(line) = line {
				s.fill_text_centered(line, Point::new(center.x, center.y + offset));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::causal_network::types::{CausalEdge, CausalNode};
	use crate::error::DashboardError;

	#[derive(Clone, Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Stroke(String),
		Fill(String),
		LineWidth(f64),
		Alpha(f64),
		Font(String),
		BeginPath,
		MoveTo(Point),
		LineTo(Point),
		ClosePath,
		Arc(Point, f64),
		StrokePath,
		FillPath,
		Text(String, Point),
	}

	#[derive(Default)]
	struct Recorder(Vec<Op>);

	impl Surface for Recorder {
		fn clear_rect(&mut self, _: f64, _: f64, width: f64, height: f64) {
			self.0.push(Op::Clear(width, height));
		}
		fn set_stroke_color(&mut self, color: &str) {
			self.0.push(Op::Stroke(color.into()));
		}
		fn set_fill_color(&mut self, color: &str) {
			self.0.push(Op::Fill(color.into()));
		}
		fn set_line_width(&mut self, width: f64) {
			self.0.push(Op::LineWidth(width));
		}
		fn set_alpha(&mut self, alpha: f64) {
			self.0.push(Op::Alpha(alpha));
		}
		fn set_font(&mut self, font: &str) {
			self.0.push(Op::Font(font.into()));
		}
		fn begin_path(&mut self) {
			self.0.push(Op::BeginPath);
		}
		fn move_to(&mut self, p: Point) {
			self.0.push(Op::MoveTo(p));
		}
		fn line_to(&mut self, p: Point) {
			self.0.push(Op::LineTo(p));
		}
		fn close_path(&mut self) {
			self.0.push(Op::ClosePath);
		}
		fn arc(&mut self, center: Point, radius: f64, _: f64, _: f64) {
			self.0.push(Op::Arc(center, radius));
		}
		fn stroke(&mut self) {
			self.0.push(Op::StrokePath);
		}
		fn fill(&mut self) {
			self.0.push(Op::FillPath);
		}
		fn fill_text_centered(&mut self, text: &str, at: Point) {
			self.0.push(Op::Text(text.into(), at));
		}
	}

	fn graph() -> CausalGraph {
		CausalGraph::new(
			vec![
				CausalNode::new("temp", "Max Temperature", 0.0, 50.0),
				CausalNode::new("dengue", "Dengue Cases", 100.0, 50.0),
			],
			vec![CausalEdge::new("temp", "dengue", 0.5, 7, "#14B8A6")],
		)
		.unwrap()
		.with_focus("dengue")
		.unwrap()
	}

	#[test]
	fn redraw_is_idempotent() {
		let graph = graph();
		let (mut first, mut second) = (Recorder::default(), Recorder::default());
		render(&graph, &mut first, 200.0, 100.0);
		render(&graph, &mut second, 200.0, 100.0);
		assert!(!first.0.is_empty());
		assert_eq!(first.0, second.0);
	}

	#[test]
	fn clears_then_draws_edges_before_nodes() {
		let mut rec = Recorder::default();
		render(&graph(), &mut rec, 200.0, 100.0);

		assert_eq!(rec.0[0], Op::Clear(200.0, 100.0));
		let first_line = rec.0.iter().position(|op| *op == Op::StrokePath).unwrap();
		let first_arc = rec.0.iter().position(|op| matches!(op, Op::Arc(..))).unwrap();
		assert!(first_line < first_arc);
	}

	#[test]
	fn edge_runs_between_mapped_node_centres() {
		let mut rec = Recorder::default();
		render(&graph(), &mut rec, 200.0, 100.0);

		assert!(rec.0.contains(&Op::LineWidth(2.0)));
		assert!(rec.0.contains(&Op::MoveTo(Point::new(0.0, 50.0))));
		assert!(rec.0.contains(&Op::LineTo(Point::new(200.0, 50.0))));
		assert!(rec.0.contains(&Op::Text("7d lag".into(), Point::new(100.0, 45.0))));
	}

	#[test]
	fn nodes_get_circles_and_split_labels() {
		let mut rec = Recorder::default();
		render(&graph(), &mut rec, 200.0, 100.0);

		assert!(rec.0.contains(&Op::Arc(Point::new(0.0, 50.0), NODE_RADIUS)));
		assert!(rec.0.contains(&Op::Arc(Point::new(200.0, 50.0), NODE_RADIUS)));
		assert!(rec.0.contains(&Op::Text("Dengue".into(), Point::new(200.0, 85.0))));
		assert!(rec.0.contains(&Op::Text("Cases".into(), Point::new(200.0, 97.0))));
	}

	#[test]
	fn focus_node_uses_accent_palette() {
		let mut rec = Recorder::default();
		render(&graph(), &mut rec, 200.0, 100.0);

		let focus_arc = rec
			.0
			.iter()
			.position(|op| *op == Op::Arc(Point::new(200.0, 50.0), NODE_RADIUS))
			.unwrap();
		let fills: Vec<_> = rec.0[..focus_arc]
			.iter()
			.filter_map(|op| match op {
				Op::Fill(c) => Some(c.as_str()),
				_ => None,
			})
			.collect();
		assert_eq!(fills.last(), Some(&FOCUS_COLOR));
	}

	#[test]
	fn zero_strength_edge_draws_with_zero_width() {
		let graph = CausalGraph::new(
			vec![
				CausalNode::new("a", "A", 10.0, 10.0),
				CausalNode::new("b", "B", 90.0, 90.0),
			],
			vec![CausalEdge::new("a", "b", 0.0, 0, "#fff")],
		)
		.unwrap();
		let mut rec = Recorder::default();
		render(&graph, &mut rec, 100.0, 100.0);
		assert!(rec.0.contains(&Op::LineWidth(0.0)));
		assert!(rec.0.contains(&Op::Text("0d lag".into(), Point::new(50.0, 45.0))));
	}

	#[test]
	fn bad_edge_fails_before_any_draw() {
		let mut rec = Recorder::default();
		let built = CausalGraph::new(
			vec![CausalNode::new("temp", "Max Temperature", 50.0, 20.0)],
			vec![CausalEdge::new("temp", "dengue", 0.3, 7, "#fff")],
		);
		match built {
			Ok(graph) => render(&graph, &mut rec, 200.0, 100.0),
			Err(err) => assert!(matches!(err, DashboardError::UnknownNode { .. })),
		}
		assert!(rec.0.is_empty());
	}
}
