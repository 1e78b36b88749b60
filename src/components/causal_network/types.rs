use std::collections::HashMap;

use crate::error::{DashboardError, Result};

/// A labelled variable placed at a percentage position on the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct CausalNode {
	pub id: String,
	pub label: String,
	/// Horizontal position, 0-100 percent of the surface width.
	pub x: f64,
	/// Vertical position, 0-100 percent of the surface height.
	pub y: f64,
}

impl CausalNode {
	pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			x,
			y,
		}
	}
}

/// A directed relationship between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct CausalEdge {
	pub from: String,
	pub to: String,
	/// Signed strength in [-1, 1]; only the magnitude is drawn.
	pub strength: f64,
	/// Time offset between cause and effect, in days.
	pub lag: u32,
	pub color: String,
}

impl CausalEdge {
	pub fn new(
		from: impl Into<String>,
		to: impl Into<String>,
		strength: f64,
		lag: u32,
		color: impl Into<String>,
	) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			strength,
			lag,
			color: color.into(),
		}
	}

	pub fn lag_label(&self) -> String {
		format!("{}d lag", self.lag)
	}
}

/// A validated diagram: every edge endpoint is known to exist.
///
/// Endpoints are resolved to node indices once here so drawing never has to
/// search the node list.
#[derive(Clone, Debug, PartialEq)]
pub struct CausalGraph {
	nodes: Vec<CausalNode>,
	edges: Vec<CausalEdge>,
	endpoints: Vec<(usize, usize)>,
	focus: Option<usize>,
}

impl CausalGraph {
	pub fn new(nodes: Vec<CausalNode>, edges: Vec<CausalEdge>) -> Result<Self> {
		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.as_str(), i).is_some() {
				return Err(DashboardError::DuplicateNode(node.id.clone()));
			}
		}

		let resolve = |edge: usize, id: &str| {
			index
				.get(id)
				.copied()
				.ok_or_else(|| DashboardError::UnknownNode {
					edge,
					id: id.to_string(),
				})
		};

		let mut endpoints = Vec::with_capacity(edges.len());
		for (i, edge) in edges.iter().enumerate() {
			if !edge.strength.is_finite() || edge.strength.abs() > 1.0 {
				return Err(DashboardError::InvalidStrength {
					edge: i,
					strength: edge.strength,
				});
			}
			endpoints.push((resolve(i, &edge.from)?, resolve(i, &edge.to)?));
		}

		Ok(Self {
			nodes,
			edges,
			endpoints,
			focus: None,
		})
	}

	/// Marks one node to be drawn with the accent palette.
	pub fn with_focus(mut self, id: &str) -> Result<Self> {
		let idx = self
			.nodes
			.iter()
			.position(|n| n.id == id)
			.ok_or_else(|| DashboardError::UnknownFocus(id.to_string()))?;
		self.focus = Some(idx);
		Ok(self)
	}

	pub fn nodes(&self) -> &[CausalNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[CausalEdge] {
		&self.edges
	}

	/// Edges paired with their resolved source and target nodes, in input order.
	pub fn resolved_edges(&self) -> impl Iterator<Item = (&CausalEdge, &CausalNode, &CausalNode)> {
		self.edges
			.iter()
			.zip(&self.endpoints)
			.map(|(edge, &(from, to))| (edge, &self.nodes[from], &self.nodes[to]))
	}

	pub fn is_focus(&self, idx: usize) -> bool {
		self.focus == Some(idx)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nodes() -> Vec<CausalNode> {
		vec![
			CausalNode::new("temp", "Max Temperature", 50.0, 20.0),
			CausalNode::new("dengue", "Dengue Cases", 50.0, 80.0),
		]
	}

	#[test]
	fn resolves_endpoints_in_edge_order() {
		let graph = CausalGraph::new(
			nodes(),
			vec![
				CausalEdge::new("temp", "dengue", 0.324, 7, "#14B8A6"),
				CausalEdge::new("dengue", "temp", -0.1, 0, "#EF4444"),
			],
		)
		.unwrap();

		let pairs: Vec<_> = graph
			.resolved_edges()
			.map(|(_, from, to)| (from.id.as_str(), to.id.as_str()))
			.collect();
		assert_eq!(pairs, vec![("temp", "dengue"), ("dengue", "temp")]);
	}

	#[test]
	fn rejects_unknown_target() {
		let err = CausalGraph::new(
			nodes(),
			vec![CausalEdge::new("temp", "rainfall", 0.5, 1, "#FB923C")],
		)
		.unwrap_err();
		assert_eq!(
			err,
			DashboardError::UnknownNode {
				edge: 0,
				id: "rainfall".into()
			}
		);
	}

	#[test]
	fn rejects_duplicate_ids() {
		let mut nodes = nodes();
		nodes.push(CausalNode::new("temp", "Again", 10.0, 10.0));
		let err = CausalGraph::new(nodes, Vec::new()).unwrap_err();
		assert_eq!(err, DashboardError::DuplicateNode("temp".into()));
	}

	#[test]
	fn rejects_strength_out_of_range() {
		for strength in [1.5, -1.01, f64::NAN] {
			let result = CausalGraph::new(
				nodes(),
				vec![CausalEdge::new("temp", "dengue", strength, 1, "#fff")],
			);
			assert!(matches!(
				result,
				Err(DashboardError::InvalidStrength { edge: 0, .. })
			));
		}
	}

	#[test]
	fn zero_strength_is_valid() {
		assert!(
			CausalGraph::new(nodes(), vec![CausalEdge::new("temp", "dengue", 0.0, 0, "#fff")])
				.is_ok()
		);
	}

	#[test]
	fn focus_must_exist() {
		let graph = CausalGraph::new(nodes(), Vec::new()).unwrap();
		assert!(graph.clone().with_focus("dengue").unwrap().is_focus(1));
		assert_eq!(
			graph.with_focus("water").unwrap_err(),
			DashboardError::UnknownFocus("water".into())
		);
	}

	#[test]
	fn lag_label_format() {
		assert_eq!(CausalEdge::new("a", "b", 0.1, 7, "#000").lag_label(), "7d lag");
	}
}
