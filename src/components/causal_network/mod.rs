mod component;
mod geometry;
mod render;
mod types;

pub use component::CausalNetworkCanvas;
pub use types::{CausalEdge, CausalGraph, CausalNode};
