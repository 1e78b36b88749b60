//! Scroll and pointer driven animation glue.

mod dom;
mod parallax;
mod reveal;

pub use dom::{
	bind_card_parallax, bind_hover, bind_scroll_effects, bind_smooth_anchors, reveal_after,
	reveal_on_scroll,
};
pub use reveal::RevealSpec;
