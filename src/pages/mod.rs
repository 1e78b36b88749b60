pub mod demos;
pub mod home;
pub mod not_found;
pub mod studio;

use crate::error::Result;
use crate::motion::bind_hover;
use crate::teardown::Teardown;

/// Grows the circle behind each call-to-action button while hovered.
pub(crate) fn bind_cta_buttons() -> Result<Teardown> {
	bind_hover(
		".cta-button",
		".cta-circle",
		&[("width", "300%"), ("height", "300%")],
		&[("width", "0"), ("height", "0")],
	)
}
