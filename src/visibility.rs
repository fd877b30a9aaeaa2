use crate::{style, View};
use std::borrow::Cow;
use tracing::{error, instrument, trace};
use web_sys::Element;

const STYLE: &str = "style";

/// Hides `view` by adding [`style::HIDDEN`] to its root element's inline style.
///
/// Other attributes and inline declarations are left alone. Has no effect on an already hidden view.
#[instrument(skip(view))]
pub fn hide(view: &impl View) {
	edit_style(view.element(), style::hidden)
}

/// Shows a [hidden](`hide`) `view` again by removing [`style::HIDDEN`] from its root element's inline style.
///
/// Has no effect on a visible view.
#[instrument(skip(view))]
pub fn show(view: &impl View) {
	edit_style(view.element(), style::shown)
}

/// Whether `view`'s root element carries [`style::HIDDEN`] in its inline style.
#[must_use]
pub fn is_hidden(view: &impl View) -> bool {
	view.element()
		.get_attribute(STYLE)
		.map_or(false, |style| style::is_hidden(&style))
}

fn edit_style(element: &Element, edit: impl for<'a> FnOnce(&'a str) -> Cow<'a, str>) {
	let old = element.get_attribute(STYLE).unwrap_or_default();
	let new = match edit(&old) {
		Cow::Borrowed(new) if new == old => {
			trace!("Inline style unchanged.");
			return;
		}
		new => new,
	};

	if cfg!(feature = "dangerous-logging") {
		trace!("Inline style: {:?} -> {:?}", old, new);
	} else {
		trace!("Inline style length: {} -> {}", old.len(), new.len());
	}

	if let Err(error) = element.set_attribute(STYLE, &new) {
		error!("Failed to set inline style: {:?}", error)
	}
}
