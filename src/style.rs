//! Textual edits of inline `style` attribute values.
//!
//! These don't parse CSS. [`HIDDEN`] is matched verbatim and assumed to occur at most once,
//! so a declaration that merely contains it as part of its value is treated as hiding the element, too.

use std::borrow::Cow;

/// The declaration that marks an element as hidden.
pub const HIDDEN: &str = "display:none";

/// Terminates each inline declaration.
pub const SEPARATOR: char = ';';

/// Whether `style` contains [`HIDDEN`].
#[must_use]
pub fn is_hidden(style: &str) -> bool {
	style.contains(HIDDEN)
}

/// `style` with [`HIDDEN`] added, preserving all other declarations in order.
///
/// Borrows if `style` is already hidden.
///
/// ```
/// use dom_view::style::hidden;
///
/// assert_eq!(hidden(""), "display:none");
/// assert_eq!(hidden("color:red"), "color:red;display:none;");
/// assert_eq!(hidden("color:red;"), "color:red;display:none;");
/// ```
#[must_use]
pub fn hidden(style: &str) -> Cow<'_, str> {
	if style.is_empty() {
		Cow::Borrowed(HIDDEN)
	} else if is_hidden(style) {
		Cow::Borrowed(style)
	} else if style.ends_with(SEPARATOR) {
		Cow::Owned(format!("{}{}{}", style, HIDDEN, SEPARATOR))
	} else {
		Cow::Owned(format!("{}{}{}{}", style, SEPARATOR, HIDDEN, SEPARATOR))
	}
}

/// `style` with the first [`HIDDEN`] declaration removed, together with its trailing [`SEPARATOR`] if present.
///
/// Borrows if there was nothing to remove.
/// Separators in front of the removed declaration are kept:
///
/// ```
/// use dom_view::style::shown;
///
/// assert_eq!(shown("display:none"), "");
/// assert_eq!(shown("color:red;display:none;"), "color:red;");
/// assert_eq!(shown("color:red"), "color:red");
/// ```
#[must_use]
pub fn shown(style: &str) -> Cow<'_, str> {
	let terminated = format!("{}{}", HIDDEN, SEPARATOR);
	let style = remove_first(Cow::Borrowed(style), &terminated);
	remove_first(style, HIDDEN)
}

fn remove_first<'a>(haystack: Cow<'a, str>, needle: &str) -> Cow<'a, str> {
	if haystack.contains(needle) {
		Cow::Owned(haystack.replacen(needle, "", 1))
	} else {
		haystack
	}
}
