//! Structural DOM operations, keyed through each [`View`]'s root element.
//!
//! Each function maps onto exactly one DOM call. Missing parents are reported as [`Error::Detached`],
//! anything the DOM itself rejects as [`Error::Dom`].

use crate::{Error, Result, View};
use tracing::{instrument, trace};
use web_sys::{Element, Node};

/// Appends `child`'s root element as last child of `parent`'s root element.
///
/// # Errors
///
/// Iff [***appendChild***](https://developer.mozilla.org/en-US/docs/Web/API/Node/appendChild) throws.
pub fn append(parent: &impl View, child: &impl View) -> Result<()> {
	append_to_element(parent.element(), child)
}

/// Appends `child`'s root element as last child of `parent`.
///
/// # Errors
///
/// Iff [***appendChild***](https://developer.mozilla.org/en-US/docs/Web/API/Node/appendChild) throws.
#[instrument(skip(child))]
pub fn append_to_element(parent: &Element, child: &impl View) -> Result<()> {
	parent.append_child(child.element())?;
	trace!("Appended.");
	Ok(())
}

/// Inserts `view`'s root element directly before `before`'s root element.
///
/// # Errors
///
/// [`Error::Detached`] if `before` has no parent, otherwise iff
/// [***insertBefore***](https://developer.mozilla.org/en-US/docs/Web/API/Node/insertBefore) throws.
pub fn insert_before(view: &impl View, before: &impl View) -> Result<()> {
	insert_before_element(view, before.element())
}

/// Inserts `view`'s root element directly before `before`.
///
/// # Errors
///
/// [`Error::Detached`] if `before` has no parent, otherwise iff
/// [***insertBefore***](https://developer.mozilla.org/en-US/docs/Web/API/Node/insertBefore) throws.
#[instrument(skip(view))]
pub fn insert_before_element(view: &impl View, before: &Element) -> Result<()> {
	let before: &Node = before;
	parent_of(before)?.insert_before(view.element(), Some(before))?;
	trace!("Inserted.");
	Ok(())
}

/// Puts `new`'s root element in place of `old`'s root element.
///
/// # Errors
///
/// [`Error::Detached`] if `old` has no parent, otherwise iff
/// [***replaceChild***](https://developer.mozilla.org/en-US/docs/Web/API/Node/replaceChild) throws.
///
/// The parent doesn't have to be an element, a `DocumentFragment` works too.
pub fn replace(new: &impl View, old: &impl View) -> Result<()> {
	replace_element(new, old.element())
}

/// Puts `new`'s root element in place of `old`.
///
/// # Errors
///
/// [`Error::Detached`] if `old` has no parent, otherwise iff
/// [***replaceChild***](https://developer.mozilla.org/en-US/docs/Web/API/Node/replaceChild) throws.
///
/// The parent doesn't have to be an element, a `DocumentFragment` works too.
#[instrument(skip(new))]
pub fn replace_element(new: &impl View, old: &Element) -> Result<()> {
	parent_of(old)?.replace_child(new.element(), old)?;
	trace!("Replaced.");
	Ok(())
}

/// Detaches `view`'s root element from its parent.
///
/// The element stays valid and can be inserted again later.
/// The parent doesn't have to be an element, a `DocumentFragment` works too.
///
/// # Errors
///
/// [`Error::Detached`] if the view isn't attached, otherwise iff
/// [***removeChild***](https://developer.mozilla.org/en-US/docs/Web/API/Node/removeChild) throws.
#[instrument(skip(view))]
pub fn remove(view: &impl View) -> Result<()> {
	let element = view.element();
	parent_of(element)?.remove_child(element)?;
	trace!("Removed.");
	Ok(())
}

fn parent_of(node: &Node) -> Result<Node> {
	node.parent_node().ok_or(Error::Detached)
}
