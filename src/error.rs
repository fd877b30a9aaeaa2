use wasm_bindgen::JsValue;

/// Failures of the [tree mutation](`crate::append`) and [listener](`crate::add_event_listener`) helpers.
///
/// The visibility helpers are infallible.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	/// The element that should be inserted before, replaced or removed has no parent node.
	#[error("element is not attached to a parent node")]
	Detached,

	/// An exception thrown by the DOM, e.g. a `HierarchyRequestError` or a `SyntaxError` for an invalid selector.
	#[error("DOM exception: {0:?}")]
	Dom(JsValue),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Dom(value)
	}
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
