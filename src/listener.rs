//! Event listeners bound to a snapshot of a [`View`]'s descendants.

use crate::{Result, View};
use core::mem;
use js_sys::Function;
use tracing::{error, instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event};

/// Capture phase for all registrations.
const USE_CAPTURE: bool = true;

/// One callback listening for one event type on a fixed set of elements.
///
/// The elements are resolved once, by [`add_event_listener`]. Matching elements that are added later are **not** covered.
///
/// The callback lives exactly as long as this handle:
/// Dropping it (or calling [`EventListener::remove`]) detaches the callback from all elements,
/// while [`EventListener::forget`] keeps it attached for the rest of the page's lifetime.
#[must_use = "the listener is detached when this handle is dropped; call `forget` to keep it"]
pub struct EventListener {
	event_type: String,
	callback: Option<Closure<dyn FnMut(Event)>>,
	bindings: Vec<Binding>,
}

/// An element together with the function registered on it.
struct Binding {
	element: Element,
	function: Function,
}

/// Adds `callback` as capturing `event_type` listener to all elements matching `selector` below `view`'s root element.
///
/// The selector is evaluated once, right now. Matching nothing isn't an error,
/// the returned [`EventListener`] is empty in that case.
///
/// `callback` runs on the browser's event loop and must not block.
/// Longer follow-up work should be scheduled separately.
///
/// Keep the returned [`EventListener`] around for as long as the listeners should stay attached.
/// Discarding it (e.g. `add_event_listener(…)?;`) detaches them again immediately.
///
/// # Errors
///
/// Iff [***querySelectorAll***](https://developer.mozilla.org/en-US/docs/Web/API/Element/querySelectorAll)
/// (e.g. for an invalid `selector`) or [***addEventListener***](https://developer.mozilla.org/en-US/docs/Web/API/EventTarget/addEventListener) throws.
/// Listeners that were already added at that point are removed again.
#[instrument(skip(view, selector, callback))]
pub fn add_event_listener(view: &impl View, event_type: &str, selector: &str, callback: impl FnMut(Event) + 'static) -> Result<EventListener> {
	if cfg!(feature = "dangerous-logging") {
		trace!("Selector: {:?}", selector);
	}

	let matches = view.element().query_selector_all(selector)?;
	let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
	let function: &Function = callback.as_ref().unchecked_ref();

	let mut listener = EventListener {
		event_type: event_type.to_owned(),
		callback: None,
		bindings: Vec::with_capacity(matches.length() as usize),
	};

	for i in 0..matches.length() {
		let element = match matches.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
			Some(element) => element,
			None => {
				error!("`querySelectorAll` returned a non-element at index {}. Skipping it.", i);
				continue;
			}
		};
		// On error, dropping `listener` removes the registrations made so far.
		element.add_event_listener_with_callback_and_bool(event_type, function, USE_CAPTURE)?;
		listener.bindings.push(Binding {
			element,
			function: function.clone(),
		});
	}

	listener.callback = Some(callback);
	trace!("Bound to {} element(s).", listener.bindings.len());
	Ok(listener)
}

impl EventListener {
	/// The event type this listener was added for.
	#[must_use]
	pub fn event_type(&self) -> &str {
		&self.event_type
	}

	/// The elements this listener is attached to, in document order.
	pub fn elements(&self) -> impl ExactSizeIterator<Item = &Element> {
		self.bindings.iter().map(|binding| &binding.element)
	}

	/// Detaches the callback from all elements.
	///
	/// Elements that were removed from the document in the meantime are detached normally.
	pub fn remove(self) {
		drop(self)
	}

	/// Leaks the callback, keeping it attached to all elements indefinitely.
	pub fn forget(mut self) {
		self.bindings.clear();
		if let Some(callback) = self.callback.take() {
			callback.forget()
		}
	}

	fn detach(&mut self) {
		let span = trace_span!("Detaching event listener", event_type = %self.event_type, count = self.bindings.len());
		let _enter = span.enter();

		for Binding { element, function } in mem::take(&mut self.bindings) {
			if let Err(error) = element.remove_event_listener_with_callback_and_bool(&self.event_type, &function, USE_CAPTURE) {
				warn!("Failed to remove event listener {:?}: {:?}", self.event_type, error)
			}
		}
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		self.detach()
	}
}

impl core::fmt::Debug for EventListener {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("EventListener")
			.field("event_type", &self.event_type)
			.field("elements", &self.elements().collect::<Vec<_>>())
			.finish_non_exhaustive()
	}
}
