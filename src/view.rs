use std::cell::OnceCell;
use tracing::{instrument, trace};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{Document, Element};

/// A piece of UI that owns exactly one root [`Element`].
///
/// Implementors usually embed a [`DefaultView`] and forward [`View::element`] to it,
/// so only [`View::render`] has to be written by hand:
///
/// ```no_run
/// use dom_view::{DefaultView, View};
/// use web_sys::Element;
///
/// struct Greeting {
/// 	base: DefaultView,
/// 	name: String,
/// }
///
/// impl View for Greeting {
/// 	type Error = core::convert::Infallible;
///
/// 	fn element(&self) -> &Element {
/// 		self.base.element()
/// 	}
///
/// 	fn render(&mut self) -> Result<(), Self::Error> {
/// 		self.element().set_inner_html(&format!("Hello, {}!", self.name));
/// 		Ok(())
/// 	}
/// }
/// ```
pub trait View {
	/// Raised by [`View::render`].
	type Error;

	/// The view's root element.
	///
	/// Must return the same element on every call until the view explicitly replaces it.
	fn element(&self) -> &Element;

	/// Populates [`View::element`] with the view's content.
	///
	/// # Errors
	///
	/// Whatever the view considers a rendering failure. Callers should propagate it.
	fn render(&mut self) -> Result<(), Self::Error>;
}

/// Root element storage for [`View`] implementations.
///
/// If no element was assigned, a detached `<div>` is created in the associated [`Document`] on first access.
#[derive(Debug, Clone)]
pub struct DefaultView {
	document: Document,
	element: OnceCell<Element>,
}

impl DefaultView {
	/// Creates a [`DefaultView`] without root element. A placeholder is allocated in `document` on first access.
	#[must_use]
	pub fn new(document: Document) -> Self {
		Self {
			document,
			element: OnceCell::new(),
		}
	}

	/// Creates a [`DefaultView`] with a preassigned root element, using its owner document for any later allocation.
	#[must_use]
	pub fn with_element(element: Element) -> Self {
		let document = element.owner_document().expect_throw("dom-view: Element without owner document.");
		Self {
			document,
			element: OnceCell::from(element),
		}
	}

	/// The root element, which is created as a detached `<div>` if none was assigned yet.
	pub fn element(&self) -> &Element {
		self.element.get_or_init(|| {
			trace!("Allocating placeholder <div>.");
			self.document
				.create_element("div")
				.expect_throw("dom-view: Failed to create <div> element.")
		})
	}

	/// Replaces the root element. The previous element (if any) is left where it is.
	#[instrument(skip(self))]
	pub fn set_element(&mut self, element: Element) {
		self.element = OnceCell::from(element);
	}

	/// The document placeholder elements are created in.
	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}
}
