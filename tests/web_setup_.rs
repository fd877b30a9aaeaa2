#![allow(dead_code)]

use dom_view::{DefaultView, View};
use std::convert::Infallible;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlBodyElement};

static mut LOG_INITIALIZED: bool = false;

pub fn init_logging() {
	unsafe {
		if !LOG_INITIALIZED {
			tracing_wasm::set_as_global_default();
			LOG_INITIALIZED = true;
		}
	}
}

pub fn document() -> Document {
	window().unwrap().document().unwrap()
}

/// A fresh `<div>` attached to `<body>`, so tests don't observe each other.
pub fn container() -> Element {
	init_logging();
	let body = document().body().unwrap().dyn_into::<HtmlBodyElement>().unwrap();
	let container = document().create_element("div").unwrap();
	body.append_child(&container).unwrap();
	container
}

pub struct ContentView {
	pub base: DefaultView,
	pub content: &'static str,
}

impl ContentView {
	pub fn new(content: &'static str) -> Self {
		Self {
			base: DefaultView::new(document()),
			content,
		}
	}
}

impl View for ContentView {
	type Error = Infallible;

	fn element(&self) -> &Element {
		self.base.element()
	}

	fn render(&mut self) -> Result<(), Self::Error> {
		self.element().set_inner_html(self.content);
		Ok(())
	}
}

pub struct NoOpView {
	pub base: DefaultView,
}

impl NoOpView {
	pub fn new() -> Self {
		Self { base: DefaultView::new(document()) }
	}
}

impl View for NoOpView {
	type Error = Infallible;

	fn element(&self) -> &Element {
		self.base.element()
	}

	fn render(&mut self) -> Result<(), Self::Error> {
		Ok(())
	}
}
