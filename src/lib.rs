#![doc(html_root_url = "https://docs.rs/dom-view/0.0.1")]
#![warn(clippy::pedantic)]

//! Organises DOM code around [`View`]s: each view owns one root [`web_sys::Element`],
//! and the free functions in this crate move, show, hide and listen on views through that element.
//!
//! The host [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document) is never looked up implicitly.
//! It's handed to [`DefaultView::new`] instead, so that views can be built for any document.

pub use web_sys;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod error;
pub mod listener;
pub mod style;
mod tree;
mod view;
mod visibility;

pub use error::{Error, Result};
pub use listener::{add_event_listener, EventListener};
pub use tree::{append, append_to_element, insert_before, insert_before_element, remove, replace, replace_element};
pub use view::{DefaultView, View};
pub use visibility::{hide, is_hidden, show};
