use crate::{config::Config, extract, manual, page::Page, utility::InputExt};
use anyhow::Context;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Name of the global function inline `onclick` handlers of the manual entry panel call.
pub static MANUAL_HANDLER_NAME: &str = "processManualJson";

/// [`Page`] backed by the live browser document.
pub struct DomPage {
	window: Window,
	document: Document,
}

impl DomPage {
	pub fn new() -> Self {
		Self {
			window: gloo_utils::window(),
			document: gloo_utils::document(),
		}
	}

	fn element(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}
}

impl Default for DomPage {
	fn default() -> Self {
		Self::new()
	}
}

impl Page for DomPage {
	fn query_string(&self) -> Option<String> {
		self.window.location().search().ok()
	}

	fn body_text(&self) -> Option<String> {
		let body = self.document.body()?;
		let text = body.inner_text();
		if !text.is_empty() {
			return Some(text);
		}
		body.text_content()
	}

	fn element_text(&self, id: &str) -> Option<String> {
		self.element(id)?.text_content()
	}

	fn input_value(&self, id: &str) -> Option<String> {
		let element = self.element(id)?;
		Some(element.input_value().unwrap_or_default())
	}

	fn set_element_text(&self, id: &str, text: &str) -> bool {
		let Some(element) = self.element(id) else {
			return false;
		};
		element.set_text_content(Some(text));
		true
	}

	fn set_displayed(&self, id: &str, displayed: bool) -> bool {
		let Some(element) = self.element(id) else {
			return false;
		};
		let Some(element) = element.dyn_ref::<HtmlElement>() else {
			return false;
		};
		let display = match displayed {
			true => "block",
			false => "none",
		};
		element.style().set_property("display", display).is_ok()
	}

	fn alert(&self, message: &str) {
		let _ = self.window.alert_with_message(message);
	}

	fn navigate(&self, target: &str) -> anyhow::Result<()> {
		self.window
			.location()
			.set_href(target)
			.map_err(|err| anyhow::anyhow!("{err:?}"))
	}
}

/// Entry point of the callback page.
///
/// Once the document is parsed, the manual entry panel is wired up
/// and the automatic extraction is scheduled after the configured render delay.
pub fn start() {
	let document = gloo_utils::document();
	if document.ready_state() != "loading" {
		on_document_ready();
		return;
	}
	EventListener::once(&document, "DOMContentLoaded", move |_| on_document_ready()).forget();
}

fn on_document_ready() {
	let config = Rc::new(Config::from_page(&DomPage::new()));
	if let Err(err) = bind_manual_entry(&config) {
		log::error!(target: "web", "{err:?}");
	}
	log::debug!(target: "web", "DOM loaded, extracting token in {}ms", config.render_delay_ms);
	Timeout::new(config.render_delay_ms, move || {
		extract::run(&DomPage::new(), &config);
	})
	.forget();
}

fn bind_manual_entry(config: &Rc<Config>) -> anyhow::Result<()> {
	let handler = Closure::<dyn Fn()>::new({
		let config = config.clone();
		move || {
			let _ = manual::process_manual_json(&DomPage::new(), &config);
		}
	});
	js_sys::Reflect::set(
		&gloo_utils::window(),
		&JsValue::from_str(MANUAL_HANDLER_NAME),
		handler.as_ref(),
	)
	.map_err(|err| anyhow::anyhow!("{err:?}"))
	.with_context(|| format!("Failed to install window.{MANUAL_HANDLER_NAME}"))?;
	handler.forget();

	let form = gloo_utils::document()
		.get_element_by_id(&config.elements.json_input)
		.and_then(|input| input.owning_form());
	let Some(form) = form else {
		log::debug!(target: "web", "No form owns {:?}, relying on {MANUAL_HANDLER_NAME}", config.elements.json_input);
		return Ok(());
	};
	let config = config.clone();
	EventListener::new_with_options(
		&form,
		"submit",
		EventListenerOptions::enable_prevent_default(),
		move |event| {
			event.prevent_default();
			let _ = manual::process_manual_json(&DomPage::new(), &config);
		},
	)
	.forget();
	Ok(())
}
