use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

pub trait InputExt {
	fn as_input(&self) -> Option<&HtmlInputElement>;
	fn as_textarea(&self) -> Option<&HtmlTextAreaElement>;

	fn input_value(&self) -> Option<String> {
		if let Some(input) = self.as_input() {
			return Some(input.value());
		}
		if let Some(text_area) = self.as_textarea() {
			return Some(text_area.value());
		}
		None
	}

	/// The form this input or textarea submits with.
	fn owning_form(&self) -> Option<HtmlFormElement> {
		if let Some(input) = self.as_input() {
			return input.form();
		}
		if let Some(text_area) = self.as_textarea() {
			return text_area.form();
		}
		None
	}
}

impl InputExt for Element {
	fn as_input(&self) -> Option<&HtmlInputElement> {
		self.dyn_ref::<HtmlInputElement>()
	}

	fn as_textarea(&self) -> Option<&HtmlTextAreaElement> {
		self.dyn_ref::<HtmlTextAreaElement>()
	}
}
