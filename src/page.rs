/// The parts of the browser page that token extraction reads from and reports into.
///
/// Every element is addressed by id and may be missing,
/// in which case reads return `None` and writes return `false`.
pub trait Page {
	/// The query portion of the current url, including the leading `?` if any.
	fn query_string(&self) -> Option<String>;

	/// The visible text of the document body.
	fn body_text(&self) -> Option<String>;

	fn element_text(&self, id: &str) -> Option<String>;

	/// The current value of an input or textarea element.
	/// A present element without a value (any other kind of element) reads as empty.
	fn input_value(&self, id: &str) -> Option<String>;

	fn set_element_text(&self, id: &str, text: &str) -> bool;

	/// Shows (`display: block`) or hides (`display: none`) an element.
	fn set_displayed(&self, id: &str, displayed: bool) -> bool;

	/// Blocks on a modal dialog showing the message.
	fn alert(&self, message: &str);

	fn navigate(&self, target: &str) -> anyhow::Result<()>;
}
