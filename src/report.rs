use crate::{config::ElementIds, page::Page};

/// Shows `message` to the user and swaps the loading spinner for the manual entry panel.
///
/// Without an error element the message is shown in an alert instead.
/// A missing spinner or manual entry panel is ignored.
pub fn show_error(page: &impl Page, elements: &ElementIds, message: &str) {
	if page.set_element_text(&elements.error_message, message) {
		page.set_displayed(&elements.error_message, true);
	} else {
		log::error!(target: "report", "Error element {:?} not found", elements.error_message);
		page.alert(&format!("Error: {message}"));
	}
	page.set_displayed(&elements.spinner, false);
	page.set_displayed(&elements.manual_options, true);
}
