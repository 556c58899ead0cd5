use crate::{config::Config, page::Page, redirect::redirect_with_token, report::show_error, token, Error};

/// Handles submission of the manual entry panel:
/// parses the pasted json and redirects with its `access_token`.
///
/// Parse failures are shown to the user.
/// A missing input element is only logged.
pub fn process_manual_json(page: &impl Page, config: &Config) -> Result<(), Error> {
	let Some(json_text) = page.input_value(&config.elements.json_input) else {
		log::error!(target: "manual", "JSON input element {:?} not found", config.elements.json_input);
		return Err(Error::MissingElement(config.elements.json_input.clone()));
	};
	let token = match token::from_json_str(&json_text) {
		Ok(token) => token,
		Err(err) => {
			log::warn!(target: "manual", "{err}");
			show_error(page, &config.elements, &err.to_string());
			return Err(err);
		}
	};
	redirect_with_token(page, config, &token)
}
