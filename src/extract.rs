use crate::{
	config::Config,
	page::Page,
	redirect::redirect_with_token,
	report::show_error,
	token::{self, AccessToken, TokenSource},
	Error,
};

pub static EXTRACTION_FAILED: &str = "Could not automatically extract access token";

/// Looks for a token in the url query, then in json embedded in the page text.
pub fn find_access_token(page: &impl Page, config: &Config) -> Result<(AccessToken, TokenSource), Error> {
	let query = page.query_string().unwrap_or_default();
	if let Some(token) = token::from_query(&query, &config.query_param) {
		return Ok((token, TokenSource::Query));
	}
	let text = page.body_text().ok_or(Error::MissingPageContent)?;
	let token = token::from_page_text(&text)?;
	Ok((token, TokenSource::PageContent))
}

/// Redirects with the first token found on the page.
/// Returns false if there was no token or the redirect could not be started.
pub fn extract_access_token(page: &impl Page, config: &Config) -> bool {
	log::debug!(target: "extract", "Attempting to extract access token");
	let (token, source) = match find_access_token(page, config) {
		Ok(found) => found,
		Err(err @ Error::InvalidJson(_)) => {
			log::error!(target: "extract", "Error parsing page content: {err}");
			return false;
		}
		Err(err) => {
			log::warn!(target: "extract", "{err}");
			return false;
		}
	};
	log::info!(target: "extract", "Found access token in {}", source.as_display_name());
	redirect_with_token(page, config, &token).is_ok()
}

/// The automatic path run once the page has rendered.
/// On failure the user is pointed at the manual entry panel.
pub fn run(page: &impl Page, config: &Config) -> bool {
	let found = extract_access_token(page, config);
	if !found {
		log::warn!(target: "extract", "Failed to extract access token automatically");
		show_error(page, &config.elements, EXTRACTION_FAILED);
	}
	found
}
