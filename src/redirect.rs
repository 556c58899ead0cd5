use crate::{config::Config, page::Page, token::AccessToken, Error};

/// Builds the upload page url carrying the percent-encoded token.
pub fn upload_target(config: &Config, token: &AccessToken) -> String {
	let base_url = config.base_url.as_deref().unwrap_or_default().trim_end_matches('/');
	format!(
		"{base_url}{}?{}={}",
		config.upload_path,
		config.redirect_param,
		urlencoding::encode(token.as_str())
	)
}

/// Sends the browser to the upload page. The token is not validated.
pub fn redirect_with_token(page: &impl Page, config: &Config, token: &AccessToken) -> Result<(), Error> {
	let target = upload_target(config, token);
	log::debug!(target: "redirect", "Redirecting to {}", config.upload_path);
	if let Err(err) = page.navigate(&target) {
		log::error!(target: "redirect", "Failed to navigate: {err:?}");
		return Err(Error::Navigation(target));
	}
	Ok(())
}
