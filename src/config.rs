use crate::page::Page;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` element carrying [`Config`] overrides.
pub static CONFIG_ELEMENT_ID: &str = "token-relay-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	/// Query parameter of the current url that may carry the token.
	pub query_param: String,
	pub upload_path: String,
	/// Query parameter the upload page reads the token from.
	pub redirect_param: String,
	/// Public origin to prefix the upload path with.
	/// When absent, the redirect is relative to the current origin.
	pub base_url: Option<String>,
	/// How long to wait after the document is parsed before reading the page text,
	/// so that late rendered content is included.
	pub render_delay_ms: u32,
	pub elements: ElementIds,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
	pub json_input: String,
	pub error_message: String,
	pub spinner: String,
	pub manual_options: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			query_param: "access_token".into(),
			upload_path: "/whatsapp/upload".into(),
			redirect_param: "accessToken".into(),
			base_url: None,
			render_delay_ms: 500,
			elements: ElementIds::default(),
		}
	}
}

impl Default for ElementIds {
	fn default() -> Self {
		Self {
			json_input: "json-input".into(),
			error_message: "error-message".into(),
			spinner: "spinner".into(),
			manual_options: "manual-options".into(),
		}
	}
}

impl Config {
	/// Reads overrides from the [`CONFIG_ELEMENT_ID`] element of the page.
	/// Falls back to the defaults if the element is missing or its content is not valid.
	pub fn from_page(page: &impl Page) -> Self {
		let Some(content) = page.element_text(CONFIG_ELEMENT_ID) else {
			log::debug!(target: "config", "No config element, using defaults");
			return Self::default();
		};
		if content.trim().is_empty() {
			return Self::default();
		}
		match serde_json::from_str::<Self>(&content) {
			Ok(config) => {
				log::debug!(target: "config", "Loaded {config:?}");
				config
			}
			Err(err) => {
				log::warn!(target: "config", "Ignoring invalid config element: {err}");
				Self::default()
			}
		}
	}
}
