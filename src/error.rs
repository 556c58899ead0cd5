#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Invalid JSON: {0}")]
	InvalidJson(#[from] serde_json::Error),
	#[error("The JSON doesn't contain an access_token property")]
	MissingAccessToken,
	#[error("No JSON structure found in page content")]
	NoJsonFragment,
	#[error("Page content is unavailable")]
	MissingPageContent,
	#[error("Element {0:?} not found")]
	MissingElement(String),
	#[error("Failed to navigate to {0:?}")]
	Navigation(String),
}
