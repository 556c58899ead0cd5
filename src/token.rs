use crate::Error;
use serde_json::Value;

/// An opaque OAuth access token. Its content is never inspected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}

	/// Interprets a json value as a token.
	/// Every truthy value is a token, rendered the way a browser stringifies it.
	/// `null`, `false`, zero, and the empty string count as missing.
	pub fn from_json(value: &Value) -> Option<Self> {
		let present = match value {
			Value::Null => false,
			Value::Bool(flag) => *flag,
			Value::Number(number) => number.as_f64() != Some(0.0),
			Value::String(token) => !token.is_empty(),
			Value::Array(_) | Value::Object(_) => true,
		};
		present.then(|| Self(js_string(value)))
	}
}

/// Renders a json value like javascript's `String(value)`.
fn js_string(value: &Value) -> String {
	match value {
		Value::Null => "null".into(),
		Value::Bool(flag) => flag.to_string(),
		Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
			(Some(signed), _, _) => signed.to_string(),
			(_, Some(unsigned), _) => unsigned.to_string(),
			// f64 display drops the fraction of integral values, so `1.0` becomes `1`
			(_, _, Some(float)) => float.to_string(),
			_ => number.to_string(),
		},
		Value::String(text) => text.clone(),
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::Null => String::new(),
				item => js_string(item),
			})
			.collect::<Vec<_>>()
			.join(","),
		Value::Object(_) => "[object Object]".into(),
	}
}

impl std::fmt::Display for AccessToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Where an extracted token was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSource {
	Query,
	PageContent,
}

impl TokenSource {
	pub fn as_display_name(&self) -> &'static str {
		match self {
			Self::Query => "URL parameters",
			Self::PageContent => "page content",
		}
	}
}

/// Returns the first value of `name` in a form-urlencoded query,
/// provided it is not empty. A leading `?` is ignored.
pub fn from_query(query: &str, name: &str) -> Option<AccessToken> {
	let query = query.strip_prefix('?').unwrap_or(query);
	let (_, value) = url::form_urlencoded::parse(query.as_bytes()).find(|(key, _)| key == name)?;
	if value.is_empty() {
		return None;
	}
	Some(AccessToken(value.into_owned()))
}

/// Slices `text` from its first `{` through its last `}`, inclusive.
///
/// Only the outermost braces are considered, so unrelated fragments
/// before or after a json object end up in the slice as well.
pub fn json_fragment(text: &str) -> Option<&str> {
	let start = text.find('{')?;
	let end = text.rfind('}')?;
	if end < start {
		return None;
	}
	Some(&text[start..=end])
}

/// Parses `json` and reads its `access_token` property.
pub fn from_json_str(json: &str) -> Result<AccessToken, Error> {
	let data = serde_json::from_str::<Value>(json)?;
	data.get("access_token")
		.and_then(AccessToken::from_json)
		.ok_or(Error::MissingAccessToken)
}

/// Finds the json object embedded in free-form page text and reads its `access_token` property.
pub fn from_page_text(text: &str) -> Result<AccessToken, Error> {
	let fragment = json_fragment(text).ok_or(Error::NoJsonFragment)?;
	from_json_str(fragment)
}

#[cfg(test)]
mod test {
	use super::*;
	use trim_margin::MarginTrimmable;

	mod query {
		use super::*;

		#[test]
		fn present() {
			let token = from_query("?access_token=ABC123", "access_token");
			assert_eq!(token.as_ref().map(AccessToken::as_str), Some("ABC123"));
		}

		#[test]
		fn without_question_mark() {
			let token = from_query("state=x&access_token=ABC123", "access_token");
			assert_eq!(token.as_ref().map(AccessToken::as_str), Some("ABC123"));
		}

		#[test]
		fn decodes_value() {
			let token = from_query("?access_token=a%2Fb+c", "access_token");
			assert_eq!(token.as_ref().map(AccessToken::as_str), Some("a/b c"));
		}

		#[test]
		fn first_occurrence_wins() {
			assert_eq!(from_query("?access_token=&access_token=late", "access_token"), None);
			let token = from_query("?access_token=early&access_token=late", "access_token");
			assert_eq!(token.as_ref().map(AccessToken::as_str), Some("early"));
		}

		#[test]
		fn missing() {
			assert_eq!(from_query("", "access_token"), None);
			assert_eq!(from_query("?code=abc", "access_token"), None);
			assert_eq!(from_query("?accessToken=abc", "access_token"), None);
		}
	}

	mod fragment {
		use super::*;

		#[test]
		fn surrounded_by_text() {
			let text = r#"prefix {"access_token":"XYZ"} suffix"#;
			assert_eq!(json_fragment(text), Some(r#"{"access_token":"XYZ"}"#));
		}

		#[test]
		fn spans_outermost_braces() {
			let text = r#"{"a":1} and {"b":2}"#;
			assert_eq!(json_fragment(text), Some(text));
		}

		#[test]
		fn no_braces() {
			assert_eq!(json_fragment("no json here"), None);
			assert_eq!(json_fragment("only { opening"), None);
			assert_eq!(json_fragment("only } closing"), None);
		}

		#[test]
		fn reversed_braces() {
			assert_eq!(json_fragment("} nothing {"), None);
		}
	}

	mod page_text {
		use super::*;

		#[test]
		fn embedded_object() {
			let token = from_page_text(r#"prefix {"access_token":"XYZ"} suffix"#).unwrap();
			assert_eq!(token.as_str(), "XYZ");
		}

		#[test]
		fn pretty_printed_response() {
			let text = r#"
				|Authorization complete
				|{
				|  "access_token": "BQD-token",
				|  "token_type": "Bearer",
				|  "expires_in": 3600,
				|  "scope": "playlist-modify-public"
				|}
				|You may close this window.
			"#
			.trim_margin()
			.unwrap();
			let token = from_page_text(&text).unwrap();
			assert_eq!(token.as_str(), "BQD-token");
		}

		#[test]
		fn without_token_property() {
			assert!(matches!(from_page_text(r#"{"foo":"bar"}"#), Err(Error::MissingAccessToken)));
		}

		#[test]
		fn without_json() {
			assert!(matches!(from_page_text("plain text"), Err(Error::NoJsonFragment)));
		}

		#[test]
		fn multiple_fragments_fail_to_parse() {
			let text = r#"{"access_token":"A"} then {"other":1}"#;
			assert!(matches!(from_page_text(text), Err(Error::InvalidJson(_))));
		}
	}

	mod json_value {
		use super::*;
		use serde_json::json;

		fn token(value: Value) -> Option<String> {
			AccessToken::from_json(&value).map(AccessToken::into_inner)
		}

		#[test]
		fn present_values() {
			assert_eq!(token(json!("abc")), Some("abc".into()));
			assert_eq!(token(json!(42)), Some("42".into()));
			assert_eq!(token(json!(1.0)), Some("1".into()));
			assert_eq!(token(json!(2.5)), Some("2.5".into()));
			assert_eq!(token(json!(true)), Some("true".into()));
			assert_eq!(token(json!(["a", 1, null, [2, 3]])), Some("a,1,,2,3".into()));
			assert_eq!(token(json!([])), Some("".into()));
			assert_eq!(token(json!({"nested": "x"})), Some("[object Object]".into()));
		}

		#[test]
		fn missing_values() {
			assert_eq!(token(json!("")), None);
			assert_eq!(token(json!(0)), None);
			assert_eq!(token(json!(-0.0)), None);
			assert_eq!(token(json!(null)), None);
			assert_eq!(token(json!(false)), None);
		}

		#[test]
		fn boolean_token_document() {
			let token = from_json_str(r#"{"access_token":true}"#).unwrap();
			assert_eq!(token.as_str(), "true");
		}

		#[test]
		fn non_object_document() {
			assert!(matches!(from_json_str("[1, 2]"), Err(Error::MissingAccessToken)));
			assert!(matches!(from_json_str("null"), Err(Error::MissingAccessToken)));
		}
	}
}
