use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GraphQL-over-HTTP request payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQLRequestBody {
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub variables: Option<Value>,
	#[serde(
		default,
		rename = "operationName",
		skip_serializing_if = "Option::is_none"
	)]
	pub operation_name: Option<String>,
}

impl GraphQLRequestBody {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: Some(query.into()),
			..Self::default()
		}
	}

	/// Decode a raw request body.
	///
	/// Any JSON document that is not an object, or whose known keys have the
	/// wrong type, is rejected.
	pub fn from_slice(body: &[u8]) -> Result<Self, BodyError> {
		let text = std::str::from_utf8(body)?;
		Ok(serde_json::from_str(text)?)
	}

	/// The query string, if present and not empty.
	///
	/// A whitespace-only query is returned as is and left to the parser.
	pub fn query(&self) -> Option<&str> {
		self.query.as_deref().filter(|query| !query.is_empty())
	}
}

/// Reasons a request body could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
	#[error("{0}")]
	Encoding(#[from] std::str::Utf8Error),
	#[error("{0}")]
	Json(#[from] serde_json::Error),
}
