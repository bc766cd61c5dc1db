use serde::{Deserialize, Serialize};

/// Documentation middleware configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
	/// Emit diagnostics to the configured sink.
	pub debug: bool,
	/// Only handle requests whose URI path equals this value.
	pub path: Option<String>,
	/// Keep the downstream status and headers when replacing an annotated
	/// response. When `false` the replacement is a bare `200 OK` carrying
	/// only `Content-Type`.
	pub preserve_response_metadata: bool,
}

impl Default for DocsConfig {
	fn default() -> Self {
		Self {
			debug: false,
			path: None,
			preserve_response_metadata: true,
		}
	}
}

impl DocsConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	/// Restrict the middleware to a single endpoint path
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_middleware::DocsConfig;
	///
	/// let config = DocsConfig::new().with_path("/graphql");
	/// assert!(config.matches_path("/graphql"));
	/// assert!(!config.matches_path("/health"));
	/// ```
	pub fn with_path(mut self, path: impl Into<String>) -> Self {
		self.path = Some(path.into());
		self
	}

	pub fn with_preserve_response_metadata(mut self, preserve: bool) -> Self {
		self.preserve_response_metadata = preserve;
		self
	}

	/// Whether a request to `path` is in scope. Always true without a
	/// configured path.
	pub fn matches_path(&self, path: &str) -> bool {
		self.path.as_deref().is_none_or(|scoped| scoped == path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let config = DocsConfig::default();
		assert!(!config.debug);
		assert_eq!(config.path, None);
		assert!(config.preserve_response_metadata);
	}

	#[rstest]
	fn test_partial_deserialization_keeps_defaults() {
		let config: DocsConfig = serde_json::from_str(r#"{"debug": true}"#).unwrap();
		assert!(config.debug);
		assert!(config.preserve_response_metadata);
		assert_eq!(config.path, None);
	}

	#[rstest]
	#[case(None, "/anything", true)]
	#[case(Some("/graphql"), "/graphql", true)]
	#[case(Some("/graphql"), "/graphql/", false)]
	#[case(Some("/graphql"), "/", false)]
	fn test_matches_path(#[case] scope: Option<&str>, #[case] path: &str, #[case] expected: bool) {
		let mut config = DocsConfig::new();
		if let Some(scope) = scope {
			config = config.with_path(scope);
		}
		assert_eq!(config.matches_path(path), expected);
	}
}
