use gqldoc_introspection::IntrospectionError;

/// Failures the documentation middleware propagates to the pipeline.
///
/// Unreadable request bodies are not errors: the middleware passes those
/// requests through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
	/// The `query` string is not a valid GraphQL document.
	#[error("GraphQL syntax error: {0}")]
	QuerySyntax(#[from] async_graphql::parser::Error),

	/// The downstream response body is not UTF-8.
	#[error("Response body is not valid UTF-8: {0}")]
	ResponseEncoding(#[from] std::str::Utf8Error),

	/// The downstream response body is not JSON, or the annotated result
	/// could not be serialized.
	#[error("Response body is not valid JSON: {0}")]
	ResponseBody(#[from] serde_json::Error),

	/// The introspection payload could not be annotated.
	#[error(transparent)]
	Introspection(#[from] IntrospectionError),
}

impl From<DocsError> for gqldoc_http::Error {
	fn from(error: DocsError) -> Self {
		gqldoc_http::Error::middleware(crate::MIDDLEWARE_NAME, error)
	}
}
