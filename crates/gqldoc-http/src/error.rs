//! Error type shared by every stage of the pipeline.

/// Errors raised by handlers and middleware.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request could not be built or was rejected as malformed.
	#[error("HTTP error: {0}")]
	Http(String),

	/// A value could not be serialized into a response body.
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Unexpected failure inside a handler.
	#[error("Internal server error: {0}")]
	Internal(String),

	/// A middleware failed while processing a request or response.
	///
	/// The typed source error is kept so callers can downcast it.
	#[error("{name} middleware failed: {source}")]
	Middleware {
		name: &'static str,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Error {
	/// Wraps a middleware-specific error.
	pub fn middleware(
		name: &'static str,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::Middleware {
			name,
			source: Box::new(source),
		}
	}

	/// HTTP status code this error maps to when rendered as a response.
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_http::Error;
	///
	/// assert_eq!(Error::Http("bad uri".into()).status_code(), 400);
	/// assert_eq!(Error::Internal("boom".into()).status_code(), 500);
	/// ```
	pub fn status_code(&self) -> u16 {
		match self {
			Self::Http(_) => 400,
			Self::Serialization(_) | Self::Internal(_) | Self::Middleware { .. } => 500,
		}
	}

	/// Returns the typed source of a [`Error::Middleware`] error.
	pub fn middleware_source<E>(&self) -> Option<&E>
	where
		E: std::error::Error + 'static,
	{
		match self {
			Self::Middleware { source, .. } => source.downcast_ref::<E>(),
			_ => None,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
