use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};

use crate::{Error, Result};

/// HTTP request flowing through the pipeline.
///
/// The body is held as [`Bytes`], so cloning it hands out another reference
/// to the same buffer and leaves the request consumable by the next handler.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Request {
	/// Create a request from its parts.
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		Self {
			method,
			uri,
			version,
			headers,
			body,
		}
	}

	/// Start building a request.
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::POST)
	///     .uri("/graphql")
	///     .header("content-type", "application/json")
	///     .body(r#"{"query":"{ __typename }"}"#)
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.path(), "/graphql");
	/// assert_eq!(request.content_type(), Some("application/json"));
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Path component of the request URI.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Value of the `Content-Type` header, if present and valid ASCII.
	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
	}
}

/// Builder for [`Request`].
///
/// Header and URI errors are deferred until [`RequestBuilder::build`].
#[derive(Debug)]
pub struct RequestBuilder {
	method: Method,
	uri: Option<String>,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	error: Option<String>,
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self {
			method: Method::GET,
			uri: None,
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			error: None,
		}
	}
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Replace all headers.
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Append a single header.
	pub fn header(mut self, name: &str, value: &str) -> Self {
		match (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				self.headers.append(name, value);
			}
			_ => {
				self.error
					.get_or_insert_with(|| format!("invalid header: {}", name));
			}
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Finish the request.
	///
	/// # Errors
	///
	/// Returns [`Error::Http`] when a header or the URI is invalid.
	pub fn build(self) -> Result<Request> {
		if let Some(error) = self.error {
			return Err(Error::Http(error));
		}

		let uri = match self.uri {
			Some(uri) => uri
				.parse::<Uri>()
				.map_err(|e| Error::Http(format!("invalid uri {}: {}", uri, e)))?,
			None => Uri::from_static("/"),
		};

		Ok(Request::new(
			self.method,
			uri,
			self.version,
			self.headers,
			self.body,
		))
	}
}
