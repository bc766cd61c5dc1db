use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 400 Bad Request status
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the response status
	pub fn with_status(mut self, status: StatusCode) -> Self {
		self.status = status;
		self
	}

	/// Set the response body
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("Hello, World!");
	/// assert_eq!(response.body, Bytes::from("Hello, World!"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a custom header to the response
	///
	/// Invalid names or values are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_http::Response;
	///
	/// let response = Response::ok().with_header("X-Request-Id", "42");
	/// assert_eq!(
	///     response.headers.get("x-request-id").unwrap().to_str().unwrap(),
	///     "42"
	/// );
	/// ```
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			self.headers.insert(name, value);
		}
		self
	}

	/// Set the response body to JSON and add appropriate Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"ok": true})).unwrap();
	/// assert_eq!(response.content_type(), Some("application/json"));
	/// assert_eq!(response.body, r#"{"ok":true}"#);
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> crate::Result<Self> {
		let json = serde_json::to_vec(data)
			.map_err(|e| crate::Error::Serialization(e.to_string()))?;
		self.body = Bytes::from(json);
		self.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		Ok(self)
	}

	/// Value of the `Content-Type` header, if present and valid ASCII.
	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
	}
}

impl From<crate::Error> for Response {
	fn from(error: crate::Error) -> Self {
		let status =
			StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		let body = serde_json::json!({
			"error": error.to_string(),
		});

		Response::new(status)
			.with_json(&body)
			.unwrap_or_else(|_| Response::internal_server_error())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_with_header_ignores_invalid_name() {
		let response = Response::ok().with_header("bad header", "value");
		assert!(response.headers.is_empty());
	}

	#[rstest]
	fn test_with_json_replaces_content_type() {
		let response = Response::ok()
			.with_header("content-type", "text/plain")
			.with_json(&serde_json::json!([1, 2]))
			.unwrap();

		assert_eq!(response.content_type(), Some("application/json"));
		assert_eq!(response.headers.get_all(CONTENT_TYPE).iter().count(), 1);
	}

	#[rstest]
	fn test_error_into_response() {
		let response: Response = crate::Error::Http("bad".to_string()).into();

		assert_eq!(response.status, StatusCode::BAD_REQUEST);
		let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
		assert_eq!(body["error"], "HTTP error: bad");
	}
}
