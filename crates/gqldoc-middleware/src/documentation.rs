use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use gqldoc_http::{Handler, Middleware, Request, Response, Result};
use gqldoc_introspection::{DocMap, annotate_value};
use hyper::StatusCode;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use serde_json::Value;

use crate::body::GraphQLRequestBody;
use crate::classify::classify_query;
use crate::config::DocsConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::DocsError;

/// Middleware that adds documentation strings to introspection responses
///
/// Requests whose body is not a GraphQL JSON payload, or whose query selects
/// no introspection field, are passed to the next handler untouched. For
/// introspection queries the downstream response is decoded and every type,
/// field and input field named in the [`DocMap`] gets its `description` set.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use gqldoc_http::{Handler, Middleware, Request, Response};
/// use gqldoc_introspection::DocMap;
/// use gqldoc_middleware::DocumentationMiddleware;
/// use serde_json::{Value, json};
///
/// struct SchemaHandler;
///
/// #[async_trait::async_trait]
/// impl Handler for SchemaHandler {
///     async fn handle(&self, _request: Request) -> gqldoc_http::Result<Response> {
///         Response::ok().with_json(&json!({
///             "data": { "__schema": { "types": [{ "name": "User", "description": null }] } }
///         }))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let middleware = DocumentationMiddleware::new(DocMap::from([("User", "A user")]));
/// let request = Request::builder()
///     .uri("/graphql")
///     .body(r#"{"query":"{ __schema { types { name description } } }"}"#)
///     .build()
///     .unwrap();
///
/// let response = middleware.process(request, Arc::new(SchemaHandler)).await.unwrap();
/// let body: Value = serde_json::from_slice(&response.body).unwrap();
/// assert_eq!(body["data"]["__schema"]["types"][0]["description"], "A user");
/// # });
/// ```
pub struct DocumentationMiddleware {
	docs: Arc<DocMap>,
	config: DocsConfig,
	sink: Arc<dyn DiagnosticSink>,
}

impl DocumentationMiddleware {
	pub fn new(docs: DocMap) -> Self {
		Self::with_config(docs, DocsConfig::default())
	}

	pub fn with_config(docs: DocMap, config: DocsConfig) -> Self {
		Self {
			docs: Arc::new(docs),
			config,
			sink: Arc::new(TracingSink),
		}
	}

	/// Replace the diagnostic sink. Diagnostics still require
	/// [`DocsConfig::debug`].
	pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
		self.sink = sink;
		self
	}

	pub fn docs(&self) -> &DocMap {
		&self.docs
	}

	pub fn config(&self) -> &DocsConfig {
		&self.config
	}

	fn emit(&self, diagnostic: Diagnostic) {
		if self.config.debug {
			self.sink.emit(&diagnostic);
		}
	}

	/// Annotate the downstream response, or hand it back unchanged when it
	/// carries no `data.__schema`.
	fn document_response(&self, response: Response) -> std::result::Result<Response, DocsError> {
		let text = std::str::from_utf8(&response.body)?;
		let mut payload: Value = serde_json::from_str(text)?;

		let Some(data) = payload
			.get_mut("data")
			.filter(|data| data.get("__schema").is_some_and(|schema| !schema.is_null()))
		else {
			self.emit(Diagnostic::SchemaShapeMissing);
			return Ok(response);
		};

		self.emit(Diagnostic::Annotating {
			entries: self.docs.len(),
		});
		annotate_value(data, &self.docs)?;

		let body = serde_json::to_vec(&payload)?;
		Ok(self.replace_response(response, body))
	}

	fn replace_response(&self, original: Response, body: Vec<u8>) -> Response {
		let mut replacement = if self.config.preserve_response_metadata {
			let mut response = original;
			response.headers.remove(CONTENT_LENGTH);
			response
		} else {
			Response::new(StatusCode::OK)
		};
		replacement
			.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		replacement.with_body(body)
	}
}

impl fmt::Debug for DocumentationMiddleware {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DocumentationMiddleware")
			.field("entries", &self.docs.len())
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

#[async_trait]
impl Middleware for DocumentationMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		// Unreadable bodies fail open.
		let body = match GraphQLRequestBody::from_slice(&request.body) {
			Ok(body) => body,
			Err(error) => {
				self.emit(Diagnostic::RequestBodyUnreadable {
					reason: error.to_string(),
				});
				return next.handle(request).await;
			}
		};
		let Some(query) = body.query() else {
			self.emit(Diagnostic::MissingQuery);
			return next.handle(request).await;
		};

		// Syntax errors fail loud.
		let kind = match classify_query(query) {
			Ok(kind) => kind,
			Err(error) => {
				self.emit(Diagnostic::QuerySyntax {
					reason: error.to_string(),
				});
				return Err(error.into());
			}
		};
		if !kind.is_introspection() {
			self.emit(Diagnostic::NotIntrospection);
			return next.handle(request).await;
		}

		let response = next.handle(request).await.inspect_err(|error| {
			self.emit(Diagnostic::ProcessingFailed {
				reason: error.to_string(),
			})
		})?;

		self.document_response(response).map_err(|error| {
			self.emit(Diagnostic::ProcessingFailed {
				reason: error.to_string(),
			});
			error.into()
		})
	}

	fn should_continue(&self, request: &Request) -> bool {
		self.config.matches_path(request.path())
	}
}
