//! Middleware and handler traits for HTTP request processing.
//!
//! ## Handler
//!
//! The `Handler` trait is the core abstraction for processing requests:
//!
//! ```rust
//! use gqldoc_http::{Handler, Request, Response};
//! use async_trait::async_trait;
//!
//! struct GraphQLEndpoint;
//!
//! #[async_trait]
//! impl Handler for GraphQLEndpoint {
//!     async fn handle(&self, request: Request) -> gqldoc_http::Result<Response> {
//!         Ok(Response::ok().with_body(request.body))
//!     }
//! }
//! ```
//!
//! ## Middleware
//!
//! Middleware wraps handlers and may inspect the request before calling
//! `next`, the response after it, or both.

use async_trait::async_trait;
use std::sync::Arc;

use crate::{Request, Response, Result};

/// Handler trait for processing requests.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles an HTTP request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed.
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation for `Arc<T>` where T: Handler.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Middleware trait for request/response processing.
#[async_trait]
pub trait Middleware: Send + Sync {
	/// Processes a request through this middleware.
	///
	/// # Arguments
	///
	/// * `request` - The incoming HTTP request
	/// * `next` - The next handler in the chain to call
	///
	/// # Errors
	///
	/// Returns an error if the middleware or next handler fails.
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;

	/// Determines whether this middleware should run for the given request.
	///
	/// Returning `false` makes [`MiddlewareChain`] skip this middleware and
	/// call the next stage directly. Defaults to `true`.
	fn should_continue(&self, _request: &Request) -> bool {
		true
	}
}

/// Middleware chain - composes multiple middleware into a single handler.
///
/// Middleware run in the order they were added: the first one added sees
/// the request first and the response last.
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	/// Creates a new middleware chain around the given handler.
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}

	/// Adds a middleware to the chain using builder pattern.
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	/// Adds a middleware to the chain.
	pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware>) {
		self.middlewares.push(middleware);
	}
}

#[async_trait]
impl Handler for MiddlewareChain {
	async fn handle(&self, request: Request) -> Result<Response> {
		if self.middlewares.is_empty() {
			return self.handler.handle(request).await;
		}

		// Wrap from the innermost stage outwards, skipping middleware that
		// opted out of this request.
		let mut current_handler = self.handler.clone();
		for middleware in self
			.middlewares
			.iter()
			.rev()
			.filter(|mw| mw.should_continue(&request))
		{
			current_handler = Arc::new(ComposedHandler {
				middleware: middleware.clone(),
				next: current_handler,
			});
		}

		current_handler.handle(request).await
	}
}

struct ComposedHandler {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for ComposedHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.middleware.process(request, self.next.clone()).await
	}
}
