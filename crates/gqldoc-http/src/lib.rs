//! # gqldoc-http
//!
//! Minimal HTTP pipeline primitives used by the gqldoc middleware.
//!
//! The crate provides the request and response values that flow through a
//! handler chain, the [`Handler`] and [`Middleware`] traits, and a
//! [`MiddlewareChain`] that composes them.
//!
//! ## Example
//!
//! ```rust
//! use gqldoc_http::{Handler, MiddlewareChain, Request, Response};
//! use std::sync::Arc;
//!
//! struct Hello;
//!
//! #[async_trait::async_trait]
//! impl Handler for Hello {
//!     async fn handle(&self, _request: Request) -> gqldoc_http::Result<Response> {
//!         Ok(Response::ok().with_body("hello"))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let chain = MiddlewareChain::new(Arc::new(Hello));
//! let request = Request::builder().uri("/").build().unwrap();
//! let response = chain.handle(request).await.unwrap();
//! assert_eq!(response.body, "hello");
//! # });
//! ```

pub mod error;
pub mod middleware;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use middleware::{Handler, Middleware, MiddlewareChain};
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-exported so downstream crates can name header and status types
// without adding hyper themselves.
pub use hyper::{HeaderMap, Method, StatusCode, Uri, Version, header};
