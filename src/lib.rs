//! # gqldoc
//!
//! Centrally defined documentation for GraphQL introspection responses.
//!
//! GraphQL servers describe their schema through introspection, and tools
//! such as GraphiQL render the `description` of every type and field. gqldoc
//! lets those descriptions live in one [`DocMap`] instead of being scattered
//! over schema declarations: a middleware recognises introspection queries
//! and fills in the descriptions on the way out.
//!
//! ## Feature Flags
//!
//! - `middleware` (default) - [`DocumentationMiddleware`] and its configuration
//! - `definitions` - generators for scalar, pagination and filter docs
//! - `full` - everything above
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use gqldoc::prelude::*;
//! use serde_json::{Value, json};
//!
//! struct Schema;
//!
//! #[async_trait]
//! impl Handler for Schema {
//!     async fn handle(&self, _request: Request) -> gqldoc::Result<Response> {
//!         Response::ok().with_json(&json!({
//!             "data": { "__schema": { "types": [
//!                 { "name": "User", "description": null,
//!                   "fields": [{ "name": "balance", "description": null }] }
//!             ] } }
//!         }))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let docs = DocMap::from([
//!     ("User", "A user in the system"),
//!     ("User.balance", "User balance"),
//! ]);
//!
//! let app = MiddlewareChain::new(Arc::new(Schema))
//!     .with_middleware(Arc::new(DocumentationMiddleware::new(docs)));
//!
//! let request = Request::builder()
//!     .uri("/graphql")
//!     .body(r#"{"query":"{ __schema { types { name description } } }"}"#)
//!     .build()
//!     .unwrap();
//!
//! let response = app.handle(request).await.unwrap();
//! let body: Value = serde_json::from_slice(&response.body).unwrap();
//! assert_eq!(body["data"]["__schema"]["types"][0]["description"], "A user in the system");
//! # });
//! ```

pub mod http;
pub mod introspection;
#[cfg(feature = "middleware")]
pub mod middleware;

pub use gqldoc_http::{Error, Handler, Middleware, MiddlewareChain, Request, Response, Result};
pub use gqldoc_introspection::{
	DocMap, IntrospectionError, IntrospectionSchema, annotate, annotate_value, annotated,
};

#[cfg(feature = "definitions")]
pub use gqldoc_introspection::definitions;

#[cfg(feature = "middleware")]
pub use gqldoc_middleware::{
	DocsConfig, DocsError, DocsSettings, DocumentationMiddleware, classify_query,
	is_introspection_query,
};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::{
		DocMap, Error, Handler, Middleware, MiddlewareChain, Request, Response, annotate,
		annotate_value,
	};

	// External
	pub use async_trait::async_trait;

	#[cfg(feature = "middleware")]
	pub use crate::{DocsConfig, DocsSettings, DocumentationMiddleware};

	#[cfg(feature = "definitions")]
	pub use crate::definitions::extend_with_base_definitions;
}
