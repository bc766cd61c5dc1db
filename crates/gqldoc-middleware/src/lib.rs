//! # gqldoc-middleware
//!
//! Pipeline middleware that documents GraphQL introspection responses.
//!
//! [`DocumentationMiddleware`] inspects each request body. Introspection
//! queries (any operation selecting a `__`-prefixed field at its top level)
//! are forwarded to the next handler, and the returned schema is annotated
//! from a [`DocMap`](gqldoc_introspection::DocMap) before the response goes
//! back out. Everything else passes through untouched.
//!
//! ## Failure policy
//!
//! - Request bodies that are not UTF-8 JSON, or carry no `query`, are passed
//!   through.
//! - Query syntax errors, undecodable introspection responses and malformed
//!   schemas are returned as errors.
//!
//! ## Diagnostics
//!
//! With [`DocsConfig::debug`] enabled every decision is reported to a
//! [`DiagnosticSink`]. [`TracingSink`] is the default.

pub mod body;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod documentation;
pub mod error;
pub mod settings;

pub use body::{BodyError, GraphQLRequestBody};
pub use classify::{OperationKind, classify_document, classify_query, is_introspection_query};
pub use config::DocsConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, NoopSink, TracingSink};
pub use documentation::DocumentationMiddleware;
pub use error::DocsError;
pub use settings::{DocsSettings, SettingsError};

/// Name reported in [`gqldoc_http::Error::Middleware`].
pub const MIDDLEWARE_NAME: &str = "documentation";
