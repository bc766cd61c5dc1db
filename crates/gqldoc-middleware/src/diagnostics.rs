//! Diagnostic events and the sinks that receive them.
//!
//! The middleware reports each decision it takes as a [`Diagnostic`].
//! Events are only emitted when [`DocsConfig::debug`](crate::DocsConfig::debug)
//! is set; the sink decides where they go.

use std::fmt;
use std::sync::{Arc, Mutex};

pub const LOG_TARGET: &str = "gqldoc::docs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// The request body is not UTF-8 JSON. The request is passed through.
	RequestBodyUnreadable { reason: String },
	/// The request body has no non-empty `query`. The request is passed through.
	MissingQuery,
	/// The query selects no introspection field. The request is passed through.
	NotIntrospection,
	/// The query failed to parse. The error is propagated.
	QuerySyntax { reason: String },
	/// The response carries a schema and is being annotated.
	Annotating { entries: usize },
	/// The response has no `data.__schema`. It is returned untouched.
	SchemaShapeMissing,
	/// The downstream handler or response post-processing failed.
	ProcessingFailed { reason: String },
}

impl Diagnostic {
	/// Whether this event reports a failure rather than a routing decision.
	pub fn is_failure(&self) -> bool {
		matches!(
			self,
			Self::RequestBodyUnreadable { .. }
				| Self::QuerySyntax { .. }
				| Self::ProcessingFailed { .. }
		)
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[GraphQL Docs]: ")?;
		match self {
			Self::RequestBodyUnreadable { reason } => {
				write!(f, "Failed to parse request body: {}", reason)
			}
			Self::MissingQuery => f.write_str("No query found in request"),
			Self::NotIntrospection => f.write_str("Not an introspection query"),
			Self::QuerySyntax { reason } | Self::ProcessingFailed { reason } => {
				write!(f, "Error processing GraphQL request: {}", reason)
			}
			Self::Annotating { entries } => write!(
				f,
				"Enhancing schema with documentation ({} entries)",
				entries
			),
			Self::SchemaShapeMissing => {
				f.write_str("Response does not contain an introspection schema")
			}
		}
	}
}

/// Receiver of middleware diagnostics.
pub trait DiagnosticSink: Send + Sync {
	fn emit(&self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
	fn emit(&self, diagnostic: &Diagnostic) {
		(**self).emit(diagnostic)
	}
}

/// Forwards diagnostics to `tracing`: failures at `warn`, everything else
/// at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn emit(&self, diagnostic: &Diagnostic) {
		if diagnostic.is_failure() {
			tracing::warn!(target: LOG_TARGET, "{}", diagnostic);
		} else {
			tracing::debug!(target: LOG_TARGET, "{}", diagnostic);
		}
	}
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
	fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another to the middleware.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
	records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get_records(&self) -> Vec<Diagnostic> {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	pub fn contains(&self, predicate: impl Fn(&Diagnostic) -> bool) -> bool {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.iter()
			.any(predicate)
	}

	pub fn clear(&self) {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clear();
	}
}

impl DiagnosticSink for MemorySink {
	fn emit(&self, diagnostic: &Diagnostic) {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push(diagnostic.clone());
	}
}
