//! Introspection query detection.

use async_graphql::parser::parse_query;
use async_graphql::parser::types::{ExecutableDocument, Selection};

use crate::error::DocsError;

/// Result of classifying a GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
	/// At least one operation selects a `__`-prefixed field at its top level.
	Introspection,
	Regular,
}

impl OperationKind {
	pub fn is_introspection(self) -> bool {
		self == Self::Introspection
	}
}

/// Parse `query` and classify it.
///
/// Only the direct field selections of each operation definition are
/// inspected. Fragment spreads, inline fragments and nested selections are
/// not followed, so `{ user { __typename } }` is a regular query.
///
/// # Errors
///
/// Returns [`DocsError::QuerySyntax`] when `query` is not a valid GraphQL
/// document.
///
/// # Examples
///
/// ```
/// use gqldoc_middleware::{OperationKind, classify_query};
///
/// assert_eq!(classify_query("{ user { id } }").unwrap(), OperationKind::Regular);
/// assert_eq!(
///     classify_query("{ __schema { types { name } } }").unwrap(),
///     OperationKind::Introspection
/// );
/// assert!(classify_query("{ user {").is_err());
/// ```
pub fn classify_query(query: &str) -> Result<OperationKind, DocsError> {
	let document = parse_query(query)?;
	Ok(classify_document(&document))
}

/// Shorthand for `classify_query(query)?.is_introspection()`.
pub fn is_introspection_query(query: &str) -> Result<bool, DocsError> {
	classify_query(query).map(OperationKind::is_introspection)
}

pub fn classify_document(document: &ExecutableDocument) -> OperationKind {
	let introspective = document.operations.iter().any(|(_, operation)| {
		operation
			.node
			.selection_set
			.node
			.items
			.iter()
			.any(|selection| match &selection.node {
				Selection::Field(field) => field.node.name.node.as_str().starts_with("__"),
				Selection::FragmentSpread(_) | Selection::InlineFragment(_) => false,
			})
	});

	if introspective {
		OperationKind::Introspection
	} else {
		OperationKind::Regular
	}
}
