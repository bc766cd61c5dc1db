//! Diagnostic reporting integration tests
//!
//! Every middleware decision is reported to the injected sink when `debug`
//! is enabled, and nothing is reported otherwise.


use fixtures::*;
use gqldoc_http::Middleware;
use gqldoc_introspection::DocMap;
use gqldoc_middleware::{Diagnostic, DocsConfig, DocumentationMiddleware, MemorySink};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

struct Observed {
	middleware: DocumentationMiddleware,
	sink: MemorySink,
}

#[fixture]
fn observed(user_docs: DocMap) -> Observed {
	let sink = MemorySink::new();
	let middleware =
		DocumentationMiddleware::with_config(user_docs, DocsConfig::new().with_debug(true))
			.with_sink(Arc::new(sink.clone()));
	Observed { middleware, sink }
}

#[rstest]
#[tokio::test]
async fn test_unreadable_body_reported(observed: Observed) {
	observed
		.middleware
		.process(
			create_raw_request(GRAPHQL_PATH, "invalid json"),
			Arc::new(RecordingHandler::raw("")),
		)
		.await
		.unwrap();

	let records = observed.sink.get_records();
	assert_eq!(records.len(), 1);
	assert!(matches!(records[0], Diagnostic::RequestBodyUnreadable { .. }));
	assert!(
		records[0]
			.to_string()
			.starts_with("[GraphQL Docs]: Failed to parse request body")
	);
}

#[rstest]
#[tokio::test]
async fn test_missing_query_reported(observed: Observed) {
	observed
		.middleware
		.process(
			create_raw_request(GRAPHQL_PATH, "{}"),
			Arc::new(RecordingHandler::raw("")),
		)
		.await
		.unwrap();

	assert_eq!(observed.sink.get_records(), vec![Diagnostic::MissingQuery]);
}

#[rstest]
#[tokio::test]
async fn test_syntax_error_reported(observed: Observed) {
	let result = observed
		.middleware
		.process(
			create_graphql_request("{ user {"),
			Arc::new(RecordingHandler::raw("")),
		)
		.await;

	assert!(result.is_err());
	assert!(
		observed
			.sink
			.contains(|d| matches!(d, Diagnostic::QuerySyntax { .. }))
	);
}

#[rstest]
#[tokio::test]
async fn test_annotation_reported(observed: Observed, introspection_response: Value) {
	observed
		.middleware
		.process(
			create_graphql_request(INTROSPECTION_QUERY),
			Arc::new(RecordingHandler::json(introspection_response)),
		)
		.await
		.unwrap();

	assert_eq!(
		observed.sink.get_records(),
		vec![Diagnostic::Annotating { entries: 4 }]
	);
}

#[rstest]
#[tokio::test]
async fn test_missing_schema_reported(observed: Observed) {
	observed
		.middleware
		.process(
			create_graphql_request("{ __typename }"),
			Arc::new(RecordingHandler::json(json!({ "data": { "__typename": "Query" } }))),
		)
		.await
		.unwrap();

	assert_eq!(
		observed.sink.get_records(),
		vec![Diagnostic::SchemaShapeMissing]
	);
}

#[rstest]
#[tokio::test]
async fn test_post_processing_failure_reported(observed: Observed) {
	let result = observed
		.middleware
		.process(
			create_graphql_request(INTROSPECTION_QUERY),
			Arc::new(RecordingHandler::json(json!({ "data": { "__schema": { "types": null } } }))),
		)
		.await;

	assert!(result.is_err());
	let records = observed.sink.get_records();
	assert_eq!(records.len(), 2);
	assert!(matches!(records[0], Diagnostic::Annotating { .. }));
	assert!(matches!(records[1], Diagnostic::ProcessingFailed { .. }));
}

#[rstest]
#[tokio::test]
async fn test_downstream_failure_reported(observed: Observed) {
	let result = observed
		.middleware
		.process(
			create_graphql_request(INTROSPECTION_QUERY),
			Arc::new(RecordingHandler::failing("boom")),
		)
		.await;

	assert!(result.is_err());
	assert!(observed.sink.contains(|d| {
		matches!(d, Diagnostic::ProcessingFailed { reason } if reason.contains("boom"))
	}));
}

#[rstest]
#[case::unreadable("invalid json")]
#[case::missing_query("{}")]
#[case::regular(r#"{"query":"{ user { id } }"}"#)]
#[case::syntax(r#"{"query":"{ user {"}"#)]
#[case::introspection(r#"{"query":"{ __schema { types { name } } }"}"#)]
#[tokio::test]
async fn test_silent_without_debug(
	#[case] body: &'static str,
	user_docs: DocMap,
	introspection_response: Value,
) {
	let sink = MemorySink::new();
	let middleware = DocumentationMiddleware::new(user_docs).with_sink(Arc::new(sink.clone()));

	let _ = middleware
		.process(
			create_raw_request(GRAPHQL_PATH, body),
			Arc::new(RecordingHandler::json(introspection_response)),
		)
		.await;

	assert!(sink.get_records().is_empty());
}
