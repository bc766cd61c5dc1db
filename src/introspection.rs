//! Introspection schema model and annotation.
//!
//! The documentation generators live in `gqldoc::definitions` behind the
//! `definitions` feature.

pub use gqldoc_introspection::{
	DocKey, DocMap, FieldNode, IntrospectionError, IntrospectionResult, IntrospectionSchema,
	SchemaNode, TypeKind, TypeNode, annotate, annotate_value, annotated,
};
