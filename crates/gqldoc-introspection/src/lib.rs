//! # gqldoc-introspection
//!
//! Attaches documentation strings to a GraphQL introspection result.
//!
//! A [`DocMap`] maps `"TypeName"` or `"TypeName.fieldName"` keys to
//! descriptions. [`annotate`] walks the types of an [`IntrospectionSchema`]
//! and sets the `description` of every type, field or input field whose
//! name matches a key. Nodes are never added or removed.
//!
//! ```rust
//! use gqldoc_introspection::{DocMap, annotate_value};
//! use serde_json::json;
//!
//! let docs = DocMap::from([
//!     ("User", "A user in the system"),
//!     ("User.balance", "User balance"),
//! ]);
//!
//! let mut data = json!({
//!     "__schema": {
//!         "types": [{
//!             "name": "User",
//!             "description": null,
//!             "fields": [{ "name": "balance", "description": null }]
//!         }]
//!     }
//! });
//!
//! annotate_value(&mut data, &docs).unwrap();
//!
//! let user = &data["__schema"]["types"][0];
//! assert_eq!(user["description"], "A user in the system");
//! assert_eq!(user["fields"][0]["description"], "User balance");
//! ```

pub mod annotate;
pub mod definitions;
pub mod doc_map;
pub mod error;
pub mod schema;

pub use annotate::{annotate, annotate_value, annotated};
pub use doc_map::{DocKey, DocMap};
pub use error::{IntrospectionError, IntrospectionResult};
pub use schema::{FieldNode, IntrospectionSchema, SchemaNode, TypeKind, TypeNode};
