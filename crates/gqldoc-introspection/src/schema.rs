//! Typed view of the GraphQL introspection result.
//!
//! Only the parts the annotator touches are modelled (`types`, `name`,
//! `description`, `fields`, `inputFields`). Every other key is kept in an
//! `extra` map so a decoded schema serializes back without losing data.
//!
//! `description`, `fields` and `inputFields` remember whether the key was
//! absent or explicitly `null`, so a node only gains a `description` key
//! when one is set on it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserializes a present key (including `null`) as `Some`.
///
/// Combined with `#[serde(default)]`, an absent key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

/// The `data` object of an introspection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionSchema {
	#[serde(rename = "__schema")]
	pub schema: SchemaNode,
	/// Sibling selections such as `__typename`.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl IntrospectionSchema {
	pub fn new(types: Vec<TypeNode>) -> Self {
		Self {
			schema: SchemaNode {
				types,
				extra: Map::new(),
			},
			extra: Map::new(),
		}
	}

	pub fn types(&self) -> &[TypeNode] {
		&self.schema.types
	}

	pub fn types_mut(&mut self) -> &mut [TypeNode] {
		&mut self.schema.types
	}

	/// Linear scan by name.
	pub fn find_type(&self, name: &str) -> Option<&TypeNode> {
		self.schema.types.iter().find(|t| t.name == name)
	}

	pub fn find_type_mut(&mut self, name: &str) -> Option<&mut TypeNode> {
		self.schema.types.iter_mut().find(|t| t.name == name)
	}
}

/// The `__schema` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
	pub types: Vec<TypeNode>,
	/// `queryType`, `mutationType`, `directives`, ...
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// `__TypeKind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
	Scalar,
	Object,
	Interface,
	Union,
	Enum,
	InputObject,
	List,
	NonNull,
}

impl TypeKind {
	/// Whether types of this kind carry a `fields` list.
	pub fn has_fields(self) -> bool {
		matches!(self, Self::Object | Self::Interface)
	}

	/// Whether types of this kind carry an `inputFields` list.
	pub fn has_input_fields(self) -> bool {
		matches!(self, Self::InputObject)
	}
}

/// One entry of `__schema.types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeNode {
	pub name: String,
	#[serde(
		default,
		deserialize_with = "present",
		skip_serializing_if = "Option::is_none"
	)]
	description: Option<Option<String>>,
	#[serde(
		default,
		deserialize_with = "present",
		skip_serializing_if = "Option::is_none"
	)]
	fields: Option<Option<Vec<FieldNode>>>,
	#[serde(
		rename = "inputFields",
		default,
		deserialize_with = "present",
		skip_serializing_if = "Option::is_none"
	)]
	input_fields: Option<Option<Vec<FieldNode>>>,
	/// `kind`, `interfaces`, `enumValues`, `possibleTypes`, ...
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl TypeNode {
	/// A type with a `null` description and no field lists.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: Some(None),
			fields: None,
			input_fields: None,
			extra: Map::new(),
		}
	}

	pub fn with_kind(mut self, kind: TypeKind) -> Self {
		if let Ok(value) = serde_json::to_value(kind) {
			self.extra.insert("kind".to_string(), value);
		}
		self
	}

	pub fn with_fields(mut self, fields: Vec<FieldNode>) -> Self {
		self.fields = Some(Some(fields));
		self
	}

	pub fn with_input_fields(mut self, input_fields: Vec<FieldNode>) -> Self {
		self.input_fields = Some(Some(input_fields));
		self
	}

	/// The `kind` of this type, when present and recognised.
	pub fn kind(&self) -> Option<TypeKind> {
		self.extra
			.get("kind")
			.and_then(|v| TypeKind::deserialize(v).ok())
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_ref().and_then(|d| d.as_deref())
	}

	pub fn set_description(&mut self, description: impl Into<String>) {
		self.description = Some(Some(description.into()));
	}

	pub fn fields(&self) -> Option<&[FieldNode]> {
		self.fields.as_ref().and_then(|f| f.as_deref())
	}

	pub fn input_fields(&self) -> Option<&[FieldNode]> {
		self.input_fields.as_ref().and_then(|f| f.as_deref())
	}

	pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldNode> {
		self.fields
			.as_mut()
			.and_then(|f| f.as_mut())
			.and_then(|fields| fields.iter_mut().find(|f| f.name == name))
	}

	pub fn input_field_mut(&mut self, name: &str) -> Option<&mut FieldNode> {
		self.input_fields
			.as_mut()
			.and_then(|f| f.as_mut())
			.and_then(|fields| fields.iter_mut().find(|f| f.name == name))
	}
}

/// An entry of `fields` or `inputFields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldNode {
	pub name: String,
	#[serde(
		default,
		deserialize_with = "present",
		skip_serializing_if = "Option::is_none"
	)]
	description: Option<Option<String>>,
	/// `args`, `type`, `isDeprecated`, `defaultValue`, ...
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl FieldNode {
	/// A field with a `null` description.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: Some(None),
			extra: Map::new(),
		}
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_ref().and_then(|d| d.as_deref())
	}

	pub fn set_description(&mut self, description: impl Into<String>) {
		self.description = Some(Some(description.into()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_round_trip_keeps_unmodelled_keys() {
		let input = json!({
			"__schema": {
				"queryType": { "name": "Query" },
				"types": [{
					"kind": "OBJECT",
					"name": "User",
					"description": null,
					"interfaces": [],
					"fields": [{
						"name": "balance",
						"description": null,
						"args": [],
						"type": { "kind": "SCALAR", "name": "BigInt", "ofType": null },
						"isDeprecated": false
					}],
					"inputFields": null
				}]
			},
			"__typename": "Query"
		});

		let schema: IntrospectionSchema = serde_json::from_value(input.clone()).unwrap();
		let output = serde_json::to_value(&schema).unwrap();

		assert_eq!(output, input);
	}

	#[rstest]
	fn test_absent_description_stays_absent() {
		let input = json!({ "__schema": { "types": [{ "name": "Int" }] } });

		let schema: IntrospectionSchema = serde_json::from_value(input.clone()).unwrap();
		assert!(schema.types()[0].description().is_none());
		assert_eq!(serde_json::to_value(&schema).unwrap(), input);
	}

	#[rstest]
	#[case(json!("OBJECT"), Some(TypeKind::Object))]
	#[case(json!("INPUT_OBJECT"), Some(TypeKind::InputObject))]
	#[case(json!("NON_NULL"), Some(TypeKind::NonNull))]
	#[case(json!("SOMETHING_ELSE"), None)]
	fn test_kind(#[case] raw: Value, #[case] expected: Option<TypeKind>) {
		let node: TypeNode = serde_json::from_value(json!({ "name": "T", "kind": raw })).unwrap();
		assert_eq!(node.kind(), expected);
	}

	#[rstest]
	fn test_type_kind_member_lists() {
		assert!(TypeKind::Object.has_fields());
		assert!(TypeKind::Interface.has_fields());
		assert!(!TypeKind::Scalar.has_fields());
		assert!(TypeKind::InputObject.has_input_fields());
		assert!(!TypeKind::Enum.has_input_fields());
	}

	#[rstest]
	fn test_field_lookup() {
		let mut node = TypeNode::new("UserFilter")
			.with_kind(TypeKind::InputObject)
			.with_input_fields(vec![FieldNode::new("id"), FieldNode::new("id_in")]);

		assert!(node.field_mut("id").is_none());
		assert!(node.input_field_mut("id_in").is_some());
		assert_eq!(node.kind(), Some(TypeKind::InputObject));
	}

	#[rstest]
	fn test_missing_name_is_rejected() {
		let result = serde_json::from_value::<TypeNode>(json!({ "description": "no name" }));
		assert!(result.is_err());
	}
}
