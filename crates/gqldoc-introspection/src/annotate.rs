use serde_json::Value;

use crate::doc_map::{DocKey, DocMap};
use crate::error::{IntrospectionError, IntrospectionResult};
use crate::schema::IntrospectionSchema;

/// Set descriptions on `schema` from `docs`, in place.
///
/// For every entry, the key is split at its first `.`:
///
/// - `"Type"` sets the description of the type named `Type`.
/// - `"Type.field"` sets the description of `field` in that type's `fields`
///   and, independently, in its `inputFields`. A type of any kind is checked
///   against whichever of the two lists it carries.
///
/// Entries naming a type or field that does not exist are skipped. No node is
/// added or removed; only descriptions change. Returns the same reference.
///
/// # Examples
///
/// ```
/// use gqldoc_introspection::{DocMap, FieldNode, IntrospectionSchema, TypeNode, annotate};
///
/// let mut schema = IntrospectionSchema::new(vec![
///     TypeNode::new("User").with_fields(vec![FieldNode::new("balance")]),
/// ]);
/// let docs = DocMap::from([("User.balance", "User balance"), ("Ghost", "ignored")]);
///
/// annotate(&mut schema, &docs);
///
/// let user = schema.find_type("User").unwrap();
/// assert_eq!(user.fields().unwrap()[0].description(), Some("User balance"));
/// assert_eq!(user.description(), None);
/// ```
pub fn annotate<'a>(schema: &'a mut IntrospectionSchema, docs: &DocMap) -> &'a mut IntrospectionSchema {
	for (key, description) in docs.iter() {
		let key = DocKey::parse(key);
		let Some(type_node) = schema.find_type_mut(key.type_name) else {
			continue;
		};

		match key.field_name {
			None => type_node.set_description(description),
			Some(field_name) => {
				if let Some(field) = type_node.field_mut(field_name) {
					field.set_description(description);
				}
				if let Some(input_field) = type_node.input_field_mut(field_name) {
					input_field.set_description(description);
				}
			}
		}
	}

	schema
}

/// Copying form of [`annotate`]; `schema` is left untouched.
pub fn annotated(schema: &IntrospectionSchema, docs: &DocMap) -> IntrospectionSchema {
	let mut copy = schema.clone();
	annotate(&mut copy, docs);
	copy
}

/// Annotate the `data` object of an introspection response in place.
///
/// `data` must hold `__schema.types` as a list. Only `description` keys are
/// written; every other key keeps its value and its position. Types without
/// a string `name` never match, and a `fields` or `inputFields` value that is
/// not a list is treated as absent.
///
/// # Errors
///
/// [`IntrospectionError::MalformedSchema`] when `__schema.types` is missing
/// or not a list. This is checked before any entry is applied, so `data` is
/// left unchanged on error.
pub fn annotate_value(data: &mut Value, docs: &DocMap) -> IntrospectionResult<()> {
	let types = data
		.get_mut("__schema")
		.and_then(|schema| schema.get_mut("types"))
		.and_then(Value::as_array_mut)
		.ok_or(IntrospectionError::MalformedSchema)?;

	tracing::trace!(
		types = types.len(),
		entries = docs.len(),
		"annotating introspection schema"
	);

	for (key, description) in docs.iter() {
		let key = DocKey::parse(key);
		let Some(type_node) = find_named(types, key.type_name) else {
			continue;
		};

		match key.field_name {
			None => set_description(type_node, description),
			Some(field_name) => {
				for list in ["fields", "inputFields"] {
					if let Some(field) = type_node
						.get_mut(list)
						.and_then(Value::as_array_mut)
						.and_then(|fields| find_named(fields, field_name))
					{
						set_description(field, description);
					}
				}
			}
		}
	}

	Ok(())
}

fn find_named<'a>(nodes: &'a mut [Value], name: &str) -> Option<&'a mut Value> {
	nodes
		.iter_mut()
		.find(|node| node.get("name").and_then(Value::as_str) == Some(name))
}

fn set_description(node: &mut Value, description: &str) {
	if let Some(object) = node.as_object_mut() {
		object.insert(
			"description".to_string(),
			Value::String(description.to_string()),
		);
	}
}
