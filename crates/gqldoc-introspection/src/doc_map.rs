//! Documentation mapping keyed by `"Type"` or `"Type.field"`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map;

/// Table of documentation strings.
///
/// Keys are either a bare type name (`"User"`) or a type and field joined by
/// a dot (`"User.balance"`). Merging is last-write-wins.
///
/// # Examples
///
/// ```
/// use gqldoc_introspection::DocMap;
///
/// let base = DocMap::from([("String", "B"), ("Int", "32-bit integer")]);
/// let docs = base.merged(DocMap::from([("String", "A")]));
///
/// assert_eq!(docs.get("String"), Some("A"));
/// assert_eq!(docs.get("Int"), Some("32-bit integer"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocMap(HashMap<String, String>);

impl DocMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a single entry, returning the description it replaced.
	pub fn insert(&mut self, key: impl Into<String>, description: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), description.into())
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Merge `other` into `self`; entries in `other` override existing keys.
	pub fn merge(&mut self, other: DocMap) {
		self.0.extend(other.0);
	}

	/// Consuming form of [`DocMap::merge`].
	pub fn merged(mut self, other: DocMap) -> Self {
		self.merge(other);
		self
	}

	/// Parse a flat JSON object of strings.
	pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(input)
	}

	/// Parse a flat TOML table of strings.
	///
	/// Dotted keys must be quoted (`"User.balance" = "..."`), otherwise TOML
	/// reads them as nested tables.
	pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(input)
	}
}

impl<K, V> FromIterator<(K, V)> for DocMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

impl<K, V> Extend<(K, V)> for DocMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		self.0
			.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for DocMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

impl From<HashMap<String, String>> for DocMap {
	fn from(map: HashMap<String, String>) -> Self {
		Self(map)
	}
}

impl IntoIterator for DocMap {
	type Item = (String, String);
	type IntoIter = hash_map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// A documentation key split into its type and optional field part.
///
/// Only the first `.` separates the two, so a key such as `"A.b.c"` names
/// field `"b.c"` of type `"A"`. GraphQL field names cannot contain dots, so
/// such keys never match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocKey<'a> {
	pub type_name: &'a str,
	pub field_name: Option<&'a str>,
}

impl<'a> DocKey<'a> {
	/// # Examples
	///
	/// ```
	/// use gqldoc_introspection::DocKey;
	///
	/// let key = DocKey::parse("User.balance");
	/// assert_eq!(key.type_name, "User");
	/// assert_eq!(key.field_name, Some("balance"));
	///
	/// assert_eq!(DocKey::parse("User").field_name, None);
	/// ```
	pub fn parse(key: &'a str) -> Self {
		match key.split_once('.') {
			Some((type_name, field_name)) => Self {
				type_name,
				field_name: Some(field_name),
			},
			None => Self {
				type_name: key,
				field_name: None,
			},
		}
	}

	pub fn is_type_level(&self) -> bool {
		self.field_name.is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("User", "User", None)]
	#[case("User.balance", "User", Some("balance"))]
	#[case("User.a.b", "User", Some("a.b"))]
	#[case("User.", "User", Some(""))]
	#[case(".balance", "", Some("balance"))]
	fn test_doc_key_parse(
		#[case] key: &str,
		#[case] type_name: &str,
		#[case] field_name: Option<&str>,
	) {
		let parsed = DocKey::parse(key);
		assert_eq!(parsed.type_name, type_name);
		assert_eq!(parsed.field_name, field_name);
	}

	#[rstest]
	fn test_merge_later_entries_win() {
		let mut base = DocMap::from([("String", "B"), ("Int", "I")]);
		base.merge(DocMap::from([("String", "A")]));

		assert_eq!(base.get("String"), Some("A"));
		assert_eq!(base.get("Int"), Some("I"));
		assert_eq!(base.len(), 2);
	}

	#[rstest]
	fn test_extend_overrides() {
		let mut docs = DocMap::from([("User", "old")]);
		docs.extend([("User", "new"), ("Post", "A post")]);

		assert_eq!(docs.get("User"), Some("new"));
		assert_eq!(docs.get("Post"), Some("A post"));
	}

	#[rstest]
	fn test_from_json_str() {
		let docs = DocMap::from_json_str(r#"{"User": "A user", "User.id": "Identifier"}"#).unwrap();

		assert_eq!(docs.get("User"), Some("A user"));
		assert_eq!(docs.get("User.id"), Some("Identifier"));
	}

	#[rstest]
	fn test_from_json_str_rejects_non_string_values() {
		assert!(DocMap::from_json_str(r#"{"User": 1}"#).is_err());
	}

	#[rstest]
	fn test_from_toml_str_with_quoted_dotted_keys() {
		let docs = DocMap::from_toml_str(
			r#"
User = "A user"
"User.balance" = "User balance"
"#,
		)
		.unwrap();

		assert_eq!(docs.get("User"), Some("A user"));
		assert_eq!(docs.get("User.balance"), Some("User balance"));
	}

	#[rstest]
	fn test_serialize_as_flat_table() {
		let docs = DocMap::from([("User", "A user")]);
		let value = serde_json::to_value(&docs).unwrap();

		assert_eq!(value, serde_json::json!({"User": "A user"}));
	}
}
