//! Ready-made documentation for common schema patterns.
//!
//! These helpers build [`DocMap`]s for standard scalars, cursor pagination,
//! list query arguments and filter input fields. Compose them with
//! [`DocMap::merge`]; later maps win.
//!
//! ```
//! use gqldoc_introspection::DocMap;
//! use gqldoc_introspection::definitions::{extend_with_base_definitions, filter_docs, page_docs};
//!
//! let mut user = DocMap::from([
//!     ("tokenPaid", "Represents a token that was paid by a user"),
//!     ("tokenPaid.amount", "Number of tokens that were paid"),
//! ]);
//! user.merge(filter_docs("amount", "Filter by token amount"));
//! user.merge(page_docs("tokenPaid", "token payment"));
//!
//! let docs = extend_with_base_definitions(user);
//! assert_eq!(docs.get("amount_gt"), Some("Filter by token amount (greater than)"));
//! assert_eq!(docs.get("tokenPaidPage"), Some("Paginated list of token payment records"));
//! assert!(docs.contains_key("PageInfo.hasNextPage"));
//! ```

use crate::DocMap;

pub const PAGE_INFO: &str = "Information about pagination in a connection";
pub const TOTAL_COUNT: &str = "Total number of records matching the query";

/// Suffixes generated by [`filter_docs`], with the text appended to the
/// base description.
const FILTER_SUFFIXES: [(&str, &str); 13] = [
	("not", "exclude match"),
	("in", "match any in list"),
	("not_in", "match none in list"),
	("gt", "greater than"),
	("gte", "greater than or equal"),
	("lt", "less than"),
	("lte", "less than or equal"),
	("contains", "contains substring"),
	("not_contains", "does not contain substring"),
	("starts_with", "starts with"),
	("ends_with", "ends with"),
	("not_starts_with", "does not start with"),
	("not_ends_with", "does not end with"),
];

/// Descriptions of the built-in and commonly added scalars.
pub fn scalars() -> DocMap {
	DocMap::from([
		(
			"JSON",
			"The `JSON` scalar type represents JSON values as specified by ECMA-404",
		),
		(
			"BigInt",
			"Arbitrary precision integer, useful for representing large numbers",
		),
		("Boolean", "True or false value"),
		("String", "UTF-8 character sequence used for text data"),
		("Int", "32-bit integer between -(2^31) and 2^31 - 1"),
	])
}

/// `PageInfo` and its fields, plus the common envelope fields.
pub fn pagination() -> DocMap {
	DocMap::from([
		("PageInfo", PAGE_INFO),
		(
			"PageInfo.hasNextPage",
			"Whether there are more records after the current page",
		),
		(
			"PageInfo.hasPreviousPage",
			"Whether there are more records before the current page",
		),
		(
			"PageInfo.startCursor",
			"Cursor pointing to the first record in the current page",
		),
		(
			"PageInfo.endCursor",
			"Cursor pointing to the last record in the current page",
		),
		("totalCount", TOTAL_COUNT),
		("items", "List of items in the current page"),
	])
}

/// Arguments accepted by list queries.
pub fn query_args() -> DocMap {
	DocMap::from([
		("where", "Filter conditions to apply"),
		("orderBy", "Field to order results by"),
		("orderDirection", "Direction to order results (asc/desc)"),
		("before", "Fetch records before this cursor"),
		("after", "Fetch records after this cursor"),
		("limit", "Maximum number of records to return"),
	])
}

/// Logical combinators and comparison operators of filter inputs.
pub fn filter_operators() -> DocMap {
	DocMap::from([
		("AND", "Combine multiple conditions with AND"),
		("OR", "Combine multiple conditions with OR"),
		("equals", "Exact match"),
		("not", "Negates the condition"),
		("in", "Match any value in the provided list"),
		("not_in", "Match none of the values in the provided list"),
		("gt", "Greater than"),
		("gte", "Greater than or equal"),
		("lt", "Less than"),
		("lte", "Less than or equal"),
		("contains", "String contains the value"),
		("not_contains", "String does not contain the value"),
		("starts_with", "String starts with the value"),
		("ends_with", "String ends with the value"),
		("not_starts_with", "String does not start with the value"),
		("not_ends_with", "String does not end with the value"),
	])
}

/// Docs for a filterable field and all of its operator variants.
///
/// Produces `field` itself plus `field_not`, `field_in`, `field_gt`, ...
/// With an empty `field`, the bare operator names are used as keys.
///
/// # Examples
///
/// ```
/// use gqldoc_introspection::definitions::filter_docs;
///
/// let docs = filter_docs("address", "Filter by address");
/// assert_eq!(docs.get("address"), Some("Filter by address (exact match)"));
/// assert_eq!(docs.get("address_not_in"), Some("Filter by address (match none in list)"));
/// ```
pub fn filter_docs(field: &str, base_description: &str) -> DocMap {
	let prefix = if field.is_empty() {
		String::new()
	} else {
		format!("{}_", field)
	};

	let mut docs = DocMap::from([(
		field.to_string(),
		format!("{} (exact match)", base_description),
	)]);
	docs.extend(FILTER_SUFFIXES.iter().map(|(suffix, text)| {
		(
			format!("{}{}", prefix, suffix),
			format!("{} ({})", base_description, text),
		)
	}));
	docs
}

/// Docs for the `{type_name}Page` wrapper of a paginated list.
///
/// An empty `description` falls back to `type_name`.
pub fn page_docs(type_name: &str, description: &str) -> DocMap {
	let subject = or_default(description, type_name);
	let page = format!("{}Page", type_name);

	DocMap::from([
		(page.clone(), format!("Paginated list of {} records", subject)),
		(format!("{}.items", page), format!("List of {} records", subject)),
		(format!("{}.pageInfo", page), PAGE_INFO.to_string()),
		(format!("{}.totalCount", page), TOTAL_COUNT.to_string()),
	])
}

/// Docs for the single-record query `{type_name}` and the list query
/// `{type_name}s` with its arguments.
///
/// An empty `description` falls back to `"{type_name} record"`.
pub fn query_docs(type_name: &str, description: &str) -> DocMap {
	let subject = if description.is_empty() {
		format!("{} record", type_name)
	} else {
		description.to_string()
	};
	let plural = format!("{}s", type_name);

	DocMap::from([
		(
			type_name.to_string(),
			format!("Get a single {} by address", subject),
		),
		(
			plural.clone(),
			format!(
				"Get a list of {}s with optional filtering and pagination",
				subject
			),
		),
		(
			format!("{}.where", plural),
			format!("Filter conditions for {}s", subject),
		),
		(
			format!("{}.orderBy", plural),
			format!("Field to order {}s by", subject),
		),
		(
			format!("{}.orderDirection", plural),
			format!("Direction to order {}s (asc/desc)", subject),
		),
		(
			format!("{}.before", plural),
			"Fetch records before this cursor".to_string(),
		),
		(
			format!("{}.after", plural),
			"Fetch records after this cursor".to_string(),
		),
		(
			format!("{}.limit", plural),
			"Maximum number of records to return".to_string(),
		),
	])
}

/// Everything generated for one entity type.
///
/// Merged in order: the type itself, `fields`, [`filter_docs`] for every key
/// of `fields`, [`page_docs`], [`query_docs`]. Since later entries win, the
/// single-record query text replaces the bare type entry and each field key
/// ends up with its "exact match" filter text.
///
/// Filter docs are merged in ascending field-name order, so when one field's
/// operator key equals another field's name (`a_in` next to `a`), the longer
/// name's own entry wins.
pub fn type_doc_set(type_name: &str, description: &str, fields: &DocMap) -> DocMap {
	let mut docs = DocMap::from([(type_name, description)]);
	docs.merge(fields.clone());

	let mut sorted: Vec<(&str, &str)> = fields.iter().collect();
	sorted.sort_unstable_by_key(|(field, _)| *field);
	for (field, field_description) in sorted {
		docs.merge(filter_docs(field, field_description));
	}
	docs.merge(page_docs(type_name, description));
	docs.merge(query_docs(type_name, description));
	docs
}

/// Standard scalars and pagination docs, overridden by `user_docs`.
pub fn extend_with_base_definitions(user_docs: DocMap) -> DocMap {
	scalars().merged(pagination()).merged(user_docs)
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
	if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("JSON")]
	#[case("BigInt")]
	#[case("Boolean")]
	#[case("String")]
	#[case("Int")]
	fn test_scalars_present(#[case] key: &str) {
		assert!(scalars().contains_key(key));
	}

	#[rstest]
	fn test_pagination_keys() {
		let docs = pagination();
		for key in [
			"PageInfo",
			"PageInfo.hasNextPage",
			"PageInfo.hasPreviousPage",
			"PageInfo.startCursor",
			"PageInfo.endCursor",
		] {
			assert!(docs.contains_key(key), "missing {}", key);
		}
	}

	#[rstest]
	fn test_query_args_and_operators() {
		let args = query_args();
		for key in ["where", "orderBy", "orderDirection", "before", "after", "limit"] {
			assert!(args.contains_key(key), "missing {}", key);
		}

		let operators = filter_operators();
		for key in ["AND", "OR", "equals", "not", "contains", "starts_with"] {
			assert!(operators.contains_key(key), "missing {}", key);
		}
		assert_eq!(operators.len(), 16);
	}

	#[rstest]
	fn test_filter_docs() {
		let docs = filter_docs("address", "Filter by address");

		assert_eq!(docs.len(), 14);
		assert_eq!(docs.get("address"), Some("Filter by address (exact match)"));
		assert_eq!(docs.get("address_not"), Some("Filter by address (exclude match)"));
		assert_eq!(docs.get("address_in"), Some("Filter by address (match any in list)"));
		assert_eq!(
			docs.get("address_contains"),
			Some("Filter by address (contains substring)")
		);
	}

	#[rstest]
	fn test_filter_docs_empty_description() {
		let docs = filter_docs("address", "");
		assert_eq!(docs.get("address"), Some(" (exact match)"));
	}

	#[rstest]
	fn test_filter_docs_empty_field() {
		let docs = filter_docs("", "Amount");

		assert_eq!(docs.get(""), Some("Amount (exact match)"));
		assert_eq!(docs.get("gt"), Some("Amount (greater than)"));
		assert!(!docs.contains_key("_gt"));
	}

	#[rstest]
	fn test_page_docs() {
		let docs = page_docs("User", "user");

		assert_eq!(docs.get("UserPage"), Some("Paginated list of user records"));
		assert_eq!(docs.get("UserPage.items"), Some("List of user records"));
		assert_eq!(docs.get("UserPage.pageInfo"), Some(PAGE_INFO));
		assert_eq!(docs.get("UserPage.totalCount"), Some(TOTAL_COUNT));
	}

	#[rstest]
	fn test_page_docs_without_description() {
		let docs = page_docs("User", "");
		assert_eq!(docs.get("UserPage"), Some("Paginated list of User records"));
	}

	#[rstest]
	fn test_query_docs() {
		let docs = query_docs("User", "user");

		assert_eq!(docs.get("User"), Some("Get a single user by address"));
		assert_eq!(
			docs.get("Users"),
			Some("Get a list of users with optional filtering and pagination")
		);
		assert_eq!(docs.get("Users.where"), Some("Filter conditions for users"));
		assert_eq!(docs.get("Users.orderBy"), Some("Field to order users by"));
	}

	#[rstest]
	fn test_query_docs_without_description() {
		let docs = query_docs("User", "");
		assert_eq!(docs.get("User"), Some("Get a single User record by address"));
	}

	#[rstest]
	fn test_type_doc_set() {
		let fields = DocMap::from([("User.balance", "User balance"), ("User.type", "User type")]);
		let docs = type_doc_set("User", "system user", &fields);

		assert_eq!(docs.get("User"), Some("Get a single system user by address"));
		assert_eq!(
			docs.get("Users"),
			Some("Get a list of system users with optional filtering and pagination")
		);
		assert_eq!(docs.get("User.balance"), Some("User balance (exact match)"));
		assert_eq!(docs.get("User.type"), Some("User type (exact match)"));
		assert_eq!(docs.get("User.balance_gt"), Some("User balance (greater than)"));
		assert_eq!(docs.get("UserPage"), Some("Paginated list of system user records"));
		assert_eq!(docs.get("UserPage.items"), Some("List of system user records"));
	}

	#[rstest]
	fn test_type_doc_set_without_fields() {
		let docs = type_doc_set("User", "system user", &DocMap::new());

		assert_eq!(docs.get("User"), Some("Get a single system user by address"));
		assert!(docs.len() > 3);
	}

	#[rstest]
	fn test_type_doc_set_colliding_filter_keys() {
		let fields = DocMap::from([("T.a", "Field a"), ("T.a_in", "Field a_in")]);

		for _ in 0..16 {
			let docs = type_doc_set("T", "thing", &fields);
			assert_eq!(docs.get("T.a_in"), Some("Field a_in (exact match)"));
			assert_eq!(docs.get("T.a"), Some("Field a (exact match)"));
		}
	}

	#[rstest]
	fn test_extend_with_base_definitions() {
		let docs = extend_with_base_definitions(DocMap::from([
			("User", "A custom user type"),
			("User.balance", "User balance field"),
		]));

		assert_eq!(docs.get("JSON"), scalars().get("JSON"));
		assert_eq!(docs.get("PageInfo"), Some(PAGE_INFO));
		assert_eq!(docs.get("User"), Some("A custom user type"));
		assert_eq!(docs.get("User.balance"), Some("User balance field"));
	}

	#[rstest]
	fn test_extend_with_base_definitions_user_overrides() {
		let docs = extend_with_base_definitions(DocMap::from([
			("String", "Custom string description"),
			("PageInfo", "Custom page info description"),
		]));

		assert_eq!(docs.get("String"), Some("Custom string description"));
		assert_eq!(docs.get("PageInfo"), Some("Custom page info description"));
	}

	#[rstest]
	fn test_extend_with_base_definitions_empty() {
		let docs = extend_with_base_definitions(DocMap::new());

		assert!(docs.contains_key("JSON"));
		assert!(docs.contains_key("PageInfo"));
		assert_eq!(docs.len(), scalars().len() + pagination().len());
	}
}
