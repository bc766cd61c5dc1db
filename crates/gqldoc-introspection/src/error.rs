#[derive(Debug, thiserror::Error)]
pub enum IntrospectionError {
	/// `__schema.types` is missing or is not a list.
	#[error("Invalid introspection data structure: __schema.types must be a list")]
	MalformedSchema,
}

pub type IntrospectionResult<T> = Result<T, IntrospectionError>;
