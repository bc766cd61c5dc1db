//! Documentation middleware, diagnostics and settings.
//!
//! # Examples
//!
//! ```rust
//! use gqldoc::middleware::{DocsSettings, OperationKind, classify_query};
//!
//! assert_eq!(classify_query("{ __type(name: \"User\") { name } }").unwrap(), OperationKind::Introspection);
//!
//! let settings = DocsSettings::from_toml_str("[docs]\nUser = \"A user\"").unwrap();
//! assert_eq!(settings.build().docs().len(), 1);
//! ```

pub use gqldoc_middleware::*;
