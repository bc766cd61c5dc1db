//! File-backed middleware settings.
//!
//! Settings files carry the [`DocsConfig`] keys at the top level and the
//! documentation mapping under a `docs` table:
//!
//! ```toml
//! debug = true
//! path = "/graphql"
//! include_base_definitions = true
//!
//! [docs]
//! User = "A user in the system"
//! "User.balance" = "User balance"
//! ```

use std::path::{Path, PathBuf};

use gqldoc_introspection::DocMap;
use gqldoc_introspection::definitions::extend_with_base_definitions;
use serde::{Deserialize, Serialize};

use crate::config::DocsConfig;
use crate::documentation::DocumentationMiddleware;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Unsupported settings format {0:?}; supported formats: .toml, .json")]
	UnsupportedFormat(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSettings {
	#[serde(flatten)]
	pub config: DocsConfig,
	/// Merge the standard scalar and pagination docs under `docs`.
	pub include_base_definitions: bool,
	pub docs: DocMap,
}

impl DocsSettings {
	pub fn from_toml_str(input: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(input)?)
	}

	pub fn from_json_str(input: &str) -> Result<Self, SettingsError> {
		Ok(serde_json::from_str(input)?)
	}

	/// Load settings from a `.toml` or `.json` file
	///
	/// # Examples
	///
	/// ```
	/// use gqldoc_middleware::DocsSettings;
	/// use std::io::Write;
	///
	/// let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
	/// writeln!(file, "debug = true\n[docs]\nUser = \"A user\"").unwrap();
	///
	/// let settings = DocsSettings::from_file(file.path()).unwrap();
	/// assert!(settings.config.debug);
	/// assert_eq!(settings.docs.get("User"), Some("A user"));
	/// ```
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.unwrap_or_default();

		let read = || {
			std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
				path: path.to_path_buf(),
				source,
			})
		};

		match extension {
			"toml" => Self::from_toml_str(&read()?),
			"json" => Self::from_json_str(&read()?),
			other => Err(SettingsError::UnsupportedFormat(other.to_string())),
		}
	}

	/// The mapping the middleware will be built with.
	pub fn resolved_docs(&self) -> DocMap {
		if self.include_base_definitions {
			extend_with_base_definitions(self.docs.clone())
		} else {
			self.docs.clone()
		}
	}

	pub fn build(&self) -> DocumentationMiddleware {
		DocumentationMiddleware::with_config(self.resolved_docs(), self.config.clone())
	}
}
