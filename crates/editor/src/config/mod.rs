//! Engine configuration.
//!
//! Loaded from TOML; every key is optional and unknown keys are rejected:
//!
//! ```toml
//! history_limit = 500
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::history::DEFAULT_HISTORY_LIMIT;


/// Tunables for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	/// Maximum number of entries kept on each history stack.
	pub history_limit: usize,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			history_limit: DEFAULT_HISTORY_LIMIT,
		}
	}
}

impl EditorConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::from_toml_str(&content)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.history_limit == 0 {
			return Err(ConfigError::InvalidValue {
				key: "history_limit",
				reason: "must be at least 1".into(),
			});
		}
		Ok(())
	}
}
