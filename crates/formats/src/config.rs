//! Result format settings, read from TOML.
//!
//! ```toml
//! sniff-window = 512
//! disabled = ["tsv"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::sniff::DEFAULT_SNIFF_WINDOW;

/// Settings applied when the format registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FormatsConfig {
	/// Bytes of content shown to sniffers.
	pub sniff_window: usize,
	/// Plugin names to skip at bootstrap.
	pub disabled: Vec<String>,
}

impl Default for FormatsConfig {
	fn default() -> Self {
		Self {
			sniff_window: DEFAULT_SNIFF_WINDOW,
			disabled: Vec::new(),
		}
	}
}

impl FormatsConfig {
	/// Parse a TOML string into a [`FormatsConfig`].
	pub fn parse(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Load settings from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	pub fn is_disabled(&self, plugin: &str) -> bool {
		self.disabled.iter().any(|name| name == plugin)
	}
}
