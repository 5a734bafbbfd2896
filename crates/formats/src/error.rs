use std::path::PathBuf;

use thiserror::Error;

/// Error type returned by plugin hooks.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// A plugin failed to register its format.
#[derive(Debug, Error)]
pub enum RegistrationError {
	/// The plugin declared no names.
	#[error("result format registered without a name")]
	MissingNames,

	/// The plugin declared names but no label.
	#[error("result format {name:?} registered without a label")]
	MissingLabel { name: String },

	/// The plugin's own registration function failed.
	#[error("plugin {plugin:?} failed to register: {message}")]
	Plugin { plugin: String, message: String },
}

/// Formatter operation that a format may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Read,
	Write,
}

impl std::fmt::Display for Operation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Read => f.write_str("reading"),
			Self::Write => f.write_str("writing"),
		}
	}
}

/// Errors from format resolution and formatter dispatch.
#[derive(Debug, Error)]
pub enum FormatError {
	/// No registered format matched the request.
	#[error("no result format matches {0}")]
	NotFound(String),

	/// Content sniffing produced no candidate with a non-negative score.
	#[error("could not guess a result format from the available evidence")]
	NoGuess,

	/// The format lacks the hook for this operation.
	#[error("result format {format:?} does not support {operation}")]
	UnsupportedOperation { format: String, operation: Operation },

	/// The formatter context could not be allocated, or the init hook failed.
	#[error("result format {format:?} failed to initialise: {source}")]
	Init {
		format: String,
		#[source]
		source: HookError,
	},

	/// The format's writer failed.
	#[error("result format {format:?} failed to write results: {source}")]
	Write {
		format: String,
		#[source]
		source: HookError,
	},

	/// The format's reader failed.
	#[error("result format {format:?} failed to read results: {source}")]
	Read {
		format: String,
		#[source]
		source: HookError,
	},
}

/// Errors loading format configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configuration is not valid TOML for [`crate::FormatsConfig`].
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}
