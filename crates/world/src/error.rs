use tessera_formats::{ConfigError, FormatError, RegistrationError};
use tessera_xsd::XsdError;
use thiserror::Error;

/// Part of the [`crate::World`] with its own init/finish pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
	ResultFormats,
	Xsd,
}

impl std::fmt::Display for Subsystem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::ResultFormats => f.write_str("result format registry"),
			Self::Xsd => f.write_str("XSD datatype table"),
		}
	}
}

/// Errors from the process-wide context.
#[derive(Debug, Error)]
pub enum WorldError {
	/// A subsystem was used before its init call, or after its finish call.
	#[error("{0} is not initialised")]
	Uninitialized(Subsystem),

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Registration(#[from] RegistrationError),

	#[error(transparent)]
	Format(#[from] FormatError),

	#[error(transparent)]
	Xsd(#[from] XsdError),
}

/// Result type for world operations.
pub type Result<T> = std::result::Result<T, WorldError>;
