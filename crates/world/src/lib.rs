//! Process-wide context for result formats and XSD datatypes.
//!
//! A [`World`] owns the [`FormatRegistry`] and the [`XsdTable`]. Each has a
//! paired init/finish call; both calls are idempotent, and a subsystem used
//! outside its init/finish window reports [`WorldError::Uninitialized`].
//!
//! Formatters borrow the registry through the world, so the borrow checker
//! keeps `finish_result_formats` from running while any formatter is alive.

mod error;

use std::io;
use std::path::Path;

pub use error::{Result, Subsystem, WorldError};
use tessera_formats::{
	FormatFactoryBuilder, FormatRegistry, Formatter, FormatsConfig, RegistrationError, ResultSet, SniffEvidence,
};
use tessera_xsd::XsdTable;
use url::Url;

/// Owner of the format registry and the datatype table.
#[derive(Debug, Default)]
pub struct World {
	config: FormatsConfig,
	formats: Option<FormatRegistry>,
	xsd: Option<XsdTable>,
	registration_failures: Vec<RegistrationError>,
}

impl World {
	/// A world with default settings and nothing initialised.
	pub fn new() -> Self {
		Self::default()
	}

	/// A world with `config` and nothing initialised.
	pub fn with_config(config: FormatsConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// A world with `config` and every subsystem initialised.
	pub fn open(config: FormatsConfig) -> Result<Self> {
		let mut world = Self::with_config(config);
		world.xsd_init()?;
		world.init_result_formats();
		Ok(world)
	}

	/// Opens a world configured from a TOML string.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Self::open(FormatsConfig::parse(input)?)
	}

	/// Opens a world configured from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		Self::open(FormatsConfig::load(path)?)
	}

	pub fn config(&self) -> &FormatsConfig {
		&self.config
	}

	/// Builds the format registry from every submitted plugin.
	///
	/// Plugins named in the configuration's `disabled` list are skipped.
	/// Plugins that fail to register are logged and kept in
	/// [`World::registration_failures`]. Does nothing if already initialised.
	pub fn init_result_formats(&mut self) -> &FormatRegistry {
		if self.formats.is_none() {
			let mut registry = FormatRegistry::with_config(&self.config);
			self.registration_failures = registry.register_plugins(&self.config);
			tracing::debug!(
				formats = registry.len(),
				failures = self.registration_failures.len(),
				"result formats initialised"
			);
			self.formats = Some(registry);
		}
		self.formats.get_or_insert_with(FormatRegistry::new)
	}

	/// Drops the format registry. Does nothing if not initialised.
	pub fn finish_result_formats(&mut self) {
		if self.formats.take().is_some() {
			self.registration_failures.clear();
			tracing::debug!("result formats finished");
		}
	}

	/// Builds the datatype table. Does nothing if already initialised.
	pub fn xsd_init(&mut self) -> Result<&XsdTable> {
		if self.xsd.is_none() {
			self.xsd = Some(XsdTable::new()?);
			tracing::debug!("XSD datatypes initialised");
		}
		self.xsd()
	}

	/// Drops the datatype table. Does nothing if not initialised.
	pub fn xsd_finish(&mut self) {
		if self.xsd.take().is_some() {
			tracing::debug!("XSD datatypes finished");
		}
	}

	pub fn formats(&self) -> Result<&FormatRegistry> {
		self.formats
			.as_ref()
			.ok_or(WorldError::Uninitialized(Subsystem::ResultFormats))
	}

	pub fn formats_mut(&mut self) -> Result<&mut FormatRegistry> {
		self.formats
			.as_mut()
			.ok_or(WorldError::Uninitialized(Subsystem::ResultFormats))
	}

	pub fn xsd(&self) -> Result<&XsdTable> {
		self.xsd.as_ref().ok_or(WorldError::Uninitialized(Subsystem::Xsd))
	}

	/// Plugins rejected by the last [`World::init_result_formats`].
	pub fn registration_failures(&self) -> &[RegistrationError] {
		&self.registration_failures
	}

	/// Registers one more format after initialisation.
	pub fn register_format<F>(&mut self, register: F) -> Result<()>
	where
		F: FnOnce(&mut FormatFactoryBuilder) -> std::result::Result<(), RegistrationError>,
	{
		self.formats_mut()?.register(register)?;
		Ok(())
	}

	/// Guesses a result format name for some content.
	pub fn guess_result_format(&self, evidence: &SniffEvidence<'_>) -> Result<Option<&str>> {
		Ok(self.formats()?.guess_format_name(evidence))
	}

	/// Creates a formatter, see [`Formatter::create`].
	pub fn new_formatter(&self, name: Option<&str>, mime_type: Option<&str>, uri: Option<&Url>) -> Result<Formatter<'_>> {
		Ok(Formatter::create(self.formats()?, name, mime_type, uri)?)
	}

	/// Creates a formatter for content of unknown format.
	pub fn new_formatter_for_content(&self, evidence: &SniffEvidence<'_>) -> Result<Formatter<'_>> {
		Ok(Formatter::create_for_content(self.formats()?, evidence)?)
	}

	/// Parses `source` with `formatter`, appending rows to `results`.
	pub fn read_results(
		&self,
		formatter: &mut Formatter<'_>,
		source: &mut dyn io::Read,
		results: &mut dyn ResultSet,
		base_uri: &Url,
	) -> Result<usize> {
		Ok(formatter.read(self.xsd()?, source, results, base_uri)?)
	}
}
