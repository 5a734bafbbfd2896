//! Format factories and the hooks plugins implement.

use std::borrow::Cow;
use std::collections::TryReserveError;
use std::io;

use tessera_xsd::XsdTable;
use url::Url;

use crate::description::{FormatDescription, MimeTypeQ};
use crate::error::{HookError, RegistrationError};
use crate::flags::FormatFlags;
use crate::results::{ResultSet, RowSource, Variables};
use crate::sniff::SniffProbe;

/// Content recognition hook: returns an affinity score for a probe.
///
/// Scores are added to the MIME type quality (or to `-1` without one) and
/// the total is capped at 10.
pub type Sniffer = Box<dyn Fn(&SniffProbe<'_>) -> i32 + Send + Sync>;

/// Serializes a result set.
pub trait ResultsWriter: Send + Sync {
	/// Writes every remaining row of `results` to `sink`.
	fn write(
		&self,
		context: &mut FormatterContext,
		sink: &mut dyn io::Write,
		results: &mut dyn ResultSet,
		base_uri: Option<&Url>,
	) -> Result<(), HookError>;
}

/// Parses serialized results into rows.
pub trait ResultsReader: Send + Sync {
	/// Creates a row producer over `source`, binding rows to `variables`.
	///
	/// The reader may declare further variables it discovers; callers copy
	/// rows in the order they are produced.
	fn rowsource<'a>(
		&self,
		context: &mut FormatterContext,
		xsd: &XsdTable,
		variables: &Variables,
		source: &'a mut dyn io::Read,
		base_uri: &Url,
	) -> Result<Box<dyn RowSource + 'a>, HookError>;
}

/// Per-formatter lifecycle hooks.
pub trait FormatterHooks: Send + Sync {
	/// Called once after the context is allocated.
	///
	/// `name` is the name the caller asked for, which lets a plugin that
	/// serves several aliases behave differently per alias.
	fn init(&self, context: &mut FormatterContext, name: Option<&str>) -> Result<(), HookError> {
		let _ = (context, name);
		Ok(())
	}

	/// Called once when the formatter is dropped, including after a failed init.
	fn finish(&self, context: &mut FormatterContext) {
		let _ = context;
	}
}

/// Private state a formatter owns on behalf of its format.
///
/// Sized by the factory's declared context length and zero-filled.
#[derive(Debug, Default)]
pub struct FormatterContext {
	data: Option<Box<[u8]>>,
}

impl FormatterContext {
	pub(crate) fn allocate(size: usize) -> Result<Self, TryReserveError> {
		if size == 0 {
			return Ok(Self::default());
		}

		let mut data = Vec::new();
		data.try_reserve_exact(size)?;
		data.resize(size, 0);
		Ok(Self {
			data: Some(data.into_boxed_slice()),
		})
	}

	/// Whether the format requested any context.
	pub fn is_allocated(&self) -> bool {
		self.data.is_some()
	}

	pub fn data(&self) -> &[u8] {
		self.data.as_deref().unwrap_or_default()
	}

	pub fn data_mut(&mut self) -> &mut [u8] {
		self.data.as_deref_mut().unwrap_or_default()
	}
}

/// A registered result format: its description plus the hooks it installed.
pub struct FormatFactory {
	description: FormatDescription,
	sniffer: Option<Sniffer>,
	reader: Option<Box<dyn ResultsReader>>,
	writer: Option<Box<dyn ResultsWriter>>,
	hooks: Option<Box<dyn FormatterHooks>>,
	context_length: usize,
}

impl FormatFactory {
	pub fn description(&self) -> &FormatDescription {
		&self.description
	}

	/// Canonical name.
	pub fn name(&self) -> &str {
		self.description.name()
	}

	pub fn flags(&self) -> FormatFlags {
		self.description.flags
	}

	pub fn context_length(&self) -> usize {
		self.context_length
	}

	pub fn sniffer(&self) -> Option<&(dyn Fn(&SniffProbe<'_>) -> i32 + Send + Sync)> {
		self.sniffer.as_deref()
	}

	pub fn reader(&self) -> Option<&dyn ResultsReader> {
		self.reader.as_deref()
	}

	pub fn writer(&self) -> Option<&dyn ResultsWriter> {
		self.writer.as_deref()
	}

	pub fn hooks(&self) -> Option<&dyn FormatterHooks> {
		self.hooks.as_deref()
	}
}

impl std::fmt::Debug for FormatFactory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormatFactory")
			.field("description", &self.description)
			.field("sniffer", &self.sniffer.is_some())
			.field("hooks", &self.hooks.is_some())
			.field("context_length", &self.context_length)
			.finish()
	}
}

/// Mutable factory handed to a plugin's registration function.
///
/// A plugin must set at least one name and a label. Capability flags are
/// derived from the reader/writer hooks when the factory is built.
#[derive(Default)]
pub struct FormatFactoryBuilder {
	names: Vec<Cow<'static, str>>,
	label: Option<Cow<'static, str>>,
	mime_types: Vec<MimeTypeQ>,
	uris: Vec<Cow<'static, str>>,
	sniffer: Option<Sniffer>,
	reader: Option<Box<dyn ResultsReader>>,
	writer: Option<Box<dyn ResultsWriter>>,
	hooks: Option<Box<dyn FormatterHooks>>,
	context_length: usize,
}

impl FormatFactoryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a name. The first name added is canonical.
	pub fn name(&mut self, name: impl Into<Cow<'static, str>>) -> &mut Self {
		self.names.push(name.into());
		self
	}

	pub fn label(&mut self, label: impl Into<Cow<'static, str>>) -> &mut Self {
		self.label = Some(label.into());
		self
	}

	/// Declares a MIME type with quality `q` (0..=10).
	pub fn mime_type(&mut self, mime_type: impl Into<Cow<'static, str>>, q: u8) -> &mut Self {
		self.mime_types.push(MimeTypeQ::new(mime_type, q));
		self
	}

	/// Declares a syntax URI.
	pub fn uri(&mut self, uri: impl Into<Cow<'static, str>>) -> &mut Self {
		self.uris.push(uri.into());
		self
	}

	pub fn sniffer(
		&mut self,
		sniffer: impl Fn(&SniffProbe<'_>) -> i32 + Send + Sync + 'static,
	) -> &mut Self {
		self.sniffer = Some(Box::new(sniffer));
		self
	}

	pub fn reader(&mut self, reader: impl ResultsReader + 'static) -> &mut Self {
		self.reader = Some(Box::new(reader));
		self
	}

	pub fn writer(&mut self, writer: impl ResultsWriter + 'static) -> &mut Self {
		self.writer = Some(Box::new(writer));
		self
	}

	pub fn hooks(&mut self, hooks: impl FormatterHooks + 'static) -> &mut Self {
		self.hooks = Some(Box::new(hooks));
		self
	}

	/// Bytes of private context each formatter of this format receives.
	pub fn context_length(&mut self, length: usize) -> &mut Self {
		self.context_length = length;
		self
	}

	/// Validates required fields and computes capability flags.
	pub fn build(self) -> Result<FormatFactory, RegistrationError> {
		let Some(name) = self.names.first() else {
			return Err(RegistrationError::MissingNames);
		};
		let Some(label) = self.label else {
			return Err(RegistrationError::MissingLabel {
				name: name.to_string(),
			});
		};

		let mut flags = FormatFlags::empty();
		flags.set(FormatFlags::READER, self.reader.is_some());
		flags.set(FormatFlags::WRITER, self.writer.is_some());

		Ok(FormatFactory {
			description: FormatDescription {
				names: self.names,
				label,
				mime_types: self.mime_types,
				uris: self.uris,
				flags,
			},
			sniffer: self.sniffer,
			reader: self.reader,
			writer: self.writer,
			hooks: self.hooks,
			context_length: self.context_length,
		})
	}
}
