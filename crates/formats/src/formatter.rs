//! Formatter instances bound to one registered format.

use std::io;

use tessera_xsd::XsdTable;
use url::Url;

use crate::error::{FormatError, Operation};
use crate::factory::{FormatFactory, FormatterContext};
use crate::registry::{FormatQuery, FormatRegistry};
use crate::results::ResultSet;
use crate::sniff::SniffEvidence;

/// A live instance of a result format.
///
/// Borrows its factory from the registry and owns the private context the
/// factory asked for. Dropping the formatter runs the format's finish hook.
#[derive(Debug)]
pub struct Formatter<'r> {
	factory: &'r FormatFactory,
	context: FormatterContext,
}

impl<'r> Formatter<'r> {
	/// Creates a formatter for the format matching `name`, `uri` or `mime_type`.
	///
	/// Without a name or URI the registry default is used; see
	/// [`FormatRegistry::lookup`]. The init hook receives
	/// `name` as requested. A context that cannot be allocated or a failing
	/// init hook both give [`FormatError::Init`]; after a failed init the
	/// finish hook still runs before the error is returned.
	pub fn create(
		registry: &'r FormatRegistry,
		name: Option<&str>,
		mime_type: Option<&str>,
		uri: Option<&Url>,
	) -> Result<Self, FormatError> {
		let query = FormatQuery {
			name,
			uri,
			mime_type,
			..FormatQuery::default()
		};
		let factory = registry
			.lookup(&query)
			.ok_or_else(|| FormatError::NotFound(query.to_string()))?;

		let context = FormatterContext::allocate(factory.context_length()).map_err(|err| FormatError::Init {
			format: factory.name().to_owned(),
			source: Box::new(err),
		})?;
		let mut formatter = Self { factory, context };

		if let Some(hooks) = factory.hooks() {
			hooks.init(&mut formatter.context, name).map_err(|source| {
				tracing::warn!(format = factory.name(), error = %source, "result formatter init failed");
				FormatError::Init {
					format: factory.name().to_owned(),
					source,
				}
			})?;
		}

		tracing::trace!(format = factory.name(), "result formatter created");
		Ok(formatter)
	}

	/// Guesses the format of some content and creates a formatter for it.
	pub fn create_for_content(registry: &'r FormatRegistry, evidence: &SniffEvidence<'_>) -> Result<Self, FormatError> {
		let name = registry.guess_format_name(evidence).ok_or(FormatError::NoGuess)?;
		Self::create(registry, Some(name), None, None)
	}

	pub fn factory(&self) -> &'r FormatFactory {
		self.factory
	}

	/// Canonical name of the format.
	pub fn name(&self) -> &'r str {
		self.factory.name()
	}

	pub fn context(&self) -> &FormatterContext {
		&self.context
	}

	pub fn context_mut(&mut self) -> &mut FormatterContext {
		&mut self.context
	}

	/// Serializes `results` to `sink`.
	///
	/// On success every row of `results` has been consumed; rows the writer
	/// left behind are discarded. Formats without a writer fail with
	/// [`FormatError::UnsupportedOperation`] and leave `results` untouched.
	pub fn write(
		&mut self,
		sink: &mut dyn io::Write,
		results: &mut dyn ResultSet,
		base_uri: Option<&Url>,
	) -> Result<(), FormatError> {
		let factory = self.factory;
		let writer = factory.writer().ok_or_else(|| FormatError::UnsupportedOperation {
			format: factory.name().to_owned(),
			operation: Operation::Write,
		})?;

		writer
			.write(&mut self.context, sink, results, base_uri)
			.map_err(|source| FormatError::Write {
				format: factory.name().to_owned(),
				source,
			})?;

		let mut leftover = 0usize;
		while results.next_row().is_some() {
			leftover += 1;
		}
		if leftover > 0 {
			tracing::debug!(format = factory.name(), leftover, "discarded rows left by writer");
		}
		Ok(())
	}

	/// Parses `source` and appends its rows to `results` in order.
	///
	/// Returns the number of rows appended. Rows already appended stay in
	/// `results` when the reader fails part way.
	pub fn read(
		&mut self,
		xsd: &XsdTable,
		source: &mut dyn io::Read,
		results: &mut dyn ResultSet,
		base_uri: &Url,
	) -> Result<usize, FormatError> {
		let factory = self.factory;
		let reader = factory.reader().ok_or_else(|| FormatError::UnsupportedOperation {
			format: factory.name().to_owned(),
			operation: Operation::Read,
		})?;
		let read_error = |source| FormatError::Read {
			format: factory.name().to_owned(),
			source,
		};

		let mut rows = reader
			.rowsource(&mut self.context, xsd, results.variables(), source, base_uri)
			.map_err(read_error)?;

		let mut count = 0;
		while let Some(row) = rows.read_row().map_err(read_error)? {
			results.add_row(row);
			count += 1;
		}

		tracing::debug!(format = factory.name(), rows = count, "read results");
		Ok(count)
	}

	/// Runs the finish hook and releases the context.
	pub fn destroy(self) {
		drop(self);
	}
}

impl Drop for Formatter<'_> {
	fn drop(&mut self) {
		if let Some(hooks) = self.factory.hooks() {
			hooks.finish(&mut self.context);
		}
	}
}
