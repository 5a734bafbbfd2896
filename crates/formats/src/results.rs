//! Row and result-set contracts used by readers and writers.
//!
//! Result storage lives outside this crate. Formats only see the
//! [`ResultSet`] and [`RowSource`] traits; [`RowBuffer`] is a small in-memory
//! implementation for callers that have no store of their own.

use std::collections::VecDeque;

use tessera_xsd::{LiteralType, XsdError, XsdTable};
use url::Url;

use crate::error::HookError;

/// A bound value in a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
	pub kind: LiteralType,
	pub lexical: String,
}

impl Term {
	pub fn new(kind: LiteralType, lexical: impl Into<String>) -> Self {
		Self {
			kind,
			lexical: lexical.into(),
		}
	}

	pub fn uri(uri: &Url) -> Self {
		Self::new(LiteralType::Uri, uri.as_str())
	}

	pub fn blank(id: impl Into<String>) -> Self {
		Self::new(LiteralType::Blank, id)
	}

	/// Plain literal without a datatype.
	pub fn plain(lexical: impl Into<String>) -> Self {
		Self::new(LiteralType::String, lexical)
	}

	/// Typed literal, validated against its datatype.
	///
	/// Datatype URIs outside the XSD table produce an `Unknown` term and are
	/// not checked.
	pub fn typed(table: &XsdTable, lexical: impl Into<String>, datatype: &Url) -> Result<Self, XsdError> {
		let kind = table.uri_to_type(datatype);
		let lexical = lexical.into();
		tessera_xsd::validate(kind, &lexical)?;
		Ok(Self { kind, lexical })
	}
}

/// One solution: a value (or nothing) per variable, in variable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
	values: Vec<Option<Term>>,
}

impl Row {
	pub fn new(values: Vec<Option<Term>>) -> Self {
		Self { values }
	}

	/// A row with every variable unbound.
	pub fn unbound(width: usize) -> Self {
		Self {
			values: vec![None; width],
		}
	}

	pub fn get(&self, idx: usize) -> Option<&Term> {
		self.values.get(idx).and_then(Option::as_ref)
	}

	pub fn set(&mut self, idx: usize, value: Option<Term>) {
		if idx >= self.values.len() {
			self.values.resize(idx + 1, None);
		}
		self.values[idx] = value;
	}

	pub fn values(&self) -> &[Option<Term>] {
		&self.values
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Ordered variable names of a result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
	names: Vec<String>,
}

impl Variables {
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			names: names.into_iter().map(Into::into).collect(),
		}
	}

	/// Appends a variable unless it is already declared; returns its index.
	pub fn add(&mut self, name: impl Into<String>) -> usize {
		let name = name.into();
		match self.index_of(&name) {
			Some(idx) => idx,
			None => {
				self.names.push(name);
				self.names.len() - 1
			}
		}
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|known| known == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

/// Result storage that formats read into and write out of.
pub trait ResultSet {
	/// Variable schema rows are bound against.
	fn variables(&self) -> &Variables;

	/// Appends a row at the end.
	fn add_row(&mut self, row: Row);

	/// Removes and returns the next unconsumed row.
	fn next_row(&mut self) -> Option<Row>;

	/// Whether every row has been consumed.
	fn is_finished(&self) -> bool;
}

/// Pull-based producer of rows, created by a reader for one input.
pub trait RowSource {
	/// Returns the next row, or `None` once the input is exhausted.
	fn read_row(&mut self) -> Result<Option<Row>, HookError>;
}

/// In-memory [`ResultSet`].
#[derive(Debug, Clone, Default)]
pub struct RowBuffer {
	variables: Variables,
	rows: VecDeque<Row>,
}

impl RowBuffer {
	pub fn new(variables: Variables) -> Self {
		Self {
			variables,
			rows: VecDeque::new(),
		}
	}

	/// Number of rows not yet consumed.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn rows(&self) -> impl Iterator<Item = &Row> {
		self.rows.iter()
	}
}

impl ResultSet for RowBuffer {
	fn variables(&self) -> &Variables {
		&self.variables
	}

	fn add_row(&mut self, row: Row) {
		self.rows.push_back(row);
	}

	fn next_row(&mut self) -> Option<Row> {
		self.rows.pop_front()
	}

	fn is_finished(&self) -> bool {
		self.rows.is_empty()
	}
}
