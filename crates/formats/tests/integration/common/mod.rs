//! Test formats shared by the integration tests.
//!
//! * `xml` / `srx`: writer only, decisive MIME type, syntax URI
//! * `json` / `srj`: reader and writer, content and suffix sniffer
//! * `tsv`: reader only, MIME quality 5, no sniffer

use std::io::{self, BufRead, BufReader};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tessera_formats::{
	FormatFactoryBuilder, FormatRegistry, FormatsConfig, FormatterContext, FormatterHooks, HookError, RegistrationError,
	ResultSet, ResultsReader, ResultsWriter, Row, RowSource, SniffProbe, Term, Variables,
};
use tessera_xsd::XsdTable;
use url::Url;

pub const XML_MIME: &str = "application/sparql-results+xml";
pub const JSON_MIME: &str = "application/sparql-results+json";
pub const TSV_MIME: &str = "text/tab-separated-values";
pub const XML_URI: &str = "http://www.w3.org/2005/sparql-results#";

/// Writes a header of `?var` names, then one tab separated line per row.
pub struct LineWriter;

impl ResultsWriter for LineWriter {
	fn write(
		&self,
		_context: &mut FormatterContext,
		sink: &mut dyn io::Write,
		results: &mut dyn ResultSet,
		_base_uri: Option<&Url>,
	) -> Result<(), HookError> {
		let header: Vec<String> = results.variables().iter().map(|name| format!("?{name}")).collect();
		writeln!(sink, "{}", header.join("\t"))?;
		while let Some(row) = results.next_row() {
			let cells: Vec<&str> = row
				.values()
				.iter()
				.map(|value| value.as_ref().map_or("", |term| term.lexical.as_str()))
				.collect();
			writeln!(sink, "{}", cells.join("\t"))?;
		}
		Ok(())
	}
}

/// Writer that returns without consuming anything.
pub struct LazyWriter;

impl ResultsWriter for LazyWriter {
	fn write(
		&self,
		_context: &mut FormatterContext,
		sink: &mut dyn io::Write,
		_results: &mut dyn ResultSet,
		_base_uri: Option<&Url>,
	) -> Result<(), HookError> {
		sink.write_all(b"lazy\n")?;
		Ok(())
	}
}

/// Reads tab separated lines into plain literals, empty cells unbound.
pub struct LineReader;

struct LineRows<'a> {
	lines: io::Lines<BufReader<&'a mut dyn io::Read>>,
	width: usize,
}

impl RowSource for LineRows<'_> {
	fn read_row(&mut self) -> Result<Option<Row>, HookError> {
		let Some(line) = self.lines.next().transpose()? else {
			return Ok(None);
		};
		let mut row = Row::unbound(self.width);
		for (idx, cell) in line.split('\t').enumerate() {
			if !cell.is_empty() {
				row.set(idx, Some(Term::plain(cell)));
			}
		}
		Ok(Some(row))
	}
}

impl ResultsReader for LineReader {
	fn rowsource<'a>(
		&self,
		_context: &mut FormatterContext,
		_xsd: &XsdTable,
		variables: &Variables,
		source: &'a mut dyn io::Read,
		_base_uri: &Url,
	) -> Result<Box<dyn RowSource + 'a>, HookError> {
		Ok(Box::new(LineRows {
			lines: BufReader::new(source).lines(),
			width: variables.len(),
		}))
	}
}

/// Counts init and finish calls; init fails when asked to.
#[derive(Clone, Default)]
pub struct Lifecycle {
	pub inits: Arc<AtomicUsize>,
	pub finishes: Arc<AtomicUsize>,
	pub fail_init: bool,
}

impl Lifecycle {
	pub fn inits(&self) -> usize {
		self.inits.load(Ordering::SeqCst)
	}

	pub fn finishes(&self) -> usize {
		self.finishes.load(Ordering::SeqCst)
	}
}

impl FormatterHooks for Lifecycle {
	fn init(&self, context: &mut FormatterContext, name: Option<&str>) -> Result<(), HookError> {
		self.inits.fetch_add(1, Ordering::SeqCst);
		if self.fail_init {
			return Err("refusing to start".into());
		}
		if let Some(first) = context.data_mut().first_mut() {
			*first = name.map_or(0, |name| name.len() as u8);
		}
		Ok(())
	}

	fn finish(&self, _context: &mut FormatterContext) {
		self.finishes.fetch_add(1, Ordering::SeqCst);
	}
}

pub fn sniff_xml(probe: &SniffProbe<'_>) -> i32 {
	let mut score = 0;
	if matches!(probe.suffix, Some("srx" | "xml")) {
		score += 4;
	}
	if probe.text().contains("<sparql") {
		score += 6;
	}
	score
}

pub fn sniff_json(probe: &SniffProbe<'_>) -> i32 {
	let mut score = 0;
	if matches!(probe.suffix, Some("srj" | "json")) {
		score += 4;
	}
	let text = probe.text().trim_start();
	if text.starts_with('{') && text.contains("\"head\"") {
		score += 6;
	}
	score
}

pub fn register_xml(builder: &mut FormatFactoryBuilder) -> Result<(), RegistrationError> {
	builder
		.name("xml")
		.name("srx")
		.label("SPARQL XML Query Results")
		.mime_type(XML_MIME, 10)
		.mime_type("application/xml", 3)
		.uri(XML_URI)
		.sniffer(sniff_xml)
		.writer(LineWriter);
	Ok(())
}

pub fn register_json(builder: &mut FormatFactoryBuilder) -> Result<(), RegistrationError> {
	builder
		.name("json")
		.name("srj")
		.label("SPARQL JSON Query Results")
		.mime_type(JSON_MIME, 10)
		.sniffer(sniff_json)
		.reader(LineReader)
		.writer(LineWriter);
	Ok(())
}

pub fn register_tsv(builder: &mut FormatFactoryBuilder) -> Result<(), RegistrationError> {
	builder
		.name("tsv")
		.label("Tab Separated Values")
		.mime_type(TSV_MIME, 5)
		.reader(LineReader);
	Ok(())
}

/// Registry with `xml`, `json` and `tsv`, in that order.
pub fn registry() -> FormatRegistry {
	registry_with(&FormatsConfig::default())
}

pub fn registry_with(config: &FormatsConfig) -> FormatRegistry {
	let mut registry = FormatRegistry::with_config(config);
	registry.register(register_xml).unwrap();
	registry.register(register_json).unwrap();
	registry.register(register_tsv).unwrap();
	registry
}

pub fn xsd() -> XsdTable {
	XsdTable::new().unwrap()
}

pub fn base() -> Url {
	Url::parse("http://example.org/query").unwrap()
}
