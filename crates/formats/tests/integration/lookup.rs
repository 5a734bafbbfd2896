use pretty_assertions::assert_eq;
use tessera_formats::{FormatFlags, FormatQuery, FormatRegistry};
use url::Url;

use crate::common::{self, JSON_MIME, TSV_MIME, XML_URI};

#[test]
fn every_name_finds_its_own_description() {
	let registry = common::registry();
	for desc in registry.descriptions() {
		for name in &desc.names {
			let found = registry.lookup(&FormatQuery::any().name(name)).unwrap();
			assert_eq!(found.description(), desc);
		}
	}
}

#[test]
fn default_is_first_registered() {
	let registry = common::registry();
	assert_eq!(registry.lookup(&FormatQuery::any()).unwrap().name(), "xml");
}

#[test]
fn default_respects_flags() {
	let registry = common::registry();
	let query = FormatQuery::any().flags(FormatFlags::READER);
	assert_eq!(registry.lookup(&query).unwrap().name(), "tsv");

	let query = FormatQuery::any().flags(FormatFlags::READER | FormatFlags::WRITER);
	assert_eq!(registry.lookup(&query).unwrap().name(), "json");
}

#[test]
fn flags_filter_is_exact() {
	let registry = common::registry();
	assert!(registry.lookup(&FormatQuery::any().name("json").flags(FormatFlags::WRITER)).is_none());
	assert!(registry.check(&FormatQuery::any().name("xml").flags(FormatFlags::WRITER)));
}

#[test]
fn lookup_by_uri() {
	let registry = common::registry();
	let uri = Url::parse(XML_URI).unwrap();
	assert_eq!(registry.lookup(&FormatQuery::any().uri(&uri)).unwrap().name(), "xml");
}

#[test]
fn mime_type_alone_resolves_to_default() {
	let registry = common::registry();
	assert_eq!(registry.lookup(&FormatQuery::any().mime_type(JSON_MIME)).unwrap().name(), "xml");
	assert_eq!(registry.lookup(&FormatQuery::any().mime_type("text/csv")).unwrap().name(), "xml");

	// the default is the first format passing the flag filter
	let query = FormatQuery::any().mime_type(JSON_MIME).flags(FormatFlags::READER);
	assert_eq!(registry.lookup(&query).unwrap().name(), "tsv");
}

#[test]
fn criteria_are_checked_per_format() {
	let registry = common::registry();
	let query = FormatQuery::any().name("tsv").mime_type(JSON_MIME);
	// `json` comes first and matches by MIME type; scanning stops there.
	assert_eq!(registry.lookup(&query).unwrap().name(), "json");

	let query = FormatQuery::any().name("xml").mime_type(TSV_MIME);
	assert_eq!(registry.lookup(&query).unwrap().name(), "xml");
}

#[test]
fn unmatched_lookup_has_no_fallback() {
	let registry = common::registry();
	assert!(registry.lookup(&FormatQuery::any().name("csv")).is_none());
	let unknown = Url::parse("http://example.org/no-such-syntax").unwrap();
	assert!(registry.lookup(&FormatQuery::any().uri(&unknown).mime_type(JSON_MIME)).is_some());
	assert!(registry.lookup(&FormatQuery::any().uri(&unknown)).is_none());
	assert!(!FormatRegistry::new().check(&FormatQuery::any()));
}

#[test]
fn describe_in_registration_order() {
	let registry = common::registry();
	let names: Vec<&str> = (0..registry.len())
		.filter_map(|idx| registry.describe(idx))
		.map(|desc| desc.name())
		.collect();
	assert_eq!(names, ["xml", "json", "tsv"]);
	assert!(registry.describe(3).is_none());

	let tsv = registry.describe(2).unwrap();
	assert!(tsv.is_reader());
	assert!(!tsv.is_writer());
	assert_eq!(tsv.label, "Tab Separated Values");
}
