use tessera_formats::{Formatter, FormatError, FormatRegistry, FormatsConfig, SniffEvidence};
use url::Url;

use crate::common::{self, TSV_MIME, XML_MIME, XML_URI};

const JSON_SAMPLE: &[u8] = br#"{ "head": { "vars": ["x"] }, "results": { "bindings": [] } }"#;
const XML_SAMPLE: &[u8] = br#"<?xml version="1.0"?><sparql xmlns="http://www.w3.org/2005/sparql-results#">"#;

fn guess<'r>(registry: &'r FormatRegistry, evidence: SniffEvidence<'_>) -> Option<&'r str> {
	registry.guess_format_name(&evidence)
}

#[test]
fn empty_registry_guesses_nothing() {
	let registry = FormatRegistry::new();
	let evidence = SniffEvidence::new().content(JSON_SAMPLE).identifier("r.srj");
	assert_eq!(guess(&registry, evidence), None);
	assert!(matches!(
		Formatter::create_for_content(&registry, &evidence),
		Err(FormatError::NoGuess)
	));
}

#[test]
fn decisive_mime_type_beats_content() {
	let registry = common::registry();
	let evidence = SniffEvidence::new().mime_type(XML_MIME).content(JSON_SAMPLE);
	assert_eq!(guess(&registry, evidence), Some("xml"));
}

#[test]
fn declared_uri_is_decisive() {
	let registry = common::registry();
	let uri = Url::parse(XML_URI).unwrap();
	let evidence = SniffEvidence::new().uri(&uri).content(JSON_SAMPLE).identifier("r.srj");
	assert_eq!(guess(&registry, evidence), Some("xml"));
}

#[test]
fn content_and_suffix_are_scored() {
	let registry = common::registry();
	assert_eq!(guess(&registry, SniffEvidence::new().content(JSON_SAMPLE)), Some("json"));
	assert_eq!(guess(&registry, SniffEvidence::new().content(XML_SAMPLE)), Some("xml"));
	assert_eq!(guess(&registry, SniffEvidence::new().identifier("answers.SRJ")), Some("json"));
	assert_eq!(
		guess(&registry, SniffEvidence::new().identifier("answers.srx").content(JSON_SAMPLE)),
		Some("json")
	);
}

#[test]
fn weak_mime_type_adds_to_sniffer_score() {
	let registry = common::registry();
	// xml: 3 + 4 beats json: -1 + 6.
	let evidence = SniffEvidence::new()
		.mime_type("application/xml")
		.identifier("r.xml")
		.content(JSON_SAMPLE);
	assert_eq!(guess(&registry, evidence), Some("xml"));
}

#[test]
fn ties_keep_registration_order() {
	let registry = common::registry();
	// tsv scores its MIME quality 5, json scores -1 + 6 from content.
	let evidence = SniffEvidence::new().mime_type(TSV_MIME).content(JSON_SAMPLE);
	assert_eq!(guess(&registry, evidence), Some("json"));

	let evidence = SniffEvidence::new().mime_type(TSV_MIME).content(b"a\tb\n");
	assert_eq!(guess(&registry, evidence), Some("tsv"));
}

#[test]
fn no_evidence_guesses_nothing() {
	let registry = common::registry();
	assert_eq!(guess(&registry, SniffEvidence::new()), None);
	assert_eq!(guess(&registry, SniffEvidence::new().content(b"plain text")), None);
	assert_eq!(guess(&registry, SniffEvidence::new().mime_type("text/csv")), None);
}

#[test]
fn sniffers_only_see_the_window() {
	let mut sample = vec![b' '; 32];
	sample.extend_from_slice(JSON_SAMPLE);

	let registry = common::registry();
	assert_eq!(guess(&registry, SniffEvidence::new().content(&sample)), Some("json"));

	let narrow = common::registry_with(&FormatsConfig {
		sniff_window: 16,
		..FormatsConfig::default()
	});
	assert_eq!(narrow.sniff_window(), 16);
	assert_eq!(guess(&narrow, SniffEvidence::new().content(&sample)), None);
}

#[test]
fn create_for_content_uses_the_guess() {
	let registry = common::registry();
	let formatter = Formatter::create_for_content(&registry, &SniffEvidence::new().content(XML_SAMPLE)).unwrap();
	assert_eq!(formatter.name(), "xml");
}
