//! Result format detection from partial evidence.

use url::Url;

use crate::description::DECISIVE_QUALITY;
use crate::factory::FormatFactory;
use crate::registry::FormatRegistry;

/// Default number of content bytes shown to sniffers.
pub const DEFAULT_SNIFF_WINDOW: usize = 1024;

/// Score ceiling; only declared metadata reaches it decisively.
const MAX_SCORE: i32 = DECISIVE_QUALITY as i32;

/// Everything a caller knows about content of unknown format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SniffEvidence<'a> {
	/// Syntax URI the content claims.
	pub uri: Option<&'a Url>,
	pub mime_type: Option<&'a str>,
	/// Leading bytes of the content.
	pub content: &'a [u8],
	/// Filename or other identifier of the content.
	pub identifier: Option<&'a str>,
}

impl<'a> SniffEvidence<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn uri(mut self, uri: &'a Url) -> Self {
		self.uri = Some(uri);
		self
	}

	pub fn mime_type(mut self, mime_type: &'a str) -> Self {
		self.mime_type = Some(mime_type);
		self
	}

	pub fn content(mut self, content: &'a [u8]) -> Self {
		self.content = content;
		self
	}

	pub fn identifier(mut self, identifier: &'a str) -> Self {
		self.identifier = Some(identifier);
		self
	}
}

/// What a sniffer gets to look at.
///
/// `content` is capped at the registry's sniff window so that a document
/// quoting another syntax further down does not sway recognition.
#[derive(Debug, Clone, Copy)]
pub struct SniffProbe<'a> {
	pub content: &'a [u8],
	/// Length of the full sample before capping.
	pub content_len: usize,
	pub identifier: Option<&'a str>,
	/// Lower-cased identifier suffix, see [`identifier_suffix`].
	pub suffix: Option<&'a str>,
	pub mime_type: Option<&'a str>,
}

impl SniffProbe<'_> {
	/// Whether the sample continues past `content`.
	pub fn is_truncated(&self) -> bool {
		self.content_len > self.content.len()
	}

	/// Content as text, up to the first invalid UTF-8 sequence.
	pub fn text(&self) -> &str {
		match std::str::from_utf8(self.content) {
			Ok(text) => text,
			Err(err) => std::str::from_utf8(&self.content[..err.valid_up_to()]).unwrap_or_default(),
		}
	}
}

/// Extracts the lower-cased suffix after the last `.` of an identifier.
///
/// The suffix must be non-empty and ASCII alphanumeric throughout; anything
/// else (`data.tar-gz`, `trailing.`) yields no suffix at all.
pub fn identifier_suffix(identifier: &str) -> Option<String> {
	let (_, suffix) = identifier.rsplit_once('.')?;
	if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_alphanumeric()) {
		return None;
	}
	Some(suffix.to_ascii_lowercase())
}

impl FormatRegistry {
	/// Guesses a format name for content.
	///
	/// A MIME type declared with quality 10, or a declared syntax URI, settles
	/// the guess immediately. Otherwise every format is scored from its MIME
	/// type quality plus its sniffer's affinity, capped at 10, and the best
	/// non-negative score wins. Ties keep registration order.
	///
	/// Returns `None` when nothing scores at least 0.
	pub fn guess_format_name(&self, evidence: &SniffEvidence<'_>) -> Option<&str> {
		self.guess_factory(evidence).map(FormatFactory::name)
	}

	pub(crate) fn guess_factory(&self, evidence: &SniffEvidence<'_>) -> Option<&FormatFactory> {
		let suffix = evidence.identifier.and_then(identifier_suffix);
		let window = evidence.content.len().min(self.sniff_window());
		let probe = SniffProbe {
			content: &evidence.content[..window],
			content_len: evidence.content.len(),
			identifier: evidence.identifier,
			suffix: suffix.as_deref(),
			mime_type: evidence.mime_type,
		};

		let mut scores: Vec<(i32, &FormatFactory)> = Vec::with_capacity(self.len());
		for factory in self.factories() {
			let desc = factory.description();
			let mut score = -1;

			if let Some(entry) = evidence.mime_type.and_then(|mime| desc.mime_type(mime)) {
				if entry.is_decisive() {
					tracing::debug!(format = factory.name(), mime = %entry.mime_type, "decisive MIME type match");
					return Some(factory);
				}
				score = i32::from(entry.q);
			}

			if evidence.uri.is_some_and(|uri| desc.has_uri(uri.as_str())) {
				tracing::debug!(format = factory.name(), "decisive syntax URI match");
				return Some(factory);
			}

			if let Some(sniffer) = factory.sniffer() {
				score = score.saturating_add(sniffer(&probe));
			}

			let score = score.min(MAX_SCORE);
			tracing::trace!(format = factory.name(), score, "sniff score");
			scores.push((score, factory));
		}

		scores.sort_by(|a, b| b.0.cmp(&a.0));
		let (score, factory) = scores.first().copied()?;
		if score < 0 {
			tracing::debug!(best = factory.name(), score, "no format guess");
			return None;
		}
		tracing::debug!(format = factory.name(), score, "guessed format");
		Some(factory)
	}
}
