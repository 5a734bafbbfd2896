use std::borrow::Cow;

use crate::flags::FormatFlags;

/// Quality at or above which a MIME type match settles format detection.
pub const DECISIVE_QUALITY: u8 = 10;

/// A MIME type with the preference weight a format gives it.
///
/// Quality runs from 0 to 10; `10` means the MIME type identifies the
/// format authoritatively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeTypeQ {
	pub mime_type: Cow<'static, str>,
	pub q: u8,
}

impl MimeTypeQ {
	/// Creates an entry, clamping `q` to [`DECISIVE_QUALITY`].
	pub fn new(mime_type: impl Into<Cow<'static, str>>, q: u8) -> Self {
		Self {
			mime_type: mime_type.into(),
			q: q.min(DECISIVE_QUALITY),
		}
	}

	pub fn is_decisive(&self) -> bool {
		self.q >= DECISIVE_QUALITY
	}
}

/// Public description of a registered result format.
///
/// Exposed for enumeration (help text, content negotiation) without handing
/// out the factory's hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDescription {
	/// Names; the first is canonical.
	pub names: Vec<Cow<'static, str>>,
	/// Human readable label.
	pub label: Cow<'static, str>,
	pub mime_types: Vec<MimeTypeQ>,
	/// Syntax URIs identifying the format.
	pub uris: Vec<Cow<'static, str>>,
	pub flags: FormatFlags,
}

impl FormatDescription {
	/// Canonical name.
	pub fn name(&self) -> &str {
		// Registration rejects descriptions without names.
		self.names.first().map_or("", |name| name)
	}

	pub fn has_name(&self, name: &str) -> bool {
		self.names.iter().any(|known| known == name)
	}

	pub fn has_uri(&self, uri: &str) -> bool {
		self.uris.iter().any(|known| known == uri)
	}

	/// Returns the declared entry for an exact MIME type match.
	pub fn mime_type(&self, mime_type: &str) -> Option<&MimeTypeQ> {
		self.mime_types.iter().find(|entry| entry.mime_type == mime_type)
	}

	/// Whether this format can parse results.
	pub fn is_reader(&self) -> bool {
		self.flags.contains(FormatFlags::READER)
	}

	/// Whether this format can serialize results.
	pub fn is_writer(&self) -> bool {
		self.flags.contains(FormatFlags::WRITER)
	}
}
