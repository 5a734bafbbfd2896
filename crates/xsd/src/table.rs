//! Datatype URI table.

use url::Url;

use crate::error::XsdError;
use crate::literal_type::{IntegerSubtype, LiteralType};

/// XML Schema datatypes namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// Datatype URIs for the XSD primitives and the integer-derived subtypes.
///
/// Built once by the owning context and immutable afterwards.
#[derive(Debug, Clone)]
pub struct XsdTable {
	namespace: Url,
	primitives: [Url; 7],
	subtypes: [Url; 12],
}

impl XsdTable {
	/// Builds every datatype URI under [`XSD_NAMESPACE`].
	pub fn new() -> Result<Self, XsdError> {
		let namespace = Url::parse(XSD_NAMESPACE)?;
		let local = |name: &str| {
			let mut uri = namespace.clone();
			uri.set_fragment(Some(name));
			uri
		};

		let primitives = LiteralType::XSD_PRIMITIVES.map(|tag| local(tag.label().unwrap_or_default()));
		let subtypes = IntegerSubtype::ALL.map(|subtype| local(subtype.name()));

		Ok(Self {
			namespace,
			primitives,
			subtypes,
		})
	}

	/// The shared namespace URI.
	pub fn namespace(&self) -> &Url {
		&self.namespace
	}

	/// Resolves a datatype URI to its tag.
	///
	/// Any integer-derived URI collapses to [`LiteralType::IntegerSubtype`];
	/// unrecognised URIs give [`LiteralType::Unknown`].
	pub fn uri_to_type(&self, uri: &Url) -> LiteralType {
		if let Some(idx) = self.primitives.iter().position(|known| known == uri) {
			return LiteralType::XSD_PRIMITIVES[idx];
		}
		if self.subtypes.contains(uri) {
			return LiteralType::IntegerSubtype;
		}
		LiteralType::Unknown
	}

	/// Returns the datatype URI of an XSD primitive.
	///
	/// [`LiteralType::IntegerSubtype`] has no reverse mapping: the subtype it
	/// was collapsed from is not recorded.
	pub fn type_to_uri(&self, datatype: LiteralType) -> Option<&Url> {
		datatype.primitive_slot().map(|slot| &self.primitives[slot])
	}

	/// Returns the URI of a specific integer-derived subtype.
	pub fn subtype_uri(&self, subtype: IntegerSubtype) -> &Url {
		&self.subtypes[subtype.slot()]
	}

	/// Whether `uri` names any datatype in this table.
	pub fn is_datatype_uri(&self, uri: &Url) -> bool {
		self.uri_to_type(uri) != LiteralType::Unknown
	}
}
