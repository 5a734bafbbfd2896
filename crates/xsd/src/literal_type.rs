//! Literal type tags and the numeric promotion lattice.

/// Type tag carried by every literal value.
///
/// The first four variants mark terms that have no XSD datatype. The XSD
/// primitives follow in lattice order, and [`LiteralType::IntegerSubtype`]
/// stands for every type derived from `xsd:integer`. Once validated, a
/// `xsd:short` and a `xsd:unsignedLong` carry the same tag; the original
/// subtype cannot be recovered from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LiteralType {
	/// Not yet resolved, or an unknown datatype URI.
	Unknown,
	/// Blank node.
	Blank,
	/// URI reference.
	Uri,
	/// Plain literal without a datatype.
	String,
	/// `xsd:string`.
	XsdString,
	/// `xsd:boolean`.
	Boolean,
	/// `xsd:integer`.
	Integer,
	/// `xsd:float`.
	Float,
	/// `xsd:double`.
	Double,
	/// `xsd:decimal`.
	Decimal,
	/// `xsd:dateTime`.
	DateTime,
	/// Any of the twelve types derived from `xsd:integer`.
	IntegerSubtype,
}

impl LiteralType {
	/// XSD primitives in table order.
	pub const XSD_PRIMITIVES: [LiteralType; 7] = [
		Self::XsdString,
		Self::Boolean,
		Self::Integer,
		Self::Float,
		Self::Double,
		Self::Decimal,
		Self::DateTime,
	];

	/// Position of this tag in the primitive table, if it is an XSD primitive.
	pub(crate) const fn primitive_slot(self) -> Option<usize> {
		match self {
			Self::XsdString => Some(0),
			Self::Boolean => Some(1),
			Self::Integer => Some(2),
			Self::Float => Some(3),
			Self::Double => Some(4),
			Self::Decimal => Some(5),
			Self::DateTime => Some(6),
			Self::Unknown | Self::Blank | Self::Uri | Self::String | Self::IntegerSubtype => None,
		}
	}

	/// Returns the XSD local name for primitive tags.
	///
	/// Non-datatype markers and the collapsed integer subtype have no name.
	pub const fn label(self) -> Option<&'static str> {
		match self {
			Self::XsdString => Some("string"),
			Self::Boolean => Some("boolean"),
			Self::Integer => Some("integer"),
			Self::Float => Some("float"),
			Self::Double => Some("double"),
			Self::Decimal => Some("decimal"),
			Self::DateTime => Some("dateTime"),
			Self::Unknown | Self::Blank | Self::Uri | Self::String | Self::IntegerSubtype => None,
		}
	}

	/// Resolves an XSD local name to its tag.
	///
	/// Integer-derived names collapse to [`LiteralType::IntegerSubtype`].
	pub fn from_label(name: &str) -> Option<Self> {
		Self::XSD_PRIMITIVES
			.into_iter()
			.find(|tag| tag.label() == Some(name))
			.or_else(|| IntegerSubtype::from_name(name).map(|_| Self::IntegerSubtype))
	}

	/// Whether this tag is one of the XSD primitives.
	pub const fn is_xsd_primitive(self) -> bool {
		self.primitive_slot().is_some()
	}

	/// Next type along the promotion lattice.
	///
	/// `boolean → integer → float → double → decimal`; integer subtypes
	/// promote to `integer`. Everything else has no parent.
	pub const fn parent(self) -> Option<Self> {
		match self {
			Self::IntegerSubtype => Some(Self::Integer),
			Self::Boolean => Some(Self::Integer),
			Self::Integer => Some(Self::Float),
			Self::Float => Some(Self::Double),
			Self::Double => Some(Self::Decimal),
			Self::Decimal
			| Self::DateTime
			| Self::XsdString
			| Self::Unknown
			| Self::Blank
			| Self::Uri
			| Self::String => None,
		}
	}

	/// Whether values of this type take part in numeric coercion.
	pub const fn is_numeric(self) -> bool {
		matches!(
			self,
			Self::Boolean
				| Self::Integer
				| Self::Float
				| Self::Double
				| Self::Decimal
				| Self::IntegerSubtype
		)
	}

	/// Iterates the promotion chain starting at (and including) this tag.
	pub fn promotions(self) -> impl Iterator<Item = LiteralType> {
		std::iter::successors(Some(self), |tag| tag.parent())
	}
}

/// Types derived from `xsd:integer`.
///
/// Only used to name and recognise datatype URIs; every subtype maps to
/// [`LiteralType::IntegerSubtype`] once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerSubtype {
	NonPositiveInteger,
	NegativeInteger,
	Long,
	Int,
	Short,
	Byte,
	NonNegativeInteger,
	UnsignedLong,
	PositiveInteger,
	UnsignedInt,
	UnsignedShort,
	UnsignedByte,
}

impl IntegerSubtype {
	pub const ALL: [IntegerSubtype; 12] = [
		Self::NonPositiveInteger,
		Self::NegativeInteger,
		Self::Long,
		Self::Int,
		Self::Short,
		Self::Byte,
		Self::NonNegativeInteger,
		Self::UnsignedLong,
		Self::PositiveInteger,
		Self::UnsignedInt,
		Self::UnsignedShort,
		Self::UnsignedByte,
	];

	/// Position of this subtype in [`IntegerSubtype::ALL`].
	pub(crate) const fn slot(self) -> usize {
		self as usize
	}

	/// XSD local name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::NonPositiveInteger => "nonPositiveInteger",
			Self::NegativeInteger => "negativeInteger",
			Self::Long => "long",
			Self::Int => "int",
			Self::Short => "short",
			Self::Byte => "byte",
			Self::NonNegativeInteger => "nonNegativeInteger",
			Self::UnsignedLong => "unsignedLong",
			Self::PositiveInteger => "positiveInteger",
			Self::UnsignedInt => "unsignedInt",
			Self::UnsignedShort => "unsignedShort",
			Self::UnsignedByte => "unsignedByte",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|subtype| subtype.name() == name)
	}
}

impl std::fmt::Display for LiteralType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.label() {
			Some(name) => write!(f, "xsd:{name}"),
			None => write!(f, "{self:?}"),
		}
	}
}
