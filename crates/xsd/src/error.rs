use crate::literal_type::LiteralType;

/// Errors raised by the XSD datatype layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XsdError {
	/// A string is not a legal lexical form of its datatype.
	#[error("invalid lexical form for {datatype}: {lexical:?}")]
	InvalidLexicalForm {
		datatype: LiteralType,
		lexical: String,
	},

	/// A datatype URI could not be built from the namespace.
	#[error("invalid datatype URI: {0}")]
	Uri(#[from] url::ParseError),
}
