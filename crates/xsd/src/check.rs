//! Lexical form validators.
//!
//! Each validator answers whether a string is an acceptable lexical form for
//! one XSD primitive. They only check shape; range and pattern facets are
//! applied elsewhere.

use crate::datetime::check_datetime;
use crate::error::XsdError;
use crate::literal_type::LiteralType;

/// Signature shared by all lexical validators.
pub type LexicalCheck = fn(&str) -> bool;

/// Accepts `true`, `TRUE`, `1`, `false`, `FALSE` and `0`.
///
/// XML Schema only allows `{true, false, 1, 0}`; the upper-case spellings are
/// accepted for compatibility with existing data.
pub fn check_boolean(lexical: &str) -> bool {
	matches!(lexical, "true" | "TRUE" | "1" | "false" | "FALSE" | "0")
}

/// Optional sign followed by decimal digits that fit in an `i64`.
pub fn check_integer(lexical: &str) -> bool {
	lexical.parse::<i64>().is_ok()
}

/// Optional sign, digits, and an optional `.` followed by more digits.
///
/// At least one digit is required on either side of the point.
pub fn check_decimal(lexical: &str) -> bool {
	let unsigned = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
	let (whole, fraction) = match unsigned.split_once('.') {
		Some((whole, fraction)) => (whole, fraction),
		None => (unsigned, ""),
	};

	let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
	all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty())
}

/// Anything the standard float parser consumes entirely.
pub fn check_float(lexical: &str) -> bool {
	lexical.parse::<f32>().is_ok()
}

/// Anything the standard float parser consumes entirely.
pub fn check_double(lexical: &str) -> bool {
	lexical.parse::<f64>().is_ok()
}

/// Returns the validator for a tag, if it has one.
///
/// Integer subtypes share the base integer validator.
pub const fn validator(datatype: LiteralType) -> Option<LexicalCheck> {
	match datatype {
		LiteralType::Boolean => Some(check_boolean),
		LiteralType::Integer | LiteralType::IntegerSubtype => Some(check_integer),
		LiteralType::Float => Some(check_float),
		LiteralType::Double => Some(check_double),
		LiteralType::Decimal => Some(check_decimal),
		LiteralType::DateTime => Some(check_datetime),
		LiteralType::XsdString
		| LiteralType::Unknown
		| LiteralType::Blank
		| LiteralType::Uri
		| LiteralType::String => None,
	}
}

/// Checks `lexical` against the validator for `datatype`.
///
/// Types without a validator accept any string.
pub fn datatype_check(datatype: LiteralType, lexical: &str) -> bool {
	validator(datatype).is_none_or(|check| check(lexical))
}

/// Like [`datatype_check`], reporting a rejected form as an error.
pub fn validate(datatype: LiteralType, lexical: &str) -> Result<(), XsdError> {
	if datatype_check(datatype, lexical) {
		Ok(())
	} else {
		Err(XsdError::InvalidLexicalForm {
			datatype,
			lexical: lexical.to_owned(),
		})
	}
}
