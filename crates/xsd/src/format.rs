//! Canonical lexical forms for numeric values.

/// Formats an integer as base-10 digits with a leading `-` only when negative.
pub fn format_integer(value: i64) -> String {
	value.to_string()
}

/// Formats an `xsd:float`.
///
/// Uses general notation with six significant digits: fixed notation for
/// decimal exponents in `-4..6`, otherwise `d.ddde±XX`. Trailing fractional
/// zeros are dropped. This is not the XSD canonical float form for every
/// input, but it always re-validates as a float.
pub fn format_float(value: f32) -> String {
	const SIGNIFICANT: usize = 6;

	let value = f64::from(value);
	if let Some(special) = format_non_finite(value) {
		return special.to_owned();
	}

	let scientific = format!("{value:.prec$e}", prec = SIGNIFICANT - 1);
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return scientific;
	};
	let exponent: i32 = exponent.parse().unwrap_or_default();

	if exponent < -4 || exponent >= SIGNIFICANT as i32 {
		let sign = if exponent < 0 { '-' } else { '+' };
		format!(
			"{}e{sign}{:02}",
			strip_fraction_zeros(mantissa),
			exponent.unsigned_abs()
		)
	} else {
		let decimals = (SIGNIFICANT as i32 - 1 - exponent) as usize;
		strip_fraction_zeros(&format!("{value:.decimals$}")).to_owned()
	}
}

/// Formats an `xsd:double` in canonical form.
///
/// Zero is `0.0e0`. Any other finite value becomes `<sign>D.D+E<sign>?D+`:
/// exactly one digit before the point, at least one after it, no trailing
/// mantissa zeros beyond that one, and no leading zeros in the exponent.
///
/// ```
/// use tessera_xsd::format_double;
///
/// assert_eq!(format_double(0.0), "0.0e0");
/// assert_eq!(format_double(100.0), "1.0E2");
/// assert_eq!(format_double(-0.00125), "-1.25E-3");
/// ```
pub fn format_double(value: f64) -> String {
	if value == 0.0 {
		return "0.0e0".to_owned();
	}
	if let Some(special) = format_non_finite(value) {
		return special.to_owned();
	}

	let expanded = format!("{value:.14e}");
	let Some((mantissa, exponent)) = expanded.split_once('e') else {
		return expanded;
	};

	let mut canonical = String::with_capacity(expanded.len());
	canonical.push_str(mantissa.trim_end_matches('0'));
	if canonical.ends_with('.') {
		canonical.push('0');
	}

	canonical.push('E');
	let digits = match exponent.strip_prefix('-') {
		Some(digits) => {
			canonical.push('-');
			digits
		}
		None => exponent.strip_prefix('+').unwrap_or(exponent),
	};
	match digits.trim_start_matches('0') {
		"" => canonical.push('0'),
		significant => canonical.push_str(significant),
	}

	canonical
}

fn format_non_finite(value: f64) -> Option<&'static str> {
	if value.is_nan() {
		Some("NaN")
	} else if value == f64::INFINITY {
		Some("INF")
	} else if value == f64::NEG_INFINITY {
		Some("-INF")
	} else {
		None
	}
}

fn strip_fraction_zeros(number: &str) -> &str {
	if number.contains('.') {
		number.trim_end_matches('0').trim_end_matches('.')
	} else {
		number
	}
}
