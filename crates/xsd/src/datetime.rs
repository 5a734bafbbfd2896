//! `xsd:dateTime` lexical checker.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DATETIME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^(-?)(\d{4,})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})(\.\d+)?(Z|([+-])(\d{2}):(\d{2}))?$",
	)
	.expect("dateTime pattern is valid")
});

/// Checks `-?YYYY-MM-DDThh:mm:ss(.s+)?(Z|(+|-)hh:mm)?`.
///
/// The date must exist in the proleptic Gregorian calendar. `24:00:00` is
/// accepted as end of day; leap seconds are not. Years with more than four
/// digits may not start with `0`, and year `0000` is rejected.
pub fn check_datetime(lexical: &str) -> bool {
	let Some(caps) = DATETIME.captures(lexical) else {
		return false;
	};
	let field = |idx: usize| caps.get(idx).map_or("", |m| m.as_str());
	let number = |idx: usize| field(idx).parse::<u32>().ok();

	let year_digits = field(2);
	if year_digits.len() > 4 && year_digits.starts_with('0') {
		return false;
	}
	let Ok(year) = year_digits.parse::<i32>() else {
		return false;
	};
	if year == 0 {
		return false;
	}
	let year = if field(1) == "-" { -year } else { year };

	let (Some(month), Some(day)) = (number(3), number(4)) else {
		return false;
	};
	if NaiveDate::from_ymd_opt(year, month, day).is_none() {
		return false;
	}

	let (Some(hour), Some(minute), Some(second)) = (number(5), number(6), number(7)) else {
		return false;
	};
	let fraction_is_zero = field(8).bytes().skip(1).all(|b| b == b'0');
	let end_of_day = hour == 24 && minute == 0 && second == 0 && fraction_is_zero;
	if !(end_of_day || (hour < 24 && minute < 60 && second < 60)) {
		return false;
	}

	if caps.get(10).is_some() {
		let (Some(tz_hour), Some(tz_minute)) = (number(11), number(12)) else {
			return false;
		};
		if tz_minute >= 60 || tz_hour > 14 || (tz_hour == 14 && tz_minute != 0) {
			return false;
		}
	}

	true
}
