//! Text forms of JSON strings and numbers.

use std::fmt::{Display, LowerExp};

/// Escape a string for use between JSON double quotes.
///
/// `"`, `\` and `/` are backslash-escaped, the usual control characters get their short
/// escapes, and everything else outside printable ASCII becomes `\u` escapes of its UTF-16
/// code units. The result is always ASCII.
///
/// ```rust
/// use jsonkit_core::json::escape_json_string;
/// assert_eq!(escape_json_string("a/b\n\u{e9}"), "a\\/b\\n\\u00e9");
/// ```
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len() + 2);
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'/' => output.push_str("\\/"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			' '..='~' => output.push(c),
			c => {
				let mut units = [0u16; 2];
				for unit in c.encode_utf16(&mut units) {
					output.push_str(&format!("\\u{unit:04x}"));
				}
			}
		}
	}
	output
}

/// Shortest round-trip text of a float; `None` for NaN and infinities.
///
/// Magnitudes in `[1e-6, 1e21)` are written in plain decimal, everything else in exponent
/// notation. Both zeros are written as `0`.
pub(crate) fn format_number<F>(value: F) -> Option<String>
where
	F: Copy + Display + LowerExp + Into<f64>,
{
	let as_f64: f64 = value.into();
	if !as_f64.is_finite() {
		return None;
	}
	if as_f64 == 0.0 {
		return Some(String::from("0"));
	}
	if (1e-6..1e21).contains(&as_f64.abs()) {
		Some(format!("{value}"))
	} else {
		Some(format!("{value:e}"))
	}
}
