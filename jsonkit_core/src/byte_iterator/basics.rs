//! Grammar helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! - `parse_keyword` for the bare literals `true`, `false` and `null`
//! - `parse_quoted_json_string` for string literals with escapes (`\" \\ \/ \b \f \n \r \t \uXXXX`)
//! - `parse_number_as_string` for the JSON number grammar
//! - `parse_array_entries` and `parse_object_entries` to walk container contents
//!
//! Each helper consumes exactly its token and leaves the iterator on the following byte.
//! Running out of input where a byte is required yields `UnexpectedEndOfInput`; every other
//! deviation yields `MalformedInput`.

use super::iterator::ByteIterator;
use anyhow::Result;
use jsonkit_derive::context;

/// A bare literal: `true`, `false` or `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
	True,
	False,
	Null,
}

/// Accumulate consecutive ASCII letters and match them against `true`, `false` and `null`.
///
/// A literal cut off by the end of input (`tru`) is an unknown literal, so it yields
/// `MalformedInput` rather than `UnexpectedEndOfInput`.
#[context("while parsing a keyword")]
pub fn parse_keyword(iter: &mut ByteIterator) -> Result<Keyword> {
	let first = iter.expect_peeked_byte()?;
	if !first.is_ascii_alphabetic() {
		return Err(iter.format_error(&format!("unexpected character '{}'", char::from(first))));
	}

	let mut word = Vec::with_capacity(5);
	while let Some(b) = iter.peek() {
		if !b.is_ascii_alphabetic() {
			break;
		}
		word.push(b);
		iter.advance();
	}

	match word.as_slice() {
		b"true" => Ok(Keyword::True),
		b"false" => Ok(Keyword::False),
		b"null" => Ok(Keyword::Null),
		_ => Err(iter.format_error(&format!(
			"unknown literal '{}'",
			String::from_utf8_lossy(&word)
		))),
	}
}

fn hex_digit(iter: &mut ByteIterator) -> Result<u16> {
	let b = iter.expect_next_byte()?;
	match b {
		b'0'..=b'9' => Ok(u16::from(b - b'0')),
		b'a'..=b'f' => Ok(u16::from(b - b'a' + 10)),
		b'A'..=b'F' => Ok(u16::from(b - b'A' + 10)),
		_ => Err(iter.format_error("expected 4 hex digits after '\\u'")),
	}
}

fn parse_code_unit(iter: &mut ByteIterator) -> Result<u16> {
	let mut unit = 0;
	for _ in 0..4 {
		unit = (unit << 4) | hex_digit(iter)?;
	}
	Ok(unit)
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
	let mut buf = [0u8; 4];
	bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

/// Parse a JSON quoted string literal and return it as `String`.
///
/// `\uXXXX` escapes are UTF-16 code units: a high surrogate directly followed by an escaped low
/// surrogate forms one character, any unpaired surrogate decodes to U+FFFD.
///
/// ```
/// # use std::io::Cursor;
/// # use jsonkit_core::byte_iterator::{ByteIterator, parse_quoted_json_string};
/// let mut it = ByteIterator::from_reader(Cursor::new("\"he\\nllo\""), true);
/// assert_eq!(parse_quoted_json_string(&mut it).unwrap(), "he\nllo");
/// ```
#[context("while parsing a quoted JSON string")]
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}
	iter.advance();

	let mut bytes = Vec::with_capacity(32);
	let mut high_surrogate: Option<u16> = None;

	loop {
		let byte = iter.expect_next_byte()?;

		if byte == b'\\' && iter.expect_peeked_byte()? == b'u' {
			iter.advance();
			let unit = parse_code_unit(iter)?;
			match (high_surrogate.take(), unit) {
				(Some(high), 0xDC00..=0xDFFF) => {
					let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
					push_char(&mut bytes, char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
				}
				(pending, _) => {
					if pending.is_some() {
						push_char(&mut bytes, char::REPLACEMENT_CHARACTER);
					}
					if (0xD800..=0xDBFF).contains(&unit) {
						high_surrogate = Some(unit);
					} else {
						// lone low surrogates have no scalar value and become U+FFFD
						let c = char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER);
						push_char(&mut bytes, c);
					}
				}
			}
			continue;
		}

		if high_surrogate.take().is_some() {
			push_char(&mut bytes, char::REPLACEMENT_CHARACTER);
		}

		match byte {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				c => return Err(iter.format_error(&format!("invalid escape sequence '\\{}'", char::from(c)))),
			},
			c => bytes.push(c),
		}
	}

	String::from_utf8(bytes).map_err(|_| iter.format_error("invalid UTF-8 in string"))
}

/// Parse a JSON number and return its textual representation.
///
/// Accepts an optional `-`, then digits, an optional fraction and an optional exponent.
/// A leading `0` ends the integer part, so `01` yields `0` and leaves `1` unread.
///
/// ```
/// # use std::io::Cursor;
/// # use jsonkit_core::byte_iterator::{ByteIterator, parse_number_as_string};
/// let mut it = ByteIterator::from_reader(Cursor::new("-12.3e+4,"), true);
/// assert_eq!(parse_number_as_string(&mut it).unwrap(), "-12.3e+4");
/// ```
#[context("while parsing a number")]
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	fn expect_digit(iter: &mut ByteIterator, number: &mut String, what: &str) -> Result<u8> {
		let b = iter.expect_peeked_byte()?;
		if !b.is_ascii_digit() {
			return Err(iter.format_error(&format!("expected digit {what}")));
		}
		iter.advance();
		number.push(char::from(b));
		Ok(b)
	}

	fn digits(iter: &mut ByteIterator, number: &mut String) {
		while let Some(b @ b'0'..=b'9') = iter.peek() {
			number.push(char::from(b));
			iter.advance();
		}
	}

	let mut number = String::with_capacity(16);

	if iter.peek() == Some(b'-') {
		number.push('-');
		iter.advance();
	}

	if expect_digit(iter, &mut number, "in number")? != b'0' {
		digits(iter, &mut number);
	}

	if iter.peek() == Some(b'.') {
		number.push('.');
		iter.advance();
		expect_digit(iter, &mut number, "after decimal point")?;
		digits(iter, &mut number);
	}

	if let Some(e @ (b'e' | b'E')) = iter.peek() {
		number.push(char::from(e));
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(char::from(sign));
			iter.advance();
		}
		expect_digit(iter, &mut number, "in exponent")?;
		digits(iter, &mut number);
	}

	Ok(number)
}

/// Parse a JSON number as `f64`.
pub fn parse_number(iter: &mut ByteIterator) -> Result<f64> {
	parse_number_as_string(iter)?
		.parse::<f64>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Iterate over JSON array entries, collecting the results from `parse_value`.
///
/// ```
/// # use std::io::Cursor;
/// # use jsonkit_core::byte_iterator::{ByteIterator, parse_array_entries, parse_number};
/// let mut it = ByteIterator::from_reader(Cursor::new("[1, 2 ,3]"), true);
/// let nums = parse_array_entries(&mut it, parse_number).unwrap();
/// assert_eq!(nums, vec![1.0, 2.0, 3.0]);
/// ```
#[context("while parsing array entries")]
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}
	iter.advance();

	let mut result = Vec::new();

	iter.skip_whitespace();
	if iter.expect_peeked_byte()? == b']' {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b',' => iter.advance(),
			b']' => {
				iter.advance();
				break;
			}
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}

/// Iterate over JSON object entries, invoking `parse_value` for each key.
///
/// The closure receives the unescaped key and the iterator positioned at the start of the value.
///
/// ```
/// # use std::io::Cursor;
/// # use jsonkit_core::byte_iterator::{ByteIterator, parse_object_entries, parse_quoted_json_string};
/// let mut it = ByteIterator::from_reader(Cursor::new("{\"k\":\"v\"}"), true);
/// let mut got = None;
/// parse_object_entries(&mut it, |k, it| { got = Some((k, parse_quoted_json_string(it)?)); Ok(()) }).unwrap();
/// assert_eq!(got, Some(("k".into(), "v".into())));
/// ```
#[context("while parsing object entries")]
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}
	iter.advance();

	iter.skip_whitespace();
	if iter.expect_peeked_byte()? == b'}' {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}
		iter.advance();

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b',' => iter.advance(),
			b'}' => {
				iter.advance();
				break;
			}
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}
