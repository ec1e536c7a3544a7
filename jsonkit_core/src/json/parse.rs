//! Recursive descent from JSON text to a [`JsonValue`] tree.

use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, Keyword, parse_array_entries, parse_keyword, parse_number, parse_object_entries,
	parse_quoted_json_string,
};
use anyhow::{Context, Result};
use std::io::{Cursor, Read};

/// Reader settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
	/// Maximum nesting of arrays and objects. Deeper input is rejected as malformed.
	pub max_depth: usize,
	/// Keep a ring buffer of recent input and attach it to error messages.
	pub debug: bool,
}

impl Default for ReaderConfig {
	fn default() -> Self {
		Self {
			max_depth: 512,
			debug: true,
		}
	}
}

/// Parse a complete JSON document held in a string.
///
/// # Errors
/// Returns a `MalformedInput` or `UnexpectedEndOfInput` [`JsonError`](crate::error::JsonError).
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	parse_json_reader_with_config(Cursor::new(json), &ReaderConfig::default())
}

/// Parse a complete JSON document from a reader.
///
/// # Errors
/// Returns a `MalformedInput` or `UnexpectedEndOfInput` [`JsonError`](crate::error::JsonError).
pub fn parse_json_reader(reader: impl Read) -> Result<JsonValue> {
	parse_json_reader_with_config(reader, &ReaderConfig::default())
}

/// Parse a complete JSON document from a reader. Only whitespace may follow the root value.
///
/// # Errors
/// Returns a `MalformedInput` or `UnexpectedEndOfInput` [`JsonError`](crate::error::JsonError).
pub fn parse_json_reader_with_config(reader: impl Read, config: &ReaderConfig) -> Result<JsonValue> {
	log::trace!("parsing JSON with {config:?}");
	let mut iter = ByteIterator::from_reader(reader, config.debug);
	let value = parse_json_iter(&mut iter, config.max_depth).context("while parsing JSON")?;

	iter.skip_whitespace();
	if iter.peek().is_some() {
		return Err(iter
			.format_error("unexpected content after the JSON value")
			.context("while parsing JSON"));
	}
	Ok(value)
}

/// Parse one JSON value and leave the iterator on the byte after it.
///
/// `max_depth` bounds how deeply arrays and objects may nest below this value.
///
/// # Errors
/// Returns a `MalformedInput` or `UnexpectedEndOfInput` [`JsonError`](crate::error::JsonError).
pub fn parse_json_iter(iter: &mut ByteIterator, max_depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_json_array(iter, max_depth),
		b'{' => parse_json_object(iter, max_depth),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		b'-' | b'0'..=b'9' => parse_number(iter).map(JsonValue::Number),
		_ => parse_keyword(iter).map(|keyword| match keyword {
			Keyword::True => JsonValue::Boolean(true),
			Keyword::False => JsonValue::Boolean(false),
			Keyword::Null => JsonValue::Null,
		}),
	}
}

fn nested_depth(iter: &ByteIterator, max_depth: usize) -> Result<usize> {
	max_depth
		.checked_sub(1)
		.ok_or_else(|| iter.format_error("maximum nesting depth exceeded"))
}

fn parse_json_array(iter: &mut ByteIterator, max_depth: usize) -> Result<JsonValue> {
	let depth = nested_depth(iter, max_depth)?;
	let items = parse_array_entries(iter, |iter| parse_json_iter(iter, depth))?;
	Ok(JsonValue::Array(JsonArray(items)))
}

fn parse_json_object(iter: &mut ByteIterator, max_depth: usize) -> Result<JsonValue> {
	let depth = nested_depth(iter, max_depth)?;
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter| {
		let value = parse_json_iter(iter, depth)?;
		if object.insert(key, value).is_some() {
			log::trace!("duplicate key in JSON object, keeping the last value");
		}
		Ok(())
	})?;
	Ok(JsonValue::Object(object))
}
