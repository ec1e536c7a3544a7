//! Reading newline-delimited JSON (NDJSON): one document per line.
use super::{JsonValue, parse_json_str};
use anyhow::{Context, Result, anyhow};
use std::io::BufRead;

/// Parse a single NDJSON line. Empty or whitespace-only lines yield `None`.
fn process_line(line: std::io::Result<String>, index: usize) -> Option<Result<JsonValue>> {
	match line {
		Ok(line) if line.trim().is_empty() => None,
		Ok(line) => Some(parse_json_str(&line).with_context(|| format!("error in line {}", index + 1))),
		Err(e) => Some(Err(anyhow!("line {}: {}", index + 1, e))),
	}
}

/// Iterate over the JSON documents of a buffered reader, one per non-empty line.
///
/// Errors carry the 1-based line number as context; iteration continues after an error.
///
/// ```
/// use std::io::Cursor;
/// use jsonkit_core::json::{JsonValue, read_ndjson_iter};
/// let values: Vec<JsonValue> = read_ndjson_iter(Cursor::new("1\n\n[2]\n"))
/// 	.collect::<anyhow::Result<_>>()
/// 	.unwrap();
/// assert_eq!(values, vec![JsonValue::from(1), JsonValue::from(vec![2])]);
/// ```
pub fn read_ndjson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<JsonValue>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::JsonError;
	use std::io::{Cursor, Read};

	fn join_errors(e: &anyhow::Error) -> String {
		e.chain().map(std::string::ToString::to_string).collect::<Vec<String>>().join("\n")
	}

	#[test]
	fn test_single_line() -> Result<()> {
		let data = r#"{"key": "value"}"#;
		let mut iter = read_ndjson_iter(Cursor::new(data));

		assert_eq!(iter.next().unwrap()?, JsonValue::parse_str(data)?);
		assert!(iter.next().is_none());
		Ok(())
	}

	#[test]
	fn test_blank_lines_are_skipped() -> Result<()> {
		let data = "{\"key1\": 1}\n\n   \n{\"key2\": 2}\r\n\t\n[3]";
		let values = read_ndjson_iter(Cursor::new(data)).collect::<Result<Vec<_>>>()?;

		assert_eq!(
			values,
			vec![
				JsonValue::from(vec![("key1", 1)]),
				JsonValue::from(vec![("key2", 2)]),
				JsonValue::from(vec![3]),
			]
		);
		Ok(())
	}

	#[test]
	fn test_error_names_the_line() {
		let data = "{\"key\": 1}\n\n{\"key\" 2}\n[4]";
		let results: Vec<Result<JsonValue>> = read_ndjson_iter(Cursor::new(data)).collect();

		assert_eq!(results.len(), 3);
		assert!(results[0].is_ok());
		let error = results[1].as_ref().unwrap_err();
		assert_eq!(
			join_errors(error),
			"error in line 3\nwhile parsing JSON\nwhile parsing object entries\nexpected ':' at position 7: {\"key\" "
		);
		assert!(JsonError::find(error).unwrap().is_malformed_input());
		assert_eq!(results[2].as_ref().unwrap(), &JsonValue::from(vec![4]));
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(read_ndjson_iter(Cursor::new("")).count(), 0);
	}

	struct InvalidUtf8;

	impl Read for InvalidUtf8 {
		fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
			let data = b"\xff\xfe\n";
			let len = data.len().min(buf.len());
			buf[..len].copy_from_slice(&data[..len]);
			Ok(len)
		}
	}

	#[test]
	fn test_io_error_is_reported() {
		let reader = std::io::BufReader::new(InvalidUtf8.take(3));
		let error = read_ndjson_iter(reader).next().unwrap().unwrap_err();
		assert!(error.to_string().starts_with("line 1: "), "{error}");
	}
}
