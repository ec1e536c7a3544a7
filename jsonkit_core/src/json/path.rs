//! Navigate a [`JsonValue`] tree by a sequence of string segments.
//!
//! On an array a segment must be a non-negative integer index; on an object it is a key.

use super::JsonValue;
use crate::error::JsonError;
use anyhow::{Error, Result};

fn not_found(segment: &str, index: usize) -> Error {
	Error::new(JsonError::PathNotFound {
		segment: segment.to_string(),
		index,
	})
}

fn step<'a>(value: &'a JsonValue, segment: &str) -> Option<&'a JsonValue> {
	match value {
		JsonValue::Array(array) => array.get(segment.parse::<usize>().ok()?),
		JsonValue::Object(object) => object.get(segment),
		_ => None,
	}
}

fn step_mut<'a>(value: &'a mut JsonValue, segment: &str) -> Option<&'a mut JsonValue> {
	match value {
		JsonValue::Array(array) => array.get_mut(segment.parse::<usize>().ok()?),
		JsonValue::Object(object) => object.get_mut(segment),
		_ => None,
	}
}

fn describe<S: AsRef<str>>(path: &[S]) -> String {
	path.iter().map(|segment| segment.as_ref()).collect::<Vec<&str>>().join("/")
}

/// Follow `path` from `root`. An empty path returns `root`.
///
/// ```rust
/// use jsonkit_core::json::{JsonValue, resolve};
/// let json = JsonValue::parse_str(r#"{"a":{"b":[true]}}"#).unwrap();
/// assert_eq!(resolve(&json, &["a", "b", "0"]).unwrap(), &JsonValue::Boolean(true));
/// ```
///
/// # Errors
/// Returns [`JsonError::PathNotFound`] with the first segment that does not match: a missing key,
/// an index that is out of range or not a number, or a segment applied to a scalar.
pub fn resolve<'a, S: AsRef<str>>(root: &'a JsonValue, path: &[S]) -> Result<&'a JsonValue> {
	let mut current = root;
	for (index, segment) in path.iter().enumerate() {
		let segment = segment.as_ref();
		current = step(current, segment)
			.ok_or_else(|| not_found(segment, index).context(format!("while resolving path '{}'", describe(path))))?;
	}
	Ok(current)
}

/// Like [`resolve`], returning `None` where `resolve` fails.
#[must_use]
pub fn try_resolve<'a, S: AsRef<str>>(root: &'a JsonValue, path: &[S]) -> Option<&'a JsonValue> {
	path.iter().try_fold(root, |current, segment| step(current, segment.as_ref()))
}

/// Like [`resolve`], returning a mutable reference.
///
/// # Errors
/// Returns [`JsonError::PathNotFound`] with the first segment that does not match.
pub fn resolve_mut<'a, S: AsRef<str>>(root: &'a mut JsonValue, path: &[S]) -> Result<&'a mut JsonValue> {
	let mut current = root;
	for (index, segment) in path.iter().enumerate() {
		let segment = segment.as_ref();
		current = step_mut(current, segment)
			.ok_or_else(|| not_found(segment, index).context(format!("while resolving path '{}'", describe(path))))?;
	}
	Ok(current)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn doc() -> JsonValue {
		JsonValue::parse_str(r#"{"a":[10,{"b":"x"}],"c":null,"d":{"1":"one"}}"#).unwrap()
	}

	#[rstest]
	fn resolves_through_arrays_and_objects(doc: JsonValue) -> Result<()> {
		assert_eq!(resolve(&doc, &["a", "1", "b"])?, &JsonValue::from("x"));
		assert_eq!(resolve(&doc, &["a", "0"])?, &JsonValue::from(10));
		assert_eq!(resolve(&doc, &["c"])?, &JsonValue::Null);
		assert_eq!(resolve(&doc, &["d", "1"])?, &JsonValue::from("one"));
		Ok(())
	}

	#[rstest]
	fn empty_path_is_root(doc: JsonValue) -> Result<()> {
		let path: [&str; 0] = [];
		assert_eq!(resolve(&doc, &path)?, &doc);
		Ok(())
	}

	#[rstest]
	#[case(&["b"], "b", 0)]
	#[case(&["a", "2"], "2", 1)]
	#[case(&["a", "-1"], "-1", 1)]
	#[case(&["a", "first"], "first", 1)]
	#[case(&["a", "0", "x"], "x", 2)]
	#[case(&["c", "x"], "x", 1)]
	fn missing_segments(doc: JsonValue, #[case] path: &[&str], #[case] segment: &str, #[case] index: usize) {
		let error = resolve(&doc, path).unwrap_err();
		assert_eq!(
			JsonError::find(&error),
			Some(&JsonError::PathNotFound {
				segment: segment.to_string(),
				index
			})
		);
		assert!(try_resolve(&doc, path).is_none());
	}

	#[rstest]
	fn error_message_names_path(doc: JsonValue) {
		let error = resolve(&doc, &["a", "5"]).unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"while resolving path 'a/5': path segment 1 ('5') not found"
		);
	}

	#[rstest]
	fn try_resolve_finds_values(doc: JsonValue) {
		assert_eq!(try_resolve(&doc, &["a", "1", "b"]), Some(&JsonValue::from("x")));
		assert_eq!(
			try_resolve(&doc, &[String::from("a"), String::from("0")]),
			Some(&JsonValue::from(10))
		);
	}

	#[rstest]
	fn resolve_mut_edits_in_place(mut doc: JsonValue) -> Result<()> {
		*resolve_mut(&mut doc, &["a", "1", "b"])? = JsonValue::from("y");
		assert_eq!(doc.resolve(&["a", "1", "b"])?, &JsonValue::from("y"));

		assert!(resolve_mut(&mut doc, &["nope"]).is_err());
		Ok(())
	}
}
