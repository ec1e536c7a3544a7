//! JSON value enum representing any valid JSON data and utilities for parsing, serializing, and converting.

use crate::json::{
	Formatting, JsonArray, JsonObject, parse_json_reader, parse_json_str, resolve, resolve_mut, to_json_string,
	try_resolve,
};
use anyhow::{Result, bail};
use std::io::Read;

/// Represents any JSON data: arrays, objects, numbers, strings, booleans, and null.
///
/// Every number is held as `f64`; `1` and `1.0` parse to the same value.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parse a JSON string into a `JsonValue`.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Parse JSON text from a reader.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid or incomplete.
	pub fn parse_reader(reader: impl Read) -> Result<JsonValue> {
		parse_json_reader(reader)
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	fn described(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "an array",
			Boolean(_) => "a boolean",
			Null => "null",
			Number(_) => "a number",
			Object(_) => "an object",
			String(_) => "a string",
		}
	}

	/// Serialize to compact JSON.
	///
	/// # Errors
	/// Fails if the tree contains a non-finite number.
	pub fn stringify(&self) -> Result<String> {
		to_json_string(self, Formatting::None)
	}

	/// Serialize to JSON indented with four spaces per level.
	///
	/// # Errors
	/// Fails if the tree contains a non-finite number.
	pub fn stringify_pretty(&self) -> Result<String> {
		to_json_string(self, Formatting::Spaces)
	}

	/// Create a new empty JSON array value.
	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	/// Create a new empty JSON object value.
	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	/// Look up `key` if this value is an object.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		match self {
			JsonValue::Object(object) => object.get(key),
			_ => None,
		}
	}

	/// Look up `index` if this value is an array.
	#[must_use]
	pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
		match self {
			JsonValue::Array(array) => array.get(index),
			_ => None,
		}
	}

	/// Follow `path` through nested arrays and objects.
	///
	/// ```rust
	/// use jsonkit_core::json::JsonValue;
	/// let json = JsonValue::parse_str(r#"{"a":[10,20]}"#).unwrap();
	/// assert_eq!(json.resolve(&["a", "1"]).unwrap(), &JsonValue::from(20));
	/// ```
	///
	/// # Errors
	/// Returns a `PathNotFound` error naming the first segment that does not match.
	pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Result<&JsonValue> {
		resolve(self, path)
	}

	/// Like [`JsonValue::resolve`], returning `None` instead of an error.
	#[must_use]
	pub fn try_resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&JsonValue> {
		try_resolve(self, path)
	}

	/// Like [`JsonValue::resolve`], returning a mutable reference.
	///
	/// # Errors
	/// Returns a `PathNotFound` error naming the first segment that does not match.
	pub fn resolve_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Result<&mut JsonValue> {
		resolve_mut(self, path)
	}

	/// # Errors
	/// Returns an error if not a boolean.
	pub fn as_bool(&self) -> Result<bool> {
		match self {
			JsonValue::Boolean(b) => Ok(*b),
			_ => bail!("expected a boolean, found {}", self.described()),
		}
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected a JSON array, found {}", self.described()),
		}
	}

	/// Consume the `JsonValue` and extract the `JsonArray` if it is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn into_array(self) -> Result<JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected a JSON array, found {}", self.described()),
		}
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected a JSON object, found {}", self.described()),
		}
	}

	/// Consume the `JsonValue` and extract the `JsonObject` if it is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected a JSON object, found {}", self.described()),
		}
	}

	/// Return the string value as `String`, cloning if necessary.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_string(&self) -> Result<String> {
		self.as_str().map(str::to_owned)
	}

	/// Return a string slice if this value is a JSON string.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found {}", self.described()),
		}
	}

	/// # Errors
	/// Returns an error if the value is not a JSON number.
	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(val) => Ok(*val),
			_ => bail!("expected a number, found {}", self.described()),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<()> for JsonValue {
	fn from((): ()) -> Self {
		JsonValue::Null
	}
}

impl<T> From<Option<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Null, JsonValue::from)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}
