//! JSON object type: string keys, first-insertion order, keyed lookup.
use crate::json::{Formatting, JsonArray, JsonValue, to_json_string};
use anyhow::Result;
use std::{collections::HashMap, fmt::Debug};

/// A JSON object.
///
/// Entries are kept in the order their keys were first inserted; that order is used when
/// writing. Setting an existing key replaces the value in place. Equality ignores order.
#[derive(Clone, Default)]
pub struct JsonObject {
	entries: Vec<(String, JsonValue)>,
	index: HashMap<String, usize>,
}

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.index.contains_key(key)
	}

	/// Insert a value, returning the previous value if the key was present.
	///
	/// A replaced key keeps its original position.
	pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) -> Option<JsonValue> {
		let key = key.into();
		if let Some(&position) = self.index.get(&key) {
			return Some(std::mem::replace(&mut self.entries[position].1, value));
		}
		self.index.insert(key.clone(), self.entries.len());
		self.entries.push((key, value));
		None
	}

	/// Set the specified key to the given value, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.insert(key, JsonValue::from(value));
	}

	/// Set the specified key only if the provided `Option` is `Some`.
	pub fn set_optional<T>(&mut self, key: &str, value: &Option<T>)
	where
		JsonValue: From<T>,
		T: Clone,
	{
		if let Some(v) = value {
			self.insert(key, JsonValue::from(v.clone()));
		}
	}

	/// Remove a key, returning its value. Later entries move up one position.
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		let position = self.index.remove(key)?;
		let (_, value) = self.entries.remove(position);
		for (k, _) in &self.entries[position..] {
			if let Some(i) = self.index.get_mut(k) {
				*i -= 1;
			}
		}
		Some(value)
	}

	/// Merge entries from another `JsonObject` into this one, overwriting existing keys.
	pub fn assign(&mut self, object: JsonObject) {
		for (key, value) in object {
			self.insert(key, value);
		}
	}

	/// Get a reference to the value for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.index.get(key).map(|&i| &self.entries[i].1)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
		let position = *self.index.get(key)?;
		Some(&mut self.entries[position].1)
	}

	/// Retrieve a string value for the specified key, `None` if missing.
	///
	/// # Errors
	/// Returns an error if the value is present but not a string.
	pub fn get_string(&self, key: &str) -> Result<Option<String>> {
		self.get(key).map(JsonValue::as_string).transpose()
	}

	/// # Errors
	/// Returns an error if the value is present but not a number.
	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	/// # Errors
	/// Returns an error if the value is present but not an array.
	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	/// # Errors
	/// Returns an error if the value is present but not an object.
	pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
		self.get(key).map(JsonValue::as_object).transpose()
	}

	/// Iterate over key-value pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.entries.iter().map(|(k, v)| (k, v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.entries.iter().map(|(k, _)| k)
	}

	/// Parse a JSON string into a `JsonObject`.
	///
	/// # Errors
	/// Returns an error on invalid JSON or if the root is not an object.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}

	/// Serialize this `JsonObject` to compact JSON.
	///
	/// # Errors
	/// Fails if the object contains a non-finite number.
	pub fn stringify(&self) -> Result<String> {
		to_json_string(self, Formatting::None)
	}
}

impl PartialEq for JsonObject {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonObject {
	fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in iter {
			object.insert(key, value);
		}
		object
	}
}

impl IntoIterator for JsonObject {
	type Item = (String, JsonValue);
	type IntoIter = std::vec::IntoIter<(String, JsonValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonValue::Object`.
impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonObject`. Duplicate keys keep the last value.
impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		input
			.into_iter()
			.map(|(key, value)| (key, JsonValue::from(value)))
			.collect()
	}
}
