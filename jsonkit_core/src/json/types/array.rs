//! JSON array type, backed by a `Vec<JsonValue>` in parse order.
use crate::json::JsonValue;
use anyhow::Result;
use std::fmt::Debug;

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
		self.0.get_mut(index)
	}

	/// Append a value, converting it into a `JsonValue`.
	pub fn push<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.push(JsonValue::from(value));
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	/// Get a reference to the underlying `Vec<JsonValue>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	/// Convert all elements to Rust `String`s, returning an error if any element is not a string.
	///
	/// # Errors
	/// Returns an error naming the type of the first non-string element.
	pub fn as_string_vec(&self) -> Result<Vec<String>> {
		self.0.iter().map(JsonValue::as_string).collect()
	}

	/// Convert all elements to `f64`, returning an error if any element is not a number.
	///
	/// # Errors
	/// Returns an error naming the type of the first non-number element.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
	}

	/// Serialize the array to compact JSON.
	///
	/// ```rust
	/// use jsonkit_core::json::{JsonArray, JsonValue};
	/// let arr = JsonArray(vec![JsonValue::from(1), JsonValue::from("a")]);
	/// assert_eq!(arr.stringify().unwrap(), r#"[1,"a"]"#);
	/// ```
	///
	/// # Errors
	/// Fails if the array contains a non-finite number.
	pub fn stringify(&self) -> Result<String> {
		crate::json::to_json_string(self, crate::json::Formatting::None)
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(v.clone())).collect())
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(*v)).collect())
	}
}

impl<T> FromIterator<T> for JsonArray
where
	JsonValue: From<T>,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		JsonArray(iter.into_iter().map(JsonValue::from).collect())
	}
}

impl IntoIterator for JsonArray {
	type Item = JsonValue;
	type IntoIter = std::vec::IntoIter<JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stringify() -> Result<()> {
		let array = JsonArray(vec![
			JsonValue::from("hello"),
			JsonValue::from(42.0),
			JsonValue::from(true),
		]);

		assert_eq!(array.stringify()?, r#"["hello",42,true]"#);
		Ok(())
	}

	#[test]
	fn test_as_string_vec() -> Result<()> {
		let array = JsonArray::from(vec!["hello", "world"]);

		assert_eq!(array.as_string_vec()?, vec!["hello", "world"]);
		assert_eq!(
			JsonArray::from(vec![1, 2]).as_string_vec().unwrap_err().to_string(),
			"expected a string, found a number"
		);

		Ok(())
	}

	#[test]
	fn test_as_number_vec() -> Result<()> {
		let array = JsonArray::from(vec![1.2, 3.4, 5.6]);

		assert_eq!(array.as_number_vec()?, vec![1.2, 3.4, 5.6]);
		assert_eq!(
			JsonArray::from(vec!["a"]).as_number_vec().unwrap_err().to_string(),
			"expected a number, found a string"
		);

		Ok(())
	}

	#[test]
	fn test_push_and_get() {
		let mut array = JsonArray::new();
		assert!(array.is_empty());
		array.push(1);
		array.push("two");
		assert_eq!(array.len(), 2);
		assert_eq!(array.get(1), Some(&JsonValue::from("two")));
		assert_eq!(array.get(2), None);

		if let Some(first) = array.get_mut(0) {
			*first = JsonValue::Null;
		}
		assert_eq!(array.as_vec(), &vec![JsonValue::Null, JsonValue::from("two")]);
	}

	#[test]
	fn test_from_iterator_and_into_iterator() {
		let array: JsonArray = (1..=3).collect();
		assert_eq!(array, JsonArray::from(vec![1, 2, 3]));

		let sum: f64 = array.iter().filter_map(|v| v.as_number().ok()).sum();
		assert_eq!(sum, 6.0);
		assert_eq!(array.into_iter().count(), 3);
	}

	#[test]
	fn test_debug_impl() {
		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42.0)]);
		assert_eq!(format!("{array:?}"), r#"[String("debug"), Number(42.0)]"#);
	}
}
