//! Runtime dispatch for values only known as `dyn Any`.

use super::{JsonWriter, WriteJson};
use crate::{
	error::JsonError,
	json::{JsonArray, JsonObject, JsonValue},
};
use anyhow::{Error, Result};
use std::{
	any::{Any, type_name},
	collections::{BTreeMap, HashMap},
};

/// Tries each listed type in order and writes the first match.
macro_rules! write_first_match {
	($writer:expr, $value:expr, [$($t:ty),+ $(,)?]) => {
		$(
			if let Some(v) = $value.downcast_ref::<$t>() {
				return $writer.write(v);
			}
		)+
	};
}

/// A `dyn Any` element inside a `dyn Any` container.
struct AnyElement<'a>(&'a dyn Any);

impl WriteJson for AnyElement<'_> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_dyn_any(self.0, "dyn Any")
	}
}

impl JsonWriter<'_> {
	/// Write a value whose type is only checked at runtime.
	///
	/// Known types are tried in this order: null (`()`), custom serializable
	/// (`Box<dyn WriteJson>`, `JsonValue`, `JsonArray`, `JsonObject`), primitives, strings,
	/// string-keyed maps, sequences. `Vec<Box<dyn Any>>` and `BTreeMap<String, Box<dyn Any>>`
	/// are walked recursively.
	///
	/// ```rust
	/// use jsonkit_core::json::{Formatting, JsonWriter};
	/// use std::any::Any;
	/// let values: Vec<Box<dyn Any>> = vec![Box::new(1u8), Box::new("a"), Box::new(())];
	/// let mut out = Vec::new();
	/// JsonWriter::new(&mut out, Formatting::None).write_any(&values).unwrap();
	/// assert_eq!(out, br#"[1,"a",null]"#);
	/// ```
	///
	/// # Errors
	/// Fails with [`JsonError::UnsupportedType`] naming the type when no known type matches.
	pub fn write_any<T: Any>(&mut self, value: &T) -> Result<()> {
		self.write_dyn_any(value, type_name::<T>())
	}

	fn write_dyn_any(&mut self, value: &dyn Any, name: &str) -> Result<()> {
		write_first_match!(self, value, [()]);
		write_first_match!(self, value, [Box<dyn WriteJson>, JsonValue, JsonArray, JsonObject]);
		write_first_match!(
			self,
			value,
			[bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64]
		);
		write_first_match!(self, value, [String, &'static str]);
		write_first_match!(
			self,
			value,
			[
				BTreeMap<String, String>,
				BTreeMap<String, f64>,
				BTreeMap<String, i64>,
				BTreeMap<String, bool>,
				HashMap<String, String>,
				HashMap<String, f64>,
				HashMap<String, i64>,
				HashMap<String, bool>,
			]
		);
		if let Some(map) = value.downcast_ref::<BTreeMap<String, Box<dyn Any>>>() {
			return self.write_object(map.iter().map(|(key, entry)| (key, AnyElement(&**entry))));
		}
		write_first_match!(
			self,
			value,
			[
				Vec<String>,
				Vec<&'static str>,
				Vec<f64>,
				Vec<i64>,
				Vec<i32>,
				Vec<u8>,
				Vec<bool>,
				Vec<JsonValue>,
			]
		);
		if let Some(items) = value.downcast_ref::<Vec<Box<dyn Any>>>() {
			return self.write_array(items.iter().map(|item| AnyElement(&**item)));
		}
		Err(Error::new(JsonError::UnsupportedType(name.to_string())))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::Formatting;

	fn any_to_string<T: Any>(value: &T) -> Result<String> {
		let mut out = Vec::new();
		JsonWriter::new(&mut out, Formatting::None).write_any(value)?;
		Ok(String::from_utf8(out)?)
	}

	#[test]
	fn known_scalars() -> Result<()> {
		assert_eq!(any_to_string(&())?, "null");
		assert_eq!(any_to_string(&true)?, "true");
		assert_eq!(any_to_string(&7u16)?, "7");
		assert_eq!(any_to_string(&-2.5f64)?, "-2.5");
		assert_eq!(any_to_string(&'c')?, "\"c\"");
		assert_eq!(any_to_string(&String::from("s"))?, "\"s\"");
		assert_eq!(any_to_string(&"s")?, "\"s\"");
		Ok(())
	}

	#[test]
	fn custom_serializable_and_json_values() -> Result<()> {
		let custom: Box<dyn WriteJson> = Box::new(vec![1, 2]);
		assert_eq!(any_to_string(&custom)?, "[1,2]");
		assert_eq!(any_to_string(&JsonValue::from(vec![("k", 1)]))?, r#"{"k":1}"#);
		Ok(())
	}

	#[test]
	fn nested_any_containers() -> Result<()> {
		let mut inner: BTreeMap<String, Box<dyn Any>> = BTreeMap::new();
		inner.insert("b".to_string(), Box::new(vec![1i64, 2]));
		inner.insert("a".to_string(), Box::new(()));
		let outer: Vec<Box<dyn Any>> = vec![Box::new(inner), Box::new(false)];

		assert_eq!(any_to_string(&outer)?, r#"[{"a":null,"b":[1,2]},false]"#);
		Ok(())
	}

	#[test]
	fn unknown_type_is_named() {
		let error = any_to_string(&std::time::Duration::from_secs(1)).unwrap_err();
		assert!(JsonError::find(&error).unwrap().is_unsupported_type());
		assert_eq!(
			error.to_string(),
			"type 'core::time::Duration' can not be serialized as JSON"
		);
	}

	#[test]
	fn unknown_element_inside_any_container() {
		let items: Vec<Box<dyn Any>> = vec![Box::new(1i32), Box::new(std::time::Duration::ZERO)];
		let error = any_to_string(&items).unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"while writing array element 1: type 'dyn Any' can not be serialized as JSON"
		);
	}
}
