//! The [`WriteJson`] trait and its implementations for std and jsonkit types.

use super::JsonWriter;
use crate::json::{JsonArray, JsonObject, JsonValue};
use anyhow::Result;
use std::{
	collections::{BTreeMap, BTreeSet, HashMap, VecDeque},
	hash::BuildHasher,
};

/// A value that can write itself as JSON.
///
/// Implement it by hand or with `#[derive(WriteJson)]`:
///
/// ```rust
/// use jsonkit_core::json::{Formatting, WriteJson, to_json_string};
///
/// #[derive(WriteJson)]
/// struct Tile {
/// 	x: u32,
/// 	#[json(rename = "zoom")]
/// 	z: u8,
/// 	#[json(skip)]
/// 	cached: Vec<u8>,
/// }
///
/// let tile = Tile { x: 3, z: 7, cached: vec![] };
/// assert_eq!(to_json_string(&tile, Formatting::None).unwrap(), r#"{"x":3,"zoom":7}"#);
/// ```
pub trait WriteJson {
	/// Write `self` through `writer`.
	///
	/// # Errors
	/// Fails on output errors and on values without a JSON form.
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()>;
}

impl WriteJson for () {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_null()
	}
}

impl<T: WriteJson> WriteJson for Option<T> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		match self {
			Some(value) => value.write_json(writer),
			None => writer.write_null(),
		}
	}
}

impl WriteJson for bool {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_bool(*self)
	}
}

macro_rules! impl_write_json_integer {
	($($t:ty),+ $(,)?) => {
		$(
			impl WriteJson for $t {
				fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
					writer.write_integer(self)
				}
			}
		)+
	};
}

impl_write_json_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl WriteJson for f32 {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_float(*self)
	}
}

impl WriteJson for f64 {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_float(*self)
	}
}

impl WriteJson for char {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_char(*self)
	}
}

impl WriteJson for str {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_str(self)
	}
}

impl WriteJson for String {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_str(self)
	}
}

impl WriteJson for JsonValue {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		match self {
			JsonValue::Array(array) => array.write_json(writer),
			JsonValue::Boolean(value) => writer.write_bool(*value),
			JsonValue::Null => writer.write_null(),
			JsonValue::Number(value) => writer.write_number(*value),
			JsonValue::Object(object) => object.write_json(writer),
			JsonValue::String(text) => writer.write_str(text),
		}
	}
}

impl WriteJson for JsonArray {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_array(self.iter())
	}
}

impl WriteJson for JsonObject {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_object(self.iter())
	}
}

impl<T: WriteJson> WriteJson for [T] {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_array(self.iter())
	}
}

impl<T: WriteJson, const N: usize> WriteJson for [T; N] {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_array(self.iter())
	}
}

impl<T: WriteJson> WriteJson for Vec<T> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_array(self.iter())
	}
}

impl<T: WriteJson> WriteJson for VecDeque<T> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_array(self.iter())
	}
}

impl<T: WriteJson> WriteJson for BTreeSet<T> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_array(self.iter())
	}
}

impl<K: AsRef<str>, V: WriteJson> WriteJson for BTreeMap<K, V> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_object(self.iter())
	}
}

/// Entries are written in the map's iteration order.
impl<K: AsRef<str>, V: WriteJson, S: BuildHasher> WriteJson for HashMap<K, V, S> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		writer.write_object(self.iter())
	}
}

impl<T: WriteJson + ?Sized> WriteJson for Box<T> {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		(**self).write_json(writer)
	}
}

impl<T: WriteJson + ?Sized> WriteJson for &T {
	fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
		(**self).write_json(writer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::{Formatting, to_json_string};
	use rstest::rstest;

	fn compact<T: WriteJson + ?Sized>(value: &T) -> String {
		to_json_string(value, Formatting::None).unwrap()
	}

	#[test]
	fn null_like_values() {
		assert_eq!(compact(&()), "null");
		assert_eq!(compact(&None::<u8>), "null");
		assert_eq!(compact(&Some(5u8)), "5");
		assert_eq!(compact(&JsonValue::Null), "null");
	}

	#[rstest]
	#[case(compact(&true), "true")]
	#[case(compact(&false), "false")]
	#[case(compact(&0u8), "0")]
	#[case(compact(&-128i8), "-128")]
	#[case(compact(&u64::MAX), "18446744073709551615")]
	#[case(compact(&i128::MIN), "-170141183460469231731687303715884105728")]
	#[case(compact(&42.0f64), "42")]
	#[case(compact(&0.1f32), "0.1")]
	#[case(compact(&'x'), "\"x\"")]
	#[case(compact(&'"'), "\"\\\"\"")]
	#[case(compact("text"), "\"text\"")]
	#[case(compact(&String::from("tab\there")), "\"tab\\there\"")]
	fn primitives(#[case] actual: String, #[case] expected: &str) {
		assert_eq!(actual, expected);
	}

	#[test]
	fn sequences() {
		assert_eq!(compact(&[1, 2, 3]), "[1,2,3]");
		assert_eq!(compact(&[1u8, 2][..]), "[1,2]");
		assert_eq!(compact(&Vec::<bool>::new()), "[]");
		assert_eq!(compact(&VecDeque::from([1.5, 2.5])), "[1.5,2.5]");
		assert_eq!(compact(&BTreeSet::from(["b", "a"])), r#"["a","b"]"#);
		assert_eq!(compact(&vec![vec!['a'], vec![]]), r#"[["a"],[]]"#);
	}

	#[test]
	fn mappings() {
		let map = BTreeMap::from([("b", 2), ("a", 1)]);
		assert_eq!(compact(&map), r#"{"a":1,"b":2}"#);

		let map = HashMap::from([(String::from("only"), vec![Some(1), None])]);
		assert_eq!(compact(&map), r#"{"only":[1,null]}"#);
	}

	#[test]
	fn heterogeneous_sequences() {
		let items: Vec<Box<dyn WriteJson>> = vec![Box::new(1), Box::new("two"), Box::new(()), Box::new(vec![3.5])];
		assert_eq!(compact(&items), r#"[1,"two",null,[3.5]]"#);

		let refs: [&dyn WriteJson; 2] = [&true, &JsonValue::from("v")];
		assert_eq!(compact(&refs), r#"[true,"v"]"#);
	}

	#[test]
	fn json_values() {
		let value = JsonValue::from(vec![("list", JsonValue::from(vec![1, 2])), ("flag", JsonValue::from(false))]);
		assert_eq!(compact(&value), r#"{"list":[1,2],"flag":false}"#);
		assert_eq!(compact(value.as_object().unwrap()), r#"{"list":[1,2],"flag":false}"#);
		assert_eq!(compact(value.get("list").unwrap().as_array().unwrap()), "[1,2]");
	}

	struct Celsius(f64);

	impl WriteJson for Celsius {
		fn write_json(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
			writer.write_object([("celsius", self.0)])
		}
	}

	#[test]
	fn hand_written_impl_nests_with_indentation() {
		let readings = vec![Celsius(21.5), Celsius(-3.0)];
		assert_eq!(
			to_json_string(&readings, Formatting::Spaces).unwrap(),
			"[\n    {\n        \"celsius\": 21.5\n    },\n    {\n        \"celsius\": -3\n    }\n]"
		);
	}
}
