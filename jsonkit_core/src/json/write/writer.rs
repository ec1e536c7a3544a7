//! [`JsonWriter`] emits JSON text into any `io::Write`, with optional indentation.

use super::{WriteJson, escape_json_string, format::format_number};
use crate::error::JsonError;
use anyhow::{Context, Error, Result};
use std::{
	any::type_name,
	fmt::{Display, LowerExp},
	io::{BufWriter, Write},
};

/// Whitespace inserted by the writer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Formatting {
	/// No whitespace at all.
	#[default]
	None,
	/// A newline before every element, indented by four spaces per level; a space after `:`.
	Spaces,
	/// Like `Spaces`, indented by one tab per level.
	Tabs,
}

impl Formatting {
	fn indent_unit(self) -> Option<&'static str> {
		match self {
			Formatting::None => None,
			Formatting::Spaces => Some("    "),
			Formatting::Tabs => Some("\t"),
		}
	}
}

/// Streams JSON tokens into an output, tracking the nesting depth for indentation.
///
/// ```rust
/// use jsonkit_core::json::{Formatting, JsonWriter};
/// let mut out = Vec::new();
/// let mut writer = JsonWriter::new(&mut out, Formatting::None);
/// writer.write_object([("id", 7)]).unwrap();
/// assert_eq!(out, br#"{"id":7}"#);
/// ```
pub struct JsonWriter<'a> {
	output: &'a mut dyn Write,
	formatting: Formatting,
	depth: usize,
}

impl<'a> JsonWriter<'a> {
	pub fn new(output: &'a mut dyn Write, formatting: Formatting) -> Self {
		Self {
			output,
			formatting,
			depth: 0,
		}
	}

	#[must_use]
	pub fn formatting(&self) -> Formatting {
		self.formatting
	}

	/// Current nesting depth: 0 at the top level, +1 inside every array or object.
	#[must_use]
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Write any [`WriteJson`] value.
	///
	/// # Errors
	/// Fails on output errors and on values without a JSON form.
	pub fn write<T: WriteJson + ?Sized>(&mut self, value: &T) -> Result<()> {
		value.write_json(self)
	}

	fn raw(&mut self, text: &str) -> Result<()> {
		self.output.write_all(text.as_bytes())?;
		Ok(())
	}

	fn newline(&mut self) -> Result<()> {
		if let Some(unit) = self.formatting.indent_unit() {
			self.raw("\n")?;
			for _ in 0..self.depth {
				self.raw(unit)?;
			}
		}
		Ok(())
	}

	/// # Errors
	/// Fails on output errors.
	pub fn write_null(&mut self) -> Result<()> {
		self.raw("null")
	}

	/// # Errors
	/// Fails on output errors.
	pub fn write_bool(&mut self, value: bool) -> Result<()> {
		self.raw(if value { "true" } else { "false" })
	}

	/// Write a float in its shortest round-trip form.
	///
	/// # Errors
	/// NaN and the infinities have no JSON form and fail with [`JsonError::UnsupportedType`].
	pub fn write_number(&mut self, value: f64) -> Result<()> {
		self.write_float(value)
	}

	pub(crate) fn write_float<F>(&mut self, value: F) -> Result<()>
	where
		F: Copy + Display + LowerExp + Into<f64>,
	{
		match format_number(value) {
			Some(text) => self.raw(&text),
			None => Err(Error::new(JsonError::UnsupportedType(format!(
				"{} ({value})",
				type_name::<F>()
			)))),
		}
	}

	/// Write an integer exactly, in decimal.
	pub(crate) fn write_integer(&mut self, value: impl Display) -> Result<()> {
		self.raw(&value.to_string())
	}

	/// Write a quoted, escaped string.
	///
	/// # Errors
	/// Fails on output errors.
	pub fn write_str(&mut self, value: &str) -> Result<()> {
		self.raw("\"")?;
		self.raw(&escape_json_string(value))?;
		self.raw("\"")
	}

	/// Write a character as a one-character string.
	///
	/// # Errors
	/// Fails on output errors.
	pub fn write_char(&mut self, value: char) -> Result<()> {
		self.write_str(value.encode_utf8(&mut [0; 4]))
	}

	/// Write a JSON array from a sequence of values.
	///
	/// # Errors
	/// Fails on output errors or when an element fails to write.
	pub fn write_array<I>(&mut self, items: I) -> Result<()>
	where
		I: IntoIterator,
		I::Item: WriteJson,
	{
		self.raw("[")?;
		self.depth += 1;
		let written = self.write_elements(items);
		self.depth -= 1;
		if written? > 0 {
			self.newline()?;
		}
		self.raw("]")
	}

	/// Write a JSON object from a sequence of key-value pairs, in the given order.
	///
	/// # Errors
	/// Fails on output errors or when a value fails to write.
	pub fn write_object<I, K, V>(&mut self, entries: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: WriteJson,
	{
		self.raw("{")?;
		self.depth += 1;
		let written = self.write_entries(entries);
		self.depth -= 1;
		if written? > 0 {
			self.newline()?;
		}
		self.raw("}")
	}

	fn write_elements<I>(&mut self, items: I) -> Result<usize>
	where
		I: IntoIterator,
		I::Item: WriteJson,
	{
		let mut count = 0usize;
		for item in items {
			if count > 0 {
				self.raw(",")?;
			}
			self.newline()?;
			item
				.write_json(self)
				.with_context(|| format!("while writing array element {count}"))?;
			count += 1;
		}
		Ok(count)
	}

	fn write_entries<I, K, V>(&mut self, entries: I) -> Result<usize>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: WriteJson,
	{
		let mut count = 0usize;
		for (key, value) in entries {
			let key = key.as_ref();
			if count > 0 {
				self.raw(",")?;
			}
			self.newline()?;
			self.write_str(key)?;
			self.raw(":")?;
			if self.formatting != Formatting::None {
				self.raw(" ")?;
			}
			value
				.write_json(self)
				.with_context(|| format!("while writing object entry '{key}'"))?;
			count += 1;
		}
		Ok(count)
	}
}

/// Write `value` as JSON to `output`, buffered and flushed.
///
/// # Errors
/// Fails on output errors and on values without a JSON form.
pub fn write_json<T: WriteJson + ?Sized>(output: impl Write, value: &T, formatting: Formatting) -> Result<()> {
	log::trace!("writing JSON with {formatting:?}");
	let mut output = BufWriter::new(output);
	JsonWriter::new(&mut output, formatting).write(value)?;
	output.flush()?;
	Ok(())
}

/// Serialize `value` to a JSON `String`.
///
/// ```rust
/// use jsonkit_core::json::{Formatting, to_json_string};
/// assert_eq!(to_json_string(&vec![1, 2], Formatting::Tabs).unwrap(), "[\n\t1,\n\t2\n]");
/// ```
///
/// # Errors
/// Fails on values without a JSON form.
pub fn to_json_string<T: WriteJson + ?Sized>(value: &T, formatting: Formatting) -> Result<String> {
	let mut buffer = Vec::new();
	JsonWriter::new(&mut buffer, formatting).write(value)?;
	Ok(String::from_utf8(buffer)?)
}
