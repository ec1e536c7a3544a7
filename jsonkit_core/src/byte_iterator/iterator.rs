//! A byte-level iterator over a reader source with optional debug support.
//!
//! The `ByteIterator` struct provides an iterator interface over a byte stream from any type implementing `std::io::Read`.
//! It supports peeking at the next byte without consuming it, advancing the iterator, and consuming bytes one by one.
//! When debug mode is enabled, it maintains a ring buffer of recently read bytes which is attached to errors.

use crate::error::JsonError;
use anyhow::{Error, Result};
use std::io::{ErrorKind, Read};

const DEBUG_RING_BUFFER_SIZE: usize = 16;
const BUFFER_SIZE: usize = 4096;

/// An iterator over bytes from a reader source with support for peeking, consuming, and error reporting.
///
/// # Fields
///
/// * `buffer` - Internal buffer for reading bytes from the source.
/// * `buffer_len` - Number of valid bytes currently in the buffer.
/// * `buffer_pos` - Current position within the buffer.
/// * `source` - The underlying byte source implementing `Read`.
/// * `peeked_byte` - The next byte to be consumed, if any.
/// * `position` - One past the absolute position of `peeked_byte` in the byte stream.
/// * `is_debug_enabled` - Flag indicating if debug mode is active.
/// * `debug_buffer` - Ring buffer storing recently read bytes for error snippets.
pub struct ByteIterator<'a> {
	buffer: Box<[u8; BUFFER_SIZE]>,
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	is_debug_enabled: bool,
	debug_buffer: [u8; DEBUG_RING_BUFFER_SIZE],
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` from a reader source.
	///
	/// * `reader` - The source implementing `Read` to iterate bytes from.
	/// * `debug` - Enables debug mode which maintains a ring buffer of recently read bytes.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			buffer: Box::new([0; BUFFER_SIZE]),
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			is_debug_enabled: debug,
			debug_buffer: [0; DEBUG_RING_BUFFER_SIZE],
		};
		instance.fill_buffer();
		instance.advance();
		instance
	}

	/// Refills the buffer. A failing source ends the stream; the failure is logged.
	fn fill_buffer(&mut self) {
		self.buffer_pos = 0;
		self.buffer_len = loop {
			match self.source.read(&mut self.buffer[..]) {
				Ok(len) => break len,
				Err(e) if e.kind() == ErrorKind::Interrupted => {}
				Err(e) => {
					log::warn!("reading JSON input failed at byte {}, treating as end of input: {e}", self.position);
					break 0;
				}
			}
		};
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			if self.buffer_len == 0 && self.position > 0 {
				return None;
			}
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	fn snippet(&self) -> Option<String> {
		if !self.is_debug_enabled {
			return None;
		}
		let (start_index, length) = if self.position < DEBUG_RING_BUFFER_SIZE {
			(0, self.position - 1)
		} else {
			(self.position % DEBUG_RING_BUFFER_SIZE, DEBUG_RING_BUFFER_SIZE - 1)
		};

		let debug_snapshot: Vec<u8> = self
			.debug_buffer
			.iter()
			.cycle()
			.skip(start_index)
			.take(length)
			.copied()
			.collect();

		let mut debug_output = String::from_utf8_lossy(&debug_snapshot).into_owned();
		if self.peeked_byte.is_none() {
			debug_output.push_str("<EOF>");
		}
		(!debug_output.is_empty()).then_some(debug_output)
	}

	/// Builds a [`JsonError::MalformedInput`] at the position of the peeked byte.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		Error::new(JsonError::MalformedInput {
			message: msg.to_string(),
			position: self.position - 1,
			snippet: self.snippet(),
		})
	}

	/// Builds a [`JsonError::UnexpectedEndOfInput`] at the current position.
	#[must_use]
	pub fn format_end_error(&self) -> Error {
		Error::new(JsonError::UnexpectedEndOfInput {
			position: self.position - 1,
			snippet: self.snippet(),
		})
	}

	/// Absolute position of the peeked byte in the stream.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position - 1
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Advances the iterator to the next byte, updating the peeked byte and debug buffer if enabled.
	#[inline]
	pub fn advance(&mut self) {
		self.peeked_byte = self.next_byte();
		if self.is_debug_enabled
			&& let Some(byte) = self.peeked_byte
		{
			let index = self.position % DEBUG_RING_BUFFER_SIZE;
			self.debug_buffer[index] = byte;
		}
		self.position += 1;
	}

	/// Consumes and returns the current peeked byte, advancing the iterator.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Consumes and returns the next byte.
	///
	/// # Errors
	///
	/// Returns [`JsonError::UnexpectedEndOfInput`] at the end of the stream.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peeked_byte {
			self.advance();
			Ok(current_byte)
		} else {
			Err(self.format_end_error())
		}
	}

	/// Returns the peeked byte without advancing.
	///
	/// # Errors
	///
	/// Returns [`JsonError::UnexpectedEndOfInput`] at the end of the stream.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_end_error())
	}

	/// Skips over any ASCII whitespace bytes, advancing the iterator until a non-whitespace byte or end is reached.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}
}
