//! Error kinds raised by the reader, the writer and the path resolver.
//!
//! Public functions return `anyhow::Result`. The root cause of every error they produce is a
//! [`JsonError`], usually wrapped in one or more context messages. Use [`JsonError::find`] to
//! get at the kind.

use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JsonError {
	/// The input violates the JSON grammar.
	MalformedInput {
		message: String,
		position: usize,
		snippet: Option<String>,
	},
	/// The input ended where more was required.
	UnexpectedEndOfInput { position: usize, snippet: Option<String> },
	/// The writer has no JSON representation for the given value.
	UnsupportedType(String),
	/// Path resolution failed at `segment`, the `index`-th segment of the path.
	PathNotFound { segment: String, index: usize },
}

impl JsonError {
	/// Find the `JsonError` at the root of an error chain.
	#[must_use]
	pub fn find(error: &anyhow::Error) -> Option<&JsonError> {
		error.downcast_ref::<JsonError>()
	}

	#[must_use]
	pub fn is_malformed_input(&self) -> bool {
		matches!(self, JsonError::MalformedInput { .. })
	}

	#[must_use]
	pub fn is_unexpected_end(&self) -> bool {
		matches!(self, JsonError::UnexpectedEndOfInput { .. })
	}

	#[must_use]
	pub fn is_unsupported_type(&self) -> bool {
		matches!(self, JsonError::UnsupportedType(_))
	}

	#[must_use]
	pub fn is_path_not_found(&self) -> bool {
		matches!(self, JsonError::PathNotFound { .. })
	}
}

fn write_snippet(f: &mut fmt::Formatter<'_>, snippet: Option<&String>) -> fmt::Result {
	match snippet {
		Some(snippet) => write!(f, ": {snippet}"),
		None => Ok(()),
	}
}

impl Display for JsonError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			JsonError::MalformedInput {
				message,
				position,
				snippet,
			} => {
				write!(f, "{message} at position {position}")?;
				write_snippet(f, snippet.as_ref())
			}
			JsonError::UnexpectedEndOfInput { position, snippet } => {
				write!(f, "unexpected end of input at position {position}")?;
				write_snippet(f, snippet.as_ref())
			}
			JsonError::UnsupportedType(name) => write!(f, "type '{name}' can not be serialized as JSON"),
			JsonError::PathNotFound { segment, index } => {
				write!(f, "path segment {index} ('{segment}') not found")
			}
		}
	}
}

impl std::error::Error for JsonError {}
