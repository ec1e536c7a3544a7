//! JSON value tree, reader, writer and path resolver.
//!
//! ```rust
//! use jsonkit_core::json::{Formatting, JsonValue, to_json_string};
//!
//! let value = JsonValue::parse_str(r#"{"name": "jsonkit", "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(value.resolve(&["tags", "1"]).unwrap().as_str().unwrap(), "b");
//! assert_eq!(
//! 	to_json_string(&value, Formatting::None).unwrap(),
//! 	r#"{"name":"jsonkit","tags":["a","b"]}"#
//! );
//! ```

mod parse;
mod path;
mod read;
mod types;
mod write;

pub use jsonkit_derive::WriteJson;
pub use parse::{
	ReaderConfig, parse_json_iter, parse_json_reader, parse_json_reader_with_config, parse_json_str,
};
pub use path::{resolve, resolve_mut, try_resolve};
pub use read::read_ndjson_iter;
pub use types::{JsonArray, JsonObject, JsonValue};
pub use write::{Formatting, JsonWriter, WriteJson, escape_json_string, to_json_string, write_json};
