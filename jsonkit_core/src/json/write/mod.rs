//! JSON output: the [`WriteJson`] trait and the [`JsonWriter`] that drives it.

mod any;
mod format;
mod write_json;
mod writer;

pub use format::escape_json_string;
pub use write_json::WriteJson;
pub use writer::{Formatting, JsonWriter, to_json_string, write_json};
