pub mod format;
pub mod get;

use anyhow::{Context, Result};
use jsonkit_core::json::{JsonValue, parse_json_reader};
use std::{
	fs::File,
	io::{self, BufReader},
	path::Path,
};

/// Read and parse a JSON document from a file, or from stdin when `path` is `None` or `-`.
pub fn read_document(path: Option<&Path>) -> Result<JsonValue> {
	match path {
		Some(path) if path != Path::new("-") => {
			log::debug!("reading JSON from {path:?}");
			let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
			parse_json_reader(BufReader::new(file)).with_context(|| format!("failed to parse {path:?}"))
		}
		_ => {
			log::debug!("reading JSON from stdin");
			parse_json_reader(io::stdin().lock()).context("failed to parse stdin")
		}
	}
}
