use super::read_document;
use anyhow::Result;
use clap::Args;
use jsonkit_core::json::{Formatting, write_json};
use std::{
	io::{self, Write},
	path::PathBuf,
};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file to read, "-" for stdin
	#[arg(required = true)]
	input_file: PathBuf,

	/// path segments: object keys, or indexes into arrays
	#[arg(required = true)]
	path: Vec<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let document = read_document(Some(arguments.input_file.as_path()))?;
	let value = document.resolve(&arguments.path)?;
	log::debug!("found a {} at {:?}", value.type_as_str(), arguments.path);

	let mut stdout = io::stdout().lock();
	write_json(&mut stdout, value, Formatting::None)?;
	writeln!(stdout)?;
	Ok(())
}
