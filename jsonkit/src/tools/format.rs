use super::read_document;
use anyhow::Result;
use clap::{Args, ValueEnum};
use jsonkit_core::json::{Formatting, write_json};
use std::{
	io::{self, Write},
	path::PathBuf,
};

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file to format, stdin if omitted or "-"
	input_file: Option<PathBuf>,

	/// whitespace to insert
	#[arg(long, short, value_enum, default_value_t = Indent::Spaces)]
	indent: Indent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Indent {
	/// everything on one line
	None,
	/// four spaces per level
	Spaces,
	/// one tab per level
	Tabs,
}

impl From<Indent> for Formatting {
	fn from(indent: Indent) -> Self {
		match indent {
			Indent::None => Formatting::None,
			Indent::Spaces => Formatting::Spaces,
			Indent::Tabs => Formatting::Tabs,
		}
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let value = read_document(arguments.input_file.as_deref())?;
	log::info!("formatting a JSON {} with {:?}", value.type_as_str(), arguments.indent);

	let mut stdout = io::stdout().lock();
	write_json(&mut stdout, &value, arguments.indent.into())?;
	writeln!(stdout)?;
	Ok(())
}
