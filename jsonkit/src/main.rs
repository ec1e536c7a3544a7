mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

/// Format JSON documents and look up values inside them.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[command(alias = "fmt")]
	/// Re-indent a JSON document
	Format(tools::format::Subcommand),

	/// Print the value found at a path inside a JSON document
	Get(tools::get::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Format(arguments) => tools::format::run(arguments),
		Commands::Get(arguments) => tools::get::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use super::Cli;
	use clap::Parser;

	#[test]
	fn help_lists_subcommands() {
		let err = Cli::try_parse_from(["jsonkit", "--help"]).unwrap_err().to_string();
		assert!(err.contains("Format JSON documents and look up values inside them."), "{err}");
		assert!(err.contains("Usage: jsonkit [OPTIONS] <COMMAND>"), "{err}");
		assert!(err.contains("Re-indent a JSON document"), "{err}");
		assert!(err.contains("Print the value found at a path inside a JSON document"), "{err}");
	}

	#[test]
	fn missing_subcommand() {
		let err = Cli::try_parse_from(["jsonkit"]).unwrap_err();
		assert_eq!(err.exit_code(), 2);
		assert!(err.to_string().contains("Usage: jsonkit [OPTIONS] <COMMAND>"), "{err}");
	}

	#[test]
	fn version() {
		let err = Cli::try_parse_from(["jsonkit", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("jsonkit "), "{err}");
	}

	#[test]
	fn verbosity_flags_parse() {
		let cli = Cli::try_parse_from(["jsonkit", "-vv", "get", "file.json", "a"]).unwrap();
		assert_eq!(cli.verbose.log_level_filter(), log::LevelFilter::Info);
	}
}
