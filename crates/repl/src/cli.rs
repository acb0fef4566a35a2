use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(about = "Structural editing REPL for the Alpha language")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Engine configuration file (TOML)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
