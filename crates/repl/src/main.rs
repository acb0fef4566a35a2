//! Sprig REPL binary.
//!
//! Reads one command per line from stdin and prints the tree after each.

mod cli;
mod command;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use session::{Flow, Session};
use sprig_editor::EditorConfig;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => EditorConfig::load(path)
			.with_context(|| format!("loading config from {}", path.display()))?,
		None => EditorConfig::default(),
	};
	info!(history_limit = config.history_limit, "starting session");

	let mut session = Session::new(config);
	let stdin = io::stdin();
	let mut out = io::stdout().lock();
	writeln!(out, "{}", session.show())?;

	for line in stdin.lock().lines() {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}
		let result = command::parse(&line)
			.map_err(anyhow::Error::from)
			.and_then(|command| session.run(command).map_err(anyhow::Error::from));
		match result {
			Ok(Flow::Show(text)) => writeln!(out, "{text}")?,
			Ok(Flow::Quit) => break,
			Err(err) => writeln!(out, "! {err}")?,
		}
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("sprig_editor=trace,sprig=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
