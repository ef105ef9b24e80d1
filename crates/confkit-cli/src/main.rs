//! confkit CLI
//!
//! Inspect backend declarations and print annotated configuration stubs.
//!
//! ## Usage
//!
//! ```bash
//! confkit stub mongodb redis --logger > config.yaml
//! confkit check config.yaml
//! confkit connect config.yaml
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confkit")]
#[command(about = "Config-driven database and logger setup", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Print an annotated configuration stub
	Stub {
		/// Backend types: mongodb, postgresql, mysql, redis
		#[arg(value_name = "TYPE", required_unless_present = "logger")]
		types: Vec<String>,

		/// Append a logger declaration
		#[arg(long)]
		logger: bool,
	},

	/// Translate every declaration in a file without connecting
	Check {
		/// YAML or JSON configuration file
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},

	/// Connect every declared backend, then close
	Connect {
		/// YAML or JSON configuration file
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},
}

fn init_tracing(verbosity: u8) {
	let default_level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let mut out = io::stdout().lock();
	let result = match cli.command {
		Commands::Stub { types, logger } => commands::run_stub(&types, logger, &mut out),
		Commands::Check { file } => commands::run_check(&file, &mut out).await,
		Commands::Connect { file } => commands::run_connect(&file, &mut out).await,
	};

	if let Err(e) = result {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}
