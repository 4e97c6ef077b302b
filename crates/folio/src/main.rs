//! Folio CLI - documentation content pipeline.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `menu`: Print the navigation menu as JSON
//! - `doc`: Print a rendered document as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DocArgs, MenuArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Folio - documentation content pipeline.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Print the navigation menu as JSON.
    Menu(MenuArgs),
    /// Print a rendered document as JSON.
    Doc(DocArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(args.execute())
        }
        Commands::Menu(args) => args.execute(),
        Commands::Doc(args) => args.execute(),
    }
}
