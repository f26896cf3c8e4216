use clap::Parser;
use tracing_subscriber::EnvFilter;

use klondike_core::cli::{run, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Quiet by default; RUST_LOG takes precedence over --verbose.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("{}", run(&cli)?);
    Ok(())
}
