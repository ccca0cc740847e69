//! `weather`: decode a saved weather forecast response and print it.
//!
//! Usage:
//!   weather <FILE>
//!
//! Decode failures are printed like successful output; the exit status is 0
//! either way. Set `RUST_LOG=debug` for diagnostics on stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Decode a weather forecast JSON file")]
struct Cli {
    /// JSON response file to decode.
    file: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    println!("{}", tryjson_weather::report(&cli.file));
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
