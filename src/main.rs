//! Daemonconf CLI - platform configuration of the container daemon
//!
//! Entry point for the daemonconf command-line application.

use anyhow::Result;
use clap::Parser;

use daemonconf::cli::output::{display_error, OutputConfig};
use daemonconf::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);
    output_config.apply_global();

    // RUST_LOG directives win over the -v level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(output_config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
