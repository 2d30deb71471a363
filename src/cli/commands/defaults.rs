//! CLI command for `daemonconf defaults`
//!
//! Resolves the platform default paths from the process environment and
//! validates the result.

use anyhow::Result;

use crate::cli::output::{is_json, print_field, print_info, print_success};
use crate::core::config::Config;
use crate::infra::env::ProcessEnv;

/// Execute the defaults command
pub fn execute() -> Result<()> {
    let config = Config::with_platform_defaults(&ProcessEnv);
    config.validate()?;

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    print_info("Platform defaults");
    print_field("data-root", &config.root.display().to_string());
    print_field("exec-root", &config.exec_root.display().to_string());
    print_field("pidfile", &config.pidfile.display().to_string());
    print_success("Defaults are valid");

    Ok(())
}
