//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod defaults;
pub mod exec_opt;
pub mod platform;
pub mod runtimes;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the default paths resolved from the environment
    Defaults,

    /// List the built-in container runtimes
    Runtimes,

    /// Show fixed platform properties (exec-root, init path, rootless, swarm)
    Platform,

    /// Check exec-options given as name=value
    ExecOpt {
        /// Exec-options to check
        #[arg(required = true, value_name = "NAME=VALUE")]
        options: Vec<String>,
    },
}

impl Commands {
    /// Run the selected command
    pub fn run(self) -> Result<()> {
        match self {
            Self::Defaults => defaults::execute(),
            Self::Runtimes => runtimes::execute(),
            Self::Platform => platform::execute(),
            Self::ExecOpt { options } => exec_opt::execute(&options),
        }
    }
}
