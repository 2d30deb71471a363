//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::process::{Command, Output};

use daemonconf::core::config::Config;
use daemonconf::infra::env::MapEnv;

/// Application-data directory used by the fixtures
#[allow(dead_code)]
pub const PROGRAM_DATA: &str = "/c/ProgramData";

/// Environment with `ProgramData` set to [`PROGRAM_DATA`]
#[allow(dead_code)]
pub fn program_data_env() -> MapEnv {
    MapEnv::new().with("ProgramData", PROGRAM_DATA)
}

/// Configuration with platform defaults from [`program_data_env`]
#[allow(dead_code)]
pub fn defaulted_config() -> Config {
    Config::with_platform_defaults(&program_data_env())
}

/// Run the daemonconf binary with `ProgramData` set to `program_data`
#[allow(dead_code)]
pub fn run_daemonconf(program_data: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_daemonconf"));
    cmd.env_remove("ProgramData")
        .env_remove("PROGRAMDATA")
        .env_remove("programdata")
        .env_remove("RUST_LOG");
    if let Some(dir) = program_data {
        cmd.env("ProgramData", dir);
    }
    cmd.args(args);
    cmd.output().expect("Failed to execute daemonconf")
}
