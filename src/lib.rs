//! Daemonconf - platform defaults and validation for the container daemon
//!
//! This library resolves the Windows-specific part of the daemon
//! configuration: default filesystem paths, the default NAT network
//! settings, and the platform constraints on configuration fields.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Diagnostic command-line interface and output formatting
//! - [`core`] - Configuration model, default resolution and validation (no I/O)
//! - [`infra`] - Infrastructure layer (process environment access)
//! - [`config`] - Constants and the built-in runtime registry
//! - [`error`] - Error and warning types
//!
//! # Usage
//!
//! ```
//! use daemonconf::core::config::Config;
//! use daemonconf::core::defaults::set_platform_defaults;
//! use daemonconf::core::validate::validate;
//! use daemonconf::infra::env::MapEnv;
//!
//! let env = MapEnv::new().with("ProgramData", "C:\\ProgramData");
//! let mut config = Config::default();
//! set_platform_defaults(&mut config, &env);
//! assert!(validate(&config).is_ok());
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
