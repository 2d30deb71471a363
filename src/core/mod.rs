//! Core logic module
//!
//! This module contains the configuration model and the platform rules.
//! It has NO I/O operations - environment access goes through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`config`] - Daemon configuration model and platform queries
//! - [`defaults`] - Platform default paths
//! - [`validate`] - Platform and whole-configuration validation
//! - [`exec_opts`] - Exec-option table and checks

pub mod config;
pub mod defaults;
pub mod exec_opts;
pub mod validate;
