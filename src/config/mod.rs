//! Configuration constants
//!
//! - [`defaults`] - Default values and well-known names
//! - [`runtimes`] - Built-in container runtime registry

pub mod defaults;
pub mod runtimes;
