//! Infrastructure layer
//!
//! Handles access to process state. This module is the only place where the
//! environment is read.

pub mod env;
