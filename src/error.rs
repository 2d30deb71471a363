//! Error types for daemonconf
//!
//! Domain-specific error types using thiserror. The `Display` text of each
//! variant is what the daemon prints verbatim before aborting startup.

use thiserror::Error;

/// Hard configuration validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field is set that only has meaning on another platform family
    #[error("{field} can only be configured on {platform}")]
    UnsupportedField {
        field: &'static str,
        platform: &'static str,
    },

    /// An exec-option that is only recognized on another platform family
    #[error("option '{name}' is only supported on {platform}")]
    UnsupportedExecOpt {
        name: String,
        platform: &'static str,
    },

    /// An exec-option this platform does not know about
    #[error("unknown option: '{name}'")]
    UnknownExecOpt { name: String },

    /// An exec-option string that is not `name=value`
    #[error("invalid exec-opt ({opt}): must be formatted 'opt=value'")]
    MalformedExecOpt { opt: String },

    /// Negative default-network MTU
    #[error("invalid default MTU: {mtu}")]
    InvalidMtu { mtu: i32 },

    /// Default runtime that is neither built-in nor registered
    #[error("specified default runtime '{name}' does not exist")]
    UnknownDefaultRuntime { name: String },
}

/// Non-fatal configuration deviations
///
/// These are logged at WARN level and never block daemon startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// MTU set for the default network, which this platform ignores
    #[error("WARNING: MTU for the default network is not configurable on Windows, and this option will be ignored.")]
    IgnoredMtu { mtu: i32 },
}
