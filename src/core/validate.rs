//! Configuration validation
//!
//! [`validate_platform_config`] is the legacy entry point and only checks the
//! platform rules. [`validate`] supersedes it: it runs the same platform rules
//! and then checks the MTU range, the exec-options and the default runtime.
//!
//! Hard failures are returned as [`ConfigError`]. Deviations the daemon
//! tolerates are collected as [`ConfigWarning`] and logged at WARN level.

use tracing::warn;

use crate::config::defaults::{DEFAULT_NETWORK_MTU, LINUX_FIELD_PLATFORM};
use crate::config::runtimes::{is_permissible_c8d_runtime_name, DefaultRuntime};
use crate::core::config::Config;
use crate::core::exec_opts::check_exec_opt;
use crate::error::{ConfigError, ConfigWarning};

/// Outcome of the platform rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformReport {
    /// Tolerated deviations, in rule order
    pub warnings: Vec<ConfigWarning>,
    /// First hard failure, if any
    pub error: Option<ConfigError>,
}

impl PlatformReport {
    /// Whether no rule failed
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Log the warnings and return the failure, if any
    pub fn into_result(self) -> Result<(), ConfigError> {
        for warning in &self.warnings {
            warn!("{warning}");
        }
        self.error.map_or(Ok(()), Err)
    }
}

/// Run the platform rules without logging
///
/// Every rule runs; warnings are collected even when a later rule fails.
pub fn check_platform_config(config: &Config) -> PlatformReport {
    let mut report = PlatformReport::default();

    let mtu = config.mtu();
    if mtu != 0 && mtu != DEFAULT_NETWORK_MTU {
        report.warnings.push(ConfigWarning::IgnoredMtu { mtu });
    }

    if !config.firewall_backend.is_empty() {
        report.error = Some(ConfigError::UnsupportedField {
            field: "firewall-backend",
            platform: LINUX_FIELD_PLATFORM,
        });
    }

    report
}

/// Check the platform-specific settings of `config`
///
/// Superseded by [`validate`], which runs these rules too.
pub fn validate_platform_config(config: &Config) -> Result<(), ConfigError> {
    check_platform_config(config).into_result()
}

/// Check a fully merged configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_platform_config(config)?;
    validate_mtu(config.mtu())?;

    for opt in &config.exec_options {
        check_exec_opt(opt)?;
    }

    validate_default_runtime(config)
}

fn validate_mtu(mtu: i32) -> Result<(), ConfigError> {
    if mtu < 0 {
        return Err(ConfigError::InvalidMtu { mtu });
    }
    Ok(())
}

/// The default runtime must be built-in, registered, or a containerd shim name
fn validate_default_runtime(config: &Config) -> Result<(), ConfigError> {
    let DefaultRuntime::Named(name) = &config.default_runtime else {
        return Ok(());
    };

    if config.default_runtime.is_builtin()
        || config.runtimes.contains_key(name)
        || is_permissible_c8d_runtime_name(name)
    {
        return Ok(());
    }

    Err(ConfigError::UnknownDefaultRuntime { name: name.clone() })
}
