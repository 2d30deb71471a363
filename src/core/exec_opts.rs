//! Exec-option validation
//!
//! Exec-options are `name=value` daemon settings that affect how containers
//! are executed. Every option name this platform recognizes is listed in
//! [`EXEC_OPT_RULES`]; names not listed there are rejected.

use tracing::debug;

use crate::config::defaults::LINUX_EXEC_OPT_PLATFORM;
use crate::error::ConfigError;

/// How an exec-option is treated on this platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOptRule {
    /// Accepted; the value is checked when the daemon applies it
    Accept,
    /// Only meaningful on another platform family
    Unsupported { platform: &'static str },
}

/// Recognized exec-option names
pub const EXEC_OPT_RULES: &[(&str, ExecOptRule)] = &[
    // Isolation values are checked by the daemon when it sets the default isolation.
    ("isolation", ExecOptRule::Accept),
    (
        "native.cgroupdriver",
        ExecOptRule::Unsupported {
            platform: LINUX_EXEC_OPT_PLATFORM,
        },
    ),
];

/// Look up the rule for an exec-option name
pub fn exec_opt_rule(name: &str) -> Option<ExecOptRule> {
    EXEC_OPT_RULES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, rule)| *rule)
}

/// Check whether an exec-option and its value are valid on this platform
pub fn validate_platform_exec_opt(name: &str, value: &str) -> Result<(), ConfigError> {
    debug!(option = name, value, "Checking exec-opt");

    match exec_opt_rule(name) {
        Some(ExecOptRule::Accept) => Ok(()),
        Some(ExecOptRule::Unsupported { platform }) => Err(ConfigError::UnsupportedExecOpt {
            name: name.to_string(),
            platform,
        }),
        None => Err(ConfigError::UnknownExecOpt {
            name: name.to_string(),
        }),
    }
}

/// Split an exec-option string into its lower-cased name and value
///
/// Whitespace around both parts is trimmed; neither part may be empty.
pub fn parse_exec_opt(opt: &str) -> Result<(String, String), ConfigError> {
    let malformed = || ConfigError::MalformedExecOpt {
        opt: opt.to_string(),
    };

    let (name, value) = opt.split_once('=').ok_or_else(malformed)?;
    let name = name.trim().to_lowercase();
    let value = value.trim();

    if name.is_empty() || value.is_empty() {
        return Err(malformed());
    }

    Ok((name, value.to_string()))
}

/// Parse and check one `name=value` exec-option string
pub fn check_exec_opt(opt: &str) -> Result<(), ConfigError> {
    let (name, value) = parse_exec_opt(opt)?;
    validate_platform_exec_opt(&name, &value)
}
