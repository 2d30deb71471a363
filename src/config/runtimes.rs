//! Built-in container runtime registry
//!
//! The daemon recognizes two runtimes natively on this platform. Any other
//! runtime name has to be registered in the daemon configuration or be a
//! containerd shim name.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Stock value of the `default-runtime` setting
///
/// Empty on this platform: the runtime is auto-detected from other options.
pub const STOCK_RUNTIME_NAME: &str = "";

/// Legacy HCS shim runtime
pub const WINDOWS_V1_RUNTIME_NAME: &str = "com.docker.hcsshim.v1";

/// containerd runhcs shim runtime
pub const WINDOWS_V2_RUNTIME_NAME: &str = "io.containerd.runhcs.v1";

/// Runtime names known to the daemon without registration
pub const BUILTIN_RUNTIMES: [&str; 2] = [WINDOWS_V1_RUNTIME_NAME, WINDOWS_V2_RUNTIME_NAME];

/// Returns the built-in runtime names
#[must_use]
pub fn builtin_runtimes() -> &'static [&'static str] {
    &BUILTIN_RUNTIMES
}

/// Check whether `name` is a built-in runtime
#[must_use]
pub fn is_builtin_runtime(name: &str) -> bool {
    BUILTIN_RUNTIMES.contains(&name)
}

/// Check whether containerd would accept `name` as a shim runtime
///
/// Paths are refused so containerd never treats the name as a shim binary
/// location. Otherwise the name must split on `.` into at least two parts
/// with a non-empty first part, e.g. `io.containerd.runhcs.v1`.
#[must_use]
pub fn is_permissible_c8d_runtime_name(name: &str) -> bool {
    if Path::new(name).is_absolute() || name.contains('/') {
        return false;
    }

    let parts: Vec<&str> = name.split('.').collect();
    parts.len() >= 2 && !parts[0].is_empty()
}

/// Selected default runtime
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DefaultRuntime {
    /// Pick the runtime from the isolation mode and other options
    #[default]
    AutoDetect,
    /// A named runtime
    Named(String),
}

impl DefaultRuntime {
    /// Interpret a `default-runtime` value
    pub fn from_name(name: &str) -> Self {
        if name == STOCK_RUNTIME_NAME {
            Self::AutoDetect
        } else {
            Self::Named(name.to_string())
        }
    }

    /// The configured name, or [`STOCK_RUNTIME_NAME`] for auto-detection
    pub fn name(&self) -> &str {
        match self {
            Self::AutoDetect => STOCK_RUNTIME_NAME,
            Self::Named(name) => name,
        }
    }

    /// Whether this selects one of the built-in runtimes
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Named(name) if is_builtin_runtime(name))
    }
}

impl From<String> for DefaultRuntime {
    fn from(name: String) -> Self {
        if name.is_empty() {
            Self::AutoDetect
        } else {
            Self::Named(name)
        }
    }
}

impl From<DefaultRuntime> for String {
    fn from(runtime: DefaultRuntime) -> Self {
        match runtime {
            DefaultRuntime::AutoDetect => STOCK_RUNTIME_NAME.to_string(),
            DefaultRuntime::Named(name) => name,
        }
    }
}

impl fmt::Display for DefaultRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoDetect => write!(f, "auto-detect"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_runtimes() {
        assert_eq!(builtin_runtimes().len(), 2);
        assert!(is_builtin_runtime("com.docker.hcsshim.v1"));
        assert!(is_builtin_runtime("io.containerd.runhcs.v1"));
        assert!(!is_builtin_runtime("runc"));
        assert!(!is_builtin_runtime(STOCK_RUNTIME_NAME));
    }

    #[test]
    fn test_stock_name_is_auto_detect() {
        assert_eq!(DefaultRuntime::from_name(""), DefaultRuntime::AutoDetect);
        assert_eq!(DefaultRuntime::AutoDetect.name(), "");
        assert!(!DefaultRuntime::AutoDetect.is_builtin());
    }

    #[test]
    fn test_named_runtime() {
        let runtime = DefaultRuntime::from_name(WINDOWS_V2_RUNTIME_NAME);
        assert_eq!(runtime.name(), WINDOWS_V2_RUNTIME_NAME);
        assert!(runtime.is_builtin());
        assert_eq!(runtime.to_string(), WINDOWS_V2_RUNTIME_NAME);
    }

    #[test]
    fn test_permissible_c8d_names() {
        assert!(is_permissible_c8d_runtime_name("io.containerd.runhcs.v1"));
        assert!(is_permissible_c8d_runtime_name("shim.v2"));
        assert!(!is_permissible_c8d_runtime_name("runc"));
        assert!(is_permissible_c8d_runtime_name("io..v1"));
        assert!(is_permissible_c8d_runtime_name("a.."));
        assert!(!is_permissible_c8d_runtime_name(".v1"));
        assert!(!is_permissible_c8d_runtime_name(""));
    }

    #[test]
    fn test_paths_are_not_runtime_names() {
        assert!(!is_permissible_c8d_runtime_name("/usr/local/bin/shim"));
        assert!(!is_permissible_c8d_runtime_name("/usr/local/bin/shim.v1"));
        assert!(!is_permissible_c8d_runtime_name("a/b.v1"));
        assert!(!is_permissible_c8d_runtime_name("shims/io.containerd.runhcs.v1"));
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let json = serde_json::to_string(&DefaultRuntime::AutoDetect).unwrap();
        assert_eq!(json, "\"\"");
        let runtime: DefaultRuntime = serde_json::from_str("\"custom.shim\"").unwrap();
        assert_eq!(runtime, DefaultRuntime::Named("custom.shim".to_string()));
    }
}
