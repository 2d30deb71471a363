//! Daemon configuration model
//!
//! [`Config`] holds the settings shared by every platform in
//! [`CommonConfig`]; this platform adds no fields of its own. JSON keys match
//! the names of the daemon's command-line flags.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::runtimes::DefaultRuntime;
use crate::core::defaults::set_platform_defaults;
use crate::core::validate;
use crate::error::ConfigError;
use crate::infra::env::EnvSource;

/// Configuration of the container daemon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings shared by all platforms
    #[serde(flatten)]
    pub common: CommonConfig,
}

/// Cross-platform daemon settings used by this crate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Base data directory
    #[serde(rename = "data-root", skip_serializing_if = "path_is_empty")]
    pub root: PathBuf,

    /// Execution state directory
    #[serde(rename = "exec-root", skip_serializing_if = "path_is_empty")]
    pub exec_root: PathBuf,

    /// Pid-file location
    #[serde(skip_serializing_if = "path_is_empty")]
    pub pidfile: PathBuf,

    /// Default network settings
    #[serde(flatten)]
    pub bridge: BridgeConfig,

    /// Firewall backend; empty when unset
    #[serde(rename = "firewall-backend", skip_serializing_if = "String::is_empty")]
    pub firewall_backend: String,

    /// Exec-options as `name=value` strings
    #[serde(rename = "exec-opts", skip_serializing_if = "Vec::is_empty")]
    pub exec_options: Vec<String>,

    /// Runtime used when a container does not ask for one
    #[serde(rename = "default-runtime", skip_serializing_if = "is_auto_detect")]
    pub default_runtime: DefaultRuntime,

    /// User-registered runtimes by name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub runtimes: BTreeMap<String, Runtime>,
}

/// Parameters of the bridge driver and the default bridge network
///
/// On this platform "bridge" means the nat driver and the default nat
/// network. The nat driver has no parameters of its own, so this only carries
/// the default network settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(flatten)]
    pub default_bridge: DefaultBridgeConfig,
}

/// Default nat network settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultBridgeConfig {
    #[serde(flatten)]
    pub common: CommonBridgeConfig,

    /// Accepted for compatibility with the `--mtu` flag but ignored here
    #[serde(skip_serializing_if = "is_zero")]
    pub mtu: i32,
}

/// Bridge settings shared by all platforms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonBridgeConfig {
    /// Network interface to attach the default network to
    #[serde(rename = "bridge", skip_serializing_if = "String::is_empty")]
    pub iface: String,

    /// Subnet for container addresses on the default network
    #[serde(rename = "fixed-cidr", skip_serializing_if = "String::is_empty")]
    pub fixed_cidr: String,
}

/// A runtime registered in the daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Runtime {
    /// Runtime binary or shim
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,

    /// Extra arguments passed to the runtime
    #[serde(rename = "runtimeArgs", skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

#[allow(clippy::ptr_arg)]
fn path_is_empty(path: &PathBuf) -> bool {
    path.as_os_str().is_empty()
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i32) -> bool {
    *value == 0
}

fn is_auto_detect(runtime: &DefaultRuntime) -> bool {
    *runtime == DefaultRuntime::AutoDetect
}

impl Deref for Config {
    type Target = CommonConfig;

    fn deref(&self) -> &Self::Target {
        &self.common
    }
}

impl DerefMut for Config {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.common
    }
}

impl Deref for BridgeConfig {
    type Target = DefaultBridgeConfig;

    fn deref(&self) -> &Self::Target {
        &self.default_bridge
    }
}

impl DerefMut for BridgeConfig {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.default_bridge
    }
}

impl Config {
    /// Allocate a configuration with platform defaults applied
    #[must_use]
    pub fn with_platform_defaults(env: &impl EnvSource) -> Self {
        let mut config = Self::default();
        set_platform_defaults(&mut config, env);
        config
    }

    /// MTU configured for the default network, 0 when unset
    #[must_use]
    pub fn mtu(&self) -> i32 {
        self.common.bridge.mtu
    }

    /// User-configured exec-root
    ///
    /// Always empty: the exec-root cannot be configured separately here.
    #[must_use]
    pub fn get_exec_root(&self) -> &str {
        ""
    }

    /// Configured path of the init binary
    ///
    /// Always empty: containers on this platform have no separate init.
    #[must_use]
    pub fn get_init_path(&self) -> &str {
        ""
    }

    /// Whether swarm mode can be enabled with this configuration
    pub fn is_swarm_compatible(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Whether the daemon runs rootless; never on this platform
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        false
    }

    /// Check platform-specific settings
    #[deprecated(note = "only the platform rules are checked; use `Config::validate` instead")]
    pub fn validate_platform_config(&self) -> Result<(), ConfigError> {
        validate::validate_platform_config(self)
    }

    /// Check the merged configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate::validate(self)
    }
}
