//! CLI command for `daemonconf platform`
//!
//! Reports the platform properties the daemon asks its configuration for.

use anyhow::Result;

use crate::cli::output::{is_json, print_field, print_info};
use crate::config::defaults::DEFAULT_NETWORK_MTU;
use crate::core::config::Config;
use crate::infra::env::ProcessEnv;

/// Execute the platform command
pub fn execute() -> Result<()> {
    let config = Config::with_platform_defaults(&ProcessEnv);
    let swarm_compatible = config.is_swarm_compatible().is_ok();

    if is_json() {
        let json = serde_json::json!({
            "exec_root": config.get_exec_root(),
            "init_path": config.get_init_path(),
            "rootless": config.is_rootless(),
            "swarm_compatible": swarm_compatible,
            "default_mtu": DEFAULT_NETWORK_MTU,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print_info("Platform properties");
    print_field("exec-root", or_none(config.get_exec_root()));
    print_field("init-path", or_none(config.get_init_path()));
    print_field("rootless", &config.is_rootless().to_string());
    print_field("swarm", if swarm_compatible { "compatible" } else { "incompatible" });
    print_field("default mtu", &DEFAULT_NETWORK_MTU.to_string());

    Ok(())
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}
