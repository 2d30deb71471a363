//! CLI command for `daemonconf runtimes`

use anyhow::Result;

use crate::cli::output::{is_json, print_detail, print_field, print_info};
use crate::config::runtimes::{builtin_runtimes, DefaultRuntime};

/// Execute the runtimes command
pub fn execute() -> Result<()> {
    let stock = DefaultRuntime::default();

    if is_json() {
        let json = serde_json::json!({
            "builtin": builtin_runtimes(),
            "default": stock.name(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print_info("Built-in runtimes");
    for name in builtin_runtimes() {
        print_detail(name);
    }
    print_field("default", &stock.to_string());

    Ok(())
}
