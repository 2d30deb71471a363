//! CLI command for `daemonconf exec-opt`
//!
//! Checks each `name=value` exec-option and reports every failure before
//! exiting with an error.

use anyhow::{bail, Result};

use crate::cli::output::{is_json, print_success, status};
use crate::core::exec_opts::check_exec_opt;

/// Execute the exec-opt command
pub fn execute(options: &[String]) -> Result<()> {
    let results: Vec<_> = options
        .iter()
        .map(|opt| (opt.as_str(), check_exec_opt(opt)))
        .collect();
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();

    if is_json() {
        let json = serde_json::json!({
            "status": if failed == 0 { "success" } else { "error" },
            "options": results.iter().map(|(opt, result)| serde_json::json!({
                "option": opt,
                "valid": result.is_ok(),
                "error": result.as_ref().err().map(ToString::to_string),
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for (opt, result) in &results {
            match result {
                Ok(()) => print_success(opt),
                Err(e) => eprintln!("{} {opt}: {e}", status::ERROR),
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} exec-options are invalid", options.len());
    }

    Ok(())
}
