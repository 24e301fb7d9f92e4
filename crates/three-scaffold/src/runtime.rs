//! Package-manager detection

use std::process::Command;

/// Probe result for an external runtime.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether npm is available on the PATH.
///
/// Advisory only: the workflow still runs when npm is missing, and the
/// installs then fail through their normal error path.
pub fn check_npm() -> RuntimeInfo {
    let output = Command::new("npm").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "npm",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "npm",
            version: None,
            available: false,
        },
    }
}
