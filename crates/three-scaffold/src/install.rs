//! Sequential dependency installation through npm
//!
//! Each module gets its own `npm install --save[-dev] <name>` invocation.
//! Invocations never overlap: npm rewrites package.json and the lock file on
//! every run, so the next child only spawns after the previous one exited.

use crate::error::ScaffoldError;
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// One module to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSpec {
    pub name: &'static str,
    /// Install with `--save-dev` instead of `--save`.
    pub dev: bool,
}

/// Modules every project gets, in install order: the render library first,
/// then the bundler toolchain.
pub const BASE_MODULES: &[ModuleSpec] = &[
    ModuleSpec {
        name: "three",
        dev: false,
    },
    ModuleSpec {
        name: "webpack",
        dev: true,
    },
    ModuleSpec {
        name: "webpack-cli",
        dev: true,
    },
    ModuleSpec {
        name: "webpack-dev-server",
        dev: true,
    },
];

/// Extra build tooling appended for the typescript variant.
pub const TYPESCRIPT_MODULES: &[ModuleSpec] = &[
    ModuleSpec {
        name: "ts-loader",
        dev: true,
    },
    ModuleSpec {
        name: "typescript",
        dev: true,
    },
];

/// The full install list for a project, in install order. Never empty.
pub fn modules_for(typescript: bool) -> Vec<ModuleSpec> {
    let mut modules = BASE_MODULES.to_vec();
    if typescript {
        modules.extend_from_slice(TYPESCRIPT_MODULES);
    }
    modules
}

/// Drives the external package manager, one invocation at a time.
pub struct Installer {
    program: String,
}

impl Installer {
    /// The real thing.
    pub fn npm() -> Self {
        Self::with_program("npm")
    }

    /// Substitute another executable for npm. Tests point this at a stub.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Install every module in order, inside `root`.
    ///
    /// The loop awaits each child's exit before spawning the next, so at
    /// most one install is ever in flight. The first failure stops the run;
    /// modules already installed stay installed. On success, returns the
    /// module names in their original order.
    pub async fn install_all(
        &self,
        root: &Path,
        modules: &[ModuleSpec],
        verbose: bool,
    ) -> Result<Vec<&'static str>, ScaffoldError> {
        let mut installed = Vec::with_capacity(modules.len());

        for module in modules {
            println!("{} {}", "Installing".cyan(), module.name);
            self.install_one(root, module, verbose).await?;
            installed.push(module.name);
        }

        Ok(installed)
    }

    async fn install_one(
        &self,
        root: &Path,
        module: &ModuleSpec,
        verbose: bool,
    ) -> Result<(), ScaffoldError> {
        let save_flag = if module.dev { "--save-dev" } else { "--save" };

        let output = Command::new(&self.program)
            .arg("install")
            .arg(save_flag)
            .arg(module.name)
            .current_dir(root)
            .output()
            .await
            .map_err(|source| ScaffoldError::InstallLaunch {
                program: self.program.clone(),
                module: module.name,
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if verbose {
            println!("{}", String::from_utf8_lossy(&output.stdout));
            if !stderr.is_empty() {
                println!("{}", stderr.yellow());
            }
        }

        if output.status.success() {
            Ok(())
        } else {
            // Surface what npm said even without -v; verbose already did.
            if !verbose && !stderr.trim().is_empty() {
                println!("{}", stderr.trim_end().yellow());
            }
            Err(ScaffoldError::InstallExit {
                module: module.name,
                code: output.status.code().unwrap_or(-1),
            })
        }
    }
}
