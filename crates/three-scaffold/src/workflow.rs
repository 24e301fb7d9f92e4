//! End-to-end project initialization
//!
//! Drives the stages strictly in order: root directory, package.json,
//! dependency installs, src/dist layout, template files. Each stage runs
//! only after the previous one succeeded, and the first failure is wrapped
//! with its stage identifier and surfaced unchanged. There is no rollback:
//! whatever earlier stages created stays on disk.

use crate::error::ScaffoldError;
use crate::install::{modules_for, Installer};
use crate::{layout, manifest, templates};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything the workflow needs, captured once from the prompt answers and
/// CLI flags and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    /// Validated project name (non-empty, no existing entry in the parent).
    pub name: String,
    /// Scaffold the typescript variant.
    pub typescript: bool,
    /// Echo captured npm output after each install.
    pub verbose: bool,
}

/// The initialization stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CreateRoot,
    WriteManifest,
    InstallDependencies,
    CreateSubdirs,
    PopulateTemplates,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::CreateRoot => "creating the project directory",
            Stage::WriteManifest => "writing package.json",
            Stage::InstallDependencies => "installing dependencies",
            Stage::CreateSubdirs => "creating src and dist",
            Stage::PopulateTemplates => "copying templates",
        };
        f.write_str(name)
    }
}

/// A stage failure: which stage, and what went wrong underneath.
#[derive(Debug, Error)]
#[error("failed while {stage}")]
pub struct WorkflowError {
    pub stage: Stage,
    #[source]
    pub source: ScaffoldError,
}

fn at<T>(stage: Stage, result: Result<T, ScaffoldError>) -> Result<T, WorkflowError> {
    result.map_err(|source| WorkflowError { stage, source })
}

/// Initialize a project under `parent` and return its root directory.
pub async fn run(
    request: &ProjectRequest,
    parent: &Path,
    installer: &Installer,
) -> Result<PathBuf, WorkflowError> {
    // Stage 1: project root
    let root = at(
        Stage::CreateRoot,
        layout::create_root(parent, &request.name).await,
    )?;
    println!("Created project directory");

    // Stage 2: manifest
    at(
        Stage::WriteManifest,
        manifest::write_manifest(&root, &request.name).await,
    )?;
    println!("Created package.json");

    // Stage 3: dependencies, strictly one at a time
    let modules = modules_for(request.typescript);
    let installed = at(
        Stage::InstallDependencies,
        installer.install_all(&root, &modules, request.verbose).await,
    )?;
    println!("Installed {}", installed.join(", "));

    // Stage 4: source and output directories
    at(Stage::CreateSubdirs, layout::create_subdirs(&root).await)?;
    println!("Created {}/src", request.name);
    println!("Created {}/dist", request.name);

    // Stage 5: template files
    at(
        Stage::PopulateTemplates,
        templates::populate(&root, &request.name, request.typescript).await,
    )?;

    Ok(root)
}
