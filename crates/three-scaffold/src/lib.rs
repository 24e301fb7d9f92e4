//! three-scaffold - Core library for the three.js project scaffolder
//!
//! Everything the `three-tools` binary does lives here: validating the
//! requested project name, creating the directory layout, writing
//! package.json, driving `npm install` one module at a time, and writing the
//! template files shipped inside the binary.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Core operations** - name validation, directory layout, manifest
//!   writing, sequential installs, template copying; each returns a typed
//!   error and takes the project root as an explicit path
//! - **Workflow orchestration** - [`workflow::run`] sequences the stages and
//!   tags the first failure with its [`workflow::Stage`]
//! - **Prompt layer** - optional cliclack-based interactive flow
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without the prompts)
//!
//! ```ignore
//! use three_scaffold::install::Installer;
//! use three_scaffold::workflow::{self, ProjectRequest};
//!
//! let request = ProjectRequest {
//!     name: "demo".into(),
//!     typescript: false,
//!     verbose: false,
//! };
//! let parent = std::env::current_dir()?;
//! let root = workflow::run(&request, &parent, &Installer::npm()).await?;
//! ```

pub mod error;
pub mod install;
pub mod layout;
pub mod manifest;
pub mod runtime;
pub mod templates;
pub mod validate;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(all(test, unix))]
pub(crate) mod testing;

// Re-export main types for convenience
pub use error::{NameError, ScaffoldError};
pub use install::{modules_for, Installer, ModuleSpec};
pub use manifest::PackageManifest;
pub use templates::{populate, template_set, TemplateFile};
pub use validate::check_project_name;
pub use workflow::{ProjectRequest, Stage, WorkflowError};

#[cfg(feature = "tui")]
pub use tui::run;
