//! Error types for the scaffolding stages

use std::io;
use thiserror::Error;

/// Rejection reasons for a proposed project name.
///
/// These are user-correctable: the prompt re-asks instead of aborting, so
/// the messages here are exactly what the user sees inline.
#[derive(Debug, Error)]
pub enum NameError {
    /// The name was empty. Checked before anything touches the filesystem.
    #[error("Please enter a name for the project")]
    Empty,

    /// An entry (file, directory, or symlink) already exists at the target.
    #[error("Directory or file already exists")]
    Exists,

    /// The target could not be inspected for a reason other than "not
    /// found" - permission denied, a file in the middle of the path, and so
    /// on. Kept distinct from [`NameError::Exists`] so the user sees the
    /// real reason instead of a bogus collision.
    #[error("could not inspect {path}")]
    Inaccessible {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Fatal errors raised by the scaffolding stages.
///
/// Every variant aborts the workflow at the stage that raised it. Nothing is
/// rolled back: directories and files created by earlier stages stay on disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Directory creation or a file write failed.
    #[error("could not create {path}")]
    Filesystem {
        path: String,
        #[source]
        source: io::Error,
    },

    /// package.json could not be rendered.
    #[error("could not render package.json")]
    Manifest {
        #[source]
        source: serde_json::Error,
    },

    /// The package manager could not be spawned at all.
    #[error("could not launch '{program}' to install {module}")]
    InstallLaunch {
        program: String,
        module: &'static str,
        #[source]
        source: io::Error,
    },

    /// The package manager ran but reported failure.
    #[error("install of '{module}' failed with exit code {code}")]
    InstallExit { module: &'static str, code: i32 },

    /// A template file could not be written into the project.
    #[error("could not copy template to {dest}")]
    Copy {
        dest: &'static str,
        #[source]
        source: io::Error,
    },
}
