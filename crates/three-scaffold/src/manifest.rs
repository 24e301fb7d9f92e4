//! package.json model and writer

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Version stamped into every generated manifest.
pub const PACKAGE_VERSION: &str = "1.0.0";

/// The `scripts.start` command wired into every project.
pub const START_SCRIPT: &str = "npx webpack-dev-server --hot";

const DESCRIPTION: &str = "Your new three.js app";
const MAIN: &str = "index.js";
const LICENSE: &str = "ISC";

/// The generated package.json. Field order here is the key order on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub scripts: Scripts,
    pub author: String,
    pub license: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scripts {
    pub start: String,
}

impl PackageManifest {
    /// Manifest for a fresh project; only the name varies.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: PACKAGE_VERSION.to_string(),
            description: DESCRIPTION.to_string(),
            main: MAIN.to_string(),
            scripts: Scripts {
                start: START_SCRIPT.to_string(),
            },
            author: String::new(),
            license: LICENSE.to_string(),
        }
    }

    /// Render with the conventional 2-space indentation.
    pub fn render(&self) -> Result<String, ScaffoldError> {
        serde_json::to_string_pretty(self).map_err(|source| ScaffoldError::Manifest { source })
    }
}

/// Write `root/package.json` in a single whole-content write.
pub async fn write_manifest(root: &Path, name: &str) -> Result<(), ScaffoldError> {
    let contents = PackageManifest::new(name).render()?;
    let path = root.join("package.json");
    fs::write(&path, contents)
        .await
        .map_err(|source| ScaffoldError::Filesystem {
            path: path.display().to_string(),
            source,
        })
}
