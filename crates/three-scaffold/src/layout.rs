//! Project directory layout
//!
//! Creates the project root and its `src`/`dist` children. Nothing here
//! changes the process working directory: callers receive the root path and
//! pass it down explicitly.

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create `parent/name` and return it.
///
/// Non-recursive: a missing parent is an error, not something to create.
pub async fn create_root(parent: &Path, name: &str) -> Result<PathBuf, ScaffoldError> {
    let root = parent.join(name);
    fs::create_dir(&root)
        .await
        .map_err(|source| ScaffoldError::Filesystem {
            path: root.display().to_string(),
            source,
        })?;
    Ok(root)
}

/// Create the `src` and `dist` children of an existing project root.
///
/// `dist` stays empty; the bundler fills it later.
pub async fn create_subdirs(root: &Path) -> Result<(), ScaffoldError> {
    for child in ["src", "dist"] {
        let dir = root.join(child);
        fs::create_dir(&dir)
            .await
            .map_err(|source| ScaffoldError::Filesystem {
                path: dir.display().to_string(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_root_creates_a_single_directory() {
        let tmp = tempfile::tempdir().unwrap();

        let root = create_root(tmp.path(), "demo").await.unwrap();

        assert_eq!(root, tmp.path().join("demo"));
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn create_root_requires_an_existing_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let missing_parent = tmp.path().join("missing");

        let err = create_root(&missing_parent, "demo").await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }

    #[tokio::test]
    async fn create_root_fails_on_collision() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("demo")).unwrap();

        let err = create_root(tmp.path(), "demo").await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }

    #[tokio::test]
    async fn create_subdirs_creates_src_and_dist() {
        let tmp = tempfile::tempdir().unwrap();
        let root = create_root(tmp.path(), "demo").await.unwrap();

        create_subdirs(&root).await.unwrap();

        assert!(root.join("src").is_dir());
        assert!(root.join("dist").is_dir());
        assert_eq!(std::fs::read_dir(root.join("dist")).unwrap().count(), 0);
    }
}
