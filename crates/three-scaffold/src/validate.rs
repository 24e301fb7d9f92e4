//! Project-name validation
//!
//! A pure predicate against the filesystem: nothing here mutates anything.

use crate::error::NameError;
use std::fs;
use std::io;
use std::path::Path;

/// Check a proposed project name against `base` (normally the invocation
/// directory).
///
/// Accepts only names that are non-empty and do not collide with an existing
/// entry at `base/name`. The emptiness check runs first and never touches
/// the filesystem. The collision probe uses `symlink_metadata` so that a
/// dangling symlink still counts as a collision.
pub fn check_project_name(base: &Path, name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let candidate = base.join(name);
    match fs::symlink_metadata(&candidate) {
        Ok(_) => Err(NameError::Exists),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(NameError::Inaccessible {
            path: candidate.display().to_string(),
            source: e,
        }),
    }
}
