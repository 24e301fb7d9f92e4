//! Shared test helpers: stub package-manager executables

use std::path::{Path, PathBuf};

/// Write an executable that appends each invocation's arguments to a log
/// file, exiting non-zero when the arguments mention `fail_on`. Returns the
/// stub path and the log path.
pub(crate) fn stub_installer(dir: &Path, fail_on: Option<&str>) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("invocations.log");
    let program = dir.join("fake-npm");

    let guard = match fail_on {
        Some(name) => format!("case \"$*\" in *\"{name}\"*) exit 1 ;; esac\n"),
        None => String::new(),
    };
    let script = format!(
        "#!/bin/sh\necho \"$*\" >> \"{}\"\n{}exit 0\n",
        log.display(),
        guard
    );

    std::fs::write(&program, script).unwrap();
    let mut perms = std::fs::metadata(&program).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&program, perms).unwrap();

    (program, log)
}

/// Lines the stub recorded, one per invocation, in order.
pub(crate) fn logged_invocations(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
