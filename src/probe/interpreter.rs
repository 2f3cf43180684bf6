//! Interpreter location probe.
//!
//! Finds the interpreter that a bare `python` command would run and checks
//! whether it belongs to a recognized distribution. A distribution install
//! has the layout `<prefix>/<marker>/bin/python`, so the directory two levels
//! above the executable must be named after the distribution.
//!
//! # Example
//!
//! ```no_run
//! use envaudit::probe::interpreter::{check_interpreter, locate_interpreter, search_dirs};
//!
//! let path = locate_interpreter(&search_dirs()).ok();
//! let status = check_interpreter(path.as_deref());
//! println!("recognized: {}", status.is_recognized());
//! ```

use std::path::{Path, PathBuf};

use super::outcome::InterpreterStatus;
use crate::error::{AuditError, Result};

/// Executable names tried in order.
pub const INTERPRETER_NAMES: &[&str] = &["python", "python3"];

/// Directory names that identify a recognized distribution.
pub const DISTRIBUTION_MARKERS: &[&str] = &["anaconda"];

/// Directories the shell would search for `python`, in order.
pub fn search_dirs() -> Vec<PathBuf> {
    match std::env::var_os("PATH") {
        Some(path) => std::env::split_paths(&path).collect(),
        None => Vec::new(),
    }
}

/// Find the interpreter a shell would run for `python`.
///
/// Each name in [`INTERPRETER_NAMES`] is looked up across every directory
/// before the next name is tried, so `python` anywhere on the search path
/// wins over `python3`. The lookup reads the filesystem directly instead of
/// shelling out to `which`.
pub fn locate_interpreter(dirs: &[PathBuf]) -> Result<PathBuf> {
    INTERPRETER_NAMES
        .iter()
        .flat_map(|name| dirs.iter().map(move |dir| dir.join(name)))
        .find(|candidate| is_runnable_interpreter(candidate))
        .ok_or(AuditError::InterpreterNotFound)
}

/// A regular file the current user could exec.
#[cfg(unix)]
fn is_runnable_interpreter(candidate: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match candidate.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_runnable_interpreter(candidate: &Path) -> bool {
    candidate.is_file()
}

/// Whether the executable sits in `<marker>/bin/` for one of `markers`.
pub fn has_distribution_marker(path: &Path, markers: &[&str]) -> bool {
    path.parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .is_some_and(|name| markers.contains(&name))
}

/// Classify a resolved interpreter path.
pub fn check_interpreter(path: Option<&Path>) -> InterpreterStatus {
    match path {
        Some(path) if has_distribution_marker(path, DISTRIBUTION_MARKERS) => {
            InterpreterStatus::Recognized {
                path: path.to_path_buf(),
            }
        }
        Some(path) => InterpreterStatus::Unrecognized {
            path: path.to_path_buf(),
        },
        None => InterpreterStatus::NotFound,
    }
}
