//! Probe outcome types.
//!
//! Each probe produces one of these values. They carry no presentation;
//! the `report` module turns them into advisories.

use std::path::PathBuf;

/// The result of probing a single library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Library loads and its version (if checked) is as expected.
    Ok,

    /// Library could not be loaded at all.
    Absent,

    /// Library loads but its version does not start with the expected prefix.
    Mismatch {
        /// Version reported by the library
        actual: String,
        /// Prefix the version was expected to start with
        expected: String,
    },
}

impl ProbeOutcome {
    /// Whether no advisory is needed for this outcome.
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::Ok)
    }

    /// Short label used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            ProbeOutcome::Ok => "ok",
            ProbeOutcome::Absent => "absent",
            ProbeOutcome::Mismatch { .. } => "version-mismatch",
        }
    }
}

/// The result of locating the active interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterStatus {
    /// Interpreter lives under a recognized distribution directory.
    Recognized {
        /// Resolved interpreter path
        path: PathBuf,
    },

    /// Interpreter found, but not under a recognized distribution directory.
    Unrecognized {
        /// Resolved interpreter path
        path: PathBuf,
    },

    /// No interpreter on PATH.
    NotFound,
}

impl InterpreterStatus {
    /// Whether no advisory is needed for this status.
    pub fn is_recognized(&self) -> bool {
        matches!(self, InterpreterStatus::Recognized { .. })
    }

    /// The interpreter path, if one was found.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            InterpreterStatus::Recognized { path } | InterpreterStatus::Unrecognized { path } => {
                Some(path)
            }
            InterpreterStatus::NotFound => None,
        }
    }
}
