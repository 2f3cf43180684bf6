//! Advisory rendering.
//!
//! Turns probe outcomes into the human-readable warning blocks printed by
//! the auditor. A block is a marker line followed by tab-indented advice:
//!
//! ```text
//! WARNING: You do not have the FATS package installed
//! 	 to install FATS use the pip on the command line:
//! 	 $> pip install FATS
//! ```

use std::fmt;

use crate::catalog::LibraryProbe;
use crate::probe::{InterpreterStatus, ProbeOutcome};

/// Probe name used for the interpreter advisory.
pub const INTERPRETER_PROBE: &str = "python";

/// How serious an advisory is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something is missing.
    Warning,
    /// Something is present but older than expected.
    Minor,
}

impl Severity {
    /// The marker that starts the advisory's first line.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Minor => "minor warning",
        }
    }
}

/// A printed warning about one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Name of the probe this advisory is about.
    pub probe: String,
    /// Severity marker.
    pub severity: Severity,
    /// First line, after the marker.
    pub headline: String,
    /// Indented follow-up lines.
    pub details: Vec<String>,
}

impl Advisory {
    fn new(probe: &str, severity: Severity, headline: String, details: &[&str]) -> Self {
        Self {
            probe: probe.to_string(),
            severity,
            headline,
            details: details.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Whether this advisory reports a missing library.
    pub fn is_not_installed(&self) -> bool {
        self.severity == Severity::Warning && self.probe != INTERPRETER_PROBE
    }

    /// Whether this advisory reports an outdated library.
    pub fn is_version_mismatch(&self) -> bool {
        self.severity == Severity::Minor
    }

    /// Follow-up lines that are shell commands (without the `$> ` prompt).
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.details
            .iter()
            .filter_map(|line| line.strip_prefix("$> "))
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.marker(), self.headline)?;
        for line in &self.details {
            write!(f, "\n\t {}", line)?;
        }
        Ok(())
    }
}

/// Render the advisory for a library outcome, if one is needed.
pub fn library_advisory(probe: &LibraryProbe, outcome: &ProbeOutcome) -> Option<Advisory> {
    match outcome {
        ProbeOutcome::Ok => None,
        ProbeOutcome::Absent => Some(Advisory::new(
            probe.name,
            Severity::Warning,
            format!("You do not have the {} package installed", probe.name),
            probe.install_advice,
        )),
        ProbeOutcome::Mismatch { expected, .. } => {
            let (minimum, advice) = match probe.expectation {
                Some(expectation) => (expectation.minimum, expectation.upgrade_advice),
                None => (expected.as_str(), &[] as &[&str]),
            };
            Some(Advisory::new(
                probe.name,
                Severity::Minor,
                format!(
                    "you are running a version of {} < {}",
                    probe.name, minimum
                ),
                advice,
            ))
        }
    }
}

/// Render the advisory for the interpreter check, if one is needed.
pub fn interpreter_advisory(status: &InterpreterStatus) -> Option<Advisory> {
    match status {
        InterpreterStatus::Recognized { .. } => None,
        InterpreterStatus::Unrecognized { .. } => Some(Advisory::new(
            INTERPRETER_PROBE,
            Severity::Warning,
            "You are not running the anaconda distribution of Python!".to_string(),
            &[
                "If this is intentional, ignore this message.",
                "If you attempted to install anaconda, check your PATH...",
                "you may need to prepend the ~/anaconda/bin/ directory.",
            ],
        )),
        InterpreterStatus::NotFound => Some(Advisory::new(
            INTERPRETER_PROBE,
            Severity::Warning,
            "You do not have Python on your PATH!".to_string(),
            &[
                "please install anaconda",
                "If you attempted to install anaconda, check your PATH...",
                "you may need to prepend the ~/anaconda/bin/ directory.",
            ],
        )),
    }
}
