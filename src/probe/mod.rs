//! Capability probes.
//!
//! A probe turns one catalog entry into a [`ProbeOutcome`] without printing
//! anything. Rendering outcomes is the job of [`crate::report`].
//!
//! # Modules
//!
//! - [`interpreter`] - Interpreter lookup on PATH and distribution check
//! - [`loader`] - Module loading through the interpreter
//! - [`outcome`] - Probe result types
//! - [`version`] - Version prefix comparison and extraction

pub mod interpreter;
pub mod loader;
pub mod outcome;
pub mod version;

pub use loader::{LoadedModule, ModuleLoader, PythonLoader, StaticLoader};
pub use outcome::{InterpreterStatus, ProbeOutcome};

use tracing::debug;

use crate::catalog::LibraryProbe;

/// Evaluate a single library probe.
///
/// Every load error is reported as [`ProbeOutcome::Absent`]. The version is
/// only compared when the probe has an expectation and the library exposes
/// a version identifier.
pub fn evaluate_library(probe: &LibraryProbe, loader: &dyn ModuleLoader) -> ProbeOutcome {
    let loaded = match loader.load(probe.module) {
        Ok(loaded) => loaded,
        Err(e) => {
            debug!("{} not loadable: {}", probe.name, e);
            return ProbeOutcome::Absent;
        }
    };

    let (Some(expectation), Some(actual)) = (probe.expectation, loaded.version) else {
        return ProbeOutcome::Ok;
    };

    if version::matches_expected(&actual, expectation.prefix) {
        ProbeOutcome::Ok
    } else {
        ProbeOutcome::Mismatch {
            actual,
            expected: expectation.prefix.to_string(),
        }
    }
}
