//! The environment auditor.
//!
//! Runs the interpreter probe and then every library probe in catalog order,
//! collecting one advisory per failed probe. Probes are independent: a
//! failure in one never stops the others, and nothing here returns an error.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::catalog::{self, LibraryProbe};
use crate::probe::interpreter::{check_interpreter, locate_interpreter, search_dirs};
use crate::probe::{evaluate_library, InterpreterStatus, ModuleLoader, PythonLoader};
use crate::report::{interpreter_advisory, library_advisory, Advisory};

/// Advisories produced by one audit, in probe order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    advisories: Vec<Advisory>,
}

impl AuditReport {
    /// All advisories.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Whether every probe passed.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Number of advisories.
    pub fn len(&self) -> usize {
        self.advisories.len()
    }

    /// Whether the report has no advisories.
    pub fn is_empty(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Advisories about a single probe.
    pub fn for_probe<'a>(&'a self, probe: &'a str) -> impl Iterator<Item = &'a Advisory> {
        self.advisories.iter().filter(move |a| a.probe == probe)
    }

    fn push(&mut self, advisory: Option<Advisory>) {
        self.advisories.extend(advisory);
    }
}

/// Runs every probe once.
pub struct Auditor<'a> {
    catalog: &'a [LibraryProbe],
    loader: &'a dyn ModuleLoader,
    interpreter: InterpreterStatus,
}

impl<'a> Auditor<'a> {
    /// Create an auditor over `catalog` using `loader` for imports.
    ///
    /// `interpreter` is the already-classified result of the interpreter
    /// lookup; it decides whether the report opens with an interpreter
    /// advisory.
    pub fn new(
        catalog: &'a [LibraryProbe],
        loader: &'a dyn ModuleLoader,
        interpreter: InterpreterStatus,
    ) -> Self {
        Self {
            catalog,
            loader,
            interpreter,
        }
    }

    /// Run all probes and collect advisories.
    pub fn run(&self) -> AuditReport {
        let mut report = AuditReport::default();

        debug!("Interpreter status: {:?}", self.interpreter);
        report.push(interpreter_advisory(&self.interpreter));

        for probe in self.catalog {
            let outcome = evaluate_library(probe, self.loader);
            debug!("{}: {}", probe.name, outcome.label());
            report.push(library_advisory(probe, &outcome));
        }

        info!(
            "Audit complete: {} probes, {} advisories",
            self.catalog.len() + 1,
            report.len()
        );
        report
    }
}

/// Audit the current environment.
///
/// Resolves the interpreter from `PATH`, imports every catalog library
/// through it, and returns the advisories. When no interpreter is found the
/// bare `python` command is still tried, so every library is reported as
/// not installed.
pub fn run_audit() -> AuditReport {
    let interpreter = match locate_interpreter(&search_dirs()) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("{}", e);
            None
        }
    };
    let status = check_interpreter(interpreter.as_deref());

    let loader = PythonLoader::new(interpreter.unwrap_or_else(|| PathBuf::from("python")));
    match loader.interpreter_version() {
        Ok(Some(version)) => info!(
            "Using Python {} at {}",
            version,
            loader.interpreter().display()
        ),
        Ok(None) => debug!("Could not determine interpreter version"),
        Err(e) => debug!("{}", e),
    }

    Auditor::new(catalog::catalog(), &loader, status).run()
}
