//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for writing advisories to stdout
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use envaudit::audit::Auditor;
//! use envaudit::catalog::catalog;
//! use envaudit::probe::{InterpreterStatus, StaticLoader};
//! use envaudit::ui::{show_report, MockUI};
//!
//! let loader = StaticLoader::new();
//! let report = Auditor::new(catalog(), &loader, InterpreterStatus::NotFound).run();
//!
//! let mut ui = MockUI::new();
//! show_report(&report, &mut ui);
//! assert_eq!(ui.advisories().len(), report.len());
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, AuditTheme};

use crate::audit::AuditReport;
use crate::report::Advisory;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display an advisory block.
    fn advisory(&mut self, advisory: &Advisory);
}

/// Print every advisory in a report, in order.
pub fn show_report(report: &AuditReport, ui: &mut dyn UserInterface) {
    for advisory in report.advisories() {
        ui.advisory(advisory);
    }
}
