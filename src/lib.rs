//! envaudit - Scientific Python environment auditor.
//!
//! envaudit checks whether the active Python interpreter belongs to the
//! anaconda distribution and whether a fixed set of libraries can be
//! imported at roughly the expected version. Every problem becomes a
//! printed advisory; nothing is installed or changed.
//!
//! # Modules
//!
//! - [`audit`] - Runs every probe and collects advisories
//! - [`catalog`] - The fixed list of libraries and their expectations
//! - [`cli`] - Command-line argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Interpreter lookup, module loading, version comparison
//! - [`report`] - Advisory types and rendering
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use envaudit::audit::Auditor;
//! use envaudit::catalog::catalog;
//! use envaudit::probe::{InterpreterStatus, StaticLoader};
//!
//! let loader = StaticLoader::new().with_version("numpy", "1.9.2");
//! let report = Auditor::new(catalog(), &loader, InterpreterStatus::NotFound).run();
//!
//! assert_eq!(report.for_probe("numpy").count(), 0);
//! assert_eq!(report.for_probe("FATS").count(), 1);
//! ```

pub mod audit;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;

pub use audit::{run_audit, AuditReport, Auditor};
pub use error::{AuditError, Result};
