//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, AuditTheme, UserInterface};
use crate::report::Advisory;

/// Writes advisories to stdout.
pub struct TerminalUI {
    out: Term,
    theme: AuditTheme,
}

impl TerminalUI {
    /// Create a terminal UI, choosing colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            AuditTheme::new()
        } else {
            AuditTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: AuditTheme) -> Self {
        Self {
            out: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn advisory(&mut self, advisory: &Advisory) {
        writeln!(self.out, "{}", self.theme.format_advisory(advisory)).ok();
    }
}
