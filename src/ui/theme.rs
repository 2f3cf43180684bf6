//! Visual theme and styling.

use console::Style;

use crate::report::{Advisory, Severity};

/// envaudit's visual theme.
#[derive(Debug, Clone)]
pub struct AuditTheme {
    /// Style for `WARNING` markers (red bold).
    pub warning: Style,
    /// Style for `minor warning` markers (orange).
    pub minor: Style,
    /// Style for advice text (dim).
    pub dim: Style,
    /// Style for shell commands in advice (bold).
    pub command: Style,
}

impl Default for AuditTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().red().bold(),
            minor: Style::new().color256(208),
            dim: Style::new().dim(),
            command: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            minor: Style::new(),
            dim: Style::new(),
            command: Style::new(),
        }
    }

    /// Style the marker for a severity.
    pub fn marker_style(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Warning => &self.warning,
            Severity::Minor => &self.minor,
        }
    }

    /// Format an advisory block.
    ///
    /// With the plain theme this is identical to the advisory's `Display`.
    pub fn format_advisory(&self, advisory: &Advisory) -> String {
        let mut out = format!(
            "{}: {}",
            self.marker_style(advisory.severity)
                .apply_to(advisory.severity.marker()),
            advisory.headline
        );
        for line in &advisory.details {
            let styled = match line.strip_prefix("$> ") {
                Some(cmd) => format!("$> {}", self.command.apply_to(cmd)),
                None => format!("{}", self.dim.apply_to(line)),
            };
            out.push_str("\n\t ");
            out.push_str(&styled);
        }
        out
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
