//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::UserInterface;
use crate::report::Advisory;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    advisories: Vec<Advisory>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories shown so far.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Everything written to stdout, rendered as plain text.
    pub fn stdout(&self) -> String {
        self.advisories
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl UserInterface for MockUI {
    fn advisory(&mut self, advisory: &Advisory) {
        self.advisories.push(advisory.clone());
    }
}
