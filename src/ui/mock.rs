//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use coursepath::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("CS3110");
//! ui.success("eligible");
//!
//! assert!(ui.messages().contains(&"CS3110".to_string()));
//! assert!(ui.has_output("eligible"));
//! ```

use super::{OutputMode, Table, UserInterface};

/// Captures UI output instead of printing it.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    details: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    tables: Vec<String>,
    raw: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Rendered tables.
    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn raw_output(&self) -> &[String] {
        &self.raw
    }

    /// Whether any captured output contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        [
            &self.messages,
            &self.details,
            &self.successes,
            &self.warnings,
            &self.errors,
            &self.headers,
            &self.hints,
            &self.tables,
            &self.raw,
        ]
        .iter()
        .any(|captured| captured.iter().any(|s| s.contains(needle)))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_table(&mut self, table: &Table) {
        self.tables.push(table.render());
    }

    fn raw(&mut self, text: &str) {
        self.raw.push(text.to_string());
    }
}
