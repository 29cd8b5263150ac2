//! Visual theme and styling.

use console::Style;

/// Colors and glyphs for terminal output.
#[derive(Debug, Clone)]
pub struct PlannerTheme {
    /// Eligible courses and satisfied groups (green).
    pub success: Style,
    /// Blocked courses (orange).
    pub warning: Style,
    /// Errors (red bold).
    pub error: Style,
    /// Program and category names (cyan).
    pub info: Style,
    /// Secondary text such as scores and tags.
    pub dim: Style,
    /// Emphasis (bold).
    pub highlight: Style,
    /// Headers (cyan bold).
    pub header: Style,
    /// Hints (cyan dim).
    pub hint: Style,
    /// Table borders (dim).
    pub border: Style,
}

impl Default for PlannerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            hint: Style::new().cyan().dim(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            border: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    pub fn format_hint(&self, hint: &str) -> String {
        format!("{}", self.hint.apply_to(hint))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_with_glyphs() {
        let theme = PlannerTheme::plain();
        assert_eq!(theme.format_success("CS3110"), "✓ CS3110");
        assert_eq!(theme.format_warning("CS3410"), "⚠ CS3410");
        assert_eq!(theme.format_error("bad code"), "✗ bad code");
        assert_eq!(theme.format_header("CS"), "◆ CS");
        assert_eq!(theme.format_hint("try --taken"), "try --taken");
    }

    #[test]
    fn default_theme_contains_text() {
        let theme = PlannerTheme::default();
        assert!(theme.format_success("CS3110").contains("CS3110"));
        assert!(theme.format_header("Core").contains("Core"));
    }
}
