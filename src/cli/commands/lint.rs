//! Lint command implementation.
//!
//! The `coursepath lint` command validates the project configuration, the
//! requirement tables it points at, and checks that the catalog parses.

use serde::Serialize;

use crate::catalog::load_catalog;
use crate::cli::args::LintArgs;
use crate::config::{self, PlannerConfig};
use crate::error::{PlannerError, Result};
use crate::planner::workspace::resolve;
use crate::programs::{self, load_requirements};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectLocation};

/// One problem found by lint.
#[derive(Debug, Clone, Serialize)]
pub struct LintFinding {
    /// Which file the problem is in: config, requirements or catalog
    pub source: &'static str,
    pub rule: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl LintFinding {
    fn load_error(source: &'static str, error: &PlannerError) -> Self {
        let rule = match error {
            PlannerError::ConfigNotFound { .. } => "missing-file",
            _ => "parse-error",
        };
        Self {
            source,
            rule: rule.to_string(),
            message: error.to_string(),
            program: None,
            category: None,
        }
    }

    fn human(&self) -> String {
        let location = match (&self.program, &self.category) {
            (Some(program), Some(category)) => format!(" ({} / {})", program, category),
            (Some(program), None) => format!(" ({})", program),
            _ => String::new(),
        };
        format!("{}[{}]{}: {}", self.source, self.rule, location, self.message)
    }
}

/// The lint command implementation.
pub struct LintCommand {
    location: ProjectLocation,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(location: ProjectLocation, args: LintArgs) -> Self {
        Self { location, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Run every check and collect findings.
    fn run_checks(&self, config: &PlannerConfig) -> Vec<LintFinding> {
        let mut findings: Vec<LintFinding> = config::validate_config(config)
            .into_iter()
            .map(|e| LintFinding {
                source: "config",
                rule: e.rule,
                message: e.message,
                program: None,
                category: None,
            })
            .collect();

        let root = &self.location.root;
        match load_requirements(&resolve(root, &config.requirements_path())) {
            Ok(tables) => {
                findings.extend(programs::validate_tables(&tables).into_iter().map(|e| {
                    LintFinding {
                        source: "requirements",
                        rule: e.rule,
                        message: e.message,
                        program: e.program,
                        category: e.category,
                    }
                }))
            }
            Err(e) => findings.push(LintFinding::load_error("requirements", &e)),
        }

        if let Err(e) = load_catalog(&resolve(root, &config.catalog_path())) {
            findings.push(LintFinding::load_error("catalog", &e));
        }

        findings
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.location.has_config() {
            ui.error("No configuration found. Create .coursepath/config.yml first.");
            return Ok(CommandResult::failure(2));
        }

        let config = match config::load_config(&self.location.root, self.location.config.as_deref()) {
            Ok(c) => c,
            Err(PlannerError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(PlannerError::ConfigNotFound { path }) => {
                ui.error(&format!("File not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let findings = self.run_checks(&config);
        tracing::debug!("Lint found {} problems", findings.len());

        if self.args.format == "json" {
            let json = serde_json::to_string_pretty(&findings).map_err(anyhow::Error::from)?;
            ui.raw(&json);
        } else if findings.is_empty() {
            ui.success("Configuration is valid!");
        } else {
            for finding in &findings {
                ui.error(&finding.human());
            }
        }

        if findings.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
