//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::ConfigPaths;
use crate::error::{PlannerError, Result};
use crate::planner::Workspace;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command finds its project.
#[derive(Debug, Clone)]
pub struct ProjectLocation {
    pub root: PathBuf,
    /// Single config file to load instead of discovering and merging.
    pub config: Option<PathBuf>,
}

impl ProjectLocation {
    pub fn new(root: &Path, config: Option<&Path>) -> Self {
        Self {
            root: root.to_path_buf(),
            config: config.map(Path::to_path_buf),
        }
    }

    /// Whether any configuration can be loaded from here.
    pub fn has_config(&self) -> bool {
        self.config.is_some() || ConfigPaths::discover(&self.root).has_project_config()
    }

    /// Load the workspace, reporting load failures on `ui`.
    ///
    /// Missing configuration maps to exit code 2, parse and validation
    /// problems to 1.
    pub fn open(&self, ui: &mut dyn UserInterface) -> std::result::Result<Workspace, CommandResult> {
        if !self.has_config() {
            ui.error("No configuration found. Create .coursepath/config.yml first.");
            return Err(CommandResult::failure(2));
        }

        match Workspace::load(&self.root, self.config.as_deref()) {
            Ok(workspace) => Ok(workspace),
            Err(PlannerError::ConfigNotFound { path }) => {
                ui.error(&format!("File not found: {}", path.display()));
                Err(CommandResult::failure(2))
            }
            Err(PlannerError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                Err(CommandResult::failure(1))
            }
            Err(e) => {
                ui.error(&e.to_string());
                Err(CommandResult::failure(1))
            }
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    location: ProjectLocation,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            location: ProjectLocation {
                root: project_root,
                config: None,
            },
        }
    }

    /// Load a single config file instead of the project's merged config.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.location.config = config;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.location.root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let location = self.location.clone();
        match &cli.command {
            Commands::Eligible(args) => {
                let cmd = super::eligible::EligibleCommand::new(location, args.clone());
                cmd.execute(ui)
            }
            Commands::Course(args) => {
                let cmd = super::course::CourseCommand::new(location, args.clone());
                cmd.execute(ui)
            }
            Commands::Category(args) => {
                let cmd = super::category::CategoryCommand::new(location, args.clone());
                cmd.execute(ui)
            }
            Commands::Page(args) => {
                let cmd = super::page::PageCommand::new(location, args.clone());
                cmd.execute(ui)
            }
            Commands::Lint(args) => {
                let cmd = super::lint::LintCommand::new(location, args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn open_without_config_exits_2() {
        let temp = TempDir::new().unwrap();
        let location = ProjectLocation::new(temp.path(), None);
        let mut ui = MockUI::new();

        let result = location.open(&mut ui).err().unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_output("No configuration found"));
    }

    #[test]
    fn override_counts_as_config() {
        let temp = TempDir::new().unwrap();
        let location = ProjectLocation::new(temp.path(), Some(Path::new("elsewhere.yml")));
        assert!(location.has_config());
    }

    #[test]
    fn open_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".coursepath");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yml"), "catalog: [unclosed").unwrap();

        let mut ui = MockUI::new();
        let result = ProjectLocation::new(temp.path(), None)
            .open(&mut ui)
            .err()
            .unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_output("Parse error"));
    }
}
