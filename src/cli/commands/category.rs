//! Category command implementation.
//!
//! The `coursepath category` command materializes and ranks one category
//! of one program.

use crate::cli::args::CategoryArgs;
use crate::error::{PlannerError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectLocation};
use super::display::show_section;

/// The category command implementation.
pub struct CategoryCommand {
    location: ProjectLocation,
    args: CategoryArgs,
}

impl CategoryCommand {
    /// Create a new category command.
    pub fn new(location: ProjectLocation, args: CategoryArgs) -> Self {
        Self { location, args }
    }
}

impl Command for CategoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = match self.location.open(ui) {
            Ok(ws) => ws,
            Err(result) => return Ok(result),
        };

        let college = self
            .args
            .college
            .clone()
            .or_else(|| workspace.config.student.as_ref()?.college.clone())
            .unwrap_or_default();

        let section = workspace.completed(&self.args.taken.taken).and_then(|completed| {
            workspace
                .assembler()
                .category(&self.args.program, &college, &self.args.name, &completed)
        });
        let section = match section {
            Ok(section) => section,
            Err(
                e @ (PlannerError::MalformedCourseCode { .. }
                | PlannerError::UnknownProgram { .. }
                | PlannerError::UnknownCategory { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&section).map_err(anyhow::Error::from)?;
            ui.raw(&json);
        } else {
            show_section(ui, &section, None);
        }

        Ok(CommandResult::success())
    }
}
