//! Page command implementation.
//!
//! The `coursepath page` command assembles the requirement page for the
//! selected major, second major and minors.

use crate::cli::args::PageArgs;
use crate::error::{PlannerError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectLocation};
use super::display::show_section;

/// The page command implementation.
pub struct PageCommand {
    location: ProjectLocation,
    args: PageArgs,
}

impl PageCommand {
    /// Create a new page command.
    pub fn new(location: ProjectLocation, args: PageArgs) -> Self {
        Self { location, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PageArgs {
        &self.args
    }
}

impl Command for PageCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = match self.location.open(ui) {
            Ok(ws) => ws,
            Err(result) => return Ok(result),
        };

        let selection = workspace.selection(
            self.args.college.clone(),
            self.args.major.clone(),
            self.args.second_major.clone(),
            self.args.minors.clone(),
        );
        if selection.major.is_none() && selection.minors.is_empty() {
            ui.error("No programs selected. Pass --major or --minor, or set student.majors.");
            return Ok(CommandResult::failure(1));
        }
        tracing::debug!(
            "Page for {:?} / {:?} / {:?} in '{}'",
            selection.major,
            selection.second_major,
            selection.minors,
            selection.college
        );

        let page = workspace
            .completed(&self.args.taken.taken)
            .and_then(|completed| workspace.assembler().assemble(&selection, &completed));
        let page = match page {
            Ok(page) => page,
            Err(
                e @ (PlannerError::MalformedCourseCode { .. }
                | PlannerError::UnknownProgram { .. }
                | PlannerError::MissingCategoryField { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&page).map_err(anyhow::Error::from)?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        for section in &page.sections {
            show_section(ui, section, self.args.limit);
        }

        let fixed: Vec<_> = page
            .sections
            .iter()
            .filter(|s| s.required.is_some())
            .collect();
        let done = fixed
            .iter()
            .filter(|s| s.required.is_some_and(|r| s.completed_count() >= r as usize))
            .count();
        if !fixed.is_empty() {
            ui.success(&format!("{} of {} categories complete", done, fixed.len()));
        }

        Ok(CommandResult::success())
    }
}
