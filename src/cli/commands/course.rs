//! Course command implementation.
//!
//! The `coursepath course` command shows what the catalog knows about one
//! course and why the student can or cannot take it yet.

use serde::Serialize;

use crate::catalog::{classify, AvailabilityStatus, Course, CourseCode};
use crate::cli::args::CourseArgs;
use crate::error::{PlannerError, Result};
use crate::requirements::EligibilityBreakdown;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectLocation};
use super::display::show_unmet;

/// The course command implementation.
pub struct CourseCommand {
    location: ProjectLocation,
    args: CourseArgs,
}

#[derive(Serialize)]
struct CourseReport<'a> {
    code: &'a CourseCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    course: Option<&'a Course>,
    availability: AvailabilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_semester: Option<bool>,
    eligible: bool,
    breakdown: &'a EligibilityBreakdown,
}

impl CourseCommand {
    /// Create a new course command.
    pub fn new(location: ProjectLocation, args: CourseArgs) -> Self {
        Self { location, args }
    }

    fn show_details(&self, ui: &mut dyn UserInterface, report: &CourseReport<'_>) {
        let Some(course) = report.course else {
            ui.warning(&format!(
                "{} is not in the catalog; treating it as unrestricted",
                report.code
            ));
            return;
        };

        if course.title.is_empty() {
            ui.show_header(course.code.as_str());
        } else {
            ui.show_header(&format!("{} {}", course.code, course.title));
        }

        let credits = if course.credits.min == course.credits.max {
            format!("{}", course.credits.max)
        } else {
            format!("{}-{}", course.credits.min, course.credits.max)
        };
        ui.message(&format!("Credits: {}", credits));

        if !course.distributions.is_empty() {
            let tags: Vec<_> = course.distributions.iter().cloned().collect();
            ui.message(&format!("Distributions: {}", tags.join(", ")));
        }
        if !course.combined.is_empty() {
            let combined: Vec<_> = course.combined.iter().map(ToString::to_string).collect();
            ui.message(&format!("Cross-listed: {}", combined.join(", ")));
        }

        ui.message(&format!("Offered: {}", report.availability.label()));
        let seasons = course.season_availability();
        ui.detail(&format!(
            "Fall: {}, Spring: {}",
            if seasons.fall { "yes" } else { "no" },
            if seasons.spring { "yes" } else { "no" }
        ));
        if report.next_semester == Some(true) {
            ui.show_hint("Offered next semester");
        }

        if !course.description.is_empty() {
            ui.detail(&course.description);
        }
        for note in course.permission.iter().chain(&course.footnote) {
            ui.detail(note);
        }
    }

    fn show_breakdown(&self, ui: &mut dyn UserInterface, report: &CourseReport<'_>) {
        let breakdown = report.breakdown;

        if report.eligible {
            ui.success(&format!("{} is eligible", report.code));
        } else {
            ui.warning(&format!("{} is blocked", report.code));
        }

        if let Some(verdict) = &breakdown.special_case {
            ui.message("  Decided by a special-case rule");
            show_unmet(ui, "needs", &verdict.unmet);
            return;
        }
        if let Some(source) = &breakdown.borrowed_from {
            ui.message(&format!("  Prerequisites borrowed from {}", source));
        }
        show_unmet(ui, "prerequisite:", &breakdown.prerequisites);
        show_unmet(ui, "corequisite:", &breakdown.corequisites);
        show_unmet(ui, "prerequisite or corequisite:", &breakdown.prereq_or_coreq);
    }
}

impl Command for CourseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = match self.location.open(ui) {
            Ok(ws) => ws,
            Err(result) => return Ok(result),
        };

        let parsed = CourseCode::parse_lenient(&self.args.code)
            .and_then(|code| Ok((code, workspace.completed(&self.args.taken.taken)?)));
        let (code, completed) = match parsed {
            Ok(parsed) => parsed,
            Err(e @ PlannerError::MalformedCourseCode { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let course = workspace.catalog.get(&code);
        let breakdown = workspace.evaluator().breakdown(&code, &completed)?;
        let next_semester = match (&workspace.config.settings.next_semester, course) {
            (Some(next), Some(course)) => Some(course.available_next_semester(next)),
            _ => None,
        };
        let report = CourseReport {
            code: &code,
            course,
            availability: classify(course, &workspace.window()),
            next_semester,
            eligible: breakdown.is_eligible(),
            breakdown: &breakdown,
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.raw(&json);
        } else {
            self.show_details(ui, &report);
            self.show_breakdown(ui, &report);
        }

        Ok(CommandResult::success())
    }
}
