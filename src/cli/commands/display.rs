//! Shared display helpers for eligibility and requirement sections.
//!
//! These helpers are used by `eligible`, `course`, `category` and `page`
//! so groups and sections render the same way everywhere.

use crate::planner::{Section, SectionContent};
use crate::ranking::ScoredCourse;
use crate::requirements::Group;
use crate::ui::{Align, Table, UserInterface};

/// Render a group as "A or B or C".
pub fn format_group(group: &Group) -> String {
    group
        .courses()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Print one line per unmet group.
pub fn show_unmet(ui: &mut dyn UserInterface, label: &str, groups: &[Group]) {
    for group in groups {
        ui.message(&format!("    {} {}", label, format_group(group)));
    }
}

/// Status word for a ranked course.
pub fn course_status(course: &ScoredCourse) -> &'static str {
    if course.taken {
        "taken"
    } else if course.eligible {
        "eligible"
    } else {
        "blocked"
    }
}

/// Build the table for a section, keeping at most `limit` ranked rows.
pub fn section_table(section: &Section, limit: Option<usize>) -> Table {
    match &section.content {
        SectionContent::Groups { groups } => {
            let mut table = Table::new(vec!["Requirement", "Satisfied by"]);
            for group in groups {
                let courses = group
                    .courses
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" or ");
                let satisfied = group
                    .satisfied_by
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".to_string());
                table.add_row(&[courses, satisfied]);
            }
            table
        }
        SectionContent::Ranked { courses } => {
            let mut table = Table::new(vec!["Course", "Score", "Status", "Offered", "Tags"])
                .align(1, Align::Right);
            let shown = limit.unwrap_or(courses.len());
            for ranked in courses.iter().take(shown) {
                let tags = ranked.course.tags.keys().cloned().collect::<Vec<_>>().join(", ");
                table.add_row(&[
                    ranked.course.code.to_string(),
                    ranked.course.score.to_string(),
                    course_status(&ranked.course).to_string(),
                    ranked.availability.label(),
                    tags,
                ]);
            }
            table
        }
    }
}

/// Header, progress, description and table for one section.
pub fn show_section(ui: &mut dyn UserInterface, section: &Section, limit: Option<usize>) {
    ui.show_header(&format!("{} / {}", section.program, section.category));

    if let Some(required) = section.required {
        ui.show_hint(&format!(
            "{} of {} completed",
            section.completed_count().min(required as usize),
            required
        ));
    }
    for line in &section.description {
        ui.detail(line);
    }

    let table = section_table(section, limit);
    if table.is_empty() {
        ui.warning("No courses match this category");
    } else {
        ui.show_table(&table);
    }

    if let SectionContent::Ranked { courses } = &section.content {
        let hidden = courses.len().saturating_sub(limit.unwrap_or(courses.len()));
        if hidden > 0 {
            ui.show_hint(&format!("{} more not shown", hidden));
        }
        for ranked in courses.iter().take(limit.unwrap_or(courses.len())) {
            for text in ranked.course.tags.values() {
                ui.detail(&format!("  {}: {}", ranked.course.code, text));
            }
        }
    }
}
