//! Eligible command implementation.
//!
//! The `coursepath eligible` command checks a list of courses against the
//! student's completed courses. It exits non-zero when any course is blocked.

use serde::Serialize;

use crate::catalog::CourseCode;
use crate::cli::args::EligibleArgs;
use crate::error::{PlannerError, Result};
use crate::requirements::{Eligibility, Group};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectLocation};
use super::display::show_unmet;

/// The eligible command implementation.
pub struct EligibleCommand {
    location: ProjectLocation,
    args: EligibleArgs,
}

#[derive(Serialize)]
struct EligibleReport<'a> {
    code: &'a CourseCode,
    /// Whether the catalog has an entry for the course
    known: bool,
    eligible: bool,
    unmet: &'a [Group],
}

impl EligibleCommand {
    /// Create a new eligible command.
    pub fn new(location: ProjectLocation, args: EligibleArgs) -> Self {
        Self { location, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EligibleArgs {
        &self.args
    }
}

impl Command for EligibleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = match self.location.open(ui) {
            Ok(ws) => ws,
            Err(result) => return Ok(result),
        };

        let parsed = self
            .args
            .codes
            .iter()
            .map(|raw| CourseCode::parse_lenient(raw))
            .collect::<Result<Vec<_>>>()
            .and_then(|codes| Ok((codes, workspace.completed(&self.args.taken.taken)?)));
        let (codes, completed) = match parsed {
            Ok(parsed) => parsed,
            Err(e @ PlannerError::MalformedCourseCode { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let evaluator = workspace.evaluator();
        let catalog = evaluator.catalog();
        let verdicts = codes
            .iter()
            .map(|code| evaluator.evaluate(code, &completed))
            .collect::<Result<Vec<Eligibility>>>()?;

        if self.args.json {
            let report: Vec<_> = codes
                .iter()
                .zip(&verdicts)
                .map(|(code, verdict)| EligibleReport {
                    code,
                    known: catalog.contains(code),
                    eligible: verdict.eligible,
                    unmet: &verdict.unmet,
                })
                .collect();
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.raw(&json);
        } else {
            for (code, verdict) in codes.iter().zip(&verdicts) {
                if verdict.eligible {
                    ui.success(&format!("{} is eligible", code));
                    if !catalog.contains(code) {
                        ui.warning(&format!(
                            "{} is not in the catalog; treating it as unrestricted",
                            code
                        ));
                    }
                } else {
                    ui.warning(&format!("{} is blocked", code));
                    show_unmet(ui, "needs", &verdict.unmet);
                    if verdict.unmet.is_empty() {
                        ui.message("    needs a prerequisite or corequisite first");
                    }
                }
            }
        }

        let blocked = verdicts.iter().filter(|v| !v.eligible).count();
        tracing::debug!("{} of {} courses blocked", blocked, verdicts.len());

        if blocked == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TakenArgs;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".coursepath");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "catalog: catalog.yml\nrequirements: requirements.yml\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("catalog.yml"),
            r#"
courses:
  - code: CS1110
  - code: CS2110
    prerequisites: [[CS1110, CS1112]]
  - code: CS3110
    prerequisites: [[CS2110], [CS2800]]
"#,
        )
        .unwrap();
        fs::write(temp.path().join("requirements.yml"), "programs: []\n").unwrap();
        temp
    }

    fn command(root: &Path, codes: &[&str], taken: &[&str], json: bool) -> EligibleCommand {
        let args = EligibleArgs {
            codes: codes.iter().map(|s| s.to_string()).collect(),
            taken: TakenArgs {
                taken: taken.iter().map(|s| s.to_string()).collect(),
            },
            json,
        };
        EligibleCommand::new(ProjectLocation::new(root, None), args)
    }

    #[test]
    fn eligible_course_succeeds() {
        let temp = project();
        let mut ui = MockUI::new();
        let result = command(temp.path(), &["CS2110"], &["CS1110"], false)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.successes().iter().any(|m| m == "CS2110 is eligible"));
    }

    #[test]
    fn blocked_course_lists_unmet_groups() {
        let temp = project();
        let mut ui = MockUI::new();
        let result = command(temp.path(), &["CS3110"], &["CS2110"], false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.warnings().iter().any(|m| m == "CS3110 is blocked"));
        assert!(ui.messages().iter().any(|m| m.contains("needs CS2800")));
        assert!(!ui.has_output("needs CS2110"));
    }

    #[test]
    fn json_output_is_machine_readable() {
        let temp = project();
        let mut ui = MockUI::new();
        command(temp.path(), &["CS2110"], &[], true)
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.raw_output()[0]).unwrap();
        assert_eq!(value[0]["code"], "CS2110");
        assert_eq!(value[0]["eligible"], false);
        assert_eq!(value[0]["unmet"][0][0], "CS1110");
    }

    #[test]
    fn course_missing_from_catalog_is_labelled() {
        let temp = project();
        let mut ui = MockUI::new();
        let result = command(temp.path(), &["ASTR9999"], &[], false)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.successes().iter().any(|m| m == "ASTR9999 is eligible"));
        assert!(ui
            .warnings()
            .iter()
            .any(|m| m == "ASTR9999 is not in the catalog; treating it as unrestricted"));

        let mut ui = MockUI::new();
        command(temp.path(), &["ASTR9999", "CS1110"], &[], true)
            .execute(&mut ui)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&ui.raw_output()[0]).unwrap();
        assert_eq!(value[0]["known"], false);
        assert_eq!(value[0]["eligible"], true);
        assert_eq!(value[1]["known"], true);
    }

    #[test]
    fn malformed_code_is_reported() {
        let temp = project();
        let mut ui = MockUI::new();
        let result = command(temp.path(), &["CS31X"], &[], false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors().iter().any(|m| m.contains("Malformed course code")));
    }

    #[test]
    fn missing_config_exits_2() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let result = command(temp.path(), &["CS2110"], &[], false)
            .execute(&mut ui)
            .unwrap();
        assert_eq!(result.exit_code, 2);
    }
}
