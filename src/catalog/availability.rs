//! Offering status of a course.
//!
//! Whether a course is worth showing as "offered" depends on how recently
//! it ran and how many enrollment groups it had. [`classify`] turns a
//! catalog lookup into an [`AvailabilityStatus`].

use serde::{Deserialize, Serialize};

use super::course::Course;

/// Semesters considered current when judging staleness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityWindow {
    recent: Vec<String>,
}

impl AvailabilityWindow {
    pub fn new(recent: Vec<String>) -> Self {
        Self { recent }
    }

    /// An empty window treats every past offering as recent.
    pub fn is_recent(&self, semester: &str) -> bool {
        self.recent.is_empty() || self.recent.iter().any(|s| s == semester)
    }
}

/// How a course is currently offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// No catalog data for the code.
    Unknown,
    /// Not offered within the recent window.
    Stale { last_offered: Option<String> },
    /// Offered recently with a single enrollment group.
    SingleGroup { semester: String },
    /// Offered recently with several enrollment groups to choose from.
    MultiGroup { semester: String, groups: u32 },
}

impl AvailabilityStatus {
    /// Whether the course ran recently enough to plan around.
    pub fn is_offered(&self) -> bool {
        matches!(
            self,
            AvailabilityStatus::SingleGroup { .. } | AvailabilityStatus::MultiGroup { .. }
        )
    }

    /// Short label for tables.
    pub fn label(&self) -> String {
        match self {
            AvailabilityStatus::Unknown => "no data".to_string(),
            AvailabilityStatus::Stale {
                last_offered: Some(s),
            } => format!("last {}", s),
            AvailabilityStatus::Stale { last_offered: None } => "never offered".to_string(),
            AvailabilityStatus::SingleGroup { semester } => semester.clone(),
            AvailabilityStatus::MultiGroup { semester, groups } => {
                format!("{} ({} groups)", semester, groups)
            }
        }
    }
}

/// Classify a catalog lookup result.
pub fn classify(course: Option<&Course>, window: &AvailabilityWindow) -> AvailabilityStatus {
    let Some(course) = course else {
        return AvailabilityStatus::Unknown;
    };

    match course.last_offered() {
        Some(semester) if window.is_recent(semester) => {
            if course.enrollment_groups > 1 {
                AvailabilityStatus::MultiGroup {
                    semester: semester.to_string(),
                    groups: course.enrollment_groups,
                }
            } else {
                AvailabilityStatus::SingleGroup {
                    semester: semester.to_string(),
                }
            }
        }
        last => AvailabilityStatus::Stale {
            last_offered: last.map(str::to_string),
        },
    }
}
