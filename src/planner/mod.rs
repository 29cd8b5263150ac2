//! Requirement pages and the project workspace they are built from.

pub mod page;
pub mod workspace;

pub use page::{
    GroupProgress, PageAssembler, ProgramSelection, RankedCourse, RequirementPage, Section,
    SectionContent,
};
pub use workspace::Workspace;
