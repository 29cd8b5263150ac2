//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command loads its
//! [`Workspace`](crate::planner::Workspace) through [`ProjectLocation`], so
//! missing or broken configuration is reported the same way everywhere.

pub mod category;
pub mod course;
pub mod dispatcher;
pub mod display;
pub mod eligible;
pub mod lint;
pub mod page;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ProjectLocation};
