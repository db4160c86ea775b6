//! Application layer for postgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BlogWorkflow, ScaffoldService, CategoryNamer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Context**: Per-invocation inputs (working directory, date, layout)
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! input rules itself. Those live in `crate::domain`.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

pub use context::{DEFAULT_IGNORED_DIRS, ScaffoldContext};

pub use services::{
    BlogWorkflow, CategoryNamer, CategoryPlan, CategoryReport, GenerationStage, ScaffoldService,
    WorkflowOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ColorSource, DirEntry, Filesystem, Prompter};

pub use error::ApplicationError;
