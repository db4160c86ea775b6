//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "write a post" or "create a category".

pub mod blog_workflow;
pub mod category_namer;
pub mod prompting;
pub mod scaffold_service;

pub use blog_workflow::{BlogWorkflow, WorkflowOutcome};
pub use category_namer::CategoryNamer;
pub use scaffold_service::{CategoryPlan, CategoryReport, GenerationStage, ScaffoldService};
