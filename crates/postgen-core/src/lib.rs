//! postgen core - blog scaffolding in hexagonal style.
//!
//! This crate provides the domain and application layers for the postgen
//! blog scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           postgen-cli (CLI)             │
//! │   (TerminalPrompter, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (BlogWorkflow, ScaffoldService, Namer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, Prompter, ColorSource)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    postgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, RandomColorSource...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (PostTitle, CategoryName, PostTemplate)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use postgen_core::prelude::*;
//!
//! let ctx = ScaffoldContext::new(std::env::current_dir()?, today);
//! let workflow = BlogWorkflow::new(filesystem, prompter, colors);
//! match workflow.run(&ctx)? {
//!     WorkflowOutcome::PostCreated { path, .. } => println!("{}", path.display()),
//!     WorkflowOutcome::CategoryCreated(report) => println!("{}", report.name),
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BlogWorkflow, CategoryNamer, CategoryPlan, CategoryReport, GenerationStage,
        ScaffoldContext, ScaffoldService, WorkflowOutcome,
        ports::{ColorSource, DirEntry, Filesystem, Prompter},
    };
    pub use crate::domain::{
        BlogLayout, CategoryDescription, CategoryName, DescriptionFormat, HexColor, PostDate,
        PostTemplate, PostTitle, PostingType, Slug,
    };
    pub use crate::error::{PostgenError, PostgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
