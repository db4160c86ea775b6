//! Infrastructure adapters for postgen.
//!
//! This crate implements the ports defined in `postgen_core::application::ports`.
//! It contains the filesystem access, color generation and the scripted
//! prompter used for non-interactive runs and tests.

pub mod color;
pub mod filesystem;
pub mod prompter;

// Re-export commonly used adapters
pub use color::{FixedColorSource, RandomColorSource};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::ScriptedPrompter;
