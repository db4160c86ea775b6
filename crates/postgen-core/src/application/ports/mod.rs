//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `postgen-adapters` (and the
//! terminal prompter in `postgen-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file creation, listing
//!   - `Prompter`: Free-text and single-choice questions
//!   - `ColorSource`: Colors for front matter and descriptions

pub mod output;

pub use output::{ColorSource, DirEntry, Filesystem, Prompter};

#[cfg(test)]
pub use output::{MockColorSource, MockFilesystem, MockPrompter};
