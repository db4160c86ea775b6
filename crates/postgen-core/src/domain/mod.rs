// ============================================================================
//  DOMAIN LAYER: blog rules without I/O
// ============================================================================

//! Core domain layer for postgen.
//!
//! This module contains pure blog logic: how titles become slugs, how front
//! matter and description files are rendered, where things live on disk.
//! All I/O and prompting is handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or clock access
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Deterministic**: Dates and colors are passed in, never sampled here
//!
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{BlogLayout, CategoryDescription, DEFAULT_EMOJI, PostTemplate};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    CategoryName, DescriptionFormat, HexColor, PostDate, PostTitle, PostingType, Slug,
};

pub use validation::DomainValidator;
