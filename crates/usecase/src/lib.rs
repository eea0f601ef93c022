//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`options`]: Options recognised by a traversal
//! - [`source`]: The lazy handle-to-entry iterator
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod options;
pub mod source;

pub use options::{SourceOptions, SourceOptionsBuilder, SourceOptionsBuilderError};
pub use source::FileListSource;
