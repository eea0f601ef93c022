//! # Ports
//!
//! Interface definitions for the host environment.
//!
//! This crate defines traits that abstract what the host supplies:
//!
//! - [`handle`]: A single selected file and its metadata properties
//! - [`collection`]: A positionally indexable selection of handles
//! - [`diagnostics`]: Where non-fatal warnings are delivered
//!
//! These ports allow the domain and application layers to remain
//! independent of any particular host (browser, desktop shell, tests).

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod collection;
pub mod diagnostics;
pub mod handle;

pub use collection::FileCollection;
pub use diagnostics::{Diagnostic, DiagnosticsSink, NoopSink};
pub use handle::FileHandle;
