// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod host;
pub mod persistence;
#[cfg(feature = "web")]
pub mod web;

pub use diagnostics::{CollectingSink, LogSink};
pub use host::{HostFile, HostFileList};
