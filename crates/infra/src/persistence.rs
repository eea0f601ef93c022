// crates/infra/src/persistence.rs
pub mod manifest_reader;

pub use manifest_reader::ManifestReader;
