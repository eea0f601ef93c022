// crates/infra/src/persistence/manifest_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use filelist_source_shared_kernel::{ErrorContext, InfraResult, InfrastructureError, Result};

use crate::host::HostFileList;

/// Loads host selections serialized as JSON.
///
/// A manifest is either an array of property objects or
/// `{"type": "...", "files": [...]}`; see [`HostFileList`].
pub struct ManifestReader;

impl ManifestReader {
    /// Parse a manifest from any reader.
    pub fn from_reader<R: Read>(reader: R) -> InfraResult<HostFileList> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a manifest held in memory.
    pub fn parse(json: &str) -> InfraResult<HostFileList> {
        Ok(serde_json::from_str(json)?)
    }

    /// Open and parse the manifest at `path`.
    ///
    /// Parse failures are wrapped with the manifest's path; read failures
    /// already carry it.
    pub fn open(path: &Path) -> Result<HostFileList> {
        let file = File::open(path).map_err(|source| InfrastructureError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).with_context(|| format!("manifest {}", path.display()))
    }
}
