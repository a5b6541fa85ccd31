// src/snapshot.rs

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{CheckError, Result};
use crate::record::Record;

/// The last-known device list, persisted as one JSON array.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored records. A missing file is an empty snapshot; a file
    /// that does not parse is an error.
    pub fn load(&self) -> Result<Vec<Record>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(CheckError::io(&self.path, e)),
        };

        let records: Vec<Record> =
            serde_json::from_str(&text).map_err(|source| CheckError::SnapshotParse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "loaded snapshot");
        Ok(records)
    }

    /// Replace the stored snapshot with `records`.
    ///
    /// Written to a temp file in the same directory and persisted over the
    /// target, so readers see either the old or the new snapshot. The temp
    /// file is removed if any step fails.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| CheckError::io(&dir, e))?;

        // pretty-print, 4-space indent, trailing newline
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut ser)
            .map_err(|e| CheckError::io(&self.path, io::Error::new(io::ErrorKind::Other, e)))?;
        buf.push(b'\n');

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| CheckError::io(&dir, e))?;
        tmp.write_all(&buf)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| CheckError::io(tmp.path(), e))?;

        tmp.persist(&self.path)
            .map_err(|e| CheckError::io(&self.path, e.error))?;
        info!(path = %self.path.display(), count = records.len(), "saved snapshot");
        Ok(())
    }
}

/// Load the snapshot at `path`; see [`SnapshotStore::load`].
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    SnapshotStore::new(path.as_ref()).load()
}

/// Overwrite the snapshot at `path`; see [`SnapshotStore::save`].
pub fn save(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    SnapshotStore::new(path.as_ref()).save(records)
}
