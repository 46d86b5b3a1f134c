//! JSON file storage for train collections.
//!
//! A data file holds one JSON array of train records, pretty-printed with a
//! four-space indent. Non-ASCII text is written verbatim. Saving replaces the
//! whole file: content is written to a temporary file in the same directory
//! which is then persisted over the target.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::repository::TrainCollection;

/// Indent used when writing data files.
const INDENT: &[u8] = b"    ";

/// Load the collection stored at `path`.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file is missing or unreadable, and
/// [`Error::Parse`] if it is not UTF-8 JSON holding an array of well-formed
/// records.
pub fn load(path: &Path) -> Result<TrainCollection> {
    debug!("Loading trains from {}", path.display());
    let content = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let trains: TrainCollection =
        serde_json::from_slice(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded {} trains from {}", trains.len(), path.display());
    Ok(trains)
}

/// Write `trains` to `path`, replacing any existing content.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`Error::Write`] if the file cannot be written.
pub fn save(path: &Path, trains: &TrainCollection) -> Result<()> {
    let bytes = to_pretty_json(trains)?;
    write_atomic(path, &bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Saved {} trains to {}", trains.len(), path.display());
    Ok(())
}

fn to_pretty_json(trains: &TrainCollection) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(INDENT));
    trains.serialize(&mut serializer)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write `bytes` to a temporary file next to `path`, then rename it into place.
///
/// The temporary file is removed if anything fails before the rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Data files addressed by name inside a data directory.
#[derive(Debug, Clone)]
pub struct Store {
    /// Directory holding the data files.
    data_dir: PathBuf,
}

impl Store {
    /// Create a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory data files are resolved against.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve `filename` to a path inside the data directory.
    #[must_use]
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    /// Load the collection stored in `filename`.
    ///
    /// # Errors
    ///
    /// See [`load`].
    pub fn load(&self, filename: &str) -> Result<TrainCollection> {
        load(&self.resolve(filename))
    }

    /// Save `trains` to `filename`.
    ///
    /// # Errors
    ///
    /// See [`save`].
    pub fn save(&self, filename: &str, trains: &TrainCollection) -> Result<()> {
        save(&self.resolve(filename), trains)
    }
}
