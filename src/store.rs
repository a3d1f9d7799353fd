//! Dataset and change-set document I/O
//!
//! Both inputs and the output are JSON documents. Reading is strict: an
//! unreadable file or a document that does not match the expected shape is
//! fatal. The one exception is a change record with an unrecognized `type`,
//! which is logged and skipped so the rest of the batch still applies.

use crate::changes::{Change, ChangeRecordError, ChangeSetDocument};
use crate::model::Dataset;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a dataset document (`{"users": [...], "playlists": [...], "songs": [...]}`)
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to open dataset: {:?}", path))?;
    let dataset: Dataset = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse dataset: {:?}", path))?;

    log::debug!(
        "Parsed dataset: {} users, {} playlists, {} songs",
        dataset.user_count(),
        dataset.playlist_count(),
        dataset.song_count()
    );
    Ok(dataset)
}

/// Read a change-set document and convert its records into changes
///
/// Records with an unrecognized `type` are skipped with a warning. A record
/// of a recognized type missing one of its required fields makes the whole
/// document malformed and the load fails.
pub fn load_changes(path: &Path) -> Result<Vec<Change>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to open change-set: {:?}", path))?;
    let document: ChangeSetDocument = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse change-set: {:?}", path))?;

    let mut changes = Vec::with_capacity(document.changes.len());
    for record in document.changes {
        match Change::try_from(record) {
            Ok(change) => changes.push(change),
            Err(err @ ChangeRecordError::UnknownType(_)) => log::warn!("{}", err),
            Err(err) => {
                return Err(err).with_context(|| format!("Malformed change-set: {:?}", path));
            }
        }
    }
    Ok(changes)
}

/// Write a dataset document
///
/// The document is serialized in full before anything touches the
/// filesystem, so a failure never leaves a half-written output file behind.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let data = serde_json::to_string(dataset)
        .with_context(|| format!("Failed to serialize dataset: {:?}", path))?;
    fs::write(path, data).with_context(|| format!("Failed to write dataset: {:?}", path))?;
    Ok(())
}
