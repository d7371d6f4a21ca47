//! Whole-document JSON persistence for the list store.
//!
//! The collection is stored as a single JSON object (`{"list": ["item", ...]}`)
//! and rewritten in full after every mutation: temp file, fsync, rename.

use chrono::Utc;
use list_bot_types::ListDocument;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read the document at `path`. A missing file is `Ok(None)`.
pub fn load_document(path: &Path) -> Result<Option<ListDocument>, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e)),
    };

    serde_json::from_str::<ListDocument>(&raw)
        .map(Some)
        .map_err(|e| format!("Invalid list data in {}: {}", path.display(), e))
}

/// Load the document, falling back to an empty collection when the file is
/// missing or unreadable. A corrupt file is copied aside first.
pub fn load_or_recover(path: &Path) -> ListDocument {
    match load_document(path) {
        Ok(Some(doc)) => {
            log::info!("Loaded {} lists from {}", doc.len(), path.display());
            doc
        }
        Ok(None) => {
            log::info!("Data file {} not found, starting fresh", path.display());
            ListDocument::new()
        }
        Err(e) => {
            log::error!("Error loading data: {}", e);
            backup_corrupted(path);
            ListDocument::new()
        }
    }
}

/// Rewrite the whole document. With `keep_backup`, the previous version is
/// copied to `<file>.backup` first.
pub fn save_document(path: &Path, doc: &ListDocument, keep_backup: bool) -> Result<(), String> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
    }

    if keep_backup && path.exists() {
        let backup = with_suffix(path, ".backup");
        fs::copy(path, &backup)
            .map_err(|e| format!("Failed to back up to {}: {}", backup.display(), e))?;
    }

    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| format!("Failed to serialize lists: {}", e))?;

    let tmp_path = with_suffix(path, ".tmp");
    let replaced = write_synced(&tmp_path, json.as_bytes()).and_then(|_| {
        fs::rename(&tmp_path, path)
            .map_err(|e| format!("Failed to replace {}: {}", path.display(), e))
    });
    if let Err(e) = replaced {
        if tmp_path.exists() {
            if let Err(rm) = fs::remove_file(&tmp_path) {
                log::warn!("Failed to remove {}: {}", tmp_path.display(), rm);
            }
        }
        return Err(e);
    }

    log::debug!("Data saved to {}", path.display());
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let mut file = fs::File::create(path)
        .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    file.write_all(bytes)
        .and_then(|_| file.sync_all())
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Copy an unreadable data file to `<file>.backup_<UTC timestamp>`.
pub fn backup_corrupted(path: &Path) -> Option<PathBuf> {
    if !path.exists() {
        return None;
    }
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let backup = with_suffix(path, &format!(".backup_{}", stamp));
    match fs::copy(path, &backup) {
        Ok(_) => {
            log::info!("Corrupted file backed up to {}", backup.display());
            Some(backup)
        }
        Err(e) => {
            log::error!("Failed to backup corrupted file: {}", e);
            None
        }
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
