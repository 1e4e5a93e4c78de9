//! Whole-file JSON persistence for the FAQ collection.
//!
//! Every read loads the full array and every write overwrites the full file.
//! There is no temp-file swap, so a crash mid-write can leave the file
//! truncated; the next read then degrades to an empty collection.

use rand::Rng;
use shared_types::FaqRecord;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct FaqStore {
    path: PathBuf,
    // Readers share it; a read-modify-write cycle holds it exclusively
    lock: RwLock<()>,
}

impl FaqStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Returns every record in insertion order.
    ///
    /// Never observes a write in progress. A missing, unreadable or corrupt
    /// file yields an empty collection.
    pub fn read_all(&self) -> Vec<FaqRecord> {
        let _guard = self.lock.read().unwrap_or_else(|poisoned| {
            warn!("FAQ store lock was poisoned, continuing");
            poisoned.into_inner()
        });
        self.load()
    }

    /// Overwrites the file with the pretty-printed collection.
    pub fn write_all(&self, records: &[FaqRecord]) -> Result<(), StoreError> {
        let _guard = self.write_guard();
        self.save(records)
    }

    /// Runs one read-modify-write cycle while holding the lock exclusively.
    ///
    /// The file is written only when `apply` returns `Ok`.
    pub fn mutate<R, E, F>(&self, apply: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<FaqRecord>) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_guard();

        let mut records = self.load();
        let result = apply(&mut records)?;
        self.save(&records)?;

        Ok(result)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, ()> {
        self.lock.write().unwrap_or_else(|poisoned| {
            warn!("FAQ store lock was poisoned, continuing");
            poisoned.into_inner()
        })
    }

    fn load(&self) -> Vec<FaqRecord> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Data file does not exist yet");
            return Vec::new();
        }

        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, path = %self.path.display(), "Failed to read FAQ file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, path = %self.path.display(), "FAQ file is not valid JSON");
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[FaqRecord]) -> Result<(), StoreError> {
        self.ensure_parent_dir()?;
        let json = serde_json::to_string_pretty(records)?;

        std::fs::write(&self.path, json).map_err(|e| {
            error!(error = %e, path = %self.path.display(), "Failed to write FAQ file");
            StoreError::Io(e)
        })?;

        debug!(count = records.len(), path = %self.path.display(), "Wrote FAQ file");
        Ok(())
    }
}

/// Builds an identifier from a base-36 millisecond timestamp followed by a
/// base-36 random token.
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let random: u64 = rand::rng().random();

    format!("{}{}", to_base36(millis), to_base36(u128::from(random)))
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();

    String::from_utf8(out).unwrap_or_default()
}
