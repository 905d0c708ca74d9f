//! Birthday records stored as TOML files in a local directory.
//!
//! Each record lives in its own `<name-slug>.toml` file. The record id is
//! stored inside the file, so renaming a person renames the file but keeps
//! the id.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use super::BirthdayStore;
use super::filename::{self, EXTENSION};
use crate::birthday::{BirthdayDraft, BirthdayRecord};
use crate::error::{BirthdayError, BirthdayResult};

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

/// A record together with the file it was read from.
struct StoredRecord {
    path: PathBuf,
    record: BirthdayRecord,
}

impl LocalStore {
    /// Open the store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> BirthdayResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(LocalStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_all(&self) -> BirthdayResult<Vec<StoredRecord>> {
        let mut stored = Vec::new();

        if !self.dir.exists() {
            return Ok(stored);
        }

        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();

            if !path.is_file() || path.extension().is_none_or(|e| e != EXTENSION) {
                continue;
            }

            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable birthday file");
                    continue;
                }
            };
            match filename::parse_record(&content) {
                Some(record) => stored.push(StoredRecord { path, record }),
                None => warn!(path = %path.display(), "Skipping unreadable birthday file"),
            }
        }

        Ok(stored)
    }

    fn find(&self, id: &str) -> BirthdayResult<StoredRecord> {
        self.read_all()?
            .into_iter()
            .find(|s| s.record.id == id)
            .ok_or_else(|| BirthdayError::NotFound(id.to_string()))
    }

    fn write(&self, record: &BirthdayRecord) -> BirthdayResult<PathBuf> {
        let content =
            toml::to_string_pretty(record).map_err(|e| BirthdayError::Serialization(e.to_string()))?;
        let path = self.dir.join(filename::filename_for(record, &self.dir)?);

        std::fs::write(&path, content)?;
        debug!(id = %record.id, path = %path.display(), "Wrote birthday");

        Ok(path)
    }
}

impl BirthdayStore for LocalStore {
    fn list(&self) -> BirthdayResult<Vec<BirthdayRecord>> {
        let mut records: Vec<BirthdayRecord> =
            self.read_all()?.into_iter().map(|s| s.record).collect();

        records.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }

    fn get(&self, id: &str) -> BirthdayResult<BirthdayRecord> {
        Ok(self.find(id)?.record)
    }

    fn create(&self, draft: BirthdayDraft) -> BirthdayResult<BirthdayRecord> {
        let draft = draft.validated()?;
        let record = BirthdayRecord::from_draft(Uuid::new_v4().to_string(), draft);

        self.write(&record)?;
        Ok(record)
    }

    fn update(&self, id: &str, draft: BirthdayDraft) -> BirthdayResult<BirthdayRecord> {
        let draft = draft.validated()?;
        let existing = self.find(id)?;
        let record = BirthdayRecord::from_draft(id, draft);

        // Write first so a failed write leaves the old file in place
        let path = self.write(&record)?;
        if path != existing.path {
            std::fs::remove_file(&existing.path)?;
        }

        Ok(record)
    }

    fn delete(&self, id: &str) -> BirthdayResult<()> {
        let existing = self.find(id)?;
        std::fs::remove_file(&existing.path)?;
        debug!(id, path = %existing.path.display(), "Deleted birthday");
        Ok(())
    }
}
