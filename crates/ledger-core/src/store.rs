//! The record store: a flat opponent collection plus the singleton profile.
//!
//! Writes always replace the whole collection. There is no partial update API.

use crate::error::Result;
use crate::io;
use crate::paths;
use crate::types::{OpponentRecord, ProfileRecord};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

pub trait RecordStore {
    fn read_opponents(&self) -> Result<Vec<OpponentRecord>>;
    fn write_opponents(&self, opponents: &[OpponentRecord]) -> Result<()>;
    fn read_profile(&self) -> Result<ProfileRecord>;
    fn write_profile(&self, profile: &ProfileRecord) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// YAML files under `<root>/.tennis-ledger/`. Missing files read as an empty
/// collection and a default profile.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RecordStore for FileStore {
    fn read_opponents(&self) -> Result<Vec<OpponentRecord>> {
        match io::read_optional(&paths::opponents_path(&self.root))? {
            Some(data) if !data.trim().is_empty() => Ok(serde_yaml::from_str(&data)?),
            _ => Ok(Vec::new()),
        }
    }

    fn write_opponents(&self, opponents: &[OpponentRecord]) -> Result<()> {
        let path = paths::opponents_path(&self.root);
        let data = serde_yaml::to_string(opponents)?;
        io::atomic_write(&path, data.as_bytes())?;
        tracing::debug!(count = opponents.len(), path = %path.display(), "wrote opponents");
        Ok(())
    }

    fn read_profile(&self) -> Result<ProfileRecord> {
        match io::read_optional(&paths::profile_path(&self.root))? {
            Some(data) if !data.trim().is_empty() => Ok(serde_yaml::from_str(&data)?),
            _ => Ok(ProfileRecord::default()),
        }
    }

    fn write_profile(&self, profile: &ProfileRecord) -> Result<()> {
        let path = paths::profile_path(&self.root);
        let data = serde_yaml::to_string(profile)?;
        io::atomic_write(&path, data.as_bytes())?;
        tracing::debug!(path = %path.display(), "wrote profile");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Execution is single-threaded, so interior mutability
/// through `RefCell` is enough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    opponents: RefCell<Vec<OpponentRecord>>,
    profile: RefCell<ProfileRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(opponents: Vec<OpponentRecord>, profile: ProfileRecord) -> Self {
        Self {
            opponents: RefCell::new(opponents),
            profile: RefCell::new(profile),
        }
    }
}

impl RecordStore for MemoryStore {
    fn read_opponents(&self) -> Result<Vec<OpponentRecord>> {
        Ok(self.opponents.borrow().clone())
    }

    fn write_opponents(&self, opponents: &[OpponentRecord]) -> Result<()> {
        *self.opponents.borrow_mut() = opponents.to_vec();
        Ok(())
    }

    fn read_profile(&self) -> Result<ProfileRecord> {
        Ok(self.profile.borrow().clone())
    }

    fn write_profile(&self, profile: &ProfileRecord) -> Result<()> {
        *self.profile.borrow_mut() = profile.clone();
        Ok(())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn read_opponents(&self) -> Result<Vec<OpponentRecord>> {
        (**self).read_opponents()
    }

    fn write_opponents(&self, opponents: &[OpponentRecord]) -> Result<()> {
        (**self).write_opponents(opponents)
    }

    fn read_profile(&self) -> Result<ProfileRecord> {
        (**self).read_profile()
    }

    fn write_profile(&self, profile: &ProfileRecord) -> Result<()> {
        (**self).write_profile(profile)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MatchRecord, OpponentFields, OpponentId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> OpponentRecord {
        let mut opp = OpponentRecord::new(
            OpponentId::new(1),
            OpponentFields::from_form("Jo", Some("Pusher"), "lob", "net", None),
        );
        opp.matches.push(MatchRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            score: "6-2 6-1".to_string(),
        });
        opp
    }

    #[test]
    fn file_store_empty_when_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.read_opponents().unwrap().is_empty());
        assert_eq!(store.read_profile().unwrap(), ProfileRecord::default());
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.write_opponents(&[sample()]).unwrap();
        store
            .write_profile(&ProfileRecord {
                strengths: "forehand".to_string(),
                weaknesses: "second serve".to_string(),
            })
            .unwrap();

        assert!(dir.path().join(".tennis-ledger/opponents.yaml").exists());
        assert_eq!(store.read_opponents().unwrap(), vec![sample()]);
        assert_eq!(store.read_profile().unwrap().weaknesses, "second serve");
    }

    #[test]
    fn file_store_yaml_uses_camel_case() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        let mut opp = sample();
        opp.mental_notes = Some("slow starter".to_string());
        store.write_opponents(&[opp]).unwrap();
        let raw = std::fs::read_to_string(dir.path().join(".tennis-ledger/opponents.yaml")).unwrap();
        assert!(raw.contains("mentalNotes: slow starter"));
        assert!(raw.contains("2024-05-02"));
    }

    #[test]
    fn memory_store_replaces_whole_collection() {
        let store = MemoryStore::with_data(vec![sample()], ProfileRecord::default());
        store.write_opponents(&[]).unwrap();
        assert!(store.read_opponents().unwrap().is_empty());
    }
}
