pub mod backup;
pub mod config;
pub mod init;
pub mod matches;
pub mod opponent;
pub mod profile;
pub mod tactics;

use ledger_core::{FileStore, Ledger};
use std::path::Path;

/// The ledger backed by the YAML files under `root`.
pub fn open_ledger(root: &Path) -> Ledger<FileStore> {
    Ledger::new(FileStore::new(root))
}
