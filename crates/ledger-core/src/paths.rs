use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const LEDGER_DIR: &str = ".tennis-ledger";
pub const OPPONENTS_FILE: &str = ".tennis-ledger/opponents.yaml";
pub const PROFILE_FILE: &str = ".tennis-ledger/profile.yaml";
pub const CONFIG_FILE: &str = ".tennis-ledger/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn ledger_dir(root: &Path) -> PathBuf {
    root.join(LEDGER_DIR)
}

pub fn opponents_path(root: &Path) -> PathBuf {
    root.join(OPPONENTS_FILE)
}

pub fn profile_path(root: &Path) -> PathBuf {
    root.join(PROFILE_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Default file name for an export taken on `date`.
pub fn backup_file_name(date: chrono::NaiveDate) -> String {
    format!("tennis_ledger_backup_{}.json", date.format("%Y-%m-%d"))
}
