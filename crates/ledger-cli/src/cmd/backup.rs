use crate::output::print_json;
use anyhow::Context;
use ledger_core::{backup, paths, FileStore};
use std::path::{Path, PathBuf};

pub fn export(root: &Path, out: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let snapshot = backup::export(&FileStore::new(root)).context("export failed")?;
    let path = out.map(Path::to_path_buf).unwrap_or_else(|| {
        PathBuf::from(paths::backup_file_name(chrono::Local::now().date_naive()))
    });

    let data = snapshot.to_json().context("failed to serialize backup")?;
    std::fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), opponents = snapshot.opponents.len(), "exported backup");

    if json {
        print_json(&serde_json::json!({
            "path": path,
            "opponents": snapshot.opponents.len(),
        }))?;
    } else {
        println!(
            "Exported {} opponent(s) to {}",
            snapshot.opponents.len(),
            path.display()
        );
    }
    Ok(())
}

pub fn import(root: &Path, file: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!(
            "importing replaces all current opponents and your profile; re-run with --yes to confirm"
        );
    }

    let data = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let snapshot = backup::Backup::from_json(&data).context("Error importing file.")?;
    backup::import(&FileStore::new(root), &snapshot).context("Error importing file.")?;

    if json {
        print_json(&serde_json::json!({
            "imported": true,
            "opponents": snapshot.opponents.len(),
        }))?;
    } else {
        println!("Data imported successfully!");
    }
    Ok(())
}
