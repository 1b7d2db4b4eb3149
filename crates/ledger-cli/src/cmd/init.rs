use crate::output::print_json;
use anyhow::Context;
use ledger_core::{config::Config, paths};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let dir = paths::ledger_dir(root);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let wrote_config = Config::init(root).context("failed to write default config")?;
    tracing::info!(dir = %dir.display(), wrote_config, "initialized ledger");

    if json {
        print_json(&serde_json::json!({
            "root": root,
            "config_created": wrote_config,
        }))?;
    } else if wrote_config {
        println!("Initialized tennis ledger in {}", dir.display());
    } else {
        println!("Tennis ledger already initialized in {}", dir.display());
    }
    Ok(())
}
