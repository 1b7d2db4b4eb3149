use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use ledger_core::config::{Config, WarnLevel, API_KEY_ENV};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the current configuration (the API key is masked)
    Show,

    /// Change configuration values
    Set {
        /// Gemini model name
        #[arg(long)]
        model: Option<String>,
        /// Gemini API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// API key to store (GEMINI_API_KEY takes precedence when set)
        #[arg(long)]
        api_key: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Set {
            model,
            base_url,
            api_key,
            timeout,
        } => set(root, model, base_url, api_key, timeout, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let gemini = &config.gemini;
    let stored_key = gemini.api_key.as_deref().map(mask);
    let env_set = std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty());

    if json {
        print_json(&serde_json::json!({
            "version": config.version,
            "gemini": {
                "model": gemini.model,
                "base_url": gemini.base_url,
                "api_key": stored_key,
                "api_key_from_env": env_set,
                "timeout_seconds": gemini.timeout_seconds,
            },
        }))?;
        return Ok(());
    }

    println!("model:    {}", gemini.model);
    println!("base_url: {}", gemini.base_url);
    println!(
        "api_key:  {}{}",
        stored_key.as_deref().unwrap_or("(not set)"),
        if env_set {
            format!(" ({API_KEY_ENV} is set and takes precedence)")
        } else {
            String::new()
        }
    );
    match gemini.timeout_seconds {
        Some(t) => println!("timeout:  {t}s"),
        None => println!("timeout:  (default)"),
    }
    Ok(())
}

fn set(
    root: &Path,
    model: Option<String>,
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load config")?;
    if let Some(m) = model {
        config.gemini.model = m;
    }
    if let Some(url) = base_url {
        config.gemini.base_url = url;
    }
    if let Some(key) = api_key {
        let key = key.trim().to_string();
        config.gemini.api_key = (!key.is_empty()).then_some(key);
    }
    if let Some(t) = timeout {
        config.gemini.timeout_seconds = Some(t);
    }
    config.save(root).context("failed to save config")?;

    if json {
        print_json(&serde_json::json!({ "saved": true }))?;
    } else {
        println!("Config saved.");
    }
    Ok(())
}

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }
    Ok(())
}
