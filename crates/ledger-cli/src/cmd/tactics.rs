use crate::cmd::open_ledger;
use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use gemini_client::{ClientConfig, GeminiClient};
use ledger_core::{
    config::{Config, API_KEY_ENV},
    markdown, prompt, report,
    types::OpponentId,
};
use std::path::Path;
use std::time::Duration;

#[derive(Subcommand)]
pub enum TacticsSubcommand {
    /// Ask Gemini for a game plan against an opponent and save it
    Generate {
        id: OpponentId,
        /// Override the configured model for this request
        #[arg(long)]
        model: Option<String>,
    },
    /// Show the saved game plan
    Show { id: OpponentId },
    /// Print the prompt that `generate` would send
    Prompt { id: OpponentId },
}

pub fn run(root: &Path, subcmd: TacticsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        TacticsSubcommand::Generate { id, model } => generate(root, id, model, json),
        TacticsSubcommand::Show { id } => show(root, id, json),
        TacticsSubcommand::Prompt { id } => print_prompt(root, id, json),
    }
}

fn generate(
    root: &Path,
    id: OpponentId,
    model: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let ledger = open_ledger(root);
    let opponent = ledger
        .get(id)
        .with_context(|| format!("opponent '{id}' not found"))?;
    let profile = ledger.profile().context("failed to load profile")?;
    let config = Config::load(root).context("failed to load config")?;

    let api_key = config
        .gemini
        .resolve_api_key(std::env::var(API_KEY_ENV).ok())
        .with_context(|| {
            format!(
                "no Gemini API key configured; set {API_KEY_ENV} or run `tennis-ledger config set --api-key <key>`"
            )
        })?;

    let client = GeminiClient::new(ClientConfig {
        api_key,
        model: model.unwrap_or(config.gemini.model),
        base_url: config.gemini.base_url,
        timeout: config.gemini.timeout_seconds.map(Duration::from_secs),
    })?;

    let prompt = prompt::game_plan_prompt(&profile, &opponent);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    // A failed request leaves the stored game plan as it was.
    let text = match runtime.block_on(client.generate(&prompt)) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(opponent = %id, error = %e, "game plan generation failed");
            return Err(anyhow::Error::new(e).context("Could not generate tactics."));
        }
    };

    let markup = markdown::render(&text);
    let updated = ledger
        .set_tactics(id, markup)
        .context("failed to save game plan")?;

    if json {
        print_json(&serde_json::json!({
            "id": id,
            "tactics": updated.tactics,
        }))?;
    } else {
        println!("{}", updated.tactics.as_deref().unwrap_or_default());
    }
    Ok(())
}

fn show(root: &Path, id: OpponentId, json: bool) -> anyhow::Result<()> {
    let opponent = open_ledger(root)
        .get(id)
        .with_context(|| format!("opponent '{id}' not found"))?;
    let cached = opponent.cached_tactics();

    if json {
        print_json(&serde_json::json!({ "id": id, "tactics": cached }))?;
    } else {
        println!("{}", cached.unwrap_or(report::NO_TACTICS_PLACEHOLDER));
    }
    Ok(())
}

fn print_prompt(root: &Path, id: OpponentId, json: bool) -> anyhow::Result<()> {
    let ledger = open_ledger(root);
    let opponent = ledger
        .get(id)
        .with_context(|| format!("opponent '{id}' not found"))?;
    let profile = ledger.profile().context("failed to load profile")?;
    let text = prompt::game_plan_prompt(&profile, &opponent);

    if json {
        print_json(&serde_json::json!({ "id": id, "prompt": text }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}
