use crate::cmd::open_ledger;
use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use ledger_core::{
    history::{history_rows, HistoryRow},
    types::OpponentId,
};
use std::path::Path;

#[derive(Subcommand)]
pub enum MatchSubcommand {
    /// Record a match result
    Add {
        id: OpponentId,
        /// Match date (YYYY-MM-DD)
        date: String,
        /// Score, e.g. 6-4 3-6 10-7
        #[arg(required = true)]
        score: Vec<String>,
    },
    /// Delete a match by its # in `match list`
    Delete {
        id: OpponentId,
        position: usize,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List matches against an opponent, newest first
    List { id: OpponentId },
}

pub fn run(root: &Path, subcmd: MatchSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        MatchSubcommand::Add { id, date, score } => add(root, id, &date, &score.join(" "), json),
        MatchSubcommand::Delete { id, position, yes } => delete(root, id, position, yes, json),
        MatchSubcommand::List { id } => list(root, id, json),
    }
}

fn add(root: &Path, id: OpponentId, date: &str, score: &str, json: bool) -> anyhow::Result<()> {
    let record = open_ledger(root)
        .add_match(id, date, score)
        .context("failed to record match")?;

    if json {
        print_json(&serde_json::json!({ "id": id, "match": record }))?;
    } else {
        println!(
            "Recorded match on {}: {}",
            record.display_date(),
            record.score
        );
    }
    Ok(())
}

fn delete(root: &Path, id: OpponentId, position: usize, yes: bool, json: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("re-run with --yes to delete match #{position}");
    }
    let removed = open_ledger(root)
        .delete_match(id, position)
        .context("failed to delete match")?;

    if json {
        print_json(&serde_json::json!({ "id": id, "deleted": removed }))?;
    } else {
        println!(
            "Deleted match on {}: {}",
            removed.display_date(),
            removed.score
        );
    }
    Ok(())
}

fn list(root: &Path, id: OpponentId, json: bool) -> anyhow::Result<()> {
    let opponent = open_ledger(root)
        .get(id)
        .with_context(|| format!("opponent '{id}' not found"))?;
    let rows = history_rows(&opponent.matches);

    if json {
        print_json(&rows)?;
        return Ok(());
    }

    print_history(rows);
    Ok(())
}

/// History table; an empty history prints its single placeholder row.
pub fn print_history(rows: Vec<HistoryRow>) {
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| match row {
            HistoryRow::Match {
                position,
                date,
                score,
            } => vec![position.to_string(), date, score],
            HistoryRow::Placeholder { message } => {
                vec![String::new(), message.to_string(), String::new()]
            }
        })
        .collect();
    print_table(&["#", "DATE", "SCORE"], rows);
}
