use crate::cmd::{matches::print_history, open_ledger};
use crate::output::{print_json, print_list, print_table};
use anyhow::Context;
use clap::Subcommand;
use ledger_core::{
    history::history_rows,
    report,
    types::{split_list, OpponentFields, OpponentId, OpponentRecord},
};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum OpponentSubcommand {
    /// Add a new opponent
    Add {
        #[arg(required = true)]
        name: Vec<String>,
        /// Playing style (e.g. Baseliner, Serve and volley)
        #[arg(long)]
        style: Option<String>,
        /// Comma-separated strengths
        #[arg(long, default_value = "")]
        strengths: String,
        /// Comma-separated weaknesses
        #[arg(long, default_value = "")]
        weaknesses: String,
        /// Mental and psychological notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit an opponent. Fields you leave out keep their current value
    Edit {
        id: OpponentId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        style: Option<String>,
        /// Comma-separated strengths (replaces the current list)
        #[arg(long)]
        strengths: Option<String>,
        /// Comma-separated weaknesses (replaces the current list)
        #[arg(long)]
        weaknesses: Option<String>,
        /// Mental notes (pass "" to clear)
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an opponent and all of their matches
    Delete {
        id: OpponentId,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List opponents sorted by name
    List,
    /// Show scouting notes, match history and game plan status
    Show { id: OpponentId },
    /// Write an HTML detail page for an opponent
    Report {
        id: OpponentId,
        /// Output file (default: print to stdout)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

pub fn run(root: &Path, subcmd: OpponentSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        OpponentSubcommand::Add {
            name,
            style,
            strengths,
            weaknesses,
            notes,
        } => {
            let fields = OpponentFields::from_form(
                &name.join(" "),
                style.as_deref(),
                &strengths,
                &weaknesses,
                notes.as_deref(),
            );
            add(root, fields, json)
        }
        OpponentSubcommand::Edit {
            id,
            name,
            style,
            strengths,
            weaknesses,
            notes,
        } => edit(
            root,
            id,
            EditArgs {
                name,
                style,
                strengths,
                weaknesses,
                notes,
            },
            json,
        ),
        OpponentSubcommand::Delete { id, yes } => delete(root, id, yes, json),
        OpponentSubcommand::List => list(root, json),
        OpponentSubcommand::Show { id } => show(root, id, json),
        OpponentSubcommand::Report { id, out } => write_report(root, id, out.as_deref()),
    }
}

fn add(root: &Path, fields: OpponentFields, json: bool) -> anyhow::Result<()> {
    let opponent = open_ledger(root)
        .add(fields)
        .context("failed to add opponent")?;

    if json {
        print_json(&opponent)?;
    } else {
        println!("Added opponent [{}]: {}", opponent.id, opponent.name);
    }
    Ok(())
}

struct EditArgs {
    name: Option<String>,
    style: Option<String>,
    strengths: Option<String>,
    weaknesses: Option<String>,
    notes: Option<String>,
}

impl EditArgs {
    /// The edit form: start from the stored values and replace what was given.
    fn into_fields(self, current: &OpponentRecord) -> OpponentFields {
        OpponentFields {
            name: self
                .name
                .map(|n| n.trim().to_string())
                .unwrap_or_else(|| current.name.clone()),
            style: self.style.or_else(|| current.style.clone()),
            strengths: self
                .strengths
                .map(|s| split_list(&s))
                .unwrap_or_else(|| current.strengths.clone()),
            weaknesses: self
                .weaknesses
                .map(|s| split_list(&s))
                .unwrap_or_else(|| current.weaknesses.clone()),
            mental_notes: self
                .notes
                .map(|n| n.trim().to_string())
                .or_else(|| current.mental_notes.clone()),
        }
    }
}

fn edit(root: &Path, id: OpponentId, args: EditArgs, json: bool) -> anyhow::Result<()> {
    let ledger = open_ledger(root);
    let current = ledger
        .get(id)
        .with_context(|| format!("opponent '{id}' not found"))?;
    let outcome = ledger
        .edit(id, args.into_fields(&current))
        .context("failed to save opponent")?;

    if json {
        print_json(&serde_json::json!({
            "opponent": outcome.opponent,
            "tactics_cleared": outcome.tactics_cleared,
        }))?;
    } else {
        println!("Updated opponent [{id}]: {}", outcome.opponent.name);
        if outcome.tactics_cleared && current.cached_tactics().is_some() {
            println!("Scouting notes changed; the saved game plan was cleared.");
        }
    }
    Ok(())
}

fn delete(root: &Path, id: OpponentId, yes: bool, json: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("deleting opponent '{id}' removes all of their matches; re-run with --yes to confirm");
    }
    let removed = open_ledger(root)
        .delete(id)
        .with_context(|| format!("failed to delete opponent '{id}'"))?;

    if json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("Deleted opponent [{id}]: {}", removed.name);
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let opponents = open_ledger(root)
        .list()
        .context("failed to load opponents")?;

    if json {
        print_json(&opponents)?;
        return Ok(());
    }

    if opponents.is_empty() {
        println!("No opponents added yet. Run `tennis-ledger opponent add <name>` to start!");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = opponents
        .iter()
        .map(|o| {
            vec![
                o.id.to_string(),
                o.name.clone(),
                o.style_str().to_string(),
                o.matches.len().to_string(),
                if o.cached_tactics().is_some() { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "STYLE", "MATCHES", "GAME PLAN"], rows);
    Ok(())
}

fn show(root: &Path, id: OpponentId, json: bool) -> anyhow::Result<()> {
    let opponent = open_ledger(root)
        .get(id)
        .with_context(|| format!("opponent '{id}' not found"))?;

    if json {
        print_json(&serde_json::json!({
            "opponent": opponent,
            "history": history_rows(&opponent.matches),
        }))?;
        return Ok(());
    }

    println!("Opponent: {} [{}]", opponent.name, opponent.id);
    let style = opponent.style_str();
    if !style.is_empty() && style != "Unknown" {
        println!("Style:    {style}");
    }
    println!();
    print_list("Strengths", &opponent.strengths, "No strengths listed.");
    print_list("Weaknesses", &opponent.weaknesses, "No weaknesses listed.");
    if !opponent.mental_notes_str().is_empty() {
        println!("Mental notes:\n  {}", opponent.mental_notes_str());
    }
    println!();

    print_history(history_rows(&opponent.matches));
    println!();

    if opponent.cached_tactics().is_some() {
        println!("Game plan: saved (run `tennis-ledger tactics show {id}`)");
    } else {
        println!("Game plan: {}", report::NO_TACTICS_PLACEHOLDER);
    }
    Ok(())
}

fn write_report(root: &Path, id: OpponentId, out: Option<&Path>) -> anyhow::Result<()> {
    let opponent = open_ledger(root)
        .get(id)
        .with_context(|| format!("opponent '{id}' not found"))?;
    let page = report::render_page(&opponent);

    match out {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote report for '{}' to {}", opponent.name, path.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}
