use crate::cmd::open_ledger;
use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Show your strengths and weaknesses
    Show,
    /// Update your profile. Fields you leave out keep their current value
    Set {
        #[arg(long)]
        strengths: Option<String>,
        #[arg(long)]
        weaknesses: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: ProfileSubcommand, json: bool) -> anyhow::Result<()> {
    let ledger = open_ledger(root);
    match subcmd {
        ProfileSubcommand::Show => {
            let profile = ledger.profile().context("failed to load profile")?;
            if json {
                print_json(&profile)?;
            } else {
                println!("My strengths:  {}", or_dash(&profile.strengths));
                println!("My weaknesses: {}", or_dash(&profile.weaknesses));
            }
        }
        ProfileSubcommand::Set {
            strengths,
            weaknesses,
        } => {
            let mut profile = ledger.profile().context("failed to load profile")?;
            if let Some(s) = strengths {
                profile.strengths = s;
            }
            if let Some(w) = weaknesses {
                profile.weaknesses = w;
            }
            ledger
                .save_profile(&profile)
                .context("failed to save profile")?;
            if json {
                print_json(&profile)?;
            } else {
                println!("Profile saved!");
            }
        }
    }
    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
