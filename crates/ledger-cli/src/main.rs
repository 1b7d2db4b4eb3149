mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, matches::MatchSubcommand, opponent::OpponentSubcommand,
    profile::ProfileSubcommand, tactics::TacticsSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tennis-ledger",
    about = "Scouting notes, match history and AI game plans for your tennis opponents",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root (default: nearest directory with .tennis-ledger/, else your home directory)
    #[arg(long, global = true, env = "TENNIS_LEDGER_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and a default config
    Init,

    /// Add, edit, list and delete opponents
    Opponent {
        #[command(subcommand)]
        subcommand: OpponentSubcommand,
    },

    /// Record and delete matches against an opponent
    Match {
        #[command(subcommand)]
        subcommand: MatchSubcommand,
    },

    /// Show or update your own player profile
    Profile {
        #[command(subcommand)]
        subcommand: ProfileSubcommand,
    },

    /// Generate and show AI game plans
    Tactics {
        #[command(subcommand)]
        subcommand: TacticsSubcommand,
    },

    /// Export all data to a JSON backup
    Export {
        /// Output file (default: tennis_ledger_backup_<date>.json in the current directory)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Replace all data with the contents of a JSON backup
    Import {
        file: PathBuf,
        /// Confirm overwriting the current data
        #[arg(long)]
        yes: bool,
    },

    /// Show, change and validate configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved data root");

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Opponent { subcommand } => cmd::opponent::run(&root, subcommand, cli.json),
        Commands::Match { subcommand } => cmd::matches::run(&root, subcommand, cli.json),
        Commands::Profile { subcommand } => cmd::profile::run(&root, subcommand, cli.json),
        Commands::Tactics { subcommand } => cmd::tactics::run(&root, subcommand, cli.json),
        Commands::Export { out } => cmd::backup::export(&root, out.as_deref(), cli.json),
        Commands::Import { file, yes } => cmd::backup::import(&root, &file, yes, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
