pub mod commands;
pub mod core;
pub mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::batch::BatchCommand;
use commands::countries::CountriesCommand;
use commands::export::ExportCommand;
use commands::presets::PresetsCommand;
use commands::score::ScoreCommand;
use commands::timeline::TimelineCommand;
use crate::core::config::ConfigStore;

#[derive(Parser)]
#[command(name = "conflict-risk")]
#[command(about = "Score and simulate geopolitical conflict risk", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.conflict-risk/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List scenario presets and country profiles
    Presets(PresetsCommand),
    /// Score a preset, optionally overriding indicators
    Score(ScoreCommand),
    /// Compare risk across the country profiles
    Countries(CountriesCommand),
    /// Simulate risk year by year with random drift
    Timeline(TimelineCommand),
    /// Score a batch of randomly sampled scenarios
    Batch(BatchCommand),
    /// Write the scenario and its timeline to CSV files
    Export(ExportCommand),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = ConfigStore::new(cli.config);
    if let Some(path) = store.path() {
        tracing::debug!(path = %path.display(), "config location");
    }
    let config = store.load()?;

    match cli.command {
        Commands::Presets(cmd) => cmd.execute(),
        Commands::Score(cmd) => cmd.execute(),
        Commands::Countries(cmd) => cmd.execute(),
        Commands::Timeline(cmd) => cmd.execute(&config),
        Commands::Batch(cmd) => cmd.execute(&config),
        Commands::Export(cmd) => cmd.execute(&config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    crate::core::logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            crate::core::error::report(&err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::try_parse_from([
            "conflict-risk",
            "score",
            "--preset",
            "Energy Crisis",
            "--gti",
            "140",
            "--afs",
            "3",
        ])
        .unwrap();

        let Commands::Score(cmd) = cli.command else {
            panic!("expected score");
        };
        let overrides = cmd.scenario.overrides();
        assert_eq!(cmd.scenario.preset, "Energy Crisis");
        assert_eq!(overrides.gti, Some(140.0));
        assert_eq!(overrides.afs, Some(3.0));
        assert_eq!(overrides.twsi, None);
    }

    #[test]
    fn test_afs_must_be_an_integer() {
        assert!(Cli::try_parse_from(["conflict-risk", "score", "--afs", "1.5"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["conflict-risk", "batch", "-n", "10", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Batch(cmd) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(cmd.count, Some(10));
    }
}
