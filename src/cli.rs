//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::strategy::StrategyKind;

pub const AFTER_HELP: &str = "\
Examples:
  fake-to-real                                   Open the interactive tool
  fake-to-real render mvp-simulation --concept \"coach vocal\"
  fake-to-real render custom --phase market_proof --project scorescout --save
  fake-to-real catalog                           List phases and projects";

/// Fake-to-Real development strategy generator.
#[derive(Debug, Parser)]
#[command(name = "fake-to-real", version, about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the terminal UI (default).
    Tui,
    /// Print a strategy to stdout.
    Render {
        /// Which strategy to render.
        #[arg(value_enum)]
        strategy: StrategyKind,
        /// Phase id used by the custom strategy (defaults to the configured phase).
        #[arg(long)]
        phase: Option<String>,
        /// Project id used by the custom strategy (defaults to the configured project).
        #[arg(long)]
        project: Option<String>,
        /// Concept text. Blank uses the strategy's default concept.
        #[arg(long, default_value = "")]
        concept: String,
        /// Also write the strategy to a plan file in the output directory.
        #[arg(long)]
        save: bool,
    },
    /// List phase and project ids.
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["fake-to-real"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from([
            "fake-to-real",
            "render",
            "custom",
            "--phase",
            "market_proof",
            "--concept",
            "coach vocal",
            "--save",
            "--config",
            "/tmp/ftr.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ftr.toml")));
        match cli.command {
            Some(Commands::Render {
                strategy,
                phase,
                project,
                concept,
                save,
            }) => {
                assert_eq!(strategy, StrategyKind::Custom);
                assert_eq!(phase.as_deref(), Some("market_proof"));
                assert_eq!(project, None);
                assert_eq!(concept, "coach vocal");
                assert!(save);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_strategy_names() {
        for kind in StrategyKind::ALL {
            let name = kind.id().replace('_', "-");
            let cli = Cli::try_parse_from(["fake-to-real", "render", name.as_str()]).unwrap();
            assert!(matches!(
                cli.command,
                Some(Commands::Render { strategy, .. }) if strategy == kind
            ));
        }
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["fake-to-real", "render", "launch"]).is_err());
    }
}
