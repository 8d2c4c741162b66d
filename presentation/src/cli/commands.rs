//! CLI command definitions

use clap::{Parser, ValueEnum};
use mindreader_domain::{OutputFormat, QuestionStrategy};
use std::path::PathBuf;

/// Output format for game replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable questions and guesses
    Text,
    /// One JSON reply per line
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Question strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Answer with the stored yes/no/maybe value
    Ternary,
    /// Confirm or deny one anchor value
    #[value(alias = "target_value")]
    TargetValue,
}

impl From<StrategyArg> for QuestionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Ternary => QuestionStrategy::Ternary,
            StrategyArg::TargetValue => QuestionStrategy::TargetValue,
        }
    }
}

/// CLI arguments for mindreader
#[derive(Parser, Debug)]
#[command(name = "mindreader")]
#[command(author, version, about = "Think of a character - mindreader will guess it")]
#[command(long_about = r#"
Mindreader guesses the character you are thinking of by asking yes/no/maybe
questions about its attributes.

Each question is about the attribute that splits the remaining characters
most evenly. The game ends when one character is left (a guess) or when no
question can tell the rest apart (the engine gives up).

Configuration files are loaded from (in priority order):
1. MINDREADER_* environment variables (e.g. MINDREADER_ENGINE__STRATEGY)
2. --config <path>         Explicit config file
3. ./mindreader.toml       Project-level config
4. ~/.config/mindreader/config.toml   Global config

Example:
  mindreader --catalog characters.json
  mindreader --strategy target-value
  mindreader -a yes -a no -a maybe -o json
"#)]
pub struct Cli {
    /// Answers to play without prompting, in order (can be specified multiple times).
    /// Each is yes, no, maybe or attribute:token.
    #[arg(short, long = "answer", value_name = "TOKEN")]
    pub answers: Vec<String>,

    /// Path to the characters JSON file
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Question strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Player id the game is kept under
    #[arg(long, value_name = "ID", default_value = "local")]
    pub player: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the greeting and hints
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL game transcript to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

impl Cli {
    /// Scripted mode plays the given answers and exits
    pub fn is_scripted(&self) -> bool {
        !self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scripted_answers() {
        let cli = Cli::try_parse_from([
            "mindreader",
            "-a",
            "yes",
            "--answer",
            "is_wizard:no",
            "--strategy",
            "target-value",
            "-o",
            "json",
        ])
        .unwrap();

        assert!(cli.is_scripted());
        assert_eq!(cli.answers, vec!["yes", "is_wizard:no"]);
        assert_eq!(cli.strategy, Some(StrategyArg::TargetValue));
        assert_eq!(cli.output, Some(OutputArg::Json));
        assert_eq!(cli.player, "local");
    }

    #[test]
    fn test_strategy_alias() {
        let cli = Cli::try_parse_from(["mindreader", "-s", "target_value"]).unwrap();
        assert_eq!(
            cli.strategy.map(QuestionStrategy::from),
            Some(QuestionStrategy::TargetValue)
        );
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mindreader", "-vv"]).unwrap();
        assert!(!cli.is_scripted());
        assert_eq!(cli.verbose, 2);
        assert!(cli.strategy.is_none());
        assert!(cli.output.is_none());
        assert!(cli.catalog.is_none());
    }
}
