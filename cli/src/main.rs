//! CLI entrypoint for mindreader
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use mindreader_application::{CatalogSource, GameController, TranscriptLogger};
use mindreader_domain::{OutputFormat, PlayerId, QuestionStrategy};
use mindreader_infrastructure::{
    ConfigLoader, ConfigOverrides, InMemorySessionStore, JsonFileCatalogSource, JsonlTranscriptLogger,
};
use mindreader_presentation::{Cli, GameRepl, ReplConfig, ScriptRunner, formatter_for};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration: --no-config skips every file and env source
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    // Command-line flags win over every configuration source
    config.apply_overrides(ConfigOverrides {
        catalog: cli.catalog.clone(),
        strategy: cli.strategy.map(QuestionStrategy::from),
        format: cli.output.map(OutputFormat::from),
        transcript: cli.transcript.clone(),
    });
    config.validate()?;

    // Keep the guard alive so buffered log lines reach the file
    let log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting mindreader");

    if !config.output.use_color() {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let source = JsonFileCatalogSource::new(&config.catalog.path);
    let catalog = source
        .load()
        .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;
    if catalog.is_empty() {
        warn!("Catalog {} has no characters", source.describe());
    }

    let store = Arc::new(InMemorySessionStore::new());
    let mut controller = GameController::new(Arc::new(catalog), store, config.to_engine_config());
    if let Some(path) = config.transcript.active_path() {
        match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                let logger: Arc<dyn TranscriptLogger> = Arc::new(logger);
                controller = controller.with_transcript(logger);
            }
            None => warn!("Transcript disabled: could not open {}", path.display()),
        }
    }

    let player = PlayerId::new(cli.player.clone());
    let formatter = formatter_for(config.output.resolved_format());

    // Scripted mode: play the given answers and exit
    if cli.is_scripted() {
        let runner = ScriptRunner::new(&controller, player);
        let result = runner.run(&cli.answers).await;
        return match result {
            Ok(run) => {
                for reply in &run.replies {
                    println!("{}", formatter.format_reply(reply));
                }
                if run.unused_answers > 0 {
                    warn!("{} answers left after the game ended", run.unused_answers);
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", formatter.format_error(&e));
                // exit() skips destructors; flush buffered log lines first
                drop(log_guard);
                std::process::exit(1);
            }
        };
    }

    let repl_config = ReplConfig {
        history_file: config.repl.history_file.clone(),
        quiet: cli.quiet,
    };
    let repl = GameRepl::new(Arc::new(controller), player)
        .with_formatter(formatter)
        .with_config(repl_config);
    repl.run().await?;

    Ok(())
}

/// Initialize logging based on verbosity level. `RUST_LOG` takes precedence.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let appender = tracing_appender::rolling::never(directory.unwrap_or(Path::new(".")), file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
