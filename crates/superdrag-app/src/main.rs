mod browser;
mod cli;
mod replay;
mod settings_cmd;
mod surface;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use superdrag_common::{EventBus, SuperdragError};
use superdrag_config::toml_loader::default_config_path;
use superdrag_config::{ConfigCache, ReloadManager, TomlStore};
use superdrag_dispatch::Dispatcher;
use superdrag_gesture::{ActionExecutor, SuperDrag};
use superdrag_platform::{CommandClipboard, SystemClipboard};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::browser::SystemBrowser;
use crate::cli::Command;
use crate::surface::LoggingSurface;

const DEFAULT_LOG_DIRECTIVE: &str = "superdrag=info";

/// How long tabs still being opened get after the script ends.
const DISPATCH_GRACE: Duration = Duration::from_secs(2);

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid --log-level {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .expect("default log directive is valid")
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn config_path(override_path: Option<PathBuf>) -> Result<PathBuf, SuperdragError> {
    match override_path {
        Some(path) => Ok(path),
        None => Ok(default_config_path()?),
    }
}

async fn replay(script: PathBuf, config_path: PathBuf) -> Result<(), SuperdragError> {
    let steps = replay::load_script(&script)?;
    tracing::info!(steps = steps.len(), script = %script.display(), "replaying");

    let bus = EventBus::default();
    let mut changes = bus.subscribe();
    let (config, reload_task) = ReloadManager::start(config_path, bus.clone());

    let (tx, rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(SystemBrowser::new(), config.locale.clone());
    let dispatch_task = tokio::spawn(dispatcher.run(rx, bus.subscribe()));

    let executor = ActionExecutor::new(Box::new(SystemClipboard::new()), Box::new(tx))
        .with_fallback(Box::new(CommandClipboard::platform_default()));
    let mut controller = SuperDrag::new(ConfigCache::new(config), executor, LoggingSurface::new());

    let summary = replay::run(steps, &mut controller, &mut changes).await;
    tracing::info!(
        events = summary.events,
        executions = summary.executions,
        guides = summary.guides_shown,
        "replay finished"
    );

    // Closing the sender lets the dispatcher drain and stop.
    drop(controller);
    if tokio::time::timeout(DISPATCH_GRACE, dispatch_task).await.is_err() {
        tracing::warn!("dispatcher still busy after {DISPATCH_GRACE:?}, exiting");
    }
    reload_task.abort();
    Ok(())
}

async fn run(args: cli::Args) -> Result<(), SuperdragError> {
    let path = config_path(args.config)?;
    tracing::debug!(path = %path.display(), "settings file");
    match args.command {
        Command::Replay { script } => replay(script, path).await,
        Command::Settings(command) => {
            let store = TomlStore::new(path, EventBus::default());
            settings_cmd::run(command, &store).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("superdrag v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
