use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// superdrag: drag selected text to search, translate, ask an AI, or copy it.
#[derive(Parser, Debug)]
#[command(name = "superdrag", version, about)]
pub struct Args {
    /// Settings file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, superdrag=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Feed a recorded JSON event script through the gesture controller.
    Replay {
        /// Path to the script.
        script: PathBuf,
    },
    /// Inspect or change the settings file.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the current settings.
    Show,
    /// Change one setting, e.g. `set upFar youtube`.
    Set { key: String, value: String },
    /// Restore every setting to its default.
    Reset,
    /// Print the settings file location.
    Path,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_settings_set_with_global_flags() {
        let args = Args::parse_from([
            "superdrag",
            "settings",
            "set",
            "upFar",
            "youtube",
            "--config",
            "/tmp/sd.toml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/sd.toml")));
        match args.command {
            Command::Settings(SettingsCommand::Set { key, value }) => {
                assert_eq!(key, "upFar");
                assert_eq!(value, "youtube");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_replay() {
        let args = Args::parse_from(["superdrag", "--log-level", "debug", "replay", "demo.json"]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Command::Replay { script } if script == PathBuf::from("demo.json")));
    }
}
