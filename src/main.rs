//! Coach - terminal popover for local model workflows

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use coach::App;
use coach::config::{CommandModifier, Config};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Terminal popover for picking a local model and curating keyboard shortcuts
#[derive(Parser)]
#[command(name = "coach")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed model name (repeatable); the first becomes current
    #[arg(long = "model", value_name = "NAME")]
    models: Vec<String>,

    /// Seed shortcut row (repeatable)
    #[arg(long = "shortcut", value_name = "NAME")]
    shortcuts: Vec<String>,

    /// Modifier that acts as "command" for the delete/star chords (repeatable)
    #[arg(long = "command-modifier", value_name = "super|meta|ctrl|alt")]
    command_modifiers: Vec<CommandModifier>,

    /// Popover width in columns
    #[arg(long, value_name = "COLS")]
    width: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration as JSON
    Config {
        /// Write the configuration to the config path instead of printing it
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {e}\n");
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = load_config(&cli)?;
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Commands::Config { write }) => cmd_config(&config, &config_path, write),
        None => {
            let app = App::with_logging_session(config);
            coach::tui::run(app)
        }
    }
}

/// Log to `<temp>/coach.log` - tail with: tail -f /tmp/coach.log
///
/// `RUST_LOG` takes precedence; otherwise DEBUG=0-3 controls verbosity
/// (0=off, 1=warn, 2=info, 3=debug).
fn init_logging() {
    let log_path = coach::paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let filter = if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        let debug_level = std::env::var("DEBUG")
            .ok()
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(0);
        let level = match debug_level {
            0 => return,
            1 => "warn",
            2 => "info",
            _ => "debug",
        };
        EnvFilter::new(level)
    };

    let directory = log_path
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(directory, "coach.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let writing = matches!(cli.command, Some(Commands::Config { write: true }));
    let mut config = match &cli.config {
        // `config --write` may create the file
        Some(path) if writing && !path.exists() => Config::default(),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if !cli.models.is_empty() {
        config.models.clone_from(&cli.models);
    }
    if !cli.shortcuts.is_empty() {
        config.shortcuts.clone_from(&cli.shortcuts);
    }
    if !cli.command_modifiers.is_empty() {
        config.command_modifiers.clone_from(&cli.command_modifiers);
    }
    if let Some(width) = cli.width {
        config.popover_width = width;
    }

    config.validate().context("Invalid command-line options")?;
    Ok(config)
}

fn cmd_config(config: &Config, path: &Path, write: bool) -> Result<()> {
    if write {
        config.save_to(path)?;
        println!("Wrote {}", path.display());
    } else {
        let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        println!("{json}");
    }
    Ok(())
}
