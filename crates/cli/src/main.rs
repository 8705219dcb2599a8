// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use bookshelf_config::{Config, ConfigManager, LogLevel};
use bookshelf_library::BookStore;
use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::{Arg, ArgAction, Command};
use console::style;
use std::io;
use std::path::{Path, PathBuf};

mod commands;
mod error;
mod menu;
mod prompt;
mod session;

use session::Session;

fn build_cli() -> Command {
    Command::new("bookshelf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep track of the books you own and the ones you have read")
        .arg(
            Arg::new("data-file")
                .short('f')
                .long("data-file")
                .value_name("PATH")
                .value_parser(NonEmptyStringValueParser::new().map(PathBuf::from))
                .help("Library data file to use for this run"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory holding config.toml"),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write a default config file if none exists, then exit")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let manager = match matches.get_one::<PathBuf>("config-dir") {
        Some(dir) => ConfigManager::with_directory(dir),
        None => ConfigManager::new().context("Failed to resolve config directory")?,
    };

    // The logger level depends on the config, so load errors are held until it is up.
    let (loaded, load_error) = match manager.load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let config = apply_overrides(
        loaded,
        |key| std::env::var(key).ok(),
        matches.get_one::<PathBuf>("data-file").map(PathBuf::as_path),
    );

    init_logging(config.app.log_level);
    if let Some(e) = load_error {
        log::warn!(
            "Failed to load {}: {}, using defaults",
            manager.config_path().display(),
            e
        );
    }

    if matches.get_flag("init-config") {
        return init_config(&manager);
    }

    log::debug!("Using library file {}", config.library.data_file.display());
    let mut store = BookStore::open(&config.library.data_file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut store, stdin.lock(), stdout.lock())
        .run()
        .with_context(|| {
            format!(
                "Library session failed ({})",
                config.library.data_file.display()
            )
        })
}

/// Layers environment variables, then command-line flags, over the loaded config
fn apply_overrides<F>(mut config: Config, env: F, data_file: Option<&Path>) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    config.apply_env_overrides(env);
    if let Some(path) = data_file {
        config.library.data_file = path.to_path_buf();
    }
    config
}

fn init_logging(level: LogLevel) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .init();
}

fn init_config(manager: &ConfigManager) -> Result<()> {
    let created = manager
        .initialize()
        .context("Failed to write default config")?;

    if created {
        println!(
            "{} {}",
            style("✓").green(),
            style(format!("Created {}", manager.config_path().display())).green()
        );
    } else {
        println!(
            "{}",
            style(format!(
                "Config already exists at {}",
                manager.config_path().display()
            ))
            .yellow()
        );
    }
    Ok(())
}
