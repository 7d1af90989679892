use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use glyph_registry::RegistryConfig;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod input;
mod render;
mod shell;

use input::InputProvider;
use shell::Shell;

fn cli() -> Command {
    Command::new("glyph")
        .version(glyph_registry::VERSION)
        .about("GLYPH : Asset Registry Utility")
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Database file used by save and load (default: glyphs.db)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("autoload")
                .long("autoload")
                .action(ArgAction::SetTrue)
                .help("Load the database file on start-up if it exists"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject loaded files with duplicate ids or paths"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .help("Log filter, e.g. 'info' or 'glyph_registry=debug' (overrides RUST_LOG)"),
        )
}

fn init_tracing(level: Option<&String>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// File config (if any) with command-line flags applied on top
fn build_config(args: &ArgMatches) -> anyhow::Result<RegistryConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => RegistryConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => RegistryConfig::new(),
    };

    if let Some(db) = args.get_one::<PathBuf>("db") {
        config = config.with_db_path(db);
    }
    if args.get_flag("autoload") {
        config = config.with_autoload(true);
    }
    if args.get_flag("strict") {
        config = config.with_strict_load(true);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = cli().get_matches();
    init_tracing(args.get_one::<String>("log-level"));

    let config = build_config(&args)?;
    tracing::info!("Using database {}", config.db_path.display());

    let stdin = io::stdin();
    let provider = InputProvider::new(stdin.lock(), io::stdout());
    let mut shell = Shell::new(provider, config);

    shell.autoload().context("start-up load")?;
    shell.run().context("terminal I/O failed")?;
    tracing::info!("Session ended with {} glyphs in memory", shell.store().len());
    Ok(())
}
