use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use anyhow::Context;
use card_object_model::{
    AdaptiveCard, ElementParserRegistry, HostConfig, ParseError, ParseLimits, ParseWarning,
};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardmodel")]
#[command(about = "Parse Adaptive Card JSON into the typed card object model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a card and print it re-serialized.
    Parse {
        #[arg(value_name = "CARD_JSON")]
        card: PathBuf,
        #[arg(long, value_name = "HOST_CONFIG_JSON")]
        host_config: Option<PathBuf>,
        /// Overrides ADAPTIVE_CARDS_MAX_DEPTH.
        #[arg(long, value_parser = parse_max_depth)]
        max_depth: Option<usize>,
        /// Fail when the card produced any warning.
        #[arg(long)]
        deny_warnings: bool,
    },
    /// Print a host config with every default filled in.
    HostConfig {
        #[arg(value_name = "HOST_CONFIG_JSON")]
        path: PathBuf,
    },
    /// List the registered element discriminators.
    Kinds,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err:#}");
            err.exit_code()
        }
    };
    process::exit(exit_code);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    ParseLimits::parse_max_depth(value)
        .ok_or_else(|| format!("`{value}` is not a positive nesting depth"))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let registry = ElementParserRegistry::with_defaults();
    match cli.command {
        Command::Parse {
            card,
            host_config,
            max_depth,
            deny_warnings,
        } => handle_parse(&registry, &card, host_config.as_deref(), max_depth, deny_warnings),
        Command::HostConfig { path } => handle_host_config(&path),
        Command::Kinds => handle_kinds(&registry),
    }
}

fn handle_parse(
    registry: &ElementParserRegistry,
    card_path: &Path,
    host_config_path: Option<&Path>,
    max_depth: Option<usize>,
    deny_warnings: bool,
) -> Result<(), CliError> {
    let host_config = match host_config_path {
        Some(path) => load_host_config(path)?,
        None => HostConfig::default(),
    };
    let limits = max_depth
        .map(ParseLimits::with_max_depth)
        .unwrap_or_else(ParseLimits::from_env);
    let text = read_file(card_path).map_err(|err| CliError::CardFile(card_path.into(), err))?;

    tracing::debug!(path = %card_path.display(), max_depth = limits.max_depth, "parsing card");
    let result = AdaptiveCard::parse(registry, &host_config, limits, &text)
        .map_err(|err| CliError::CardParse(card_path.into(), err))?;
    print_warnings(&result.warnings);
    print_json(&result.card.serialize_to_json())?;

    if deny_warnings && !result.warnings.is_empty() {
        return Err(CliError::Warnings(result.warnings.len()));
    }
    Ok(())
}

fn handle_host_config(path: &Path) -> Result<(), CliError> {
    let config = load_host_config(path)?;
    let value = serde_json::to_value(&config).map_err(|err| CliError::Output(err.into()))?;
    print_json(&value)
}

fn handle_kinds(registry: &ElementParserRegistry) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    for kind in registry.discriminators() {
        writeln!(stdout, "{kind}").map_err(|err| CliError::Output(err.into()))?;
    }
    Ok(())
}

fn load_host_config(path: &Path) -> Result<HostConfig, CliError> {
    let text = read_file(path).map_err(|err| CliError::HostConfigFile(path.into(), err))?;
    let (config, warnings) = HostConfig::from_json_str(&text)
        .map_err(|err| CliError::HostConfigParse(path.into(), err))?;
    print_warnings(&warnings);
    Ok(config)
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn print_warnings(warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value).map_err(|err| CliError::Output(err.into()))?;
    println!("{text}");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("card file failed ({0}): {1:#}")]
    CardFile(PathBuf, #[source] anyhow::Error),
    #[error("card parse failed ({0}): {1}")]
    CardParse(PathBuf, #[source] ParseError),
    #[error("host config file failed ({0}): {1:#}")]
    HostConfigFile(PathBuf, #[source] anyhow::Error),
    #[error("host config parse failed ({0}): {1}")]
    HostConfigParse(PathBuf, #[source] ParseError),
    #[error("{0} warning(s) reported and --deny-warnings is set")]
    Warnings(usize),
    #[error("failed to write output: {0}")]
    Output(#[source] anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::CardFile(_, _) => 1,
            CliError::HostConfigFile(_, _) => 1,
            CliError::CardParse(_, _) => 2,
            CliError::HostConfigParse(_, _) => 2,
            CliError::Warnings(_) => 3,
            CliError::Output(_) => 4,
        }
    }
}
