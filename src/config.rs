use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::errors::WrapResult;

const DEFAULT_WRAP: bool = true;
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Optional fields so each layer only overrides what it sets.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    width: Option<usize>,
    wrap: Option<bool>,
    log_level: Option<String>,
}

/// Fully resolved settings: args > environment > file > defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    /// Explicit wrap limit; skips terminal detection when set.
    pub width: Option<usize>,
    pub wrap: bool,
    pub log_level: String,
    pub print_limit: bool,
    pub print_size: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            inputs: Vec::new(),
            width: None,
            wrap: DEFAULT_WRAP,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            print_limit: false,
            print_size: false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Wrap text to the width of the current terminal",
    long_about = None
)]
pub struct Args {
    /// Files to wrap; reads standard input when empty or `-`
    pub files: Vec<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Wrap at this many columns instead of detecting the terminal width
    #[arg(long)]
    pub width: Option<usize>,

    /// Copy input through unchanged
    #[arg(long)]
    pub no_wrap: bool,

    /// Print the wrap limit for standard output and exit
    #[arg(long)]
    pub print_limit: bool,

    /// Print the size of the terminal on standard output and exit
    #[arg(long)]
    pub print_size: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn load_config() -> WrapResult<Config> {
    let args = Args::parse();

    // Missing variables are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source().collect().unwrap_or_else(|_| Map::new());

    Ok(build_config_from_args(args, Some(env_map))?)
}

// TERMWRAP_WIDTH=100, TERMWRAP_LOG_LEVEL=info; `__` only separates nested keys.
fn env_source() -> Environment {
    Environment::with_prefix("TERMWRAP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "termwrap").map(|dirs| dirs.config_dir().join("config.toml"))
}

// Separate function to allow testing with specific args and override sources
pub fn build_config_from_args(
    args: Args,
    override_source: Option<Map<String, Value>>,
) -> Result<Config, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides (environment or a test map) beat the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    let config = Config {
        inputs: args.files,
        width: args.width.or(loaded_sources.width),
        wrap: if args.no_wrap {
            false
        } else {
            loaded_sources.wrap.unwrap_or(DEFAULT_WRAP)
        },
        log_level: args
            .log_level
            .or(loaded_sources.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        print_limit: args.print_limit,
        print_size: args.print_size,
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let level = config.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "unknown log level: {}",
            config.log_level
        )));
    }
    Ok(())
}
