use std::path::PathBuf;

use cancionero_config::AppConfig;
use clap::{Parser, ValueEnum};

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
  Error,
  Warn,
  Info,
  Debug,
  Trace,
}

impl LogLevel {
  fn to_filter_directive(self) -> &'static str {
    match self {
      LogLevel::Error => "error",
      LogLevel::Warn => "warn",
      LogLevel::Info => "info",
      LogLevel::Debug => "debug",
      LogLevel::Trace => "trace",
    }
  }
}

#[derive(Parser, Debug)]
#[command(name = "cancionero", about = "In-memory song catalog with playlists and favorites", version)]
pub struct Cli {
  /// Fixed shuffle seed (overrides `[catalog] shuffle_seed`)
  #[arg(long)]
  pub seed: Option<u64>,

  /// Log level (overrides `[log] level`; RUST_LOG wins over both)
  #[arg(long, value_enum)]
  pub log_level: Option<LogLevel>,

  /// Keep config under this directory instead of the platform default
  #[arg(long)]
  pub config_dir: Option<PathBuf>,

  /// Start with the sample songs and playlists already loaded
  #[arg(long)]
  pub demo: bool,
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
  pub shuffle_seed: Option<u64>,
  pub log_directive: String,
  pub demo: bool,
}

impl RuntimeConfig {
  pub fn resolve(cli: &Cli, file: AppConfig) -> Self {
    RuntimeConfig {
      shuffle_seed: cli.seed.or(file.catalog.shuffle_seed),
      log_directive: cli
        .log_level
        .map(|level| level.to_filter_directive().to_owned())
        .unwrap_or(file.log.level),
      demo: cli.demo,
    }
  }
}
