pub mod config;
mod demo;
mod infrastructure;
mod menu;
mod repl;

use std::io;

use anyhow::Context;
use cancionero_config::{AppConfig, CancioneroPaths, TomlConfigBackend};
use cancionero_core::Catalog;
use tracing::info;

use crate::config::{Cli, RuntimeConfig};
use infrastructure::logging;

/// Entry point shared by the binary: loads config, sets up logging, builds the
/// catalog and hands stdin/stdout to the menu loop.
pub fn run(cli: Cli) -> anyhow::Result<()> {
  // --- Configuration Phase ---
  let paths = match &cli.config_dir {
    Some(dir) => CancioneroPaths::portable(dir.clone()),
    None => CancioneroPaths::detect(),
  }
  .context("failed to resolve configuration directories")?;

  let backend = TomlConfigBackend::new(paths);
  let file_config = AppConfig::load_from(&backend)
    .with_context(|| format!("failed to load {}", backend.config_file().display()))?;
  let runtime = RuntimeConfig::resolve(&cli, file_config);

  logging::init(&runtime.log_directive);
  info!(
    config = %backend.config_file().display(),
    seed = ?runtime.shuffle_seed,
    demo = runtime.demo,
    "starting cancionero"
  );

  // --- Catalog Phase ---
  let mut catalog = match runtime.shuffle_seed {
    Some(seed) => Catalog::with_seed(seed),
    None => Catalog::new(),
  };
  if runtime.demo {
    demo::seed(&mut catalog).context("failed to load the demo catalog")?;
  }

  // --- Interactive Phase ---
  let stdin = io::stdin();
  let stdout = io::stdout();
  repl::run(&mut catalog, stdin.lock(), stdout.lock()).context("terminal I/O failed")?;

  info!(songs = catalog.song_count(), playlists = catalog.playlist_count(), "session closed");
  Ok(())
}
