use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Variable de entorno para el modo portable: todo cuelga de ese directorio.
pub const BASE_DIR_ENV: &str = "CANCIONERO_BASE_DIR";

/// Dónde vive la configuración (`cancionero.toml`).
#[derive(Debug, Clone)]
pub struct CancioneroPaths {
  pub config_dir: PathBuf,
}

impl CancioneroPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let config_dir = match std::env::var(BASE_DIR_ENV) {
      Ok(env_base) => PathBuf::from(env_base).join("config"),
      Err(_) => ProjectDirs::from("com", "cancionero", "cancionero")
        .ok_or(ConfigError::Directories)?
        .config_dir()
        .to_path_buf(),
    };

    Self::from_config_dir(config_dir)
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  /// Modo portable explícito (p. ej. `--config-dir`), sin mirar el entorno.
  pub fn portable(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    Self::from_config_dir(base.into().join("config"))
  }

  fn from_config_dir(config_dir: PathBuf) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&config_dir)?;
    Ok(Self { config_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("cancionero.toml")
  }
}
