use serde::{Deserialize, Serialize};

use crate::backend::ConfigBackend;
use crate::paths::ConfigError;

/// Sección `[catalog]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
  /// Semilla fija para los `shuffle`. Sin ella se usa entropía del sistema.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shuffle_seed: Option<u64>,
}

impl CatalogSettings {
  pub const SECTION: &'static str = "catalog";

  /// Carga la sección (o los valores por defecto) y la vuelve a escribir, de
  /// modo que el archivo documente las opciones disponibles.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(Self::SECTION, self)
  }
}

/// Sección `[log]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
  /// Directiva por defecto para el filtro de `tracing` cuando no hay `RUST_LOG`.
  #[serde(default = "default_level")]
  pub level: String,
}

fn default_level() -> String {
  "info".into()
}

impl Default for LogSettings {
  fn default() -> Self {
    LogSettings { level: default_level() }
  }
}

impl LogSettings {
  pub const SECTION: &'static str = "log";

  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(Self::SECTION, self)
  }
}

/// Todas las secciones que entiende Cancionero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
  pub catalog: CatalogSettings,
  pub log: LogSettings,
}

impl AppConfig {
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    Ok(Self { catalog: CatalogSettings::load_from(backend)?, log: LogSettings::load_from(backend)? })
  }
}
