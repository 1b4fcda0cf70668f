mod backend;
mod io;
mod paths;
mod settings;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{BASE_DIR_ENV, CancioneroPaths, ConfigError};
pub use settings::{AppConfig, CatalogSettings, LogSettings};
