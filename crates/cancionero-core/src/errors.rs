use thiserror::Error;

/// Resultado "no encontrado" del núcleo de Cancionero.
///
/// No representa un fallo: una operación que devuelve `Err(CoreError)` no ha
/// modificado nada. Las capas superiores (CLI, etc.) pueden mostrarlo o
/// ignorarlo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  #[error("song not found: {0}")]
  SongNotFound(String),

  #[error("playlist not found: {0}")]
  PlaylistNotFound(String),
}
