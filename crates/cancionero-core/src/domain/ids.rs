use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handle opaco de una canción dentro del registro.
///
/// Las playlists y la lista de favoritos guardan `SongId`, nunca la canción:
/// el registro es el único dueño de los datos y resuelve el handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    SongId(Uuid::new_v4())
  }
}

impl Default for SongId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
