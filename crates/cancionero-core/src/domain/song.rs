use crate::domain::ids::SongId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// La Canción (Song): título + artista.
///
/// Inmutable una vez creada. El título es la clave única dentro del registro;
/// el `id` es el handle que comparten playlists y favoritos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único de la canción dentro del sistema.
  pub id: SongId,
  /// El título de la canción.
  pub title: String,
  /// El intérprete principal.
  pub artist: String,
}

impl Song {
  pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
    Self { id: SongId::new(), title: title.into(), artist: artist.into() }
  }
}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} by {}", self.title, self.artist)
  }
}
