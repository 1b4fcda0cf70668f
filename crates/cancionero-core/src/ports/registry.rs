use crate::domain::{SongId, song::Song};

/// Port del registro de canciones: la única fuente de verdad de la identidad
/// de una canción.
///
/// El registro no sabe nada de playlists ni de favoritos. La cascada al borrar
/// la orquesta el [`Catalog`](crate::services::Catalog).
pub trait SongRegistry {
  /// Inserta o sobrescribe la entrada de `title`.
  ///
  /// Si el título ya existía se conserva su handle y se reemplaza el artista;
  /// devuelve la versión anterior en ese caso.
  fn upsert(&mut self, title: &str, artist: &str) -> (SongId, Option<Song>);

  /// Elimina la entrada de `title`. `None` si no existía.
  fn remove(&mut self, title: &str) -> Option<Song>;

  fn lookup(&self, title: &str) -> Option<&Song>;

  /// Resuelve un handle.
  fn get(&self, id: SongId) -> Option<&Song>;

  /// Todas las canciones, en orden de inserción.
  fn songs(&self) -> Vec<&Song>;

  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
