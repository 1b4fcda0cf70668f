use std::collections::HashMap;

use indexmap::IndexMap;

use crate::domain::{SongId, song::Song};
use crate::ports::SongRegistry;

/// Registro en memoria.
///
/// `songs` conserva el orden de inserción para listar; `titles` es el índice
/// título → handle. Ambos mapas contienen siempre las mismas canciones.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
  songs: IndexMap<SongId, Song>,
  titles: HashMap<String, SongId>,
}

impl MemoryRegistry {
  pub fn new() -> Self {
    Self::default()
  }
}

impl SongRegistry for MemoryRegistry {
  fn upsert(&mut self, title: &str, artist: &str) -> (SongId, Option<Song>) {
    if let Some(&id) = self.titles.get(title) {
      let replacement = Song { id, title: title.to_owned(), artist: artist.to_owned() };
      let previous = self.songs.insert(id, replacement);
      return (id, previous);
    }

    let song = Song::new(title, artist);
    let id = song.id;
    self.titles.insert(song.title.clone(), id);
    self.songs.insert(id, song);
    (id, None)
  }

  fn remove(&mut self, title: &str) -> Option<Song> {
    let id = self.titles.remove(title)?;
    self.songs.shift_remove(&id)
  }

  fn lookup(&self, title: &str) -> Option<&Song> {
    self.titles.get(title).and_then(|id| self.songs.get(id))
  }

  fn get(&self, id: SongId) -> Option<&Song> {
    self.songs.get(&id)
  }

  fn songs(&self) -> Vec<&Song> {
    self.songs.values().collect()
  }

  fn len(&self) -> usize {
    self.songs.len()
  }
}
