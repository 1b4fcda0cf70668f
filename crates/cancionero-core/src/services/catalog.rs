use std::fmt;

use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

use crate::domain::playlist::{Playlist, SortKey};
use crate::domain::{SongId, song::Song};
use crate::errors::CoreError;
use crate::ports::SongRegistry;
use crate::registry::MemoryRegistry;
use crate::services::views::PlaylistView;

/// El catálogo: registro + playlists con nombre + lista de favoritos.
///
/// Invariante: todo handle guardado en una playlist o en favoritos corresponde
/// a una entrada viva del registro.
///
/// Las operaciones de escritura devuelven `Err(CoreError)` cuando falta la
/// canción o la playlist; en ese caso no se ha modificado nada.
pub struct Catalog<R = MemoryRegistry>
where
  R: SongRegistry,
{
  registry: R,
  /// Orden de creación; sobrescribir un nombre conserva su posición.
  playlists: IndexMap<String, Playlist>,
  favorites: Vec<SongId>,
  rng: StdRng,
}

impl Catalog<MemoryRegistry> {
  /// Catálogo vacío con semilla tomada del sistema operativo.
  pub fn new() -> Self {
    Self::with_registry(MemoryRegistry::new(), StdRng::from_entropy())
  }

  /// Catálogo vacío cuyos `shuffle` son reproducibles.
  pub fn with_seed(seed: u64) -> Self {
    Self::with_registry(MemoryRegistry::new(), StdRng::seed_from_u64(seed))
  }
}

impl Default for Catalog<MemoryRegistry> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R> Catalog<R>
where
  R: SongRegistry,
{
  pub fn with_registry(registry: R, rng: StdRng) -> Self {
    Self { registry, playlists: IndexMap::new(), favorites: Vec::new(), rng }
  }

  // -------- SONGS --------

  /// Registra una canción. Un título repetido conserva su handle y cambia de
  /// artista, así que playlists y favoritos siguen apuntando a ella.
  pub fn add_song(&mut self, title: &str, artist: &str) -> SongId {
    let (id, previous) = self.registry.upsert(title, artist);

    match previous {
      Some(old) => warn!(
        title,
        old_artist = %old.artist,
        new_artist = artist,
        "song title already registered, artist replaced"
      ),
      None => debug!(title, artist, %id, "song added"),
    }

    id
  }

  /// Borra la canción del registro y todas sus referencias (cascada).
  ///
  /// Con `&mut self` nadie puede observar el catálogo a mitad de la cascada.
  pub fn remove_song(&mut self, title: &str) -> Result<Song, CoreError> {
    let Some(song) = self.registry.remove(title) else {
      return Err(song_not_found(title));
    };

    let mut playlists_touched = 0usize;
    let mut references = 0usize;
    for playlist in self.playlists.values_mut() {
      let removed = playlist.remove(song.id);
      if removed > 0 {
        playlists_touched += 1;
        references += removed;
      }
    }

    let before = self.favorites.len();
    self.favorites.retain(|id| *id != song.id);
    let favorites = before - self.favorites.len();

    info!(title, playlists_touched, references, favorites, "song removed");
    Ok(song)
  }

  pub fn search_song(&self, title: &str) -> Option<&Song> {
    self.registry.lookup(title)
  }

  /// Todas las canciones registradas, en orden de inserción.
  pub fn list_songs(&self) -> Vec<&Song> {
    self.registry.songs()
  }

  pub fn song_count(&self) -> usize {
    self.registry.len()
  }

  /// Resuelve un handle guardado en una playlist o en favoritos.
  pub fn resolve(&self, id: SongId) -> Option<&Song> {
    self.registry.get(id)
  }

  // -------- PLAYLISTS --------

  /// Crea una playlist vacía. Si el nombre existía la sobrescribe y devuelve
  /// la anterior (con su contenido descartado).
  pub fn create_playlist(&mut self, name: &str) -> Option<Playlist> {
    let previous = self.playlists.insert(name.to_owned(), Playlist::new(name));

    match &previous {
      Some(old) => warn!(playlist = name, discarded = old.len(), "playlist overwritten"),
      None => debug!(playlist = name, "playlist created"),
    }

    previous
  }

  pub fn add_song_to_playlist(&mut self, playlist: &str, title: &str) -> Result<(), CoreError> {
    let id = self.registry.lookup(title).map(|s| s.id);
    let target = self.playlists.get_mut(playlist).ok_or_else(|| playlist_not_found(playlist))?;
    let id = id.ok_or_else(|| song_not_found(title))?;

    target.add(id);
    debug!(playlist, title, len = target.len(), "song added to playlist");
    Ok(())
  }

  /// Quita todas las apariciones de la canción en esa playlist solamente.
  pub fn remove_song_from_playlist(
    &mut self,
    playlist: &str,
    title: &str,
  ) -> Result<usize, CoreError> {
    let id = self.registry.lookup(title).map(|s| s.id);
    let target = self.playlists.get_mut(playlist).ok_or_else(|| playlist_not_found(playlist))?;
    let id = id.ok_or_else(|| song_not_found(title))?;

    let removed = target.remove(id);
    debug!(playlist, title, removed, "song removed from playlist");
    Ok(removed)
  }

  pub fn shuffle_playlist(&mut self, name: &str) -> Result<(), CoreError> {
    let playlist = self.playlists.get_mut(name).ok_or_else(|| playlist_not_found(name))?;
    playlist.shuffle(&mut self.rng);
    debug!(playlist = name, "playlist shuffled");
    Ok(())
  }

  pub fn sort_playlist_by_title(&mut self, name: &str) -> Result<(), CoreError> {
    self.sort_playlist(name, SortKey::Title)
  }

  pub fn sort_playlist_by_artist(&mut self, name: &str) -> Result<(), CoreError> {
    self.sort_playlist(name, SortKey::Artist)
  }

  pub fn sort_playlist(&mut self, name: &str, key: SortKey) -> Result<(), CoreError> {
    let playlist = self.playlists.get_mut(name).ok_or_else(|| playlist_not_found(name))?;
    playlist.sort_by(&self.registry, key);
    debug!(playlist = name, ?key, "playlist sorted");
    Ok(())
  }

  /// `merged` = canciones de `first` seguidas de las de `second`, con
  /// duplicados. Las fuentes se leen antes de escribir, así que quedan
  /// intactas aunque `merged` coincida con una de ellas.
  pub fn merge_playlists(
    &mut self,
    first: &str,
    second: &str,
    merged: &str,
  ) -> Result<(), CoreError> {
    let left = self.playlists.get(first).ok_or_else(|| playlist_not_found(first))?;
    let right = self.playlists.get(second).ok_or_else(|| playlist_not_found(second))?;

    let mut combined = Playlist::new(merged);
    combined.extend_from(left);
    combined.extend_from(right);
    let len = combined.len();

    if let Some(old) = self.playlists.insert(merged.to_owned(), combined) {
      warn!(playlist = merged, discarded = old.len(), "merge target overwritten");
    }
    debug!(first, second, merged, len, "playlists merged");
    Ok(())
  }

  /// La playlist tal cual, con handles sin resolver.
  pub fn get_playlist(&self, name: &str) -> Option<&Playlist> {
    self.playlists.get(name)
  }

  pub fn playlist(&self, name: &str) -> Option<PlaylistView<'_>> {
    self.playlists.get(name).map(|p| self.view(p))
  }

  /// Todas las playlists en orden de creación.
  pub fn list_all_playlists(&self) -> Vec<PlaylistView<'_>> {
    self.playlists.values().map(|p| self.view(p)).collect()
  }

  pub fn playlist_count(&self) -> usize {
    self.playlists.len()
  }

  // -------- FAVORITES --------

  /// Añade a favoritos; marcar dos veces deja dos entradas.
  pub fn mark_favorite(&mut self, title: &str) -> Result<(), CoreError> {
    let song = self.registry.lookup(title).ok_or_else(|| song_not_found(title))?;
    self.favorites.push(song.id);
    debug!(title, count = self.favorites.len(), "song marked as favorite");
    Ok(())
  }

  /// Favoritos en orden de marcado.
  pub fn list_favorites(&self) -> Vec<&Song> {
    self.favorites.iter().filter_map(|id| self.registry.get(*id)).collect()
  }

  pub fn favorite_ids(&self) -> &[SongId] {
    &self.favorites
  }

  pub fn favorite_count(&self) -> usize {
    self.favorites.len()
  }

  fn view<'a>(&'a self, playlist: &'a Playlist) -> PlaylistView<'a> {
    PlaylistView {
      name: playlist.name(),
      songs: playlist.songs().iter().filter_map(|id| self.registry.get(*id)).collect(),
    }
  }
}

impl<R> fmt::Debug for Catalog<R>
where
  R: SongRegistry + fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Catalog")
      .field("registry", &self.registry)
      .field("playlists", &self.playlists)
      .field("favorites", &self.favorites)
      .finish_non_exhaustive()
  }
}

fn song_not_found(title: &str) -> CoreError {
  trace!(title, "song not found");
  CoreError::SongNotFound(title.to_owned())
}

fn playlist_not_found(name: &str) -> CoreError {
  trace!(playlist = name, "playlist not found");
  CoreError::PlaylistNotFound(name.to_owned())
}
