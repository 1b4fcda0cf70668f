use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::domain::ids::SongId;
use crate::domain::song::Song;
use crate::ports::SongRegistry;

/// Campo por el que se ordena una playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
  Title,
  Artist,
}

impl SortKey {
  fn of(self, song: &Song) -> &str {
    match self {
      SortKey::Title => &song.title,
      SortKey::Artist => &song.artist,
    }
  }
}

/// Secuencia ordenada y mutable de referencias a canciones.
///
/// La playlist no es dueña de sus canciones: guarda handles ([`SongId`]) que el
/// registro resuelve. Se permiten duplicados (es un multiconjunto en orden de
/// presentación).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  name: String,
  songs: Vec<SongId>,
}

impl Playlist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), songs: Vec::new() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Handles en orden de presentación.
  pub fn songs(&self) -> &[SongId] {
    &self.songs
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  /// Añade al final, sin comprobar duplicados.
  pub fn add(&mut self, song: SongId) {
    self.songs.push(song);
  }

  /// Añade al final todas las referencias de `other`, en su orden.
  pub fn extend_from(&mut self, other: &Playlist) {
    self.songs.extend_from_slice(&other.songs);
  }

  /// Elimina **todas** las apariciones de `song`. Devuelve cuántas quitó.
  pub fn remove(&mut self, song: SongId) -> usize {
    let before = self.songs.len();
    self.songs.retain(|id| *id != song);
    before - self.songs.len()
  }

  /// Orden estable por `key`, comparando bytes.
  ///
  /// Un handle que el registro no resuelve se ordena al principio; con el
  /// invariante de integridad referencial no debería ocurrir.
  pub fn sort_by<R>(&mut self, registry: &R, key: SortKey)
  where
    R: SongRegistry + ?Sized,
  {
    // `sort_by` de slice es estable: empates conservan el orden previo.
    self.songs.sort_by(|a, b| {
      let ka = registry.get(*a).map(|s| key.of(s));
      let kb = registry.get(*b).map(|s| key.of(s));
      compare_keys(ka, kb)
    });
  }

  pub fn sort_by_title<R>(&mut self, registry: &R)
  where
    R: SongRegistry + ?Sized,
  {
    self.sort_by(registry, SortKey::Title);
  }

  pub fn sort_by_artist<R>(&mut self, registry: &R)
  where
    R: SongRegistry + ?Sized,
  {
    self.sort_by(registry, SortKey::Artist);
  }

  /// Permutación uniforme (Fisher-Yates) usando la fuente aleatoria inyectada.
  pub fn shuffle<G>(&mut self, rng: &mut G)
  where
    G: Rng + ?Sized,
  {
    self.songs.shuffle(rng);
  }
}

fn compare_keys(a: Option<&str>, b: Option<&str>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => a.as_bytes().cmp(b.as_bytes()),
    (None, Some(_)) => Ordering::Less,
    (Some(_), None) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::registry::MemoryRegistry;
  use pretty_assertions::assert_eq;
  use rand::SeedableRng;
  use rand::rngs::StdRng;
  use rand::rngs::mock::StepRng;

  fn registry_with(songs: &[(&str, &str)]) -> (MemoryRegistry, Vec<SongId>) {
    let mut registry = MemoryRegistry::default();
    let ids = songs.iter().map(|(title, artist)| registry.upsert(title, artist).0).collect();
    (registry, ids)
  }

  #[test]
  fn add_appends_and_allows_duplicates() {
    let (_, ids) = registry_with(&[("A", "x"), ("B", "y")]);
    let mut playlist = Playlist::new("P");

    playlist.add(ids[0]);
    playlist.add(ids[1]);
    playlist.add(ids[0]);

    assert_eq!(playlist.songs(), &[ids[0], ids[1], ids[0]]);
  }

  #[test]
  fn remove_drops_every_occurrence() {
    let (_, ids) = registry_with(&[("A", "x"), ("B", "y")]);
    let mut playlist = Playlist::new("P");
    for id in [ids[0], ids[1], ids[0], ids[0]] {
      playlist.add(id);
    }

    assert_eq!(playlist.remove(ids[0]), 3);
    assert_eq!(playlist.songs(), &[ids[1]]);
    assert_eq!(playlist.remove(ids[0]), 0);
  }

  #[test]
  fn sort_by_title_is_lexicographic_by_bytes() {
    let (registry, ids) = registry_with(&[("beta", "1"), ("Zulu", "2"), ("alpha", "3")]);
    let mut playlist = Playlist::new("P");
    ids.iter().for_each(|id| playlist.add(*id));

    playlist.sort_by_title(&registry);

    // Las mayúsculas van antes que las minúsculas en orden de bytes.
    assert_eq!(playlist.songs(), &[ids[1], ids[2], ids[0]]);
  }

  #[test]
  fn sort_by_title_keeps_duplicates_in_prior_order() {
    let (registry, ids) = registry_with(&[("B", "x"), ("A", "y")]);
    let mut playlist = Playlist::new("P");
    // Dos copias del mismo handle separadas por otra canción.
    for id in [ids[0], ids[1], ids[0]] {
      playlist.add(id);
    }

    playlist.sort_by_title(&registry);

    assert_eq!(playlist.songs(), &[ids[1], ids[0], ids[0]]);
  }

  #[test]
  fn sort_by_artist_is_stable_for_equal_artists() {
    let (registry, ids) =
      registry_with(&[("Three", "Same"), ("One", "Other"), ("Two", "Same"), ("Four", "Same")]);
    let mut playlist = Playlist::new("P");
    ids.iter().for_each(|id| playlist.add(*id));

    playlist.sort_by_artist(&registry);

    assert_eq!(playlist.songs(), &[ids[1], ids[0], ids[2], ids[3]]);
  }

  #[test]
  fn shuffle_with_same_seed_is_deterministic() {
    let (_, ids) = registry_with(&[("A", "a"), ("B", "b"), ("C", "c"), ("D", "d"), ("E", "e")]);
    let mut first = Playlist::new("P");
    ids.iter().for_each(|id| first.add(*id));
    let mut second = first.clone();

    first.shuffle(&mut StdRng::seed_from_u64(7));
    second.shuffle(&mut StdRng::seed_from_u64(7));

    assert_eq!(first, second);

    let mut sorted = first.songs().to_vec();
    sorted.sort_by_key(|id| ids.iter().position(|x| x == id));
    assert_eq!(sorted, ids);
  }

  #[test]
  fn shuffle_with_a_constant_source_gives_a_known_order() {
    let (_, ids) = registry_with(&[("A", "a"), ("B", "b"), ("C", "c"), ("D", "d")]);
    let mut playlist = Playlist::new("P");
    ids.iter().for_each(|id| playlist.add(*id));

    // Fisher-Yates desde el final: con índice siempre 0 cada paso cambia la
    // posición i por la primera, lo que rota la lista una posición.
    playlist.shuffle(&mut StepRng::new(0, 0));

    assert_eq!(playlist.songs(), &[ids[1], ids[2], ids[3], ids[0]]);
  }

  #[test]
  fn shuffle_empty_playlist_is_a_noop() {
    let mut playlist = Playlist::new("Empty");
    playlist.shuffle(&mut StdRng::seed_from_u64(1));
    assert!(playlist.is_empty());
  }

  #[test]
  fn extend_from_concatenates_in_order() {
    let (_, ids) = registry_with(&[("A", "a"), ("B", "b"), ("C", "c")]);
    let mut left = Playlist::new("L");
    left.add(ids[0]);
    left.add(ids[1]);
    let mut right = Playlist::new("R");
    right.add(ids[2]);
    right.add(ids[0]);

    left.extend_from(&right);

    assert_eq!(left.songs(), &[ids[0], ids[1], ids[2], ids[0]]);
    assert_eq!(right.len(), 2);
  }
}
