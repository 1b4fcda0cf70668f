use cancionero_core::{Catalog, CoreError, SongRegistry};

pub const SONGS: &[(&str, &str)] =
  &[("Song A", "Artist A"), ("Song B", "Artist B"), ("Song C", "Artist C")];

/// Loads the sample walkthrough: three songs, two playlists, a shuffle, a
/// sort, a merge and two favorites.
pub fn seed<R: SongRegistry>(catalog: &mut Catalog<R>) -> Result<(), CoreError> {
  for (title, artist) in SONGS {
    catalog.add_song(title, artist);
  }

  catalog.create_playlist("Playlist 1");
  catalog.add_song_to_playlist("Playlist 1", "Song A")?;
  catalog.add_song_to_playlist("Playlist 1", "Song B")?;

  catalog.create_playlist("Playlist 2");
  catalog.add_song_to_playlist("Playlist 2", "Song C")?;

  catalog.shuffle_playlist("Playlist 1")?;
  catalog.sort_playlist_by_title("Playlist 2")?;

  catalog.merge_playlists("Playlist 1", "Playlist 2", "Merged Playlist")?;

  catalog.mark_favorite("Song A")?;
  catalog.mark_favorite("Song C")?;

  tracing::info!(
    songs = catalog.song_count(),
    playlists = catalog.playlist_count(),
    "demo catalog loaded"
  );
  Ok(())
}
