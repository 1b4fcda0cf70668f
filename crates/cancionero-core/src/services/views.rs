use serde::Serialize;

use crate::domain::song::Song;

/// Vista de sólo lectura de una playlist con sus handles ya resueltos.
///
/// Pensada para que la capa de presentación (o un futuro front end en red)
/// no tenga que tocar el registro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistView<'a> {
  pub name: &'a str,
  pub songs: Vec<&'a Song>,
}

impl<'a> PlaylistView<'a> {
  pub fn titles(&self) -> Vec<&'a str> {
    self.songs.iter().map(|&s| s.title.as_str()).collect()
  }
}
