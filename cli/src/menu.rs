use std::str::FromStr;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
  AddSong,
  RemoveSong,
  CreatePlaylist,
  AddToPlaylist,
  RemoveFromPlaylist,
  Shuffle,
  SortByTitle,
  SortByArtist,
  Search,
  Merge,
  MarkFavorite,
  ListFavorites,
  ListPlaylists,
  ListSongs,
  Exit,
}

impl MenuCommand {
  /// Menu order; the position is the number the user types.
  pub const NUMBERED: [MenuCommand; 14] = [
    MenuCommand::AddSong,
    MenuCommand::RemoveSong,
    MenuCommand::CreatePlaylist,
    MenuCommand::AddToPlaylist,
    MenuCommand::RemoveFromPlaylist,
    MenuCommand::Shuffle,
    MenuCommand::SortByTitle,
    MenuCommand::SortByArtist,
    MenuCommand::Search,
    MenuCommand::Merge,
    MenuCommand::MarkFavorite,
    MenuCommand::ListFavorites,
    MenuCommand::ListPlaylists,
    MenuCommand::ListSongs,
  ];

  pub fn label(self) -> &'static str {
    match self {
      MenuCommand::AddSong => "Add a song",
      MenuCommand::RemoveSong => "Remove a song",
      MenuCommand::CreatePlaylist => "Create a playlist",
      MenuCommand::AddToPlaylist => "Add a song to a playlist",
      MenuCommand::RemoveFromPlaylist => "Remove a song from a playlist",
      MenuCommand::Shuffle => "Shuffle a playlist",
      MenuCommand::SortByTitle => "Sort a playlist by title",
      MenuCommand::SortByArtist => "Sort a playlist by artist",
      MenuCommand::Search => "Search for a song",
      MenuCommand::Merge => "Merge two playlists",
      MenuCommand::MarkFavorite => "Mark a song as favorite",
      MenuCommand::ListFavorites => "Show favorite songs",
      MenuCommand::ListPlaylists => "Show all playlists",
      MenuCommand::ListSongs => "Show all songs",
      MenuCommand::Exit => "Exit",
    }
  }

  pub fn render() -> String {
    let mut text = String::from("\n===== Cancionero =====\n");
    for (i, command) in Self::NUMBERED.iter().enumerate() {
      text.push_str(&format!("{:>2}. {}\n", i + 1, command.label()));
    }
    text.push_str(&format!("{:>2}. {}\n", 0, MenuCommand::Exit.label()));
    text
  }
}

impl FromStr for MenuCommand {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let choice = s.trim();

    if choice.eq_ignore_ascii_case("exit") || choice.eq_ignore_ascii_case("quit") {
      return Ok(MenuCommand::Exit);
    }

    match choice.parse::<usize>() {
      Ok(0) => Ok(MenuCommand::Exit),
      Ok(n) if n <= Self::NUMBERED.len() => Ok(Self::NUMBERED[n - 1]),
      _ => Err(format!("Invalid choice: {choice:?}")),
    }
  }
}
