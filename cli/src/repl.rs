use std::io::{self, BufRead, Write};

use cancionero_core::{Catalog, CoreError, SongRegistry};
use tracing::debug;

use crate::menu::MenuCommand;

/// Estado del bucle interactivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
  Running,
  Exiting,
}

/// Una línea de entrada.
enum Reply {
  Line(String),
  Unreadable,
  Closed,
}

/// Menú numerado sobre un catálogo. Lee de `input` y escribe en `output`, así
/// que los tests pueden usar buffers en memoria.
pub struct Repl<'c, R, I, O>
where
  R: SongRegistry,
{
  catalog: &'c mut Catalog<R>,
  input: I,
  output: O,
}

/// Runs a full interactive session until exit or end of input.
pub fn run<R, I, O>(catalog: &mut Catalog<R>, input: I, output: O) -> io::Result<()>
where
  R: SongRegistry,
  I: BufRead,
  O: Write,
{
  Repl::new(catalog, input, output).run()
}

impl<'c, R, I, O> Repl<'c, R, I, O>
where
  R: SongRegistry,
  I: BufRead,
  O: Write,
{
  pub fn new(catalog: &'c mut Catalog<R>, input: I, output: O) -> Self {
    Self { catalog, input, output }
  }

  pub fn run(&mut self) -> io::Result<()> {
    let mut session = Session::Running;

    while session == Session::Running {
      write!(self.output, "{}", MenuCommand::render())?;

      session = match self.ask("Enter your choice: ")? {
        // EOF: igual que si el usuario hubiera escrito `exit`.
        Reply::Closed => Session::Exiting,
        Reply::Unreadable => {
          writeln!(self.output, "Invalid choice. Please try again.")?;
          Session::Running
        }
        Reply::Line(line) => match line.parse::<MenuCommand>() {
          Ok(command) => self.execute(command)?,
          Err(reason) => {
            debug!(%reason, "menu input rejected");
            writeln!(self.output, "Invalid choice. Please try again.")?;
            Session::Running
          }
        },
      };
    }

    writeln!(self.output, "Goodbye!")?;
    self.output.flush()
  }

  fn execute(&mut self, command: MenuCommand) -> io::Result<Session> {
    debug!(?command, "menu command");

    match command {
      MenuCommand::AddSong => {
        let [title, artist] = match self.ask_all(["Enter song title: ", "Enter artist name: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        let existed = self.catalog.search_song(&title).is_some();
        self.catalog.add_song(&title, &artist);
        let verb = if existed { "updated" } else { "added" };
        writeln!(self.output, "Song {verb}: {title} by {artist}")?;
      }
      MenuCommand::RemoveSong => {
        let [title] = match self.ask_all(["Enter song title: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        let outcome = self.catalog.remove_song(&title).map(|song| format!("Removed {song}."));
        self.report(outcome)?;
      }
      MenuCommand::CreatePlaylist => {
        let [name] = match self.ask_all(["Enter playlist name: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        match self.catalog.create_playlist(&name) {
          Some(old) => {
            writeln!(self.output, "Playlist '{name}' replaced ({} songs discarded).", old.len())?
          }
          None => writeln!(self.output, "Playlist '{name}' created.")?,
        }
      }
      MenuCommand::AddToPlaylist => {
        let [playlist, title] =
          match self.ask_all(["Enter playlist name: ", "Enter song title: "])? {
            Ok(answers) => answers,
            Err(session) => return Ok(session),
          };
        let outcome = self
          .catalog
          .add_song_to_playlist(&playlist, &title)
          .map(|()| format!("Added '{title}' to '{playlist}'."));
        self.report(outcome)?;
      }
      MenuCommand::RemoveFromPlaylist => {
        let [playlist, title] =
          match self.ask_all(["Enter playlist name: ", "Enter song title: "])? {
            Ok(answers) => answers,
            Err(session) => return Ok(session),
          };
        let outcome = self
          .catalog
          .remove_song_from_playlist(&playlist, &title)
          .map(|n| format!("Removed {n} occurrence(s) of '{title}' from '{playlist}'."));
        self.report(outcome)?;
      }
      MenuCommand::Shuffle => {
        let [name] = match self.ask_all(["Enter playlist name: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        let outcome = self.catalog.shuffle_playlist(&name).map(|()| format!("Shuffled '{name}'."));
        self.report(outcome)?;
      }
      MenuCommand::SortByTitle => {
        let [name] = match self.ask_all(["Enter playlist name: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        let outcome =
          self.catalog.sort_playlist_by_title(&name).map(|()| format!("Sorted '{name}' by title."));
        self.report(outcome)?;
      }
      MenuCommand::SortByArtist => {
        let [name] = match self.ask_all(["Enter playlist name: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        let outcome = self
          .catalog
          .sort_playlist_by_artist(&name)
          .map(|()| format!("Sorted '{name}' by artist."));
        self.report(outcome)?;
      }
      MenuCommand::Search => {
        let [title] = match self.ask_all(["Enter song title: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        match self.catalog.search_song(&title) {
          Some(song) => writeln!(self.output, "Found song: {song}")?,
          None => writeln!(self.output, "Song not found.")?,
        }
      }
      MenuCommand::Merge => {
        let [first, second, merged] = match self.ask_all([
          "Enter first playlist name: ",
          "Enter second playlist name: ",
          "Enter merged playlist name: ",
        ])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        let outcome = self
          .catalog
          .merge_playlists(&first, &second, &merged)
          .map(|()| format!("Merged '{first}' and '{second}' into '{merged}'."));
        self.report(outcome)?;
      }
      MenuCommand::MarkFavorite => {
        let [title] = match self.ask_all(["Enter song title: "])? {
          Ok(answers) => answers,
          Err(session) => return Ok(session),
        };
        let outcome =
          self.catalog.mark_favorite(&title).map(|()| format!("'{title}' added to favorites."));
        self.report(outcome)?;
      }
      MenuCommand::ListFavorites => self.print_favorites()?,
      MenuCommand::ListPlaylists => self.print_playlists()?,
      MenuCommand::ListSongs => self.print_songs()?,
      MenuCommand::Exit => return Ok(Session::Exiting),
    }

    Ok(Session::Running)
  }

  fn print_favorites(&mut self) -> io::Result<()> {
    let favorites = self.catalog.list_favorites();
    if favorites.is_empty() {
      return writeln!(self.output, "No favorite songs found.");
    }

    writeln!(self.output, "Favorite Songs:")?;
    for song in favorites {
      writeln!(self.output, "{song}")?;
    }
    Ok(())
  }

  fn print_playlists(&mut self) -> io::Result<()> {
    let playlists = self.catalog.list_all_playlists();
    if playlists.is_empty() {
      return writeln!(self.output, "No playlists found.");
    }

    for view in playlists {
      writeln!(self.output, "{} ({} songs):", view.name, view.songs.len())?;
      for (i, song) in view.songs.iter().enumerate() {
        writeln!(self.output, "  {}. {song}", i + 1)?;
      }
    }
    Ok(())
  }

  fn print_songs(&mut self) -> io::Result<()> {
    let songs = self.catalog.list_songs();
    if songs.is_empty() {
      return writeln!(self.output, "No songs in the catalog.");
    }

    writeln!(self.output, "Songs:")?;
    for song in songs {
      writeln!(self.output, "{song}")?;
    }
    Ok(())
  }

  fn report(&mut self, outcome: Result<String, CoreError>) -> io::Result<()> {
    match outcome {
      Ok(message) => writeln!(self.output, "{message}"),
      Err(not_found) => writeln!(self.output, "Nothing changed: {not_found}."),
    }
  }

  /// `Err(session)` cuando la orden se abandona: la entrada se acabó
  /// (`Exiting`) o llegó una línea ilegible (`Running`, tras avisar).
  fn ask_all<const N: usize>(
    &mut self,
    prompts: [&str; N],
  ) -> io::Result<Result<[String; N], Session>> {
    let mut answers = Vec::with_capacity(N);
    for prompt in prompts {
      match self.ask(prompt)? {
        Reply::Line(answer) => answers.push(answer),
        Reply::Unreadable => {
          writeln!(self.output, "Invalid input. Please try again.")?;
          return Ok(Err(Session::Running));
        }
        Reply::Closed => return Ok(Err(Session::Exiting)),
      }
    }
    Ok(answers.try_into().map_err(|_| Session::Exiting))
  }

  fn ask(&mut self, prompt: &str) -> io::Result<Reply> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;

    // `read_line` fallaría con `InvalidData`; leemos bytes y validamos aparte.
    let mut raw = Vec::new();
    if self.input.read_until(b'\n', &mut raw)? == 0 {
      return Ok(Reply::Closed);
    }
    match String::from_utf8(raw) {
      Ok(line) => Ok(Reply::Line(line.trim_end_matches(['\r', '\n']).to_owned())),
      Err(e) => {
        debug!(error = %e.utf8_error(), "input line is not valid UTF-8");
        Ok(Reply::Unreadable)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn session(catalog: &mut Catalog, script: impl AsRef<[u8]>) -> String {
    let mut output = Vec::new();
    run(catalog, script.as_ref(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
  }

  #[test]
  fn add_search_remove_and_list() {
    let mut catalog = Catalog::with_seed(1);
    let script = "1\nSong A\nArtist A\n\
                  1\nSong B\nArtist B\n\
                  3\nP1\n\
                  4\nP1\nSong A\n\
                  4\nP1\nSong B\n\
                  9\nSong A\n\
                  2\nSong A\n\
                  9\nSong A\n\
                  13\n\
                  0\n";

    let out = session(&mut catalog, script);

    assert!(out.contains("Song added: Song A by Artist A"));
    assert!(out.contains("Playlist 'P1' created."));
    assert!(out.contains("Found song: Song A by Artist A"));
    assert!(out.contains("Removed Song A by Artist A."));
    assert!(out.contains("Song not found."));
    assert!(out.contains("P1 (1 songs):\n  1. Song B by Artist B\n"));
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(catalog.song_count(), 1);
  }

  #[test]
  fn favorites_listing() {
    let mut catalog = Catalog::with_seed(1);
    catalog.add_song("Song A", "Artist A");
    catalog.add_song("Song C", "Artist C");

    let out = session(&mut catalog, "12\n11\nSong A\n11\nSong C\n12\nexit\n");

    assert!(out.contains("No favorite songs found."));
    assert!(out.contains("Favorite Songs:\nSong A by Artist A\nSong C by Artist C\n"));
  }

  #[test]
  fn missing_entries_report_nothing_changed() {
    let mut catalog = Catalog::with_seed(1);
    catalog.add_song("Song A", "Artist A");

    let out = session(&mut catalog, "4\nNope\nSong A\n11\nGhost\n0\n");

    assert!(out.contains("Nothing changed: playlist not found: Nope."));
    assert!(out.contains("Nothing changed: song not found: Ghost."));
    assert_eq!(catalog.favorite_count(), 0);
  }

  #[test]
  fn recreating_a_playlist_warns_about_discarded_songs() {
    let mut catalog = Catalog::with_seed(1);
    catalog.add_song("Song A", "Artist A");
    catalog.create_playlist("P1");
    catalog.add_song_to_playlist("P1", "Song A").unwrap();

    let out = session(&mut catalog, "3\nP1\n0\n");

    assert!(out.contains("Playlist 'P1' replaced (1 songs discarded)."));
  }

  #[test]
  fn invalid_choice_keeps_running() {
    let mut catalog = Catalog::with_seed(1);

    let out = session(&mut catalog, "banana\n14\nquit\n");

    assert!(out.contains("Invalid choice. Please try again."));
    assert!(out.contains("No songs in the catalog."));
    assert!(out.ends_with("Goodbye!\n"));
  }

  #[test]
  fn end_of_input_mid_command_exits_without_changes() {
    let mut catalog = Catalog::with_seed(1);

    let out = session(&mut catalog, "1\nSong A\n");

    assert_eq!(catalog.song_count(), 0);
    assert!(out.ends_with("Goodbye!\n"));
  }

  #[test]
  fn merge_through_the_menu() {
    let mut catalog = Catalog::with_seed(1);
    for (title, artist) in [("Song A", "Artist A"), ("Song B", "Artist B"), ("Song C", "Artist C")] {
      catalog.add_song(title, artist);
    }
    catalog.create_playlist("P1");
    catalog.create_playlist("P2");
    catalog.add_song_to_playlist("P1", "Song A").unwrap();
    catalog.add_song_to_playlist("P1", "Song B").unwrap();
    catalog.add_song_to_playlist("P2", "Song C").unwrap();

    let out = session(&mut catalog, "10\nP1\nP2\nM\n0\n");

    assert!(out.contains("Merged 'P1' and 'P2' into 'M'."));
    assert_eq!(catalog.playlist("M").unwrap().titles(), vec!["Song A", "Song B", "Song C"]);
  }

  #[test]
  fn non_utf8_input_is_rejected_without_ending_the_session() {
    let mut catalog = Catalog::with_seed(1);
    let script: &[u8] = b"\xff\xfe\n1\nSong \xff\n14\n1\nSong A\nArtist A\n0\n";

    let out = session(&mut catalog, script);

    assert!(out.contains("Invalid choice. Please try again."));
    assert!(out.contains("Invalid input. Please try again."));
    assert!(out.contains("No songs in the catalog."));
    assert!(out.contains("Song added: Song A by Artist A"));
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(catalog.song_count(), 1);
  }
}
