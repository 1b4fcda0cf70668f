pub mod ids;
pub mod playlist;
pub mod song;

pub use ids::SongId;
pub use playlist::{Playlist, SortKey};
pub use song::Song;
