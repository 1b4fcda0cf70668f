pub mod domain;
pub mod errors;
pub mod ports;
pub mod registry;
pub mod services;

pub use domain::{Playlist, Song, SongId, SortKey};
pub use errors::CoreError;
pub use ports::SongRegistry;
pub use registry::MemoryRegistry;
pub use services::{Catalog, PlaylistView};
