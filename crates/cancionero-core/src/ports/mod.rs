pub mod registry;

pub use registry::SongRegistry;
