pub mod catalog;
pub mod views;

pub use catalog::Catalog;
pub use views::PlaylistView;
