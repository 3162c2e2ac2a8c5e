pub mod image_loader_actor;
pub mod photo_search_actor;

pub use image_loader_actor::{ImageLoaderActor, LoadLargeImageMessage};
pub use photo_search_actor::{PhotoSearchActor, PhotoSearchHandle, SearchMessage};
