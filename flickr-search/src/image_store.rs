use flickr_search_core::{Bitmap, PhotoId};
use std::collections;

/// Large images loaded on demand, by photo.
#[derive(Default)]
pub struct ImageStore {
    pub hash_map: collections::HashMap<PhotoId, Bitmap>,
    pub failures: collections::HashMap<PhotoId, String>,
}

impl ImageStore {
    pub fn insert(&mut self, photo_id: PhotoId, image: Bitmap) {
        let _ = self.failures.remove(&photo_id);
        let _ = self.hash_map.insert(photo_id, image);
    }

    pub fn insert_failure(&mut self, photo_id: PhotoId, error: String) {
        let _ = self.failures.insert(photo_id, error);
    }

    /// Forgets a failed load so it can be retried.
    pub fn clear_failure(&mut self, photo_id: &str) {
        let _ = self.failures.remove(photo_id);
    }

    pub fn load(&self, photo_id: &str) -> Option<&Bitmap> {
        self.hash_map.get(photo_id)
    }

    pub fn failure(&self, photo_id: &str) -> Option<&str> {
        self.failures.get(photo_id).map(String::as_str)
    }
}
