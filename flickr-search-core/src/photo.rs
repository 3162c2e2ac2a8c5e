use crate::PhotoId;
use std::sync;

/// A decoded RGBA bitmap, shared between the store and whatever renders it.
pub type Bitmap = sync::Arc<image::RgbaImage>;

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    pub title: String,
    pub thumbnail: Option<Bitmap>,
    pub large_image: Option<Bitmap>,
    /// Location of the full-size rendition, if the service provides one.
    pub large_image_url: Option<String>,
}

impl Photo {
    pub fn new(id: impl Into<PhotoId>, title: impl Into<String>) -> Self {
        Photo {
            id: id.into(),
            title: title.into(),
            thumbnail: None,
            large_image: None,
            large_image_url: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: Bitmap) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn with_large_image(mut self, large_image: Bitmap) -> Self {
        self.large_image = Some(large_image);
        self
    }

    pub fn with_large_image_url(mut self, url: impl Into<String>) -> Self {
        self.large_image_url = Some(url.into());
        self
    }
}

/// The outcome of one successful query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub search_term: String,
    pub search_results: Vec<Photo>,
}

impl SearchResults {
    pub fn new(search_term: impl Into<String>, search_results: Vec<Photo>) -> Self {
        SearchResults {
            search_term: search_term.into(),
            search_results,
        }
    }

    pub fn len(&self) -> usize {
        self.search_results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.search_results.is_empty()
    }
}
