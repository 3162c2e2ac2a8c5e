pub mod controller;
pub mod layout;
pub mod photo;
pub mod presenter;
pub mod search_history;
pub mod service;
pub mod widgets;

pub use controller::SearchController;
pub use layout::{EdgeInsets, FlowLayout, Rect, Size};
pub use photo::{Bitmap, Photo, SearchResults};
pub use presenter::GridPresenter;
pub use search_history::SearchHistory;
pub use service::{PhotoService, SearchDispatcher, SearchError};
pub use widgets::{
    Color, GridDataSource, GridLayoutDelegate, GridWidget, InputWidget, PhotoCell, Spinner,
};

// Type Aliases
pub type PhotoId = String;
pub type SubmissionId = u64;

// --- AppMessage ---
/// Messages posted from background actors to the UI thread.
#[derive(Debug)]
pub enum AppMessage {
    SearchCompleted {
        submission_id: SubmissionId,
        result: Result<SearchResults, SearchError>,
    },
    LargeImageLoaded {
        photo_id: PhotoId,
        image: Bitmap,
    },
    LargeImageFailed {
        photo_id: PhotoId,
        error: String,
    },
}
