use crate::{Bitmap, Photo, SearchResults, SubmissionId};
use futures::future::BoxFuture;
use std::error;

/// Opaque failure reported by a photo service.
pub type SearchError = Box<dyn error::Error + Send + Sync>;

/// A remote photo-hosting service.
///
/// Futures returned here are driven off the UI thread and resolve exactly
/// once.
pub trait PhotoService: Send + Sync {
    /// Resolves with a bundle echoing `term`. An empty bundle is a success.
    fn search(&self, term: &str) -> BoxFuture<'static, Result<SearchResults, SearchError>>;

    fn load_large_image(&self, photo: &Photo) -> BoxFuture<'static, Result<Bitmap, SearchError>>;
}

/// Hands a search off to whatever runs it in the background. The outcome
/// comes back to the UI thread as an
/// [`AppMessage::SearchCompleted`](crate::AppMessage::SearchCompleted) for the
/// same submission id.
pub trait SearchDispatcher {
    /// An `Err` means the search never started and no completion will follow.
    fn dispatch(&mut self, submission_id: SubmissionId, term: String)
        -> Result<(), SearchError>;
}
