use crate::{
    FlowLayout, GridPresenter, GridWidget, InputWidget, SearchDispatcher, SearchError,
    SearchHistory, SearchResults, Spinner, SubmissionId,
};
use std::collections;

/// Mediates between the search field, the background search and the history.
///
/// Lives on the UI thread. Every accepted submission gets its own spinner,
/// which is removed when that submission's result comes back, whichever
/// order results arrive in.
pub struct SearchController<D, S> {
    dispatcher: D,
    history: SearchHistory,
    pending: collections::HashMap<SubmissionId, S>,
    next_submission_id: SubmissionId,
}

impl<D: SearchDispatcher, S: Spinner> SearchController<D, S> {
    pub fn new(dispatcher: D) -> Self {
        SearchController {
            dispatcher,
            history: SearchHistory::new(),
            pending: collections::HashMap::new(),
            next_submission_id: 0,
        }
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    pub fn presenter<'a>(&'a self, layout: &'a FlowLayout) -> GridPresenter<'a> {
        GridPresenter::new(&self.history, layout)
    }

    /// Called when the user presses return in `input`. Always returns `true`
    /// so the host lets the keyboard go.
    pub fn on_submit<I>(&mut self, input: &mut I, text: &str) -> bool
    where
        I: InputWidget<Spinner = S>,
    {
        if text.is_empty() {
            return true;
        }

        let mut spinner = input.add_spinner();
        spinner.set_frame(input.bounds());
        spinner.start_animating();

        let submission_id = self.next_submission_id;
        self.next_submission_id += 1;

        self.pending.insert(submission_id, spinner);

        input.clear_text();
        input.resign_first_responder();

        tracing::info!("Searching for {:?} (submission {})", text, submission_id);
        if let Err(e) = self.dispatcher.dispatch(submission_id, text.to_owned()) {
            tracing::error!("Could not start search {}: {}", submission_id, e);
            self.remove_spinner(submission_id);
        }
        true
    }

    /// Applies the outcome of a submission. Must run on the UI thread.
    pub fn on_search_completed<G: GridWidget>(
        &mut self,
        submission_id: SubmissionId,
        result: Result<SearchResults, SearchError>,
        grid: &mut G,
    ) {
        self.remove_spinner(submission_id);

        match result {
            Err(e) => {
                tracing::error!("Error searching: {}", e);
            }
            Ok(results) => {
                tracing::info!(
                    "Found {} matching {}",
                    results.search_results.len(),
                    results.search_term
                );
                self.history.prepend(results);
                grid.reload_data();
            }
        }
    }

    fn remove_spinner(&mut self, submission_id: SubmissionId) {
        match self.pending.remove(&submission_id) {
            Some(mut spinner) => {
                spinner.stop_animating();
                spinner.remove_from_parent();
            }
            None => tracing::warn!("No spinner for submission {}", submission_id),
        }
    }
}
