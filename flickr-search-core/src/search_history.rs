use crate::{Photo, SearchResults};
use std::collections;

/// Every successful search, newest first.
///
/// Sections are addressed by index into the history and items by index into
/// a section's results. Bundles are only ever added at the front.
#[derive(Default, Debug, Clone)]
pub struct SearchHistory(collections::VecDeque<SearchResults>);

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, results: SearchResults) {
        self.0.push_front(results);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn section(&self, section: usize) -> Option<&SearchResults> {
        self.0.get(section)
    }

    /// Panics if `section` is out of range.
    pub fn item_count(&self, section: usize) -> usize {
        self.0[section].search_results.len()
    }

    /// Panics if either index is out of range.
    pub fn photo(&self, section: usize, item: usize) -> &Photo {
        &self.0[section].search_results[item]
    }

    pub fn total_photos(&self) -> usize {
        self.0.iter().map(SearchResults::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResults> {
        self.0.iter()
    }
}
