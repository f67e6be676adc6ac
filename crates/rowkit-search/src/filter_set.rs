//! Filtered view over a grouped option dataset.
//!
//! [`FilteredOptionSet`] keeps the canonical [`Dataset`] and the single active
//! [`FilterState`]. Every mutation recomputes the view from the dataset in one
//! pass, so text and scope filters never compound and repeated calls are
//! idempotent. Re-rendering is left to the caller, which can compare
//! [`FilteredOptionSet::revision`] values to detect a new view.

use rowkit_model::{Dataset, FilterState, FilteredView, SearchItem, Section};
use tracing::debug;

/// Canonical grouped options plus the view derived by the active filter.
#[derive(Debug, Clone)]
pub struct FilteredOptionSet<T> {
    dataset: Dataset<T>,
    state: FilterState,
    view: FilteredView<T>,
    revision: u64,
}

impl<T: SearchItem + Clone> FilteredOptionSet<T> {
    /// Stores `dataset` with no filter applied.
    pub fn new(dataset: Dataset<T>) -> Self {
        let view = dataset.clone();
        Self {
            dataset,
            state: FilterState::NoFilter,
            view,
            revision: 0,
        }
    }

    /// Replaces the dataset and clears the filter.
    pub fn initialize(&mut self, dataset: Dataset<T>) {
        self.dataset = dataset;
        self.state = FilterState::NoFilter;
        self.recompute();
    }

    /// Filters by free text. Empty text clears the filter.
    pub fn apply_text_query(&mut self, text: &str) {
        self.state = FilterState::for_query(text);
        self.recompute();
    }

    /// Filters by scope. `all_scope_label` clears the filter.
    pub fn apply_scope(&mut self, scope: &str, all_scope_label: &str) {
        self.state = FilterState::for_scope(scope, all_scope_label);
        self.recompute();
    }

    /// Clears the filter and restores the full dataset view.
    pub fn reset(&mut self) {
        self.state = FilterState::NoFilter;
        self.recompute();
    }

    pub fn current_view(&self) -> &FilteredView<T> {
        &self.view
    }

    pub fn dataset(&self) -> &Dataset<T> {
        &self.dataset
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    /// Increments on every recompute, including ones that yield the same view.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn section_count(&self) -> usize {
        self.view.section_count()
    }

    /// Visible rows in `section`, or `None` when the section does not exist.
    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.view.section(section).map(Section::len)
    }

    pub fn total_visible(&self) -> usize {
        self.view.option_count()
    }

    fn recompute(&mut self) {
        self.view = match &self.state {
            FilterState::NoFilter => self.dataset.clone(),
            FilterState::TextQuery(text) => self
                .dataset
                .filtered(|option| option.matches_search_query(text)),
            FilterState::Scope(scope) => {
                self.dataset.filtered(|option| option.matches_scope(scope))
            }
        };
        self.revision = self.revision.wrapping_add(1);
        debug!(
            filter = ?self.state,
            sections = self.view.section_count(),
            visible = self.view.option_count(),
            total = self.dataset.option_count(),
            "Recomputed filtered view"
        );
    }
}
