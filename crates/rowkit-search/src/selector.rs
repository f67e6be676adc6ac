//! Toolkit-free state of the searchable selector screen.
//!
//! [`SearchSelector`] is what a presenting table view binds to: it owns the
//! scope bar, the search text and the [`FilteredOptionSet`], and answers the
//! section/row questions a table data source asks. Options arrive after the
//! selector is built (the form is set up once the row hands its options
//! over), so view and filter calls fail with
//! [`SelectorError::Uninitialized`] until [`SearchSelector::setup_options`]
//! has run.

use rowkit_model::{Dataset, FilterState, FilteredView, IndexPath, SearchItem, SelectorOptions};
use tracing::{debug, trace};

use crate::error::{Result, SelectorError};
use crate::filter_set::FilteredOptionSet;
use crate::scope_bar::{ScopeBar, SizeClass};

#[derive(Debug, Clone)]
pub struct SearchSelector<T> {
    scope_bar: ScopeBar,
    search_text: String,
    search_active: bool,
    options: Option<FilteredOptionSet<T>>,
    selected: Option<T>,
}

impl<T: SearchItem + Clone> SearchSelector<T> {
    pub fn new(options: &SelectorOptions, size_class: SizeClass) -> Self {
        Self {
            scope_bar: ScopeBar::new(options, size_class),
            search_text: String::new(),
            search_active: false,
            options: None,
            selected: None,
        }
    }

    /// Hands the grouped options to the selector.
    ///
    /// A second call replaces the dataset and clears the filter.
    pub fn setup_options(&mut self, dataset: Dataset<T>) {
        debug!(
            sections = dataset.section_count(),
            options = dataset.option_count(),
            "Setting up selector options"
        );
        match self.options.as_mut() {
            Some(set) => set.initialize(dataset),
            None => self.options = Some(FilteredOptionSet::new(dataset)),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.options.is_some()
    }

    pub fn scope_bar(&self) -> &ScopeBar {
        &self.scope_bar
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }

    /// Stores `text` and refilters.
    ///
    /// A selected scope other than the all-scope label takes precedence and
    /// the text is not applied.
    pub fn update_search_results(&mut self, text: &str) -> Result<()> {
        text.clone_into(&mut self.search_text);
        self.refilter()
    }

    /// Selects a scope by index, clears the search text and refilters.
    pub fn select_scope(&mut self, index: usize) -> Result<()> {
        let label = self.scope_bar.select(index)?;
        trace!(scope = label, index, "Scope selected");
        self.search_text.clear();
        self.refilter()
    }

    /// Handles a size transition such as a device rotation.
    ///
    /// Search is deactivated, the text cleared, the scope bar returned to its
    /// first label and the filter dropped. The dataset is kept as-is.
    pub fn transition(&mut self, size_class: SizeClass) -> Result<()> {
        let set = self.options.as_mut().ok_or(SelectorError::Uninitialized)?;
        self.search_active = false;
        self.search_text.clear();
        self.scope_bar.reset();
        self.scope_bar.update_visibility(size_class);
        set.reset();
        Ok(())
    }

    pub fn current_view(&self) -> Result<&FilteredView<T>> {
        Ok(self.filter_set()?.current_view())
    }

    pub fn filter_state(&self) -> Result<&FilterState> {
        Ok(self.filter_set()?.filter_state())
    }

    pub fn revision(&self) -> Result<u64> {
        Ok(self.filter_set()?.revision())
    }

    pub fn number_of_sections(&self) -> Result<usize> {
        Ok(self.filter_set()?.section_count())
    }

    pub fn number_of_rows(&self, section: usize) -> Result<usize> {
        let set = self.filter_set()?;
        set.row_count(section)
            .ok_or(SelectorError::SectionOutOfRange {
                section,
                sections: set.section_count(),
            })
    }

    /// Headers of sections emptied by the filter collapse to zero height.
    pub fn shows_header(&self, section: usize) -> Result<bool> {
        Ok(self.number_of_rows(section)? > 0)
    }

    pub fn shows_footer(&self, section: usize) -> Result<bool> {
        self.shows_header(section)
    }

    pub fn option_at(&self, path: IndexPath) -> Result<&T> {
        let rows = self.number_of_rows(path.section)?;
        self.filter_set()?
            .current_view()
            .get(path)
            .ok_or(SelectorError::RowOutOfRange { path, rows })
    }

    /// Picks the option at `path` in the current view.
    pub fn select(&mut self, path: IndexPath) -> Result<&T> {
        let option = self.option_at(path)?.clone();
        debug!(%path, "Option selected");
        Ok(self.selected.insert(option))
    }

    pub fn selected_value(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn take_selected(&mut self) -> Option<T> {
        self.selected.take()
    }

    fn refilter(&mut self) -> Result<()> {
        let set = self.options.as_mut().ok_or(SelectorError::Uninitialized)?;
        match self.scope_bar.selected_label() {
            Some(scope) if scope != self.scope_bar.all_scope_title() => {
                if !self.search_text.is_empty() {
                    trace!(
                        scope,
                        text = %self.search_text,
                        "Scope filter active, search text ignored"
                    );
                }
                set.apply_scope(scope, self.scope_bar.all_scope_title());
            }
            _ => set.apply_text_query(&self.search_text),
        }
        Ok(())
    }

    fn filter_set(&self) -> Result<&FilteredOptionSet<T>> {
        self.options.as_ref().ok_or(SelectorError::Uninitialized)
    }
}
