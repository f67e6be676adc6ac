//! A form row that pushes a searchable selector for its value.

use rowkit_model::{Dataset, SearchItem, SelectorOptions};
use tracing::debug;

use crate::error::{Result, SelectorError};
use crate::scope_bar::SizeClass;
use crate::selector::SearchSelector;

#[derive(Debug, Clone)]
pub struct SearchPushRow<T> {
    tag: Option<String>,
    pub title: Option<String>,
    pub value: Option<T>,
    pub disabled: bool,
    options: Dataset<T>,
    selector_options: SelectorOptions,
}

impl<T: SearchItem + Clone> SearchPushRow<T> {
    pub fn new(tag: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            title: None,
            value: None,
            disabled: false,
            options: Dataset::default(),
            selector_options: SelectorOptions::default(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Dataset<T>) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Dataset<T> {
        &self.options
    }

    pub fn set_options(&mut self, options: Dataset<T>) {
        self.options = options;
    }

    pub fn selector_options(&self) -> &SelectorOptions {
        &self.selector_options
    }

    /// Changes the scope titles used by the next selector built.
    pub fn set_scope_titles(&mut self, titles: Option<Vec<String>>) {
        self.selector_options.scope_titles = titles;
    }

    pub fn set_show_all_scope(&mut self, show: bool) {
        self.selector_options.show_all_scope = show;
    }

    /// Builds a populated selector from the row's current configuration.
    ///
    /// Disabled rows present nothing and fail with [`SelectorError::Disabled`].
    pub fn make_selector(&self, size_class: SizeClass) -> Result<SearchSelector<T>> {
        if self.disabled {
            return Err(SelectorError::Disabled);
        }
        self.selector_options.validate()?;
        let mut selector = SearchSelector::new(&self.selector_options, size_class);
        selector.setup_options(self.options.clone());
        Ok(selector)
    }

    /// Takes the selector's chosen option as the row value.
    ///
    /// Returns true when the value changed hands. A selector dismissed
    /// without a choice leaves the value untouched.
    pub fn on_dismiss(&mut self, selector: &mut SearchSelector<T>) -> bool {
        match selector.take_selected() {
            Some(value) => {
                debug!(tag = self.tag.as_deref(), "Selector dismissed with a value");
                self.value = Some(value);
                true
            }
            None => false,
        }
    }
}
