//! Scope facet bar shown under the search field.

use rowkit_model::SelectorOptions;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectorError};

/// Horizontal layout class of the presenting screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Compact,
    #[default]
    Regular,
}

/// Ordered scope labels with a single selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeBar {
    labels: Vec<String>,
    all_scope_title: String,
    selected: usize,
    visible: bool,
}

impl ScopeBar {
    pub fn new(options: &SelectorOptions, size_class: SizeClass) -> Self {
        let labels = options.scope_labels();
        let visible = Self::visible_for(&labels, size_class);
        Self {
            labels,
            all_scope_title: options.all_scope_title.clone(),
            selected: 0,
            visible,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn all_scope_title(&self) -> &str {
        &self.all_scope_title
    }

    pub fn has_scopes(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Label at the selected index, or `None` when there is no scope bar.
    pub fn selected_label(&self) -> Option<&str> {
        self.labels.get(self.selected).map(String::as_str)
    }

    /// True when the selected scope actually narrows the options.
    pub fn is_filtering(&self) -> bool {
        self.selected_label()
            .is_some_and(|label| label != self.all_scope_title)
    }

    pub fn select(&mut self, index: usize) -> Result<&str> {
        if index >= self.labels.len() {
            return Err(SelectorError::ScopeOutOfRange {
                index,
                scopes: self.labels.len(),
            });
        }
        self.selected = index;
        Ok(&self.labels[index])
    }

    /// Back to the first label.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn update_visibility(&mut self, size_class: SizeClass) {
        self.visible = Self::visible_for(&self.labels, size_class);
    }

    fn visible_for(labels: &[String], size_class: SizeClass) -> bool {
        !labels.is_empty() && size_class != SizeClass::Compact
    }
}
