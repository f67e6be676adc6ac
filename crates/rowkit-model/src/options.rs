//! Configuration for a searchable selector.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default label of the scope that shows every option.
pub const ALL_SCOPE_TITLE: &str = "ALL";

/// Scope bar configuration carried by a search push row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOptions {
    /// Scope facet names in display order. `None` disables the scope bar.
    pub scope_titles: Option<Vec<String>>,
    /// Prepend the all-scope label to the scope bar.
    pub show_all_scope: bool,
    /// Label of the scope that clears filtering.
    pub all_scope_title: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            scope_titles: None,
            show_all_scope: true,
            all_scope_title: ALL_SCOPE_TITLE.to_string(),
        }
    }
}

impl SelectorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_titles = Some(titles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_show_all_scope(mut self, enable: bool) -> Self {
        self.show_all_scope = enable;
        self
    }

    pub fn with_all_scope_title(mut self, title: impl Into<String>) -> Self {
        self.all_scope_title = title.into();
        self
    }

    /// Labels of the scope bar in display order.
    pub fn scope_labels(&self) -> Vec<String> {
        let Some(titles) = self.scope_titles.as_ref() else {
            return Vec::new();
        };
        let mut labels = Vec::with_capacity(titles.len() + 1);
        if self.show_all_scope {
            labels.push(self.all_scope_title.clone());
        }
        labels.extend(titles.iter().cloned());
        labels
    }

    /// Rejects empty and duplicate titles and titles shadowing the all-scope label.
    ///
    /// Titles are compared ignoring ASCII case, as scope matching does.
    pub fn validate(&self) -> Result<()> {
        let Some(titles) = self.scope_titles.as_ref() else {
            return Ok(());
        };
        let mut seen = HashSet::new();
        for title in titles {
            if title.trim().is_empty() {
                return Err(ModelError::EmptyScopeTitle);
            }
            if title.eq_ignore_ascii_case(&self.all_scope_title) {
                return Err(ModelError::ScopeCollidesWithAll {
                    title: title.clone(),
                });
            }
            if !seen.insert(title.to_ascii_lowercase()) {
                return Err(ModelError::DuplicateScopeTitle {
                    title: title.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_prepend_all_scope() {
        let options = SelectorOptions::new().with_scope_titles(["North", "South"]);
        assert_eq!(options.scope_labels(), vec!["ALL", "North", "South"]);

        let options = options.with_show_all_scope(false);
        assert_eq!(options.scope_labels(), vec!["North", "South"]);
    }

    #[test]
    fn no_titles_means_no_labels() {
        assert!(SelectorOptions::default().scope_labels().is_empty());
    }

    #[test]
    fn validate_rejects_bad_titles() {
        let duplicate = SelectorOptions::new().with_scope_titles(["North", "North"]);
        assert_eq!(
            duplicate.validate(),
            Err(ModelError::DuplicateScopeTitle {
                title: "North".to_string()
            })
        );

        let shadowing = SelectorOptions::new().with_scope_titles(["ALL"]);
        assert!(matches!(
            shadowing.validate(),
            Err(ModelError::ScopeCollidesWithAll { .. })
        ));

        let cased = SelectorOptions::new().with_scope_titles(["North", "north"]);
        assert_eq!(
            cased.validate(),
            Err(ModelError::DuplicateScopeTitle {
                title: "north".to_string()
            })
        );

        let lower_all = SelectorOptions::new().with_scope_titles(["all"]);
        assert_eq!(
            lower_all.validate(),
            Err(ModelError::ScopeCollidesWithAll {
                title: "all".to_string()
            })
        );

        let empty = SelectorOptions::new().with_scope_titles([" "]);
        assert_eq!(empty.validate(), Err(ModelError::EmptyScopeTitle));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let options: SelectorOptions =
            serde_json::from_str(r#"{"scope_titles":["North"]}"#).expect("parse options");
        assert!(options.show_all_scope);
        assert_eq!(options.all_scope_title, ALL_SCOPE_TITLE);
    }
}
