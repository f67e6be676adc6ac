use serde::{Deserialize, Serialize};

/// The active filter of a selector.
///
/// Text and scope filtering are mutually exclusive: moving to one variant
/// drops the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterState {
    /// Every option is visible.
    #[default]
    NoFilter,
    /// Options are kept when they match the query text.
    TextQuery(String),
    /// Options are kept when they belong to the named scope.
    Scope(String),
}

impl FilterState {
    /// Builds the state for a text query; empty text clears the filter.
    pub fn for_query(text: &str) -> Self {
        if text.is_empty() {
            Self::NoFilter
        } else {
            Self::TextQuery(text.to_string())
        }
    }

    /// Builds the state for a scope; the all-scope label clears the filter.
    pub fn for_scope(scope: &str, all_scope_label: &str) -> Self {
        if scope == all_scope_label {
            Self::NoFilter
        } else {
            Self::Scope(scope.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::NoFilter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_clears() {
        assert_eq!(FilterState::for_query(""), FilterState::NoFilter);
        assert_eq!(
            FilterState::for_query("ab"),
            FilterState::TextQuery("ab".to_string())
        );
    }

    #[test]
    fn all_scope_clears() {
        assert_eq!(FilterState::for_scope("ALL", "ALL"), FilterState::NoFilter);
        assert!(FilterState::for_scope("South", "ALL").is_active());
    }
}
