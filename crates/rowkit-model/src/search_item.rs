//! Capability trait for options offered by a searchable selector.

/// An option that can be matched against a free-text query or a scope.
///
/// Implementors decide what "matches" means for their own data. Scope
/// matching defaults to `true`, so types that do not partition into scopes
/// stay visible under every scope.
pub trait SearchItem {
    /// Returns true when the option should remain visible for `query`.
    fn matches_search_query(&self, query: &str) -> bool;

    /// Returns true when the option belongs to `scope`.
    fn matches_scope(&self, scope: &str) -> bool {
        let _ = scope;
        true
    }
}

impl<T: SearchItem + ?Sized> SearchItem for &T {
    fn matches_search_query(&self, query: &str) -> bool {
        (**self).matches_search_query(query)
    }

    fn matches_scope(&self, scope: &str) -> bool {
        (**self).matches_scope(scope)
    }
}

impl SearchItem for String {
    fn matches_search_query(&self, query: &str) -> bool {
        self.to_lowercase().contains(&query.to_lowercase())
    }
}
