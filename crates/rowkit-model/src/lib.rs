#![deny(unsafe_code)]

pub mod error;
pub mod filter;
pub mod option;
pub mod options;
pub mod search_item;
pub mod section;

pub use error::{ModelError, Result};
pub use filter::FilterState;
pub use option::LabeledOption;
pub use options::{ALL_SCOPE_TITLE, SelectorOptions};
pub use search_item::SearchItem;
pub use section::{Dataset, FilteredView, GroupedOptions, IndexPath, Section};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_state_round_trips_through_json() {
        let state = FilterState::Scope("South".to_string());
        let json = serde_json::to_string(&state).expect("serialize state");
        let round: FilterState = serde_json::from_str(&json).expect("deserialize state");
        assert_eq!(round, state);
    }

    #[test]
    fn labeled_option_is_a_search_item() {
        let option = LabeledOption::new("R-001", "Alice Tan").with_scopes(["North"]);
        assert!(option.matches_search_query("alice"));
        assert!(option.matches_scope("north"));
        assert!(!option.matches_scope("South"));
    }
}
