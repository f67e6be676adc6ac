#![deny(unsafe_code)]

pub mod error;
pub mod filter_set;
pub mod push_row;
pub mod scope_bar;
pub mod selector;

pub use crate::error::{Result, SelectorError};
pub use crate::filter_set::FilteredOptionSet;
pub use crate::push_row::SearchPushRow;
pub use crate::scope_bar::{ScopeBar, SizeClass};
pub use crate::selector::SearchSelector;
