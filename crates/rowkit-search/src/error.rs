use rowkit_model::IndexPath;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("selector options have not been set up")]
    Uninitialized,

    #[error("row is disabled")]
    Disabled,

    #[error("section {section} out of range ({sections} sections)")]
    SectionOutOfRange { section: usize, sections: usize },

    #[error("row {path} out of range ({rows} rows in section)")]
    RowOutOfRange { path: IndexPath, rows: usize },

    #[error("scope index {index} out of range ({scopes} scopes)")]
    ScopeOutOfRange { index: usize, scopes: usize },

    #[error(transparent)]
    Options(#[from] rowkit_model::ModelError),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
