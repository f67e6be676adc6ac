use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("scope title must not be empty")]
    EmptyScopeTitle,
    #[error("duplicate scope title: {title}")]
    DuplicateScopeTitle { title: String },
    #[error("scope title '{title}' collides with the all-scope title")]
    ScopeCollidesWithAll { title: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
