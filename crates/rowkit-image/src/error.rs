#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRowError {
    #[error("unknown identity document type: {code}")]
    UnknownDocumentType { code: String },
}
