//! Error types for hinter-content

/// Result type for hinter-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting report draft content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The header parsed but `to`/`except` are not both sequences
    #[error("missing required fields (to, except)")]
    MissingRecipientFields,

    #[error("invalid frontmatter: {message}")]
    InvalidFrontmatter { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
