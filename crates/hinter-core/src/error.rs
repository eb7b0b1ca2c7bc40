//! Error types for hinter-core

use std::path::PathBuf;

/// Result type for hinter-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// A recipient expression that does not name anything known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("Invalid peer alias '{0}'")]
    UnknownPeer(String),

    #[error("Invalid group name '{0}'")]
    UnknownGroup(String),
}

/// Errors that can occur in hinter-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The header block of a draft is not valid YAML
    #[error("Error parsing YAML for report draft {draft}: {message}")]
    DraftParse { draft: PathBuf, message: String },

    /// The header parsed but does not have the required shape
    #[error("Report draft {draft} is invalid: {source}")]
    DraftInvalid {
        draft: PathBuf,
        #[source]
        source: hinter_content::Error,
    },

    /// `to` or `except` names an unknown peer or group
    #[error("{source} found in report draft {draft}")]
    InvalidRecipient {
        draft: PathBuf,
        #[source]
        source: ResolutionError,
    },

    /// `sourcePath` cannot be accessed
    #[error("Error accessing source path {path} for report draft {draft}: {source}")]
    SourceInaccessible {
        path: PathBuf,
        draft: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destination would land outside the peer's outgoing directory
    #[error("Destination '{destination}' of report draft {draft} leaves the outgoing directory")]
    DestinationOutsideOutgoing { destination: String, draft: PathBuf },

    #[error("Invalid alias '{alias}': use lowercase letters, numbers, and single hyphens")]
    InvalidAlias { alias: String },

    #[error("Invalid public key: expected 64 lowercase hex characters")]
    InvalidPublicKey,

    #[error("A peer with alias '{alias}' already exists")]
    PeerExists { alias: String },

    #[error("Peer '{alias}' not found")]
    PeerNotFound { alias: String },

    #[error("This public key is already used by peer '{peer}'")]
    PublicKeyInUse { peer: String },

    #[error("The group name \"{0}\" is reserved")]
    ReservedGroup(String),

    #[error("A group with alias '{0}' already exists")]
    GroupExists(String),

    #[error("Group '{0}' not found")]
    GroupNotFound(String),

    #[error("A group needs at least one member")]
    EmptyGroup,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Draft already exists at {path}")]
    DraftExists { path: PathBuf },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from hinter-fs
    #[error(transparent)]
    Fs(#[from] hinter_fs::Error),

    /// Content error from hinter-content
    #[error(transparent)]
    Content(#[from] hinter_content::Error),
}
