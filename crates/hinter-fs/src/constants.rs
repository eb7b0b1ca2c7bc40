//! Constants and enums for the hinter-core data directory layout.

use std::path::Path;

/// File extension that marks a report draft.
pub const REPORT_EXTENSION: &str = "md";

/// Standard names inside a hinter-core data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HinterPath {
    /// The `entries` directory holding report drafts
    EntriesDir,
    /// The `peers` directory holding one directory per peer
    PeersDir,
    /// The per-peer `outgoing` directory managed by sync
    OutgoingDir,
    /// The per-peer `hinter.config.json` file
    PeerConfig,
    /// Default data root directory name
    DefaultDataRoot,
}

impl HinterPath {
    /// Get the string representation of the path.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EntriesDir => "entries",
            Self::PeersDir => "peers",
            Self::OutgoingDir => "outgoing",
            Self::PeerConfig => "hinter.config.json",
            Self::DefaultDataRoot => "hinter-core-data",
        }
    }
}

impl AsRef<Path> for HinterPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for HinterPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for HinterPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
