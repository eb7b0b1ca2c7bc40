//! Data root layout
//!
//! ```text
//! <root>/
//!   entries/**/*.md                      report drafts
//!   peers/<alias>/hinter.config.json     peer config
//!   peers/<alias>/outgoing/**            managed by sync
//! ```

use hinter_fs::{HinterPath, NormalizedPath, io};

use crate::Result;

/// Resolves the well-known locations inside a hinter-core data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRoot {
    root: NormalizedPath,
}

impl DataRoot {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn entries_dir(&self) -> NormalizedPath {
        self.root.join(HinterPath::EntriesDir.as_str())
    }

    pub fn peers_dir(&self) -> NormalizedPath {
        self.root.join(HinterPath::PeersDir.as_str())
    }

    /// Root directory of one peer.
    pub fn peer_dir(&self, alias: &str) -> NormalizedPath {
        self.peers_dir().join(alias)
    }

    pub fn peer_config_path(&self, alias: &str) -> NormalizedPath {
        self.peer_dir(alias).join(HinterPath::PeerConfig.as_str())
    }

    /// The directory sync reconciles for one peer.
    pub fn outgoing_dir(&self, alias: &str) -> NormalizedPath {
        self.peer_dir(alias).join(HinterPath::OutgoingDir.as_str())
    }

    /// Create `entries/` and `peers/` if they are missing.
    pub fn ensure(&self) -> Result<()> {
        io::ensure_dir(&self.entries_dir())?;
        io::ensure_dir(&self.peers_dir())?;
        Ok(())
    }
}
