//! ReportSyncEngine implementation
//!
//! Builds the desired manifest from the report drafts, then reconciles each
//! peer's outgoing directory against it, one peer at a time.

use serde::Serialize;

use crate::Result;
use crate::group::GroupManager;
use crate::layout::DataRoot;
use crate::manifest::ManifestBuilder;
use crate::peer::PeerRoster;

use super::reconcile::Reconciler;

/// Report from a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Files written, whether or not their content changed
    pub written: usize,
    /// Obsolete files deleted
    pub removed: usize,
    /// Writes that changed a file's content
    pub changed: usize,
    /// Peers reconciled
    pub peers: usize,
    /// Actions taken, in order
    pub actions: Vec<String>,
}

impl SyncReport {
    /// The one-line summary printed after a sync.
    pub fn summary(&self) -> String {
        format!(
            "Finished. Synced {} reports and removed {} obsolete reports.",
            self.written, self.removed
        )
    }

    /// How many writes changed content, when that differs from `written`.
    pub fn changed_line(&self) -> Option<String> {
        (self.changed != self.written).then(|| {
            format!("{} of {} written reports changed content.", self.changed, self.written)
        })
    }
}

/// Result of [`ReportSyncEngine::sync`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The roster is empty, nothing was read or written
    NoPeers,
    Synced(SyncReport),
}

/// Options for sync operations
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, simulate changes without modifying the filesystem.
    /// Actions will be prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
}

/// Distributes report drafts to peer outgoing directories
#[derive(Debug, Clone)]
pub struct ReportSyncEngine {
    root: DataRoot,
}

impl ReportSyncEngine {
    pub fn new(root: DataRoot) -> Self {
        Self { root }
    }

    /// Run a full sync.
    ///
    /// # Errors
    ///
    /// Any invalid draft aborts the run before a single outgoing file is
    /// touched. Filesystem errors during reconciliation abort at the peer
    /// where they happen.
    pub fn sync(&self, options: &SyncOptions) -> Result<SyncOutcome> {
        let roster = PeerRoster::new(self.root.clone());
        let aliases = roster.list_aliases()?;
        if aliases.is_empty() {
            tracing::info!("No peers configured");
            return Ok(SyncOutcome::NoPeers);
        }

        let groups = GroupManager::new(roster.clone()).compute_groups()?;
        let manifest = ManifestBuilder::new(self.root.entries_dir(), &aliases, &groups).build()?;
        tracing::debug!(entries = manifest.len(), "Built desired manifest");

        let reconciler = Reconciler::new(options.dry_run);
        let mut report = SyncReport::default();

        for alias in &aliases {
            let Some(files) = manifest.files_for(alias) else {
                continue;
            };
            let outgoing = roster.outgoing_path(alias);
            let peer = reconciler.reconcile(&outgoing, files)?;
            tracing::debug!(
                peer = %alias,
                written = peer.written,
                removed = peer.removed,
                changed = peer.changed,
                "Reconciled outgoing directory"
            );

            report.written += peer.written;
            report.removed += peer.removed;
            report.changed += peer.changed;
            report.peers += 1;
            report.actions.extend(peer.actions);
        }

        tracing::info!(
            written = report.written,
            removed = report.removed,
            changed = report.changed,
            dry_run = options.dry_run,
            "Sync finished"
        );
        Ok(SyncOutcome::Synced(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_line_only_when_some_writes_were_unchanged() {
        let all_changed = SyncReport {
            written: 2,
            changed: 2,
            ..SyncReport::default()
        };
        let one_changed = SyncReport {
            written: 2,
            changed: 1,
            ..SyncReport::default()
        };

        assert_eq!(all_changed.changed_line(), None);
        assert_eq!(
            one_changed.changed_line().as_deref(),
            Some("1 of 2 written reports changed content.")
        );
    }

    #[test]
    fn summary_line() {
        let report = SyncReport {
            written: 3,
            removed: 1,
            ..SyncReport::default()
        };
        assert_eq!(
            report.summary(),
            "Finished. Synced 3 reports and removed 1 obsolete reports."
        );
    }

    #[test]
    fn empty_data_root_has_no_peers() {
        let temp = tempfile::TempDir::new().unwrap();
        let engine = ReportSyncEngine::new(DataRoot::new(temp.path()));

        let outcome = engine.sync(&SyncOptions::default()).unwrap();

        assert_eq!(outcome, SyncOutcome::NoPeers);
    }
}
