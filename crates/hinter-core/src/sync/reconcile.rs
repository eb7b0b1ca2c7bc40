//! Applies a peer's desired files to its outgoing directory

use std::collections::BTreeSet;

use hinter_fs::checksum::{compute_checksum, compute_file_checksum, existing_file_checksum};
use hinter_fs::{NormalizedPath, io, remove_empty_directories, walk};

use crate::Result;
use crate::manifest::{ContentSource, PeerFiles};

/// Counts and actions for one peer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerReconciliation {
    pub written: usize,
    pub removed: usize,
    pub changed: usize,
    pub actions: Vec<String>,
}

/// Makes an outgoing directory hold exactly the desired files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    dry_run: bool,
}

impl Reconciler {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Reconcile one outgoing directory.
    ///
    /// Obsolete files are deleted first, then every desired file is written
    /// whether or not its content changed, then empty directories are pruned.
    /// Pruning also runs between the two passes so a destination that used
    /// to be a directory can become a file.
    pub fn reconcile(&self, outgoing: &NormalizedPath, desired: &PeerFiles) -> Result<PeerReconciliation> {
        let mut result = PeerReconciliation::default();

        if !self.dry_run {
            io::ensure_dir(outgoing)?;
        }

        for relative in self.existing_files(outgoing)? {
            if desired.contains_key(&relative) {
                continue;
            }
            let path = outgoing.join(&relative);
            if self.dry_run {
                result.actions.push(format!("[dry-run] Would remove {path}"));
            } else {
                io::remove_file(&path)?;
                result.actions.push(format!("Removed {path}"));
            }
            result.removed += 1;
        }

        let mut pruned = 0;
        if !self.dry_run {
            pruned += remove_empty_directories(outgoing)?;
        }

        for (relative, source) in desired {
            let path = outgoing.join(relative);
            if self.content_changes(&path, source)? {
                result.changed += 1;
            }

            if self.dry_run {
                result.actions.push(format!("[dry-run] Would write {path}"));
            } else {
                match source {
                    ContentSource::Inline(text) => io::write_text(&path, text)?,
                    ContentSource::File(from) => io::copy_file(from, &path)?,
                }
                result.actions.push(format!("Wrote {path}"));
            }
            result.written += 1;
        }

        if !self.dry_run {
            pruned += remove_empty_directories(outgoing)?;
            if pruned > 0 {
                result.actions.push(format!("Pruned {pruned} empty directories under {outgoing}"));
            }
        }

        Ok(result)
    }

    /// Files currently in the outgoing directory, relative to it.
    fn existing_files(&self, outgoing: &NormalizedPath) -> Result<BTreeSet<String>> {
        // Only reachable in dry-run mode, where the directory is not created
        if !outgoing.is_dir() {
            return Ok(BTreeSet::new());
        }

        let mut files = BTreeSet::new();
        for entry in walk(outgoing) {
            let path = entry?;
            if let Some(relative) = path.strip_prefix(outgoing) {
                files.insert(relative.as_str().to_string());
            }
        }
        Ok(files)
    }

    fn content_changes(&self, path: &NormalizedPath, source: &ContentSource) -> Result<bool> {
        // A directory still standing in the way, as seen by a dry run
        if path.is_dir() {
            return Ok(true);
        }
        let Some(current) = existing_file_checksum(path)? else {
            return Ok(true);
        };
        let incoming = match source {
            ContentSource::Inline(text) => compute_checksum(text.as_bytes()),
            ContentSource::File(from) => compute_file_checksum(from)?,
        };
        Ok(current != incoming)
    }
}
