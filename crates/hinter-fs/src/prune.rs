//! Empty directory pruning

use std::fs;
use std::path::Path;

use crate::{Error, NormalizedPath, Result};

/// Remove every empty directory below `root`, bottom-up.
///
/// A directory whose only contents were empty directories is itself removed,
/// so pruning cascades upwards. `root` itself is never removed.
///
/// Returns the number of directories removed.
pub fn remove_empty_directories(root: &NormalizedPath) -> Result<usize> {
    prune_children(&root.to_native())
}

fn prune_children(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let child = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&child, e))?;
        if !file_type.is_dir() {
            continue;
        }

        removed += prune_children(&child)?;

        let is_empty = fs::read_dir(&child)
            .map_err(|e| Error::io(&child, e))?
            .next()
            .is_none();
        if is_empty {
            fs::remove_dir(&child).map_err(|e| Error::io(&child, e))?;
            tracing::debug!(path = %child.display(), "Removed empty directory");
            removed += 1;
        }
    }
    Ok(removed)
}
