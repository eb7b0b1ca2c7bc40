//! Depth-first directory walker
//!
//! [`walk`] lazily yields every regular file below a directory. Each call
//! starts a fresh traversal. Directory entries are visited in lexical order,
//! so the sequence is deterministic for a given tree.

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Start a fresh recursive traversal of `root`.
///
/// Only regular files are yielded; directories are descended into, never
/// returned. Symbolic links are neither followed nor yielded.
pub fn walk(root: &NormalizedPath) -> Walk {
    Walk {
        stack: vec![Frame::Pending(root.clone())],
    }
}

enum Frame {
    /// A directory that has not been read yet
    Pending(NormalizedPath),
    /// Sorted entries of a directory that was already read, reversed so
    /// `pop` yields them in lexical order
    Listed(Vec<NormalizedPath>),
}

/// Lazy iterator returned by [`walk`].
///
/// Uses an explicit stack of pending directories instead of recursion.
pub struct Walk {
    stack: Vec<Frame>,
}

impl Walk {
    /// Drain the traversal into a vector, stopping at the first error.
    pub fn collect_files(self) -> Result<Vec<NormalizedPath>> {
        self.collect()
    }
}

impl Iterator for Walk {
    type Item = Result<NormalizedPath>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Pending(dir) => match read_sorted(&dir) {
                    Ok(mut entries) => {
                        entries.reverse();
                        self.stack.push(Frame::Listed(entries));
                    }
                    Err(e) => {
                        // Abandon the rest of the traversal after an error
                        self.stack.clear();
                        return Some(Err(e));
                    }
                },
                Frame::Listed(mut entries) => {
                    let Some(entry) = entries.pop() else {
                        continue;
                    };
                    self.stack.push(Frame::Listed(entries));

                    let native = entry.to_native();
                    match fs::symlink_metadata(&native) {
                        Ok(meta) if meta.is_dir() => {
                            self.stack.push(Frame::Pending(entry));
                        }
                        Ok(meta) if meta.is_file() => return Some(Ok(entry)),
                        // Symlinks, sockets and fifos are not reports
                        Ok(_) | Err(_) => {
                            tracing::debug!(path = %entry, "Skipping non-file entry");
                        }
                    }
                }
            }
        }
    }
}

fn read_sorted(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = dir.to_native();
    let mut names = Vec::new();
    for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    names.sort();
    Ok(names.into_iter().map(|name| dir.join(&name)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn relative(root: &NormalizedPath, files: Vec<NormalizedPath>) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().as_str().to_string())
            .collect()
    }

    #[test]
    fn yields_files_depth_first_in_lexical_order() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        fs::create_dir_all(temp.path().join("b/inner")).unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("c.md"), "").unwrap();
        fs::write(temp.path().join("a/1.md"), "").unwrap();
        fs::write(temp.path().join("b/inner/2.md"), "").unwrap();
        fs::write(temp.path().join("b/0.md"), "").unwrap();

        let files = walk(&root).collect_files().unwrap();

        assert_eq!(
            relative(&root, files),
            vec!["a/1.md", "b/0.md", "b/inner/2.md", "c.md"]
        );
    }

    #[test]
    fn empty_directories_yield_nothing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("x/y/z")).unwrap();

        let files = walk(&NormalizedPath::new(temp.path())).collect_files().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = NormalizedPath::new(temp.path().join("nope"));

        let err = walk(&missing).collect_files().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn each_call_restarts_the_traversal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.md"), "").unwrap();
        let root = NormalizedPath::new(temp.path());

        let mut first = walk(&root);
        assert!(first.next().is_some());
        assert!(first.next().is_none());

        assert_eq!(walk(&root).count(), 1);
    }
}
