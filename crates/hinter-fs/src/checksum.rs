//! SHA-256 checksums in the canonical `sha256:<hex>` form
//!
//! The sync reconciler compares these before overwriting an outgoing file so
//! it can tell content-changing writes from rewrites of identical bytes.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

const PREFIX: &str = "sha256:";

/// Checksum of an in-memory byte slice.
pub fn compute_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Checksum of a file's current bytes.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    let content = std::fs::read(&native).map_err(|e| Error::io(&native, e))?;
    Ok(compute_checksum(&content))
}

/// Checksum of a file, or `None` when it does not exist.
pub fn existing_file_checksum(path: &NormalizedPath) -> Result<Option<String>> {
    match compute_file_checksum(path) {
        Ok(sum) => Ok(Some(sum)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_value() {
        assert_eq!(
            compute_checksum(b"hello world"),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn file_and_content_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("a.md"));
        std::fs::write(path.to_native(), "# Title").unwrap();

        assert_eq!(
            compute_file_checksum(&path).unwrap(),
            compute_checksum(b"# Title")
        );
    }

    #[test]
    fn missing_file_has_no_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("missing.md"));
        assert_eq!(existing_file_checksum(&path).unwrap(), None);
    }
}
