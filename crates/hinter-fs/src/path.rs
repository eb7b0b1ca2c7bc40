//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Construction also resolves `.` and `..` segments lexically and collapses
/// repeated separators, so two spellings of the same location compare equal.
/// Nothing here touches the filesystem except the explicit `exists`/`is_*`
/// probes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    ///
    /// `..` segments in `segment` are resolved against `self`, so the result
    /// may climb above it. Use [`NormalizedPath::escapes_root`] on relative
    /// paths to reject that.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) if idx > 0 => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        match self.inner.rsplit('/').next() {
            Some("") | Some(".") | Some("..") | None => None,
            Some(name) => Some(name),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Express this path relative to `base`.
    ///
    /// Returns `None` when `self` is not strictly below `base`.
    pub fn strip_prefix(&self, base: &NormalizedPath) -> Option<Self> {
        let prefix = if base.inner.ends_with('/') {
            base.inner.clone()
        } else {
            format!("{}/", base.inner)
        };
        self.inner
            .strip_prefix(&prefix)
            .filter(|rest| !rest.is_empty())
            .map(|rest| Self {
                inner: rest.to_string(),
            })
    }

    /// Whether the path starts at a filesystem root.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || Path::new(&self.inner).is_absolute()
    }

    /// Whether a relative path leaves the directory it is relative to.
    ///
    /// True for `.`, for anything beginning with `..`, and for absolute paths.
    pub fn escapes_root(&self) -> bool {
        self.is_absolute()
            || self.inner == "."
            || self.inner == ".."
            || self.inner.starts_with("../")
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// Lexically resolve `.`, `..` and empty segments.
fn clean(raw: &str) -> String {
    let absolute = raw.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a/b/c", "a/b/c")]
    #[case("a//b/", "a/b")]
    #[case("./a/./b", "a/b")]
    #[case("a/../b", "b")]
    #[case("../a", "../a")]
    #[case("a/..", ".")]
    #[case("/a/../../b", "/b")]
    #[case("a\\b\\c", "a/b/c")]
    fn cleans_segments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NormalizedPath::new(input).as_str(), expected);
    }

    #[test]
    fn join_resolves_parent_segments() {
        let base = NormalizedPath::new("/data/entries/reports");
        assert_eq!(base.join("../shared/a.txt").as_str(), "/data/entries/shared/a.txt");
    }

    #[test]
    fn strip_prefix_yields_relative_path() {
        let base = NormalizedPath::new("/data/peers/alice/outgoing");
        let file = NormalizedPath::new("/data/peers/alice/outgoing/sub/a.md");
        assert_eq!(file.strip_prefix(&base).unwrap().as_str(), "sub/a.md");
        assert!(base.strip_prefix(&base).is_none());
        assert!(
            NormalizedPath::new("/data/peers/alice/outgoing2/a.md")
                .strip_prefix(&base)
                .is_none()
        );
    }

    #[test]
    fn parent_and_file_name() {
        let path = NormalizedPath::new("/a/b.md");
        assert_eq!(path.parent().unwrap().as_str(), "/a");
        assert_eq!(path.file_name(), Some("b.md"));
        assert_eq!(path.extension(), Some("md"));
        assert_eq!(NormalizedPath::new("/a").parent().unwrap().as_str(), "/");
        assert!(NormalizedPath::new("a").parent().is_none());
        assert_eq!(NormalizedPath::new(".hidden").extension(), None);
    }

    #[rstest]
    #[case("report.md", false)]
    #[case("sub/../report.md", false)]
    #[case("../report.md", true)]
    #[case("a/..", true)]
    #[case("/etc/passwd", true)]
    fn escapes_root(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(NormalizedPath::new(input).escapes_root(), expected);
    }
}
