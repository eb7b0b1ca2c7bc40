//! [`TestDataRoot`] builder for sync and roster test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// A deterministic, valid public key for the `n`th test peer.
pub fn public_key(n: u8) -> String {
    format!("{n:02x}").repeat(32)
}

/// A temporary hinter-core data directory with helpers for setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use hinter_test_utils::TestDataRoot;
///
/// let mut root = TestDataRoot::new();
/// root.add_peer("peer1", &["friends"]);
/// root.write_draft("report.md", "---\nto: [\"peer1\"]\nexcept: []\n---\n# Title");
/// ```
pub struct TestDataRoot {
    temp_dir: TempDir,
    peers: u8,
}

impl Default for TestDataRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDataRoot {
    /// Create an empty data root with `entries/` and `peers/` in place.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("entries")).unwrap();
        fs::create_dir_all(temp_dir.path().join("peers")).unwrap();
        Self { temp_dir, peers: 0 }
    }

    /// Root path of the data directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn entries(&self) -> PathBuf {
        self.root().join("entries")
    }

    pub fn peer_dir(&self, alias: &str) -> PathBuf {
        self.root().join("peers").join(alias)
    }

    pub fn outgoing(&self, alias: &str) -> PathBuf {
        self.peer_dir(alias).join("outgoing")
    }

    /// Create a peer with a fresh key, tagged with `groups`.
    pub fn add_peer(&mut self, alias: &str, groups: &[&str]) -> &mut Self {
        self.peers += 1;
        let mut config = json!({ "publicKey": public_key(self.peers) });
        if !groups.is_empty() {
            config["hinter-cline"] = json!({ "groups": groups });
        }
        let dir = self.peer_dir(alias);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("hinter.config.json"),
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();
        self
    }

    /// Write a draft at `relative` under `entries/`.
    pub fn write_draft(&self, relative: &str, content: &str) -> &Self {
        write_with_parents(&self.entries().join(relative), content.as_bytes());
        self
    }

    /// Write an arbitrary file at `relative` under the data root.
    pub fn write_file(&self, relative: &str, content: &str) -> &Self {
        write_with_parents(&self.root().join(relative), content.as_bytes());
        self
    }

    /// Place a file directly in a peer's outgoing directory.
    pub fn write_outgoing(&self, alias: &str, relative: &str, content: &str) -> &Self {
        write_with_parents(&self.outgoing(alias).join(relative), content.as_bytes());
        self
    }

    /// Read a file from a peer's outgoing directory.
    ///
    /// # Panics
    /// Panics with the path if the file cannot be read.
    pub fn read_outgoing(&self, alias: &str, relative: &str) -> String {
        let path = self.outgoing(alias).join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
    }

    /// Every file under a peer's outgoing directory, relative and sorted.
    pub fn outgoing_files(&self, alias: &str) -> Vec<String> {
        let root = self.outgoing(alias);
        let mut files = Vec::new();
        collect_files(&root, &root, &mut files);
        files.sort();
        files
    }

    /// Parsed `hinter.config.json` of a peer.
    pub fn peer_config(&self, alias: &str) -> serde_json::Value {
        let path = self.peer_dir(alias).join("hinter.config.json");
        let text = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        serde_json::from_str(&text).unwrap()
    }

    /// Assert that `relative` exists in a peer's outgoing directory.
    pub fn assert_outgoing_exists(&self, alias: &str, relative: &str) {
        let path = self.outgoing(alias).join(relative);
        assert!(path.exists(), "Expected {} to exist", path.display());
    }

    /// Assert that `relative` does not exist in a peer's outgoing directory.
    pub fn assert_outgoing_missing(&self, alias: &str, relative: &str) {
        let path = self.outgoing(alias).join(relative);
        assert!(!path.exists(), "Expected {} to be absent", path.display());
    }
}

fn write_with_parents(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let relative = path.strip_prefix(root).unwrap();
            out.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}
