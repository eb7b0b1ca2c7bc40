//! Desired outgoing state
//!
//! The [`ManifestBuilder`] reads every report draft under `entries/` and
//! works out which files each peer's outgoing directory should contain. The
//! result is a [`DesiredManifest`] that the reconciler applies.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use hinter_content::{Extracted, ReportFrontmatter, extract};
use hinter_fs::constants::REPORT_EXTENSION;
use hinter_fs::{NormalizedPath, io, walk};

use crate::group::Groups;
use crate::recipients::resolve_recipients;
use crate::{Error, Result};

/// What to place at one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// The body of the draft, written verbatim
    Inline(String),
    /// A file whose bytes are copied verbatim
    File(NormalizedPath),
}

/// Destination path (relative to the outgoing directory) to its content.
pub type PeerFiles = BTreeMap<String, ContentSource>;

/// Desired outgoing files of every peer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredManifest {
    peers: BTreeMap<String, PeerFiles>,
}

impl DesiredManifest {
    /// An empty manifest with a slot for each alias.
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            peers: aliases
                .into_iter()
                .map(|alias| (alias.into(), PeerFiles::new()))
                .collect(),
        }
    }

    /// Files wanted for one peer.
    pub fn files_for(&self, alias: &str) -> Option<&PeerFiles> {
        self.peers.get(alias)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.peers.keys().map(String::as_str)
    }

    /// Total number of entries across all peers.
    pub fn len(&self) -> usize {
        self.peers.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an entry, returning whatever it replaced.
    pub fn insert(
        &mut self,
        alias: &str,
        destination: String,
        source: ContentSource,
    ) -> Option<ContentSource> {
        self.peers
            .entry(alias.to_string())
            .or_default()
            .insert(destination, source)
    }
}

/// Builds a [`DesiredManifest`] from the drafts under an entries directory.
#[derive(Debug)]
pub struct ManifestBuilder<'a> {
    entries_dir: NormalizedPath,
    aliases: &'a [String],
    known_peers: BTreeSet<String>,
    groups: &'a Groups,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(entries_dir: NormalizedPath, aliases: &'a [String], groups: &'a Groups) -> Self {
        Self {
            entries_dir,
            aliases,
            known_peers: aliases.iter().cloned().collect(),
            groups,
        }
    }

    /// Process every draft, in walk order.
    ///
    /// The first bad draft aborts the build; no partial manifest is returned.
    /// A missing entries directory is an error too.
    pub fn build(&self) -> Result<DesiredManifest> {
        let mut state = BuildState {
            manifest: DesiredManifest::new(self.aliases.iter().cloned()),
            owners: BTreeMap::new(),
        };

        for entry in walk(&self.entries_dir) {
            let path = entry?;
            if path.extension() != Some(REPORT_EXTENSION) {
                continue;
            }
            self.process_draft(&path, &mut state)?;
        }

        Ok(state.manifest)
    }

    fn process_draft(&self, draft: &NormalizedPath, state: &mut BuildState) -> Result<()> {
        let text = io::read_text(draft)?;
        let (frontmatter, body) = match extract(&text) {
            Extracted::Absent { .. } => {
                tracing::debug!(draft = %draft, "Skipping draft without frontmatter");
                return Ok(());
            }
            Extracted::Invalid { message } => {
                return Err(Error::DraftParse {
                    draft: draft.to_native(),
                    message,
                });
            }
            Extracted::Parsed { frontmatter, body } => (frontmatter, body),
        };

        let header = ReportFrontmatter::from_value(frontmatter).map_err(|source| {
            Error::DraftInvalid {
                draft: draft.to_native(),
                source,
            }
        })?;

        let recipients = resolve_recipients(&header.to, &header.except, self.groups, &self.known_peers)
            .map_err(|source| Error::InvalidRecipient {
                draft: draft.to_native(),
                source,
            })?;

        let entries = self.draft_entries(draft, &header, body)?;
        tracing::debug!(
            draft = %draft,
            recipients = recipients.len(),
            files = entries.len(),
            "Resolved draft"
        );

        for alias in &recipients {
            for (destination, source) in &entries {
                state.insert(alias, destination, source.clone(), draft);
            }
        }
        Ok(())
    }

    /// Destination keys and content for one draft, before fan-out to peers.
    fn draft_entries(
        &self,
        draft: &NormalizedPath,
        header: &ReportFrontmatter,
        body: String,
    ) -> Result<Vec<(String, ContentSource)>> {
        let explicit = header
            .destination_path()
            .map(|dest| checked_destination(NormalizedPath::new(dest), draft))
            .transpose()?;

        let Some(source_path) = header.source_path() else {
            let destination = match explicit {
                Some(dest) => dest,
                None => self.relative_to_entries(draft)?,
            };
            return Ok(vec![(destination, ContentSource::Inline(body))]);
        };

        let source = resolve_source(draft, source_path);
        let metadata = fs::metadata(source.to_native()).map_err(|e| Error::SourceInaccessible {
            path: source.to_native(),
            draft: draft.to_native(),
            source: e,
        })?;

        let destination = match explicit {
            Some(dest) => dest,
            None => {
                let name = source.file_name().ok_or_else(|| Error::DestinationOutsideOutgoing {
                    destination: source.to_string(),
                    draft: draft.to_native(),
                })?;
                checked_destination(NormalizedPath::new(name), draft)?
            }
        };

        if !metadata.is_dir() {
            return Ok(vec![(destination, ContentSource::File(source))]);
        }

        let base = NormalizedPath::new(&destination);
        let mut entries = Vec::new();
        for file in walk(&source) {
            let file = file?;
            let Some(relative) = file.strip_prefix(&source) else {
                continue;
            };
            let key = base.join(relative.as_str());
            entries.push((key.as_str().to_string(), ContentSource::File(file)));
        }
        Ok(entries)
    }

    fn relative_to_entries(&self, draft: &NormalizedPath) -> Result<String> {
        draft
            .strip_prefix(&self.entries_dir)
            .map(|relative| relative.as_str().to_string())
            .ok_or_else(|| Error::DestinationOutsideOutgoing {
                destination: draft.to_string(),
                draft: draft.to_native(),
            })
    }
}

struct BuildState {
    manifest: DesiredManifest,
    /// Which draft produced each (alias, destination) entry
    owners: BTreeMap<(String, String), NormalizedPath>,
}

impl BuildState {
    fn insert(&mut self, alias: &str, destination: &str, source: ContentSource, draft: &NormalizedPath) {
        let owner_key = (alias.to_string(), destination.to_string());
        if let Some(previous) = self.owners.get(&owner_key)
            && previous != draft
        {
            tracing::warn!(
                peer = alias,
                destination,
                previous = %previous,
                draft = %draft,
                "Destination claimed by more than one draft, last one wins"
            );
        }
        self.owners.insert(owner_key, draft.clone());
        self.manifest.insert(alias, destination.to_string(), source);
    }
}

/// `sourcePath` is relative to the draft's directory unless absolute.
fn resolve_source(draft: &NormalizedPath, source_path: &str) -> NormalizedPath {
    let candidate = NormalizedPath::new(source_path);
    if candidate.is_absolute() {
        return candidate;
    }
    match draft.parent() {
        Some(dir) => dir.join(source_path),
        None => candidate,
    }
}

fn checked_destination(destination: NormalizedPath, draft: &NormalizedPath) -> Result<String> {
    if destination.escapes_root() {
        return Err(Error::DestinationOutsideOutgoing {
            destination: destination.to_string(),
            draft: draft.to_native(),
        });
    }
    Ok(destination.as_str().to_string())
}
