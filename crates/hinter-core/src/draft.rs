//! Draft authoring

use hinter_content::{render_draft, sanitize_filename};
use hinter_fs::constants::REPORT_EXTENSION;
use hinter_fs::{NormalizedPath, io};

use crate::group::GroupManager;
use crate::peer::PeerRoster;
use crate::recipients::available_recipients;
use crate::{DataRoot, Error, Result};

/// Writes new report drafts into `entries/`.
#[derive(Debug, Clone)]
pub struct DraftAuthor {
    root: DataRoot,
}

impl DraftAuthor {
    pub fn new(root: DataRoot) -> Self {
        Self { root }
    }

    /// Where a draft with this title would be written.
    pub fn draft_path(&self, title: &str) -> NormalizedPath {
        let name = format!("{}.{REPORT_EXTENSION}", sanitize_filename(title));
        self.root.entries_dir().join(&name)
    }

    /// Write a new draft from the template and return its path.
    ///
    /// Recipient expressions are written as given; they are checked when the
    /// draft is synced.
    pub fn create_draft(&self, title: &str, to: &[String], except: &[String]) -> Result<NormalizedPath> {
        if title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        let path = self.draft_path(title);
        if path.exists() {
            return Err(Error::DraftExists {
                path: path.to_native(),
            });
        }

        let content = render_draft(title, to, except)?;
        io::write_text(&path, &content)?;

        tracing::info!(path = %path, "Created report draft");
        Ok(path)
    }

    /// Recipient expressions offered when authoring a draft.
    pub fn available_recipients(&self) -> Result<Vec<String>> {
        let roster = PeerRoster::new(self.root.clone());
        let aliases = roster.list_aliases()?;
        let groups = GroupManager::new(roster).compute_groups()?;
        Ok(available_recipients(&groups, &aliases))
    }
}
