//! Peer roster
//!
//! Every directory under `peers/` is a peer; its name is the alias. The peer's
//! public key and group memberships live in `hinter.config.json`.

use std::fs;

use hinter_fs::{ConfigStore, Error as FsError, NormalizedPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::{is_valid_public_key, is_valid_slug};
use crate::{DataRoot, Error, Result};

/// Contents of `hinter.config.json`.
///
/// Keys this tool does not know about are kept and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerConfig {
    #[serde(rename = "publicKey", default)]
    pub public_key: String,

    /// Settings owned by this helper, namespaced so hinter-core ignores them
    #[serde(
        rename = "hinter-cline",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cline: Option<ClineSettings>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `hinter-cline` section of a peer config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClineSettings {
    #[serde(default)]
    pub groups: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PeerConfig {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            ..Self::default()
        }
    }

    /// Groups this peer is tagged with.
    pub fn groups(&self) -> &[String] {
        self.cline.as_ref().map_or(&[], |c| c.groups.as_slice())
    }

    /// Tag the peer with `group`. Returns false if it already was.
    pub fn add_group(&mut self, group: &str) -> bool {
        let groups = &mut self.cline.get_or_insert_with(ClineSettings::default).groups;
        if groups.iter().any(|g| g == group) {
            return false;
        }
        groups.push(group.to_string());
        true
    }

    /// Remove the `group` tag. Returns false if the peer did not have it.
    pub fn remove_group(&mut self, group: &str) -> bool {
        let Some(cline) = self.cline.as_mut() else {
            return false;
        };
        let before = cline.groups.len();
        cline.groups.retain(|g| g != group);
        cline.groups.len() != before
    }
}

/// Reads and edits the peers of one data root.
#[derive(Debug, Clone)]
pub struct PeerRoster {
    root: DataRoot,
    store: ConfigStore,
}

impl PeerRoster {
    pub fn new(root: DataRoot) -> Self {
        Self {
            root,
            store: ConfigStore::new(),
        }
    }

    /// Aliases of all peers, sorted. A missing `peers/` directory means none.
    pub fn list_aliases(&self) -> Result<Vec<String>> {
        let peers_dir = self.root.peers_dir().to_native();
        let entries = match fs::read_dir(&peers_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FsError::io(&peers_dir, e).into()),
        };

        let mut aliases = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::io(&peers_dir, e))?;
            let file_type = entry.file_type().map_err(|e| FsError::io(entry.path(), e))?;
            if file_type.is_dir() {
                aliases.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        aliases.sort();
        Ok(aliases)
    }

    pub fn exists(&self, alias: &str) -> bool {
        self.root.peer_dir(alias).is_dir()
    }

    /// Directory of one peer.
    pub fn peer_path(&self, alias: &str) -> NormalizedPath {
        self.root.peer_dir(alias)
    }

    /// Directory sync reconciles for one peer.
    pub fn outgoing_path(&self, alias: &str) -> NormalizedPath {
        self.root.outgoing_dir(alias)
    }

    pub fn config_path(&self, alias: &str) -> NormalizedPath {
        self.root.peer_config_path(alias)
    }

    pub fn load_config(&self, alias: &str) -> Result<PeerConfig> {
        Ok(self.store.load(&self.root.peer_config_path(alias))?)
    }

    /// Like [`PeerRoster::load_config`], but a peer without a config file
    /// reads as an empty config.
    pub fn load_config_or_default(&self, alias: &str) -> Result<PeerConfig> {
        match self.store.load(&self.root.peer_config_path(alias)) {
            Ok(config) => Ok(config),
            Err(e) if e.is_not_found() => {
                tracing::debug!(alias, "Peer has no config file");
                Ok(PeerConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_config(&self, alias: &str, config: &PeerConfig) -> Result<()> {
        Ok(self.store.save(&self.root.peer_config_path(alias), config)?)
    }

    /// Register a new peer.
    pub fn add(&self, alias: &str, public_key: &str) -> Result<()> {
        if !is_valid_slug(alias) {
            return Err(Error::InvalidAlias {
                alias: alias.to_string(),
            });
        }
        if self.exists(alias) {
            return Err(Error::PeerExists {
                alias: alias.to_string(),
            });
        }
        if !is_valid_public_key(public_key) {
            return Err(Error::InvalidPublicKey);
        }
        self.ensure_key_unused(public_key, None)?;

        let peer_dir = self.root.peer_dir(alias).to_native();
        fs::create_dir_all(&peer_dir).map_err(|e| FsError::io(&peer_dir, e))?;
        self.save_config(alias, &PeerConfig::new(public_key))?;

        tracing::info!(alias, "Added peer");
        Ok(())
    }

    /// Change a peer's alias by renaming its directory.
    pub fn rename(&self, alias: &str, new_alias: &str) -> Result<()> {
        self.require(alias)?;
        if !is_valid_slug(new_alias) {
            return Err(Error::InvalidAlias {
                alias: new_alias.to_string(),
            });
        }
        if self.exists(new_alias) {
            return Err(Error::PeerExists {
                alias: new_alias.to_string(),
            });
        }

        let from = self.root.peer_dir(alias).to_native();
        let to = self.root.peer_dir(new_alias).to_native();
        fs::rename(&from, &to).map_err(|e| FsError::io(&from, e))?;

        tracing::info!(from = alias, to = new_alias, "Renamed peer");
        Ok(())
    }

    /// Replace a peer's public key, keeping the rest of its config.
    pub fn set_public_key(&self, alias: &str, public_key: &str) -> Result<()> {
        self.require(alias)?;
        if !is_valid_public_key(public_key) {
            return Err(Error::InvalidPublicKey);
        }
        self.ensure_key_unused(public_key, Some(alias))?;

        let mut config = self.load_config_or_default(alias)?;
        config.public_key = public_key.to_string();
        self.save_config(alias, &config)?;

        tracing::info!(alias, "Updated public key");
        Ok(())
    }

    /// Delete a peer and everything under its directory.
    pub fn remove(&self, alias: &str) -> Result<()> {
        self.require(alias)?;
        let peer_dir = self.root.peer_dir(alias).to_native();
        fs::remove_dir_all(&peer_dir).map_err(|e| FsError::io(&peer_dir, e))?;

        tracing::info!(alias, "Removed peer");
        Ok(())
    }

    fn require(&self, alias: &str) -> Result<()> {
        if self.exists(alias) {
            Ok(())
        } else {
            Err(Error::PeerNotFound {
                alias: alias.to_string(),
            })
        }
    }

    fn ensure_key_unused(&self, public_key: &str, skip: Option<&str>) -> Result<()> {
        for peer in self.list_aliases()? {
            if Some(peer.as_str()) == skip {
                continue;
            }
            if self.load_config_or_default(&peer)?.public_key == public_key {
                return Err(Error::PublicKeyInUse { peer });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn config_round_trips_unknown_keys() {
        let raw = json!({
            "publicKey": "k",
            "hinter-cline": { "groups": ["friends"], "color": "blue" },
            "other-tool": { "x": 1 }
        });
        let config: PeerConfig = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(config.groups(), ["friends".to_string()]);
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }

    #[test]
    fn config_without_namespace_has_no_groups() {
        let config: PeerConfig = serde_json::from_value(json!({ "publicKey": "k" })).unwrap();
        assert!(config.groups().is_empty());
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "publicKey": "k" })
        );
    }

    #[test]
    fn group_tags_are_unique() {
        let mut config = PeerConfig::new("k");
        assert!(config.add_group("friends"));
        assert!(!config.add_group("friends"));
        assert!(config.remove_group("friends"));
        assert!(!config.remove_group("friends"));
        assert!(config.groups().is_empty());
    }
}
