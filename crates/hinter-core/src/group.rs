//! Peer groups
//!
//! Groups are not stored on their own. A peer belongs to a group when its
//! config carries the group name under `hinter-cline.groups`, and the group
//! table is rebuilt from the roster whenever it is needed.

use std::collections::BTreeMap;

use crate::peer::PeerRoster;
use crate::validation::is_valid_slug;
use crate::{Error, Result};

/// The implicit group holding every peer.
pub const ALL_GROUP: &str = "all";

/// Prefix that marks a recipient expression as a group reference.
pub const GROUP_PREFIX: &str = "group:";

/// Group name to member aliases. Members follow roster order.
pub type Groups = BTreeMap<String, Vec<String>>;

/// Computes and edits group membership over a [`PeerRoster`].
#[derive(Debug, Clone)]
pub struct GroupManager {
    roster: PeerRoster,
}

impl GroupManager {
    pub fn new(roster: PeerRoster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &PeerRoster {
        &self.roster
    }

    /// Build the group table, including `all`.
    pub fn compute_groups(&self) -> Result<Groups> {
        let aliases = self.roster.list_aliases()?;
        let mut groups = Groups::new();
        groups.insert(ALL_GROUP.to_string(), aliases.clone());

        for alias in &aliases {
            let config = self.roster.load_config_or_default(alias)?;
            for group in config.groups() {
                if group == ALL_GROUP {
                    continue;
                }
                let members = groups.entry(group.clone()).or_default();
                if !members.contains(alias) {
                    members.push(alias.clone());
                }
            }
        }

        tracing::debug!(count = groups.len(), "Computed groups");
        Ok(groups)
    }

    /// Create a new group from a non-empty member list.
    pub fn create_group(&self, group: &str, aliases: &[String]) -> Result<usize> {
        check_group_name(group)?;
        if self.compute_groups()?.contains_key(group) {
            return Err(Error::GroupExists(group.to_string()));
        }
        if aliases.is_empty() {
            return Err(Error::EmptyGroup);
        }
        self.add_members(group, aliases)
    }

    /// Tag each peer in `aliases` with `group`.
    ///
    /// Returns how many peer configs changed. Every alias is checked before
    /// any config is written.
    pub fn add_members(&self, group: &str, aliases: &[String]) -> Result<usize> {
        check_group_name(group)?;
        self.require_peers(aliases)?;

        let mut changed = 0;
        for alias in aliases {
            let mut config = self.roster.load_config_or_default(alias)?;
            if config.add_group(group) {
                self.roster.save_config(alias, &config)?;
                changed += 1;
            }
        }

        tracing::info!(group, changed, "Added group members");
        Ok(changed)
    }

    /// Remove the `group` tag from each peer in `aliases`.
    ///
    /// Returns how many peer configs changed.
    pub fn remove_members(&self, group: &str, aliases: &[String]) -> Result<usize> {
        if group == ALL_GROUP {
            return Err(Error::ReservedGroup(group.to_string()));
        }
        if !self.compute_groups()?.contains_key(group) {
            return Err(Error::GroupNotFound(group.to_string()));
        }
        self.require_peers(aliases)?;

        let mut changed = 0;
        for alias in aliases {
            let mut config = self.roster.load_config_or_default(alias)?;
            if config.remove_group(group) {
                self.roster.save_config(alias, &config)?;
                changed += 1;
            }
        }

        tracing::info!(group, changed, "Removed group members");
        Ok(changed)
    }

    fn require_peers(&self, aliases: &[String]) -> Result<()> {
        for alias in aliases {
            if !self.roster.exists(alias) {
                return Err(Error::PeerNotFound {
                    alias: alias.clone(),
                });
            }
        }
        Ok(())
    }
}

fn check_group_name(group: &str) -> Result<()> {
    if group == ALL_GROUP {
        return Err(Error::ReservedGroup(group.to_string()));
    }
    if !is_valid_slug(group) {
        return Err(Error::InvalidAlias {
            alias: group.to_string(),
        });
    }
    Ok(())
}
