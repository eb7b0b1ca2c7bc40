//! Peer command implementations

use colored::Colorize;
use dialoguer::Confirm;

use hinter_core::{DataRoot, PeerRoster};

use crate::error::{CliError, Result};

/// List peers with their public keys and groups.
pub fn run_peer_list(root: &DataRoot) -> Result<()> {
    let roster = PeerRoster::new(root.clone());
    let aliases = roster.list_aliases()?;
    if aliases.is_empty() {
        println!("No peers configured.");
        return Ok(());
    }

    for alias in aliases {
        let config = roster.load_config_or_default(&alias)?;
        let groups = if config.groups().is_empty() {
            "(no groups)".dimmed().to_string()
        } else {
            config.groups().join(", ").cyan().to_string()
        };
        println!("{}  {}  {}", alias.bold(), config.public_key.dimmed(), groups);
    }
    Ok(())
}

pub fn run_peer_add(root: &DataRoot, alias: &str, public_key: &str) -> Result<()> {
    PeerRoster::new(root.clone()).add(alias, public_key)?;
    println!("{} Added peer {}", "OK".green().bold(), alias.cyan());
    Ok(())
}

pub fn run_peer_rename(root: &DataRoot, old: &str, new: &str) -> Result<()> {
    PeerRoster::new(root.clone()).rename(old, new)?;
    println!("{} Renamed {} to {}", "OK".green().bold(), old.cyan(), new.cyan());
    Ok(())
}

pub fn run_peer_set_key(root: &DataRoot, alias: &str, public_key: &str) -> Result<()> {
    PeerRoster::new(root.clone()).set_public_key(alias, public_key)?;
    println!("{} Updated public key of {}", "OK".green().bold(), alias.cyan());
    Ok(())
}

/// Delete a peer, asking first unless `yes` is set.
pub fn run_peer_remove(root: &DataRoot, alias: &str, yes: bool) -> Result<()> {
    let roster = PeerRoster::new(root.clone());
    if !roster.exists(alias) {
        return Err(hinter_core::Error::PeerNotFound {
            alias: alias.to_string(),
        }
        .into());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete peer '{alias}' and its outgoing files?"))
            .default(false)
            .interact()?;
        if !confirmed {
            return Err(CliError::user("Peer removal cancelled."));
        }
    }

    roster.remove(alias)?;
    println!("{} Removed peer {}", "OK".green().bold(), alias.cyan());
    Ok(())
}
