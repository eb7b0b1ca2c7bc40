//! Group command implementations

use colored::Colorize;

use hinter_core::{DataRoot, GroupManager, PeerRoster};

use crate::error::Result;

fn manager(root: &DataRoot) -> GroupManager {
    GroupManager::new(PeerRoster::new(root.clone()))
}

/// List every group, `all` included, with its members.
pub fn run_group_list(root: &DataRoot) -> Result<()> {
    for (group, members) in manager(root).compute_groups()? {
        let members = if members.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            members.join(", ")
        };
        println!("{}: {}", group.bold(), members);
    }
    Ok(())
}

pub fn run_group_create(root: &DataRoot, name: &str, peers: &[String]) -> Result<()> {
    manager(root).create_group(name, peers)?;
    println!(
        "{} Created group {} with {}",
        "OK".green().bold(),
        name.cyan(),
        peers.join(", ")
    );
    Ok(())
}

pub fn run_group_add(root: &DataRoot, name: &str, peers: &[String]) -> Result<()> {
    let changed = manager(root).add_members(name, peers)?;
    println!(
        "{} Added {} peer(s) to {}",
        "OK".green().bold(),
        changed,
        name.cyan()
    );
    Ok(())
}

pub fn run_group_remove(root: &DataRoot, name: &str, peers: &[String]) -> Result<()> {
    let changed = manager(root).remove_members(name, peers)?;
    println!(
        "{} Removed {} peer(s) from {}",
        "OK".green().bold(),
        changed,
        name.cyan()
    );
    Ok(())
}
