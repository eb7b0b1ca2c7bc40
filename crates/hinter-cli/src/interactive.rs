//! Interactive menu and prompts
//!
//! Uses dialoguer for terminal-based interactive selection.

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use hinter_core::{
    ALL_GROUP, DataRoot, DraftAuthor, GroupManager, PeerRoster, is_valid_public_key, is_valid_slug,
};

use crate::commands;
use crate::error::{CliError, Result};

const MENU: &[&str] = &[
    "Create a new report draft",
    "Sync reports",
    "Add a peer",
    "Manage a peer",
    "Add a group",
    "Manage a group",
    "Exit",
];

/// Run the main menu until the user exits.
///
/// Errors from an action are printed and the menu is shown again. Prompt
/// errors end the loop, since they mean the terminal is gone.
pub fn run_menu(root: &DataRoot) -> Result<()> {
    root.ensure()?;

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(MENU)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => interactive_draft(root),
            1 => commands::run_sync(root, false, false),
            2 => add_peer(root),
            3 => manage_peer(root),
            4 => add_group(root),
            5 => manage_group(root),
            _ => return Ok(()),
        };

        match result {
            Err(e @ CliError::Dialoguer(_)) => return Err(e),
            Err(e) => eprintln!("{}: {}", "error".red().bold(), e),
            Ok(()) => {}
        }
    }
}

/// Prompt for a title and recipients, then write the draft.
pub fn interactive_draft(root: &DataRoot) -> Result<()> {
    let title: String = Input::new()
        .with_prompt("Report title")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Title cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let recipients = DraftAuthor::new(root.clone()).available_recipients()?;
    let to = pick_many("Send to (space to toggle, enter to confirm)", &recipients)?;
    let except = pick_many("Except (space to toggle, enter to confirm)", &recipients)?;

    commands::run_draft(root, &title, &to, &except)
}

fn add_peer(root: &DataRoot) -> Result<()> {
    let alias = prompt_slug("Peer alias")?;
    let public_key: String = Input::new()
        .with_prompt("Public key")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if is_valid_public_key(input) {
                Ok(())
            } else {
                Err("Expected 64 lowercase hex characters")
            }
        })
        .interact_text()?;

    commands::run_peer_add(root, &alias, &public_key)
}

fn manage_peer(root: &DataRoot) -> Result<()> {
    let roster = PeerRoster::new(root.clone());
    let aliases = roster.list_aliases()?;
    if aliases.is_empty() {
        println!("No peers configured.");
        return Ok(());
    }

    let alias = &aliases[Select::new()
        .with_prompt("Select a peer")
        .items(&aliases)
        .default(0)
        .interact()?];

    let actions = ["Rename", "Change public key", "Delete", "Back"];
    match Select::new()
        .with_prompt(format!("Manage {alias}"))
        .items(&actions)
        .default(0)
        .interact()?
    {
        0 => {
            let new_alias = prompt_slug("New alias")?;
            commands::run_peer_rename(root, alias, &new_alias)
        }
        1 => {
            let key: String = Input::new().with_prompt("New public key").interact_text()?;
            commands::run_peer_set_key(root, alias, key.trim())
        }
        2 => commands::run_peer_remove(root, alias, false),
        _ => Ok(()),
    }
}

fn add_group(root: &DataRoot) -> Result<()> {
    let aliases = PeerRoster::new(root.clone()).list_aliases()?;
    if aliases.is_empty() {
        println!("No peers configured.");
        return Ok(());
    }

    let name = prompt_slug("Group name")?;
    if name == ALL_GROUP {
        return Err(CliError::user(format!("The group name \"{ALL_GROUP}\" is reserved")));
    }
    let members = pick_many("Members (space to toggle, enter to confirm)", &aliases)?;

    commands::run_group_create(root, &name, &members)
}

fn manage_group(root: &DataRoot) -> Result<()> {
    let manager = GroupManager::new(PeerRoster::new(root.clone()));
    let groups = manager.compute_groups()?;
    let names: Vec<&String> = groups.keys().filter(|g| g.as_str() != ALL_GROUP).collect();
    if names.is_empty() {
        println!("No groups configured.");
        return Ok(());
    }

    let name = names[Select::new()
        .with_prompt("Select a group")
        .items(&names)
        .default(0)
        .interact()?];
    let members = groups.get(name).cloned().unwrap_or_default();

    let actions = ["Add peers", "Remove peers", "Back"];
    match Select::new()
        .with_prompt(format!("Manage group {name}"))
        .items(&actions)
        .default(0)
        .interact()?
    {
        0 => {
            let candidates: Vec<String> = manager
                .roster()
                .list_aliases()?
                .into_iter()
                .filter(|alias| !members.contains(alias))
                .collect();
            if candidates.is_empty() {
                println!("Every peer is already in {name}.");
                return Ok(());
            }
            let chosen = pick_many("Peers to add", &candidates)?;
            if chosen.is_empty() {
                return Ok(());
            }
            commands::run_group_add(root, name, &chosen)
        }
        1 => {
            let chosen = pick_many("Peers to remove", &members)?;
            if chosen.is_empty() {
                return Ok(());
            }
            let emptied = chosen.len() == members.len();
            if emptied
                && !Confirm::new()
                    .with_prompt(format!("This removes every member, deleting {name}. Continue?"))
                    .default(false)
                    .interact()?
            {
                return Ok(());
            }
            commands::run_group_remove(root, name, &chosen)
        }
        _ => Ok(()),
    }
}

fn prompt_slug(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if is_valid_slug(input) {
                Ok(())
            } else {
                Err("Use lowercase letters, numbers, and single hyphens")
            }
        })
        .interact_text()?)
}

fn pick_many(prompt: &str, items: &[String]) -> Result<Vec<String>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let indices = MultiSelect::new().with_prompt(prompt).items(items).interact()?;
    Ok(indices.into_iter().map(|i| items[i].clone()).collect())
}
