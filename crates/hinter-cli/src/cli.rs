//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hinter_core::HinterPath;

/// hinter-helper - Manage peers, groups and report drafts for hinter-core
#[derive(Parser, Debug)]
#[command(name = "hinter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// hinter-core data directory
    #[arg(
        long,
        global = true,
        env = "HINTER_DATA_ROOT",
        default_value = HinterPath::DefaultDataRoot.as_str()
    )]
    pub data_root: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run. Without one, the interactive menu opens.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Distribute report drafts to peer outgoing directories
    ///
    /// Every run recomputes the outgoing state from scratch: files no draft
    /// asks for are deleted and empty directories are pruned.
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output the sync report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new report draft
    ///
    /// Examples:
    ///   hinter draft "Weekly notes" --to group:friends --except bob
    ///   hinter draft                  # Prompt for title and recipients
    Draft {
        /// Draft title, also used for the file name
        title: Option<String>,

        /// Recipients (peer alias or group:<name>)
        #[arg(long)]
        to: Vec<String>,

        /// Recipients to leave out
        #[arg(long)]
        except: Vec<String>,
    },

    /// Manage peers
    Peer {
        #[command(subcommand)]
        action: PeerAction,
    },

    /// Manage groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// List the recipient expressions drafts may use
    Recipients,
}

/// Peer actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PeerAction {
    /// List peers with their keys and groups
    List,

    /// Add a peer
    Add {
        /// Alias (lowercase letters, numbers, single hyphens)
        alias: String,
        /// 64 character hex public key
        public_key: String,
    },

    /// Rename a peer
    Rename {
        /// Current alias
        old: String,
        /// New alias
        new: String,
    },

    /// Replace a peer's public key
    SetKey {
        alias: String,
        public_key: String,
    },

    /// Delete a peer and its outgoing directory
    Remove {
        alias: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Group actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GroupAction {
    /// List groups and their members
    List,

    /// Create a group
    Create {
        name: String,
        /// Initial members
        #[arg(required = true)]
        peers: Vec<String>,
    },

    /// Add peers to a group
    Add {
        name: String,
        #[arg(required = true)]
        peers: Vec<String>,
    },

    /// Remove peers from a group
    Remove {
        name: String,
        #[arg(required = true)]
        peers: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["hinter"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_data_root_flag() {
        let cli = Cli::parse_from(["hinter", "--data-root", "/tmp/data", "sync"]);
        assert_eq!(cli.data_root, PathBuf::from("/tmp/data"));
    }

    #[test]
    fn parse_sync_dry_run() {
        let cli = Cli::parse_from(["hinter", "sync", "--dry-run"]);
        assert_eq!(
            cli.command,
            Some(Commands::Sync {
                dry_run: true,
                json: false
            })
        );
    }

    #[test]
    fn parse_draft_with_recipients() {
        let cli = Cli::parse_from([
            "hinter",
            "draft",
            "Weekly notes",
            "--to",
            "group:friends",
            "--to",
            "alice",
            "--except",
            "bob",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Draft {
                title: Some("Weekly notes".into()),
                to: vec!["group:friends".into(), "alice".into()],
                except: vec!["bob".into()],
            })
        );
    }

    #[test]
    fn parse_draft_without_title() {
        let cli = Cli::parse_from(["hinter", "draft"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Draft { title: None, .. })
        ));
    }

    #[test]
    fn parse_peer_remove_yes() {
        let cli = Cli::parse_from(["hinter", "peer", "remove", "alice", "-y"]);
        assert_eq!(
            cli.command,
            Some(Commands::Peer {
                action: PeerAction::Remove {
                    alias: "alice".into(),
                    yes: true
                }
            })
        );
    }

    #[test]
    fn parse_peer_set_key() {
        let cli = Cli::parse_from(["hinter", "peer", "set-key", "alice", "abc"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Peer { action: PeerAction::SetKey { .. } })
        ));
    }

    #[test]
    fn group_create_requires_members() {
        assert!(Cli::try_parse_from(["hinter", "group", "create", "friends"]).is_err());
    }
}
