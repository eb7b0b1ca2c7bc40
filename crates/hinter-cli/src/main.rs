//! hinter-helper CLI
//!
//! Manages the peer roster, groups and report drafts of a hinter-core data
//! directory, and syncs drafts into each peer's outgoing directory.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, GroupAction, PeerAction};
use error::{CliError, Result};
use hinter_core::DataRoot;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let root = DataRoot::new(cli.data_root.as_path());
    tracing::debug!(data_root = %root.path(), "Resolved data root");

    match cli.command {
        Some(cmd) => execute_command(&root, cmd),
        None => interactive::run_menu(&root),
    }
}

/// DEBUG to stderr with `--verbose`, otherwise whatever `RUST_LOG` asks for.
fn init_tracing(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        tracing::subscriber::set_global_default(
            builder.with_env_filter(EnvFilter::from_default_env()).finish(),
        )
    } else {
        return Ok(());
    };

    result.map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

fn execute_command(root: &DataRoot, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync { dry_run, json } => commands::run_sync(root, dry_run, json),
        Commands::Draft { title, to, except } => match title {
            Some(title) => commands::run_draft(root, &title, &to, &except),
            None => interactive::interactive_draft(root),
        },
        Commands::Peer { action } => execute_peer(root, action),
        Commands::Group { action } => execute_group(root, action),
        Commands::Recipients => commands::run_recipients(root),
    }
}

fn execute_peer(root: &DataRoot, action: PeerAction) -> Result<()> {
    match action {
        PeerAction::List => commands::run_peer_list(root),
        PeerAction::Add { alias, public_key } => commands::run_peer_add(root, &alias, &public_key),
        PeerAction::Rename { old, new } => commands::run_peer_rename(root, &old, &new),
        PeerAction::SetKey { alias, public_key } => {
            commands::run_peer_set_key(root, &alias, &public_key)
        }
        PeerAction::Remove { alias, yes } => commands::run_peer_remove(root, &alias, yes),
    }
}

fn execute_group(root: &DataRoot, action: GroupAction) -> Result<()> {
    match action {
        GroupAction::List => commands::run_group_list(root),
        GroupAction::Create { name, peers } => commands::run_group_create(root, &name, &peers),
        GroupAction::Add { name, peers } => commands::run_group_add(root, &name, &peers),
        GroupAction::Remove { name, peers } => commands::run_group_remove(root, &name, &peers),
    }
}
