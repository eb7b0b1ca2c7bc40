//! Sync command implementation

use colored::Colorize;

use hinter_core::{DataRoot, ReportSyncEngine, SyncOptions, SyncOutcome, SyncReport};

use crate::error::Result;

/// Run the sync command
///
/// Prints the actions when previewing, then the one-line summary, then how
/// many writes changed content if not all of them did.
pub fn run_sync(root: &DataRoot, dry_run: bool, json: bool) -> Result<()> {
    let engine = ReportSyncEngine::new(root.clone());
    let outcome = engine.sync(&SyncOptions { dry_run })?;

    if json {
        let report = match &outcome {
            SyncOutcome::Synced(report) => report.clone(),
            SyncOutcome::NoPeers => SyncReport::default(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        SyncOutcome::NoPeers => {
            println!("No peers configured.");
        }
        SyncOutcome::Synced(report) => {
            if dry_run {
                for action in &report.actions {
                    println!("   {} {}", "+".green(), action);
                }
            }
            println!("{}", report.summary());
            if let Some(line) = report.changed_line() {
                println!("{}", line.dimmed());
            }
        }
    }

    Ok(())
}
