//! Draft and recipient command implementations

use colored::Colorize;

use hinter_core::{DataRoot, DraftAuthor};

use crate::error::Result;

/// Write a new draft and print where it went.
pub fn run_draft(root: &DataRoot, title: &str, to: &[String], except: &[String]) -> Result<()> {
    let path = DraftAuthor::new(root.clone()).create_draft(title, to, except)?;
    println!("{} Created report draft {}", "OK".green().bold(), path.as_str().cyan());
    Ok(())
}

/// Print every recipient expression, one per line.
pub fn run_recipients(root: &DataRoot) -> Result<()> {
    for recipient in DraftAuthor::new(root.clone()).available_recipients()? {
        println!("{recipient}");
    }
    Ok(())
}
