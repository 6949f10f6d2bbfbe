//! Copy command
//!
//! Usage: arsenal-cli copy <ID>

use clap::Args;
use rusqlite::Connection;

use super::CommandResult;
use crate::clipboard::{copy_snippet_code, SystemClipboard};

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Snippet ID
    pub id: i64,
}

/// Execute copy command
pub fn execute(args: CopyArgs, conn: &Connection) -> CommandResult {
    let mut clipboard = SystemClipboard::new()?;
    if copy_snippet_code(conn, args.id, &mut clipboard)? {
        println!("✓ Copied code of snippet #{} to the clipboard", args.id);
    } else {
        println!("Snippet #{} has no code to copy", args.id);
    }
    Ok(())
}
