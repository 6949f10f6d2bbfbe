//! Delete command
//!
//! Usage: arsenal-cli delete <ID> [--yes]

use arsenal_engine::{apply_engine_command, EngineCommand};
use clap::Args;
use rusqlite::Connection;
use std::io::{BufRead, Write};

use super::show::load_snippet;
use super::CommandResult;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Snippet ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute delete command
pub fn execute(args: DeleteArgs, conn: &mut Connection) -> CommandResult {
    let snippet = load_snippet(conn, args.id)?;

    if !args.yes {
        let prompt = format!("Delete snippet #{} \"{}\"? [y/N] ", snippet.id, snippet.title);
        let stdin = std::io::stdin();
        if !confirm(&prompt, &mut stdin.lock(), &mut std::io::stderr())? {
            println!("Aborted");
            return Ok(());
        }
    }

    apply_engine_command(
        EngineCommand::SnippetDelete {
            snippet_id: args.id,
        },
        conn,
    )?;
    println!("✓ Deleted snippet #{}", args.id);
    Ok(())
}

/// Ask a yes/no question; only `y` or `yes` (any case) confirms
fn confirm(prompt: &str, input: &mut dyn BufRead, output: &mut dyn Write) -> std::io::Result<bool> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
