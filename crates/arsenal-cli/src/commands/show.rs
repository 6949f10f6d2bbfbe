//! Show command
//!
//! Usage: arsenal-cli show <ID> [--json]

use arsenal_core::model::Snippet;
use arsenal_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use clap::Args;
use rusqlite::Connection;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Snippet ID
    pub id: i64,

    /// Print the snippet as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute show command
pub fn execute(args: ShowArgs, conn: &Connection) -> CommandResult {
    let snippet = load_snippet(conn, args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snippet)?);
    } else {
        print!("{}", render_snippet(&snippet));
    }
    Ok(())
}

/// Fetch a snippet through the engine
pub fn load_snippet(
    conn: &Connection,
    snippet_id: i64,
) -> Result<Snippet, Box<dyn std::error::Error>> {
    match apply_engine_query(EngineQuery::SnippetGet { snippet_id }, conn)? {
        EngineQueryResult::Snippet(snippet) => Ok(snippet),
        _ => Err("unexpected query result".into()),
    }
}

/// Human-readable rendering of the full snippet
pub fn render_snippet(snippet: &Snippet) -> String {
    let mut out = String::new();
    out.push_str(&format!("#{} {}\n", snippet.id, snippet.title));
    out.push_str(&format!("Language: {}\n", snippet.language));
    out.push_str(&format!("Status:   {}\n", snippet.status));
    out.push_str(&format!("Tags:     {}\n", snippet.tag_list().join(", ")));
    out.push_str(&format!(
        "Created:  {}\nUpdated:  {}\n",
        snippet.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        snippet.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str("\n--- code ---\n");
    out.push_str(&snippet.code);
    out.push('\n');
    if !snippet.notes.is_empty() {
        out.push_str("\n--- notes ---\n");
        out.push_str(&snippet.notes);
        out.push('\n');
    }
    out
}
