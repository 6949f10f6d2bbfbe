//! Add and edit commands
//!
//! Usage:
//!   arsenal-cli add --title <TITLE> --tags <TAGS> [--language <LANG>] [--status <STATUS>]
//!                   [--code <TEXT> | --code-file <PATH>] [--notes <TEXT>]
//!   arsenal-cli edit <ID> [--title ..] [--language ..] [--tags ..] [--status ..]
//!                   [--code <TEXT> | --code-file <PATH>] [--notes <TEXT>]
//!
//! `add` reads the code from stdin when neither `--code` nor `--code-file`
//! is given.

use arsenal_core::model::{SnippetDraft, Status};
use arsenal_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use clap::Args;
use rusqlite::Connection;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use super::show::load_snippet;
use super::CommandResult;
use crate::config::Config;

#[derive(Debug, Args)]
pub struct CodeSource {
    /// Code text
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the code from a file
    #[arg(long)]
    pub code_file: Option<PathBuf>,
}

impl CodeSource {
    fn read(self) -> Result<Option<String>, Box<dyn std::error::Error>> {
        match (self.code, self.code_file) {
            (Some(code), _) => Ok(Some(code)),
            (None, Some(path)) => Ok(Some(std::fs::read_to_string(path)?)),
            (None, None) => Ok(None),
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Snippet title
    #[arg(long)]
    pub title: String,

    /// Language label (default from config, "py")
    #[arg(long)]
    pub language: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: String,

    /// draft, tested or prod (default from config, "draft")
    #[arg(long)]
    pub status: Option<Status>,

    #[command(flatten)]
    pub code: CodeSource,

    /// Free-form notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Snippet ID
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    /// Comma-separated tags (replaces all tags)
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub status: Option<Status>,

    #[command(flatten)]
    pub code: CodeSource,

    #[arg(long)]
    pub notes: Option<String>,
}

/// Execute add command
pub fn execute_add(args: AddArgs, conn: &mut Connection, config: &Config) -> CommandResult {
    let code = match args.code.read()? {
        Some(code) => code,
        None => read_code_from_stdin()?,
    };

    let draft = SnippetDraft {
        title: args.title,
        language: args
            .language
            .unwrap_or_else(|| config.default_language.clone()),
        tags: args.tags,
        status: args.status.unwrap_or(config.default_status),
        code,
        notes: args.notes,
    };

    let snippet_id = save(conn, None, draft)?;
    println!("✓ Saved snippet #{}", snippet_id);
    Ok(())
}

/// Execute edit command
pub fn execute_edit(args: EditArgs, conn: &mut Connection) -> CommandResult {
    let mut draft = load_snippet(conn, args.id)?.to_draft();
    let code = args.code.read()?;

    if args.title.is_none()
        && args.language.is_none()
        && args.tags.is_none()
        && args.status.is_none()
        && code.is_none()
        && args.notes.is_none()
    {
        return Err("nothing to change: pass at least one field to edit".into());
    }

    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(language) = args.language {
        draft.language = language;
    }
    if let Some(tags) = args.tags {
        draft.tags = tags;
    }
    if let Some(status) = args.status {
        draft.status = status;
    }
    if let Some(code) = code {
        draft.code = code;
    }
    if let Some(notes) = args.notes {
        draft.notes = notes;
    }

    let snippet_id = save(conn, Some(args.id), draft)?;
    println!("✓ Saved snippet #{}", snippet_id);
    Ok(())
}

fn save(
    conn: &mut Connection,
    snippet_id: Option<i64>,
    draft: SnippetDraft,
) -> Result<i64, Box<dyn std::error::Error>> {
    match apply_engine_command(EngineCommand::SnippetSave { snippet_id, draft }, conn)? {
        EngineCommandResult::Saved { snippet_id, .. } => Ok(snippet_id),
        _ => Err("unexpected command result".into()),
    }
}

fn read_code_from_stdin() -> Result<String, Box<dyn std::error::Error>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading code from stdin (finish with Ctrl-D)...");
    }
    let mut code = String::new();
    stdin.read_to_string(&mut code)?;
    Ok(code)
}
