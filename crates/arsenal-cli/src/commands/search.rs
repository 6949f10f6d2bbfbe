//! Search command
//!
//! Usage: arsenal-cli search [QUERY]... [--limit <N>] [--json]

use arsenal_core::model::SnippetSummary;
use arsenal_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use clap::Args;
use rusqlite::Connection;

use super::CommandResult;
use crate::config::Config;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched against title, language, tags, code and notes
    /// (empty lists everything)
    pub query: Vec<String>,

    /// Maximum number of results (default from config, 200)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute search command
pub fn execute(args: SearchArgs, conn: &Connection, config: &Config) -> CommandResult {
    let query = EngineQuery::SnippetSearch {
        query: args.query.join(" "),
        limit: args.limit.unwrap_or(config.search_limit),
    };

    let rows = match apply_engine_query(query, conn)? {
        EngineQueryResult::Summaries(rows) => rows,
        _ => return Err("unexpected query result".into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No snippets found.");
    } else {
        print!("{}", render_table(&rows));
    }

    Ok(())
}

const TITLE_WIDTH: usize = 32;
const TAGS_WIDTH: usize = 24;

/// Render the results list with ID, Title, Lang, Tags and Status columns
pub fn render_table(rows: &[SnippetSummary]) -> String {
    let mut out = format!(
        "{:>5}  {:<tw$}  {:<8}  {:<gw$}  {}\n",
        "ID",
        "Title",
        "Lang",
        "Tags",
        "Status",
        tw = TITLE_WIDTH,
        gw = TAGS_WIDTH
    );
    for row in rows {
        out.push_str(&format!(
            "{:>5}  {:<tw$}  {:<8}  {:<gw$}  {}\n",
            row.id,
            truncate(&row.title, TITLE_WIDTH),
            truncate(&row.language, 8),
            truncate(&row.tags, TAGS_WIDTH),
            row.status,
            tw = TITLE_WIDTH,
            gw = TAGS_WIDTH
        ));
    }
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use arsenal_core::model::Status;

    #[test]
    fn test_render_table_has_header_and_rows() {
        let rows = vec![SnippetSummary {
            id: 3,
            title: "Read file".to_string(),
            language: "rust".to_string(),
            tags: "io,fs".to_string(),
            status: Status::Prod,
        }];

        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Title"));
        assert!(lines[1].trim_start().starts_with("3"));
        assert!(lines[1].contains("Read file"));
        assert!(lines[1].ends_with("prod"));
    }

    #[test]
    fn test_truncate_long_values() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abcd", 4), "abcd");
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
