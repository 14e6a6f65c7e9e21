//! Show command: the summary leaderboard table.

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::cli::logging::{log, LogLevel};
use crate::cli::render::{render_markdown, render_text, summary_table};
use crate::schema::Domain;
use crate::sort::{Direction, SortKey, SortState};

pub fn run_show(args: ShowArgs, level: LogLevel) -> Result<(), String> {
    let mut view = super::view_from_args(&args.common, level);

    let direction = if args.common.asc { Direction::Ascending } else { Direction::Descending };
    view.selection.summary_sort = SortState { key: parse_sort(&args.sort)?, direction };

    let rows = view.summary_rows();
    if rows.is_empty() {
        log(level, LogLevel::Normal, "No records to display");
        return Ok(());
    }

    match args.common.format {
        OutputFormat::Text => {
            let (headers, grid) = summary_table(&rows);
            print!("{}", render_text(&headers, &grid));
        }
        OutputFormat::Markdown => {
            let (headers, grid) = summary_table(&rows);
            print!("{}", render_markdown(&headers, &grid));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn parse_sort(column: &str) -> Result<SortKey, String> {
    match column.to_lowercase().as_str() {
        "name" => Ok(SortKey::Name),
        "tag" | "tags" => Ok(SortKey::Tags),
        "year" => Ok(SortKey::Year),
        "overall" => Ok(SortKey::OverallAvg),
        "size" => Err("Column 'size' is not sortable".to_string()),
        other => Domain::from_tag(other)
            .map(SortKey::DomainAvg)
            .ok_or_else(|| format!("Unknown sort column: {column}")),
    }
}
