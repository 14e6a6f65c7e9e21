//! Tasks command: the detailed per-task table for one domain.

use crate::cli::args::{OutputFormat, TasksArgs};
use crate::cli::logging::{log, LogLevel};
use crate::cli::render::{detail_table, render_markdown, render_text};
use crate::schema::Domain;
use crate::sort::{Direction, SortKey, SortState};
use crate::view::TaskHeader;

pub fn run_tasks(args: TasksArgs, level: LogLevel) -> Result<(), String> {
    let mut view = super::view_from_args(&args.common, level);
    view.selection.task_domain = Some(args.domain);

    let headers = view.task_headers(args.domain);
    if headers.is_empty() {
        log(
            level,
            LogLevel::Normal,
            &format!("No task details for domain '{}'", args.domain),
        );
    }

    let direction = if args.common.asc { Direction::Ascending } else { Direction::Descending };
    view.selection.detail_sort =
        Some(SortState { key: parse_sort(&args.sort, args.domain, &headers)?, direction });

    let rows = view.detail_rows();
    if rows.is_empty() {
        log(level, LogLevel::Normal, "No records to display");
        return Ok(());
    }

    match args.common.format {
        OutputFormat::Text => {
            let (table_headers, grid) = detail_table(&headers, &rows);
            print!("{}", render_text(&table_headers, &grid));
        }
        OutputFormat::Markdown => {
            let (table_headers, grid) = detail_table(&headers, &rows);
            print!("{}", render_markdown(&table_headers, &grid));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Resolve a sort column name. Anything that is not a fixed column is
/// matched against the task headers, as `task` or `task:metric`.
fn parse_sort(column: &str, domain: Domain, headers: &[TaskHeader]) -> Result<SortKey, String> {
    match column.to_lowercase().as_str() {
        "name" => return Ok(SortKey::Name),
        "tag" | "tags" => return Ok(SortKey::Tags),
        "year" => return Ok(SortKey::Year),
        "average" => return Ok(SortKey::DomainAvg(domain)),
        "efficiency" => return Ok(SortKey::Efficiency(domain)),
        _ => {}
    }

    let (task, metric) = match column.split_once(':') {
        Some((task, metric)) => (task, Some(metric)),
        None => (column, None),
    };
    headers
        .iter()
        .find(|h| h.task_name == task && metric.map_or(true, |m| h.metric == m))
        .map(|h| SortKey::TaskMetric {
            domain,
            task: h.task_name.clone(),
            metric: h.metric.clone(),
        })
        .ok_or_else(|| format!("Unknown sort column: {column}"))
}
