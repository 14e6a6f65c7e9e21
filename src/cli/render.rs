//! Table rendering for the terminal.

use crate::present::ScoreCell;
use crate::view::{rank_label, year_label, DetailRow, SummaryRow, TaskHeader};

/// Render a box-drawn table.
pub fn render_text(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r.get(i).map(|c| c.chars().count()).unwrap_or(0))
                .max()
                .unwrap_or(0)
                .max(h.chars().count())
        })
        .collect();

    let mut out = String::new();
    rule(&mut out, &widths, '┌', '┬', '┐');
    line(&mut out, headers, &widths);
    rule(&mut out, &widths, '├', '┼', '┤');
    for row in rows {
        line(&mut out, row, &widths);
    }
    rule(&mut out, &widths, '└', '┴', '┘');
    out
}

fn rule(out: &mut String, widths: &[usize], left: char, mid: char, right: char) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        for _ in 0..width + 2 {
            out.push('─');
        }
    }
    out.push(right);
    out.push('\n');
}

fn line(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('│');
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        for _ in 0..pad + 1 {
            out.push(' ');
        }
        out.push('│');
    }
    out.push('\n');
}

/// Render a markdown table.
pub fn render_markdown(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut md = String::new();
    md.push('|');
    for header in headers {
        md.push_str(&format!(" {header} |"));
    }
    md.push('\n');
    md.push('|');
    for _ in headers {
        md.push_str("---|");
    }
    md.push('\n');
    for row in rows {
        md.push('|');
        for cell in row {
            md.push_str(&format!(" {cell} |"));
        }
        md.push('\n');
    }
    md
}

fn score_text(cell: &ScoreCell) -> String {
    match &cell.delta {
        Some(delta) => format!("{} ({})", cell.text, delta.text),
        None => cell.text.clone(),
    }
}

/// Column headers and cell grid for the summary table.
pub fn summary_table(rows: &[SummaryRow]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec![
        "Rank".to_string(),
        "Name".to_string(),
        "Tags".to_string(),
        "Year".to_string(),
        "Size".to_string(),
    ];
    if let Some(first) = rows.first() {
        headers.extend(first.domains.iter().map(|d| d.domain.display_name().to_string()));
    }
    headers.push("Overall".to_string());

    let grid = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                rank_label(row.rank),
                row.name.clone(),
                row.tags.join(", "),
                year_label(row.year),
                if row.size.is_empty() { "-".to_string() } else { row.size.clone() },
            ];
            cells.extend(row.domains.iter().map(|d| score_text(&d.cell)));
            cells.push(score_text(&row.overall));
            cells
        })
        .collect();

    (headers, grid)
}

/// Column headers and cell grid for the detailed per-task table.
pub fn detail_table(
    task_headers: &[TaskHeader],
    rows: &[DetailRow],
) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec![
        "Rank".to_string(),
        "Name".to_string(),
        "Tags".to_string(),
        "Average".to_string(),
        "Efficiency".to_string(),
    ];
    headers.extend(task_headers.iter().map(TaskHeader::label));

    let grid = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                rank_label(row.rank),
                row.name.clone(),
                row.tags.join(", "),
                score_text(&row.average),
                row.efficiency.clone(),
            ];
            cells.extend(row.tasks.iter().map(score_text));
            cells
        })
        .collect();

    (headers, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_table_shape() {
        let headers = vec!["A".to_string(), "Long header".to_string()];
        let rows = vec![vec!["1".to_string(), "x".to_string()]];
        let table = render_text(&headers, &rows);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Long header"));
        assert!(lines[4].ends_with('┘'));
        // All lines render at equal width.
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_markdown_table_shape() {
        let headers = vec!["Name".to_string(), "Score".to_string()];
        let rows = vec![vec!["d".to_string(), "61.3".to_string()]];
        let md = render_markdown(&headers, &rows);
        assert_eq!(md, "| Name | Score |\n|---|---|\n| d | 61.3 |\n");
    }
}
