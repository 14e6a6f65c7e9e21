//! CLI command implementations

mod info;
mod show;
mod tasks;

use crate::cli::args::{Cli, Command, CommonArgs};
use crate::cli::logging::{log, LogLevel};
use crate::filter::{SizeRange, SIZE_STOPS};
use crate::store::Dataset;
use crate::view::LeaderboardView;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Show(args) => show::run_show(args, log_level),
        Command::Tasks(args) => tasks::run_tasks(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}

/// Load the dataset and apply the shared filter arguments to a fresh view.
fn view_from_args(common: &CommonArgs, level: LogLevel) -> LeaderboardView {
    let loaded = Dataset::load_or_fallback(&common.data);
    if let Some(error) = loaded.error() {
        log(
            level,
            LogLevel::Normal,
            &format!("Warning: {error}; showing generated placeholder data"),
        );
    }

    let mut view = LeaderboardView::new(loaded.dataset);
    if let Some(family) = &common.family {
        view.selection.family = family.clone();
        if view.records().is_empty() {
            log(level, LogLevel::Normal, &format!("Warning: no records for family '{family}'"));
        }
    }

    view.selection.filters.query = common.search.clone().unwrap_or_default();
    view.selection.filters.tags = common.tags.iter().cloned().collect();
    view.selection.filters.tag_mode = common.tag_mode;
    view.selection.filters.size_range = SizeRange::new(
        common.min_size.map(|b| b.0).unwrap_or(0),
        common.max_size.map(|b| b.0).unwrap_or(SIZE_STOPS.len() - 1),
    );
    view.selection.baseline = common.baseline;
    view
}
