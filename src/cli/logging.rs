//! CLI output gating.

/// Output level for CLI messages.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress everything except the rendered result
    Quiet,
    /// Normal output level
    Normal,
    /// Additional detail
    Verbose,
}

impl LogLevel {
    /// Whether a message at `required` level should be printed.
    pub fn allows(self, required: LogLevel) -> bool {
        self != LogLevel::Quiet && self >= required
    }
}

/// Print a message if the current level permits it.
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.allows(required) {
        println!("{msg}");
    }
}
