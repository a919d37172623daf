//! Logging utilities for CLI output

/// Verbosity of CLI reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    /// Run summary
    Normal,
    /// Per-subset detail
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the CLI verbosity flags. Quiet wins over
    /// verbose when both are set.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }
}

/// Print `msg` when the active `level` admits a message of `required`
/// importance. Normal messages also show under Verbose.
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}
