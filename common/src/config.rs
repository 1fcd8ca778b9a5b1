use std::path::PathBuf;

/// Snapshot used when neither `--data` nor `STOCKPILE_DATA` names one.
pub const DEFAULT_DATA_FILE: &str = "stockpile.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON snapshot backing the document store.
    pub data_file: PathBuf,
    /// 0 prints headers and details, 1 prints results only, 2 prints nothing but errors.
    pub quiet: u8,
    /// Raises the default log filter to `debug`.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            quiet: 0,
            verbose: false,
        }
    }
}

impl Config {
    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match (self.verbose, self.quiet) {
            (true, _) => "debug",
            (false, 0) => "info",
            (false, 1) => "warn",
            _ => "error",
        }
    }
}
