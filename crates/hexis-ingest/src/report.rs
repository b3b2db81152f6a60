//! Run accounting.

use std::fmt;

/// Outcome counters for one import run.
///
/// Lines that never parsed as dialogue touch neither counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Records written to the store, or previewed in a dry run.
    pub imported: u64,
    /// Dialogue lines counted out at the content, policy, or write stage.
    pub skipped: u64,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Import complete:\n  Imported: {}\n  Skipped: {}",
            self.imported, self.skipped
        )
    }
}
