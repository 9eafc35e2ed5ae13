//! Spinner display for long-running downloads

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a branch export downloads.
///
/// Cleared when dropped, so an early return on error leaves no stale line.
/// indicatif hides it entirely when stderr is not a terminal.
pub struct FetchSpinner {
    pb: ProgressBar,
}

impl FetchSpinner {
    pub fn start(branch: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner} Fetching {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        pb.set_style(style);
        pb.set_message(branch.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }
}

impl Drop for FetchSpinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}
