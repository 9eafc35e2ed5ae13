//! Diff command implementation

use std::io;

use tracing::{info, warn};

use crate::cache::{FileCache, Refresh, ResponseCache};
use crate::cli::Cli;
use crate::config::Config;
use crate::diff::compute_diff;
use crate::error::Result;
use crate::fetch::{Fetcher, HttpSource};
use crate::report::Report;

/// Run the diff: fetch both branches, compare, print the JSON report
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    let file_cache = FileCache::new(&config.cache_dir);
    let cache: Box<dyn ResponseCache> = if config.use_cache {
        Box::new(file_cache)
    } else {
        Box::new(Refresh(file_cache))
    };

    let source = HttpSource::new(&config.base_url, config.timeout)?;
    let fetcher = Fetcher::new(source, cache);

    let stable = fetcher.fetch(&config.stable_branch)?;
    let dev = fetcher.fetch(&config.dev_branch)?;

    info!(
        stable = %config.stable_branch,
        stable_packages = stable.len(),
        stable_arches = stable.architectures().len(),
        dev = %config.dev_branch,
        dev_packages = dev.len(),
        dev_arches = dev.architectures().len(),
        "comparing branches"
    );

    let diff = compute_diff(&stable, &dev);

    info!(
        unique_to_stable = diff.unique_to_stable_count(),
        unique_to_dev = diff.unique_to_dev_count(),
        upgraded_in_dev = diff.upgraded_count(),
        "diff complete"
    );
    if !diff.skipped.is_empty() {
        warn!(
            skipped = diff.skipped.len(),
            "some packages were left out of the version comparison"
        );
    }

    let report = Report {
        stable: &config.stable_branch,
        dev: &config.dev_branch,
        diff: &diff,
    };
    report.write_json(io::stdout().lock())
}
