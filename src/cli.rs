//! CLI definitions using clap derive API

use std::path::PathBuf;

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_DEV_BRANCH, DEFAULT_STABLE_BRANCH};

/// branch-diff - compare binary packages of two distribution branches
///
/// Prints, per architecture, the packages unique to each branch and the
/// packages whose version is newer in the development branch.
#[derive(Parser, Debug)]
#[command(
    name = "branch-diff",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Compare binary packages of a stable and a development branch",
    long_about = "Downloads the binary package lists of two branches from the package database \
                  export API and prints, per architecture, the packages found in only one branch \
                  and the packages with a newer epoch:version-release in the development branch.",
    after_help = "EXAMPLES:\n  \
                  Compare p10 with sisyphus (cached responses are reused):\n    branch-diff\n\n\
                  Force fresh downloads:\n    branch-diff --no-cache\n\n\
                  Compare other branches:\n    branch-diff --stable p9 --dev p10"
)]
pub struct Cli {
    /// Do not read cached responses (fresh responses are still written to the cache)
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    /// Stable branch name
    #[arg(long, env = "BRANCH_DIFF_STABLE", default_value = DEFAULT_STABLE_BRANCH)]
    pub stable: String,

    /// Development branch name
    #[arg(long, env = "BRANCH_DIFF_DEV", default_value = DEFAULT_DEV_BRANCH)]
    pub dev: String,

    /// Base URL of the branch export endpoint; the branch name is appended
    #[arg(long, env = "BRANCH_DIFF_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory for cached responses
    #[arg(long, env = "BRANCH_DIFF_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
