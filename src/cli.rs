use clap::Parser;
use license_report::config::CliOverrides;
use std::path::PathBuf;

/// Report the licenses of a package's transitive dependencies
#[derive(Parser, Debug)]
#[command(name = "license-report")]
#[command(version)]
#[command(
    about = "Report the licenses of a package's transitive dependencies",
    long_about = None
)]
pub struct Args {
    /// Packages whose dependencies are reported
    #[arg(value_name = "PACKAGE", required = true)]
    pub packages: Vec<String>,

    /// Render a fixed-width table instead of CSV
    #[arg(long)]
    pub table: bool,

    /// Render a Markdown table instead of CSV
    #[arg(long = "md-table")]
    pub md_table: bool,

    /// Git remote used to build license URLs, tried in order
    /// [default: origin, upstream]
    #[arg(long = "git-remote", value_name = "NAME")]
    pub git_remotes: Vec<String>,

    /// Leave dependencies matching a pattern out of the report
    /// (supports wildcards: *). Can be specified multiple times
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Minimum confidence for accepting a license match [default: 0.9]
    #[arg(long, value_name = "THRESHOLD")]
    pub confidence_threshold: Option<f64>,

    /// Dependency manifest to read [default: license-manifest.json]
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to license-report.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that take part in config merging
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            table: self.table,
            md_table: self.md_table,
            ignore: self.ignore.clone(),
            git_remotes: self.git_remotes.clone(),
            confidence_threshold: self.confidence_threshold,
            manifest: self.manifest.clone(),
        }
    }
}
