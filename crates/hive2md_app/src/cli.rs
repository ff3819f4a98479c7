use std::path::PathBuf;

use clap::Parser;
use hive2md_core::{FilterOptions, Platform, RunConfig, DEFAULT_BLOG_LIMIT};
use hive2md_logging::{LevelFilter, LogDestination};

/// Archive Hive or Steemit posts as front-matter Markdown for static-site generators.
#[derive(Parser, Debug)]
#[command(name = "hive2md", version, about, long_about = None)]
pub struct Args {
    /// Account name on Hive or Steemit
    pub author: String,

    /// Directory where the Markdown files and images are saved
    pub path: PathBuf,

    /// Only archive the most recent post
    #[arg(long)]
    pub last: bool,

    /// Include posts tagged 'actifit'
    #[arg(long)]
    pub actifit: bool,

    /// Archive every post, ignoring the date filter
    #[arg(long)]
    pub all: bool,

    /// Archive today's posts instead of yesterday's
    #[arg(long)]
    pub today: bool,

    /// Read from Steemit instead of Hive
    #[arg(long)]
    pub steemit: bool,

    /// Node URL to query instead of the platform's public node
    #[arg(long, value_name = "URL")]
    pub node: Option<String>,

    /// Maximum number of blog entries to request
    #[arg(long, default_value_t = DEFAULT_BLOG_LIMIT)]
    pub limit: u32,

    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Keep the terminal silent and log to --log-file only
    #[arg(short, long, requires = "log_file")]
    pub quiet: bool,

    /// Log debug details such as skipped posts
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match (&self.log_file, self.quiet) {
            (Some(path), true) => LogDestination::File(path.clone()),
            (Some(path), false) => LogDestination::Both(path.clone()),
            (None, _) => LogDestination::Terminal,
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            account: self.author.clone(),
            output_dir: self.path.clone(),
            platform: if self.steemit {
                Platform::Steemit
            } else {
                Platform::Hive
            },
            filter: FilterOptions {
                last: self.last,
                include_skip_tag: self.actifit,
                all: self.all,
                today: self.today,
            },
            node_url: self.node.clone(),
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn positional_arguments_only_default_to_hive_yesterday() {
        let args = Args::try_parse_from(["hive2md", "alice", "out"]).unwrap();
        let config = args.run_config();

        assert_eq!(config.account, "alice");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.platform, Platform::Hive);
        assert_eq!(config.filter, FilterOptions::default());
        assert_eq!(config.node_url(), "https://api.hive.blog");
        assert_eq!(config.limit, DEFAULT_BLOG_LIMIT);
        assert_eq!(args.log_level(), LevelFilter::Info);
        assert_eq!(args.log_destination(), LogDestination::Terminal);
    }

    #[test]
    fn flags_map_onto_run_config() {
        let args = Args::try_parse_from([
            "hive2md", "bob", "/tmp/blog", "--last", "--actifit", "--all", "--today", "--steemit",
            "--limit", "20", "-v",
        ])
        .unwrap();
        let config = args.run_config();

        assert_eq!(config.platform, Platform::Steemit);
        assert_eq!(config.node_url(), "https://api.steemit.com");
        assert_eq!(
            config.filter,
            FilterOptions {
                last: true,
                include_skip_tag: true,
                all: true,
                today: true,
            }
        );
        assert_eq!(config.limit, 20);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn node_override_wins_over_platform() {
        let args =
            Args::try_parse_from(["hive2md", "alice", "out", "--node", "http://127.0.0.1:8090"])
                .unwrap();
        assert_eq!(args.run_config().node_url(), "http://127.0.0.1:8090");
    }

    #[test]
    fn log_file_is_written_alongside_the_terminal() {
        let args =
            Args::try_parse_from(["hive2md", "alice", "out", "--log-file", "run.log"]).unwrap();
        assert_eq!(
            args.log_destination(),
            LogDestination::Both(PathBuf::from("run.log"))
        );
    }

    #[test]
    fn quiet_with_log_file_logs_to_the_file_only() {
        let args =
            Args::try_parse_from(["hive2md", "alice", "out", "--log-file", "run.log", "-q"])
                .unwrap();
        assert_eq!(
            args.log_destination(),
            LogDestination::File(PathBuf::from("run.log"))
        );
    }

    #[test]
    fn quiet_requires_a_log_file() {
        assert!(Args::try_parse_from(["hive2md", "alice", "out", "--quiet"]).is_err());
    }

    #[test]
    fn missing_output_path_is_an_error() {
        assert!(Args::try_parse_from(["hive2md", "alice"]).is_err());
    }
}
