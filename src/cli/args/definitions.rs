use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{EntityArg, OutputFormat, ScoreArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `sparkboard` binary.
#[derive(Parser, Debug)]
#[command(
    name = "sparkboard",
    version,
    long_version = long_version(),
    about = "Search, filter, sort and page through startup projects and founders",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_enum,
        default_value_t = EntityArg::Projects,
        help = "List to browse"
    )]
    pub(crate) entity: EntityArg,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SPARKBOARD_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long,
        value_name = "FILE",
        help = "Read the browsed list from a JSON file (default: data directory or bundled sample)"
    )]
    pub(crate) dataset: Option<PathBuf>,
    #[arg(
        short = 's',
        long,
        value_name = "TEXT",
        help = "Case-insensitive text to search for (default: empty)"
    )]
    pub(crate) search: Option<String>,
    #[arg(
        short = 't',
        long = "tag",
        value_name = "TAG",
        action = ArgAction::Append,
        help = "Require a tag; repeat to require several (default: none)"
    )]
    pub(crate) tags: Vec<String>,
    #[arg(
        long,
        value_enum,
        help = "Restrict to a score bucket: high >= 80, medium 50-79, low < 50 (default: all)"
    )]
    pub(crate) score: Option<ScoreArg>,
    #[arg(
        long,
        value_name = "KEY",
        action = ArgAction::Append,
        help = "Sort by a field; repeating the same key flips the direction (default: dataset order)"
    )]
    pub(crate) sort: Vec<String>,
    #[arg(
        short = 'p',
        long,
        value_name = "NUM",
        help = "Page to show, clamped to the available pages (default: 1)"
    )]
    pub(crate) page: Option<usize>,
    #[arg(
        long = "page-size",
        value_name = "NUM",
        help = "Items per page (default: 10)"
    )]
    pub(crate) page_size: Option<usize>,
    #[arg(
        long = "debounce-ms",
        value_name = "MS",
        help = "Quiet period before search input is applied (default: 300)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        long,
        value_name = "SLUG",
        conflicts_with = "list_tags",
        help = "Show a single project by slug instead of a list"
    )]
    pub(crate) slug: Option<String>,
    #[arg(
        long = "list-tags",
        help = "List the tags present in the dataset with their counts"
    )]
    pub(crate) list_tags: bool,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long,
        help = "Log debug events to stderr unless SPARKBOARD_LOG is set (default: disabled)"
    )]
    pub(crate) verbose: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
