use clap::ValueEnum;
use sparkboard::query::RangeBucket;

/// List views selectable on the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum EntityArg {
    #[default]
    Projects,
    Founders,
}

/// Score buckets accepted by `--score`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScoreArg {
    All,
    High,
    Medium,
    Low,
}

impl From<ScoreArg> for RangeBucket {
    fn from(value: ScoreArg) -> Self {
        match value {
            ScoreArg::All => RangeBucket::All,
            ScoreArg::High => RangeBucket::High,
            ScoreArg::Medium => RangeBucket::Medium,
            ScoreArg::Low => RangeBucket::Low,
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
