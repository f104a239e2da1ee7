mod args;
mod output;

pub(crate) use args::{CliArgs, EntityArg, OutputFormat, parse_cli};
pub(crate) use output::{print_json, print_plain};
