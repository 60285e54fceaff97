mod args;
mod output;

pub(crate) use args::parse_cli;
pub(crate) use output::{print_json, print_overview};
