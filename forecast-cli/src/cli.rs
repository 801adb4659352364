use clap::Parser;

/// Top-level CLI struct.
///
/// The tool is purely interactive: no flags or subcommands beyond
/// `--help`/`--version`. City and units are collected via prompts.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Interactive 5-day weather forecast")]
pub struct Cli {}
