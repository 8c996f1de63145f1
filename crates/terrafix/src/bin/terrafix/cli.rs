//! terrafix cli interface

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Formatter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print addresses in canonical form
    #[command(alias = "fmt")]
    Format(FormatCommand),

    /// Check if a reference is the same address as a pattern
    ///
    /// Indices in the reference that the pattern does not mention are skipped.
    Matches(MatchCommand),

    /// Print the position in a reference where a pattern ends
    ///
    /// Prints null if the pattern does not match the start of the reference.
    Find(MatchCommand),

    /// Replace the step where a prefix pattern ends with a replacement
    Replace(ReplaceCommand),
}

#[derive(Parser, Debug)]
pub struct FormatCommand {
    /// Address to format
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct MatchCommand {
    /// Concrete reference, e.g. foo.bar.block[0].attr
    pub reference: String,

    /// Schema pattern, e.g. foo.bar.block.attr
    pub pattern: String,
}

#[derive(Parser, Debug)]
pub struct ReplaceCommand {
    pub reference: String,

    pub prefix: String,

    pub replacement: String,
}

#[derive(Parser, Debug)]
pub struct OutputArgs {
    #[arg(short = 'F', long = "output-format", default_value_t, global(true))]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum OutputFormat {
    Json,
    #[default]
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}
