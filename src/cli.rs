// Command-line interface definition

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nucleocomp",
    version,
    about = "Reverse-complement FASTA records and estimate their base composition",
    long_about = None
)]
pub struct Cli {
    /// Input FASTA file (`.faa` is read as amino acids, gzip accepted)
    #[arg(short = 'i', long, value_name = "FASTA")]
    pub input: PathBuf,

    /// Output FASTA file for the reverse complements (`.gz` for BGZF)
    #[arg(short = 'o', long, value_name = "FASTA")]
    pub output: PathBuf,

    /// Write the composition report as JSON here instead of stdout
    #[arg(short = 'c', long, value_name = "JSON")]
    pub composition: Option<PathBuf>,

    /// Report raw symbol frequencies instead of spreading ambiguity codes
    #[arg(short = 'd', long)]
    pub decompose: bool,

    /// Treat the input as amino acids regardless of its extension
    #[arg(short = 'a', long)]
    pub amino: bool,

    /// Verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Styled status lines for stderr.
pub mod fmt {
    use console::style;
    use std::fmt::Display;

    pub fn header(title: &str) -> String {
        style(title).bold().underlined().to_string()
    }

    pub fn param_aligned(name: &str, width: usize) -> String {
        style(format!("{name:<width$}")).cyan().to_string()
    }

    pub fn progress(message: impl Display) -> String {
        format!("{} {}", style("==>").blue().bold(), message)
    }

    pub fn success(message: impl Display) -> String {
        format!("{} {}", style("done").green().bold(), message)
    }
}
