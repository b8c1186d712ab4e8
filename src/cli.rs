//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  documind response.txt             Format a raw model response from a file
  cat raw.txt | documind            Format from stdin ('-' also reads stdin)
  documind --blocks response.txt    Emit classified display blocks as JSON
  documind --width 80 response.txt  Wrap formatted output to 80 columns
  documind cache list               List cached artifact keys
  documind cache list summary       List only cached summaries
  documind cache clear summary      Remove every cached summary
  documind config                   Show resolved paths and cache scoping
  documind completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Format model responses for display and inspect the artifact cache",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Raw response text to format: a file path, or '-' for stdin (default)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Emit classified display blocks as a JSON array instead of plain text
    #[arg(long)]
    pub blocks: bool,

    /// Wrap formatted output to this column width (0 = no wrapping)
    #[arg(short = 'w', long, default_value_t = 0)]
    pub width: usize,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or clear the on-disk artifact cache
    Cache {
        #[command(subcommand)]
        subcommand: CacheSubcommand,
    },
    /// Show resolved paths, key prefix, and user scoping status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CacheSubcommand {
    /// List cached artifact keys
    List {
        /// Restrict to one artifact kind (conversation, comparison, patterns,
        /// contradictions, summary, extract, comments)
        kind: Option<String>,
    },
    /// Remove every cached artifact of a kind
    Clear {
        /// Artifact kind to clear
        kind: String,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
