//! Command line argument parsing for the Lexigraph CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ngram::time_series::{MAX_YEAR, MIN_YEAR};

/// Lexigraph - hyponym and word-frequency queries over a lexical taxonomy
#[derive(Parser, Debug, Clone)]
#[command(name = "lexigraph")]
#[command(about = "Hyponym and word-frequency queries over a lexical taxonomy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexigraphArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexigraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the common hyponyms of a set of words
    Hyponyms(HyponymsArgs),

    /// Show relative-frequency histories of words
    History(HistoryArgs),

    /// Show raw count histories of words
    Counts(CountsArgs),

    /// Show taxonomy and corpus statistics
    Stats(StatsArgs),
}

/// Paths to the taxonomy data files.
#[derive(Parser, Debug, Clone)]
pub struct TaxonomyArgs {
    /// Path to the synsets file (id,word-list per line)
    #[arg(long, value_name = "SYNSETS_FILE")]
    pub synsets: PathBuf,

    /// Path to the hyponyms file (hypernymId,hyponymId,... per line)
    #[arg(long, value_name = "HYPONYMS_FILE")]
    pub hyponyms: PathBuf,
}

/// Paths to the corpus data files.
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Path to the word-frequency file (word<TAB>year<TAB>count per line)
    #[arg(long, value_name = "WORDS_FILE")]
    pub words_file: PathBuf,

    /// Path to the yearly totals file (year,count per line)
    #[arg(long, value_name = "COUNTS_FILE")]
    pub counts_file: PathBuf,
}

/// Arguments for the hyponyms query
#[derive(Parser, Debug, Clone)]
pub struct HyponymsArgs {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Words whose hyponym sets are intersected
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// First year of the ranking window, inclusive
    #[arg(long, default_value_t = MIN_YEAR)]
    pub start_year: i32,

    /// Last year of the ranking window, inclusive
    #[arg(long, default_value_t = MAX_YEAR)]
    pub end_year: i32,

    /// Keep only the K most frequent hyponyms (0 returns everything)
    #[arg(short, default_value = "0")]
    pub k: usize,
}

/// Arguments for the history command
#[derive(Parser, Debug, Clone)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Words to show histories for
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// First year of the window, inclusive
    #[arg(long, default_value_t = MIN_YEAR)]
    pub start_year: i32,

    /// Last year of the window, inclusive
    #[arg(long, default_value_t = MAX_YEAR)]
    pub end_year: i32,

    /// Fold all words into one summed series
    #[arg(long)]
    pub summed: bool,
}

/// Arguments for the counts command
#[derive(Parser, Debug, Clone)]
pub struct CountsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Words to show count histories for
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// First year of the window, inclusive
    #[arg(long, default_value_t = MIN_YEAR)]
    pub start_year: i32,

    /// Last year of the window, inclusive
    #[arg(long, default_value_t = MAX_YEAR)]
    pub end_year: i32,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Output formats available in CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
