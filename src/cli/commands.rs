//! Command implementations for the Lexigraph CLI.

use std::sync::Arc;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::ngram::corpus::CorpusIndex;
use crate::ngram::time_series::TimeSeries;
use crate::query::hyponym::{HyponymQuery, HyponymSearcher};
use crate::taxonomy::taxonomy::Taxonomy;

/// Execute a CLI command.
pub fn execute_command(args: LexigraphArgs) -> Result<()> {
    match &args.command {
        Command::Hyponyms(hyponyms_args) => run_hyponyms(hyponyms_args.clone(), &args),
        Command::History(history_args) => run_history(history_args.clone(), &args),
        Command::Counts(counts_args) => run_counts(counts_args.clone(), &args),
        Command::Stats(stats_args) => run_stats(stats_args.clone(), &args),
    }
}

/// Load the corpus index, reporting progress at higher verbosity.
fn load_corpus(args: &CorpusArgs, cli_args: &LexigraphArgs) -> Result<CorpusIndex> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", args.words_file.display());
    }
    CorpusIndex::load(&args.words_file, &args.counts_file)
}

/// Load the taxonomy, reporting progress at higher verbosity.
fn load_taxonomy(args: &TaxonomyArgs, cli_args: &LexigraphArgs) -> Result<Taxonomy> {
    if cli_args.verbosity() > 1 {
        println!("Loading taxonomy from: {}", args.synsets.display());
    }
    Taxonomy::load(&args.synsets, &args.hyponyms)
}

/// Run a hyponym query.
fn run_hyponyms(args: HyponymsArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let taxonomy = load_taxonomy(&args.taxonomy, cli_args)?;
    let corpus = load_corpus(&args.corpus, cli_args)?;
    let searcher = HyponymSearcher::new(Arc::new(taxonomy), Arc::new(corpus));

    let query = HyponymQuery {
        words: args.words.clone(),
        start_year: args.start_year,
        end_year: args.end_year,
        k: args.k,
    };

    let start_time = Instant::now();
    let hyponyms = searcher.search(&query)?;
    let duration = start_time.elapsed();

    output_result(
        "Common hyponyms:",
        &HyponymResults {
            words: args.words,
            start_year: args.start_year,
            end_year: args.end_year,
            k: args.k,
            hyponyms,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show relative-frequency histories.
fn run_history(args: HistoryArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus, cli_args)?;

    let start_time = Instant::now();
    let mut series = Vec::new();
    if args.summed {
        let summed = corpus.summed_weight_history(&args.words, args.start_year, args.end_year)?;
        series.push(word_series(args.words.join("+"), &summed));
    } else {
        for word in &args.words {
            let weights = corpus.weight_history(word, args.start_year, args.end_year)?;
            series.push(word_series(word.clone(), &weights));
        }
    }
    let duration = start_time.elapsed();

    output_result(
        "Weight history:",
        &HistoryResults {
            series,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show raw count histories.
fn run_counts(args: CountsArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus, cli_args)?;

    let start_time = Instant::now();
    let series = args
        .words
        .iter()
        .map(|word| {
            let counts = corpus.count_history(word, args.start_year, args.end_year);
            word_series(word.clone(), &counts)
        })
        .collect();
    let duration = start_time.elapsed();

    output_result(
        "Count history:",
        &HistoryResults {
            series,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show dataset statistics.
fn run_stats(args: StatsArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let start_time = Instant::now();
    let taxonomy = load_taxonomy(&args.taxonomy, cli_args)?;
    let corpus = load_corpus(&args.corpus, cli_args)?;
    let duration = start_time.elapsed();

    let (first_year, last_year) = match corpus.year_span() {
        Some((first, last)) => (Some(first), Some(last)),
        None => (None, None),
    };

    output_result(
        "Dataset statistics:",
        &StatsResults {
            taxonomy: TaxonomyStats {
                synsets: taxonomy.synset_count(),
                words: taxonomy.word_count(),
                edges: taxonomy.graph().edge_count(),
            },
            corpus: CorpusStats {
                words: corpus.word_count(),
                first_year,
                last_year,
            },
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

fn word_series(word: String, series: &TimeSeries) -> WordSeries {
    WordSeries {
        word,
        years: series.years(),
        values: series.values(),
    }
}
