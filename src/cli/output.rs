//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexigraphArgs, OutputFormat};
use crate::error::Result;

/// Result structure for hyponym queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct HyponymResults {
    pub words: Vec<String>,
    pub start_year: i32,
    pub end_year: i32,
    pub k: usize,
    pub hyponyms: Vec<String>,
    pub duration_ms: u64,
}

/// A single word's series of yearly values.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSeries {
    pub word: String,
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

/// Result structure for history and counts commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResults {
    pub series: Vec<WordSeries>,
    pub duration_ms: u64,
}

/// Taxonomy statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaxonomyStats {
    pub synsets: usize,
    pub words: usize,
    pub edges: usize,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub words: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

/// Combined dataset statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResults {
    pub taxonomy: TaxonomyStats,
    pub corpus: CorpusStats,
    pub duration_ms: u64,
}

/// Trait for rendering a result in human-readable form.
pub trait HumanOutput {
    /// Print the result to stdout.
    fn print_human(&self, args: &LexigraphArgs);
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexigraphArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexigraphArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl HumanOutput for HyponymResults {
    fn print_human(&self, args: &LexigraphArgs) {
        if self.hyponyms.is_empty() {
            println!("(no hyponyms)");
            return;
        }
        for word in &self.hyponyms {
            println!("{word}");
        }
        if args.verbosity() > 1 {
            println!();
            println!("{} hyponyms in {} ms", self.hyponyms.len(), self.duration_ms);
        }
    }
}

impl HumanOutput for HistoryResults {
    fn print_human(&self, _args: &LexigraphArgs) {
        for series in &self.series {
            let entries: Vec<String> = series
                .years
                .iter()
                .zip(&series.values)
                .map(|(year, value)| format!("{year}={value}"))
                .collect();
            println!("{}: {{{}}}", series.word, entries.join(", "));
        }
    }
}

impl HumanOutput for StatsResults {
    fn print_human(&self, _args: &LexigraphArgs) {
        println!("Taxonomy:");
        println!("  synsets: {}", self.taxonomy.synsets);
        println!("  words:   {}", self.taxonomy.words);
        println!("  edges:   {}", self.taxonomy.edges);
        println!("Corpus:");
        println!("  words:   {}", self.corpus.words);
        match (self.corpus.first_year, self.corpus.last_year) {
            (Some(first), Some(last)) => println!("  years:   {first}-{last}"),
            _ => println!("  years:   (none)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyponym_results_serialize() {
        let results = HyponymResults {
            words: vec!["cat".to_string()],
            start_year: 1950,
            end_year: 2020,
            k: 5,
            hyponyms: vec!["kitten".to_string(), "tabby".to_string()],
            duration_ms: 3,
        };

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["hyponyms"][0], "kitten");
        assert_eq!(json["k"], 5);
    }

    #[test]
    fn test_history_results_serialize() {
        let results = HistoryResults {
            series: vec![WordSeries {
                word: "dog".to_string(),
                years: vec![2000, 2001],
                values: vec![0.05, 0.1],
            }],
            duration_ms: 1,
        };

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["series"][0]["word"], "dog");
        assert_eq!(json["series"][0]["years"][1], 2001);
    }
}
