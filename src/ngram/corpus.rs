//! In-memory index over the word-frequency corpus.
//!
//! A [`CorpusIndex`] stores pertinent data from a "words file" (per-word
//! yearly counts) and a "counts file" (corpus-wide yearly totals). It is
//! built once at load time and read-only thereafter; every history accessor
//! returns a defensive copy.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;
use log::{debug, info};

use crate::error::{LexigraphError, Result};
use crate::ngram::time_series::{MAX_YEAR, MIN_YEAR, TimeSeries};

/// Index over per-word usage counts and corpus-wide totals per year.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    /// Per-word raw counts.
    words: AHashMap<String, TimeSeries>,
    /// Total counts per year across the whole corpus.
    totals: TimeSeries,
}

impl CorpusIndex {
    /// Load a corpus from a words file and a counts file.
    ///
    /// The words file carries one `word<TAB>year<TAB>count` record per line;
    /// a repeated `(word, year)` pair overwrites the earlier value. The
    /// counts file is comma-delimited with `year` and `count` as the first
    /// two fields; trailing fields (page and volume counts in the published
    /// totals format) are ignored. Blank lines are skipped in both files.
    /// Any malformed line aborts the load with a parse error naming the file
    /// and line number.
    pub fn load<P: AsRef<Path>>(words_path: P, counts_path: P) -> Result<Self> {
        let start = Instant::now();
        let words = load_word_records(words_path.as_ref())?;
        let totals = load_total_records(counts_path.as_ref())?;

        info!(
            "loaded corpus: {} words, {} total-count years in {:?}",
            words.len(),
            totals.len(),
            start.elapsed()
        );

        Ok(CorpusIndex { words, totals })
    }

    /// Build a corpus directly from in-memory records.
    ///
    /// Useful for embedders and tests. The same overwrite-latest rule as
    /// [`CorpusIndex::load`] applies to repeated `(word, year)` pairs.
    pub fn from_parts<W, T>(word_records: W, total_records: T) -> Self
    where
        W: IntoIterator<Item = (String, i32, f64)>,
        T: IntoIterator<Item = (i32, f64)>,
    {
        let mut words: AHashMap<String, TimeSeries> = AHashMap::new();
        for (word, year, count) in word_records {
            words.entry(word).or_default().insert(year, count);
        }

        let mut totals = TimeSeries::new();
        for (year, count) in total_records {
            totals.insert(year, count);
        }

        CorpusIndex { words, totals }
    }

    /// Check whether a word has any recorded counts.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words with recorded counts.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// First and last year covered by the totals series, if any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((self.totals.first_year()?, self.totals.last_year()?))
    }

    /// The history of `word` between `start_year` and `end_year`, inclusive
    /// of both ends, as a defensive copy. An unknown word yields an empty
    /// series, never an error.
    pub fn count_history(&self, word: &str, start_year: i32, end_year: i32) -> TimeSeries {
        match self.words.get(word) {
            Some(series) => TimeSeries::restricted(series, start_year, end_year),
            None => TimeSeries::new(),
        }
    }

    /// The full recorded history of `word` as a defensive copy. An unknown
    /// word yields an empty series.
    pub fn full_count_history(&self, word: &str) -> TimeSeries {
        self.count_history(word, MIN_YEAR, MAX_YEAR)
    }

    /// A defensive copy of the total number of recorded words per year
    /// across all volumes.
    pub fn total_count_history(&self) -> TimeSeries {
        TimeSeries::restricted(&self.totals, MIN_YEAR, MAX_YEAR)
    }

    /// The relative frequency per year of `word` between `start_year` and
    /// `end_year`: its count history divided by the identically-restricted
    /// totals. An unknown word yields an empty series; a totals gap inside
    /// the word's range surfaces [`LexigraphError::MissingYear`].
    pub fn weight_history(&self, word: &str, start_year: i32, end_year: i32) -> Result<TimeSeries> {
        let counts = self.count_history(word, start_year, end_year);
        if counts.is_empty() {
            return Ok(counts);
        }
        let totals = TimeSeries::restricted(&self.totals, start_year, end_year);
        counts.divided_by(&totals)
    }

    /// The relative frequency per year of `word` over its full recorded
    /// history.
    pub fn full_weight_history(&self, word: &str) -> Result<TimeSeries> {
        self.weight_history(word, MIN_YEAR, MAX_YEAR)
    }

    /// The summed relative frequency per year of all `words` between
    /// `start_year` and `end_year`. Words with no data in the range are
    /// skipped rather than raising an error.
    pub fn summed_weight_history(
        &self,
        words: &[String],
        start_year: i32,
        end_year: i32,
    ) -> Result<TimeSeries> {
        let mut sum = TimeSeries::new();
        for word in words {
            sum = sum.plus(&self.weight_history(word, start_year, end_year)?);
        }
        Ok(sum)
    }

    /// The summed relative frequency per year of all `words` over their full
    /// recorded histories.
    pub fn full_summed_weight_history(&self, words: &[String]) -> Result<TimeSeries> {
        self.summed_weight_history(words, MIN_YEAR, MAX_YEAR)
    }
}

/// Parse the tab-delimited words file into per-word series.
fn load_word_records(path: &Path) -> Result<AHashMap<String, TimeSeries>> {
    let file = File::open(path).map_err(|e| {
        LexigraphError::corpus(format!("Failed to open words file '{}': {e}", path.display()))
    })?;
    let reader = BufReader::new(file);

    let mut words: AHashMap<String, TimeSeries> = AHashMap::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let record = fields
            .next()
            .zip(fields.next())
            .zip(fields.next())
            .map(|((word, year), count)| (word, year, count));
        let Some((word, year, count)) = record else {
            return Err(malformed(path, number + 1, "expected word<TAB>year<TAB>count"));
        };

        let year: i32 = year
            .parse()
            .map_err(|_| malformed(path, number + 1, "year is not an integer"))?;
        let count: f64 = count
            .parse()
            .map_err(|_| malformed(path, number + 1, "count is not a number"))?;

        words.entry(word.to_string()).or_default().insert(year, count);
    }

    debug!("parsed {} word histories from '{}'", words.len(), path.display());
    Ok(words)
}

/// Parse the comma-delimited yearly totals file.
fn load_total_records(path: &Path) -> Result<TimeSeries> {
    let file = File::open(path).map_err(|e| {
        LexigraphError::corpus(format!("Failed to open counts file '{}': {e}", path.display()))
    })?;
    let reader = BufReader::new(file);

    let mut totals = TimeSeries::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let Some((year, count)) = fields.next().zip(fields.next()) else {
            return Err(malformed(path, number + 1, "expected year,count"));
        };

        let year: i32 = year
            .parse()
            .map_err(|_| malformed(path, number + 1, "year is not an integer"))?;
        let count: f64 = count
            .parse()
            .map_err(|_| malformed(path, number + 1, "count is not a number"))?;

        totals.insert(year, count);
    }

    debug!("parsed {} total-count years from '{}'", totals.len(), path.display());
    Ok(totals)
}

fn malformed(path: &Path, line: usize, reason: &str) -> LexigraphError {
    LexigraphError::parse(format!("{}:{line}: {reason}", path.display()))
}
