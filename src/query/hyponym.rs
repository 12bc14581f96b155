//! Hyponym query over the taxonomy, ranked by corpus frequency.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};
use crate::ngram::corpus::CorpusIndex;
use crate::ngram::time_series::{MAX_YEAR, MIN_YEAR};
use crate::query::collector::TopWordsCollector;
use crate::taxonomy::taxonomy::Taxonomy;

/// A request for the common hyponyms of a set of words.
///
/// With `k == 0` the answer is every common hyponym; with `k > 0` only the
/// `k` candidates with the largest summed corpus counts over
/// `[start_year, end_year]` survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyponymQuery {
    /// The input words whose hyponym sets are intersected.
    pub words: Vec<String>,
    /// First year of the ranking window, inclusive.
    pub start_year: i32,
    /// Last year of the ranking window, inclusive.
    pub end_year: i32,
    /// Result-count limit; `0` disables ranking and returns everything.
    pub k: usize,
}

impl HyponymQuery {
    /// Create a new query over the full year domain with ranking disabled.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        HyponymQuery {
            words: words.into_iter().map(Into::into).collect(),
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
            k: 0,
        }
    }

    /// Set the ranking window.
    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Set the result-count limit.
    pub fn with_limit(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

/// Executes hyponym queries against shared read-only indices.
///
/// Holds the taxonomy and the corpus by shared reference; queries allocate
/// fresh sets and never mutate either index.
#[derive(Debug, Clone)]
pub struct HyponymSearcher {
    taxonomy: Arc<Taxonomy>,
    corpus: Arc<CorpusIndex>,
}

impl HyponymSearcher {
    /// Create a new searcher over the given indices.
    pub fn new(taxonomy: Arc<Taxonomy>, corpus: Arc<CorpusIndex>) -> Self {
        HyponymSearcher { taxonomy, corpus }
    }

    /// The taxonomy this searcher consults.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// The corpus this searcher ranks with.
    pub fn corpus(&self) -> &CorpusIndex {
        &self.corpus
    }

    /// Answer a hyponym query.
    ///
    /// Fails with [`LexigraphError::EmptyQuery`] when the query carries no
    /// words. If any word has no synset membership the result is empty:
    /// an intersection involving it cannot contain anything, so the query
    /// short-circuits before traversal. The returned words are always
    /// sorted lexicographically ascending.
    pub fn search(&self, query: &HyponymQuery) -> Result<Vec<String>> {
        if query.words.is_empty() {
            return Err(LexigraphError::EmptyQuery);
        }
        if query
            .words
            .iter()
            .any(|word| !self.taxonomy.contains_word(word))
        {
            return Ok(Vec::new());
        }

        let common = self.taxonomy.common_hyponyms(&query.words)?;
        debug!(
            "query {:?}: {} common hyponyms before ranking",
            query.words,
            common.len()
        );

        if query.k == 0 {
            // BTreeSet iterates in ascending order
            return Ok(common.into_iter().collect());
        }

        let mut collector = TopWordsCollector::new(query.k);
        for word in common {
            let count = self
                .corpus
                .count_history(&word, query.start_year, query.end_year)
                .total();
            collector.collect(word, count);
        }
        Ok(collector.into_sorted_words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher() -> HyponymSearcher {
        let taxonomy = Taxonomy::from_records(
            [
                (1, vec!["animal".to_string()]),
                (2, vec!["dog".to_string()]),
                (3, vec!["cat".to_string()]),
            ],
            [(1, vec![2, 3])],
        );
        let corpus = CorpusIndex::from_parts(
            [
                ("dog".to_string(), 2000, 5.0),
                ("dog".to_string(), 2001, 10.0),
                ("cat".to_string(), 2000, 3.0),
            ],
            [(2000, 100.0), (2001, 200.0)],
        );
        HyponymSearcher::new(Arc::new(taxonomy), Arc::new(corpus))
    }

    #[test]
    fn test_unranked_query_returns_all_sorted() {
        let searcher = searcher();
        let query = HyponymQuery::new(["animal"]);

        let result = searcher.search(&query).unwrap();
        assert_eq!(result, vec!["animal", "cat", "dog"]);
    }

    #[test]
    fn test_ranked_query_keeps_highest_summed_count() {
        let searcher = searcher();
        let query = HyponymQuery::new(["animal"]).with_years(2000, 2001).with_limit(1);

        // dog sums to 15, cat to 3
        let result = searcher.search(&query).unwrap();
        assert_eq!(result, vec!["dog"]);
    }

    #[test]
    fn test_ranked_query_discards_words_without_counts() {
        let searcher = searcher();
        // "animal" is a common hyponym of itself but has no corpus entry
        let query = HyponymQuery::new(["animal"]).with_years(2000, 2001).with_limit(10);

        let result = searcher.search(&query).unwrap();
        assert_eq!(result, vec!["cat", "dog"]);
    }

    #[test]
    fn test_unknown_word_short_circuits_to_empty() {
        let searcher = searcher();
        let query = HyponymQuery::new(["animal", "spaceship"]);

        let result = searcher.search(&query).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_word_list_is_typed_error() {
        let searcher = searcher();
        let query = HyponymQuery::new(Vec::<String>::new());

        match searcher.search(&query) {
            Err(LexigraphError::EmptyQuery) => {}
            other => panic!("expected EmptyQuery, got {other:?}"),
        }
    }

    #[test]
    fn test_ranking_window_restricts_sums() {
        let searcher = searcher();
        // In 2000 alone, dog sums to 5 and cat to 3; both positive
        let query = HyponymQuery::new(["animal"]).with_years(2000, 2000).with_limit(2);

        let result = searcher.search(&query).unwrap();
        assert_eq!(result, vec!["cat", "dog"]);
    }
}
