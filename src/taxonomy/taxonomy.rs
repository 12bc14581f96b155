//! Word-level taxonomy built from synset and hyponym records.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;
use log::{debug, info};

use crate::error::{LexigraphError, Result};
use crate::taxonomy::graph::{SynsetId, TaxonomyGraph};

/// A taxonomy of synsets and the words they contain.
///
/// Owns the hypernym-to-hyponym graph, the synset membership table, and a
/// reverse index from word to the synsets containing it. Built once at load
/// time and read-only thereafter; queries only derive new values.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    graph: TaxonomyGraph,
    /// Synset id to member words. A repeated id in the input merges its
    /// membership, so one entry may accumulate words from several records.
    members: AHashMap<SynsetId, Vec<String>>,
    /// Word to the ids of every synset containing it.
    word_index: AHashMap<String, Vec<SynsetId>>,
}

impl Taxonomy {
    /// Load a taxonomy from a synsets file and a hyponyms file.
    ///
    /// Synset lines are `id,space-separated words` with an optional
    /// comma-separated gloss after the word list, which is ignored. A synset
    /// id appearing on more than one line merges its membership (union, not
    /// overwrite). Hyponym lines are `hypernymId,hyponymId,...`, producing
    /// one edge per listed hyponym. Blank lines are skipped; any other
    /// malformed line aborts the load with a parse error naming the file and
    /// line number.
    pub fn load<P: AsRef<Path>>(synsets_path: P, hyponyms_path: P) -> Result<Self> {
        let start = Instant::now();
        let mut taxonomy = Taxonomy::default();

        taxonomy.load_synsets(synsets_path.as_ref())?;
        taxonomy.load_hyponyms(hyponyms_path.as_ref())?;

        info!(
            "loaded taxonomy: {} synsets, {} words, {} edges in {:?}",
            taxonomy.synset_count(),
            taxonomy.word_count(),
            taxonomy.graph.edge_count(),
            start.elapsed()
        );

        Ok(taxonomy)
    }

    /// Build a taxonomy directly from in-memory records.
    ///
    /// The same membership-merge rule as [`Taxonomy::load`] applies to a
    /// synset id appearing in more than one record.
    pub fn from_records<S, E>(synsets: S, edges: E) -> Self
    where
        S: IntoIterator<Item = (SynsetId, Vec<String>)>,
        E: IntoIterator<Item = (SynsetId, Vec<SynsetId>)>,
    {
        let mut taxonomy = Taxonomy::default();
        for (id, words) in synsets {
            taxonomy.add_synset(id, words);
        }
        for (hypernym, hyponyms) in edges {
            for hyponym in hyponyms {
                taxonomy.graph.add_edge(hypernym, hyponym);
            }
        }
        taxonomy
    }

    fn add_synset(&mut self, id: SynsetId, words: Vec<String>) {
        for word in &words {
            let ids = self.word_index.entry(word.clone()).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        self.members.entry(id).or_default().extend(words);
    }

    fn load_synsets(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|e| {
            LexigraphError::taxonomy(format!(
                "Failed to open synsets file '{}': {e}",
                path.display()
            ))
        })?;
        let reader = BufReader::new(file);

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let mut fields = line.splitn(3, ',');
            let Some((id, word_list)) = fields.next().zip(fields.next()) else {
                return Err(malformed(path, number + 1, "expected id,word-list"));
            };
            let id: SynsetId = id
                .parse()
                .map_err(|_| malformed(path, number + 1, "synset id is not a non-negative integer"))?;

            let words: Vec<String> = word_list.split(' ').map(str::to_string).collect();
            self.add_synset(id, words);
        }

        debug!("parsed {} synsets from '{}'", self.members.len(), path.display());
        Ok(())
    }

    fn load_hyponyms(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|e| {
            LexigraphError::taxonomy(format!(
                "Failed to open hyponyms file '{}': {e}",
                path.display()
            ))
        })?;
        let reader = BufReader::new(file);

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split(',');
            let hypernym: SynsetId = fields
                .next()
                .unwrap_or_default()
                .parse()
                .map_err(|_| malformed(path, number + 1, "hypernym id is not a non-negative integer"))?;

            for field in fields {
                let hyponym: SynsetId = field.parse().map_err(|_| {
                    malformed(path, number + 1, "hyponym id is not a non-negative integer")
                })?;
                self.graph.add_edge(hypernym, hyponym);
            }
        }

        debug!("parsed {} edges from '{}'", self.graph.edge_count(), path.display());
        Ok(())
    }

    /// The underlying synset graph.
    pub fn graph(&self) -> &TaxonomyGraph {
        &self.graph
    }

    /// Number of distinct synset ids.
    pub fn synset_count(&self) -> usize {
        self.members.len()
    }

    /// Number of distinct member words.
    pub fn word_count(&self) -> usize {
        self.word_index.len()
    }

    /// Check whether any synset contains `word`.
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// The ids of every synset whose membership contains `word`, matched
    /// exactly and case-sensitively. Empty for unknown words.
    pub fn synsets_containing(&self, word: &str) -> &[SynsetId] {
        self.word_index.get(word).map_or(&[], Vec::as_slice)
    }

    /// The member words of the synset `id`. Empty for unknown ids.
    pub fn members(&self, id: SynsetId) -> &[String] {
        self.members.get(&id).map_or(&[], Vec::as_slice)
    }

    /// All hyponym words of `word`: the union, over every synset containing
    /// `word`, of the member words of every synset reachable from it.
    ///
    /// Reachability is reflexive, so the word's own synonyms (and the word
    /// itself) are included. A word with no synset membership yields an
    /// empty set.
    pub fn hyponym_words_of(&self, word: &str) -> BTreeSet<String> {
        let mut words = BTreeSet::new();
        for &id in self.synsets_containing(word) {
            for reached in self.graph.reachable_from(id) {
                words.extend(self.members(reached).iter().cloned());
            }
        }
        words
    }

    /// The hyponym words shared by every word in `words`.
    ///
    /// Fails with [`LexigraphError::EmptyQuery`] for an empty slice; that is
    /// a distinct condition from "words given but none recognized", which
    /// yields an empty set.
    pub fn common_hyponyms(&self, words: &[String]) -> Result<BTreeSet<String>> {
        let Some((first, rest)) = words.split_first() else {
            return Err(LexigraphError::EmptyQuery);
        };

        let mut common = self.hyponym_words_of(first);
        for word in rest {
            let hyponyms = self.hyponym_words_of(word);
            common.retain(|w| hyponyms.contains(w));
        }
        Ok(common)
    }
}

fn malformed(path: &Path, line: usize, reason: &str) -> LexigraphError {
    LexigraphError::parse(format!("{}:{line}: {reason}", path.display()))
}
