//! Integration tests for hyponym queries over on-disk data files.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use lexigraph::error::LexigraphError;
use lexigraph::prelude::*;
use tempfile::TempDir;

/// Write the shared taxonomy and corpus fixture files.
///
/// The taxonomy is:
///
/// ```text
/// 0 thing/entity -> 1 animal -> 2 dog/domestic_dog -> 5 puppy
///                               3 cat -> 4 feline/cat
/// ```
fn write_fixtures(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf, PathBuf) {
    let synsets = dir.path().join("synsets.txt");
    let hyponyms = dir.path().join("hyponyms.txt");
    let words = dir.path().join("words.tsv");
    let counts = dir.path().join("total_counts.csv");

    // Synset id 0 is split across two lines; membership must merge.
    // The third field is a gloss and must be ignored.
    fs::write(
        &synsets,
        "0,thing,that which exists\n\
         1,animal,a living organism\n\
         2,dog domestic_dog,a domesticated canine\n\
         3,cat,a small feline\n\
         4,feline cat,cats collectively\n\
         5,puppy,a young dog\n\
         0,entity\n",
    )
    .unwrap();

    fs::write(&hyponyms, "0,1\n1,2,3\n2,5\n3,4\n").unwrap();

    fs::write(
        &words,
        "dog\t2000\t5\ndog\t2001\t10\ncat\t2000\t3\npuppy\t2005\t2\n",
    )
    .unwrap();

    // The 2001 record carries extra fields, as the published totals do.
    fs::write(&counts, "2000,100\n2001,200,99,9\n2005,50\n").unwrap();

    (synsets, hyponyms, words, counts)
}

fn build_searcher(dir: &TempDir) -> HyponymSearcher {
    let (synsets, hyponyms, words, counts) = write_fixtures(dir);
    let taxonomy = Taxonomy::load(&synsets, &hyponyms).unwrap();
    let corpus = CorpusIndex::load(&words, &counts).unwrap();
    HyponymSearcher::new(Arc::new(taxonomy), Arc::new(corpus))
}

#[test]
fn test_unranked_query_returns_all_common_hyponyms_sorted() {
    let dir = TempDir::new().unwrap();
    let searcher = build_searcher(&dir);

    let query = HyponymQuery::new(["animal"]);
    let result = searcher.search(&query).unwrap();

    assert_eq!(
        result,
        vec!["animal", "cat", "dog", "domestic_dog", "feline", "puppy"]
    );
}

#[test]
fn test_ranked_query_keeps_highest_summed_counts() {
    let dir = TempDir::new().unwrap();
    let searcher = build_searcher(&dir);

    // dog sums to 15 over 2000-2001, cat to 3; words without corpus
    // entries are discarded
    let query = HyponymQuery::new(["animal"]).with_years(2000, 2001).with_limit(1);
    assert_eq!(searcher.search(&query).unwrap(), vec!["dog"]);

    let query = HyponymQuery::new(["animal"]).with_years(2000, 2001).with_limit(10);
    assert_eq!(searcher.search(&query).unwrap(), vec!["cat", "dog"]);
}

#[test]
fn test_ranking_window_excludes_out_of_range_counts() {
    let dir = TempDir::new().unwrap();
    let searcher = build_searcher(&dir);

    // Only puppy has counts in 2005
    let query = HyponymQuery::new(["animal"]).with_years(2005, 2005).with_limit(10);
    assert_eq!(searcher.search(&query).unwrap(), vec!["puppy"]);
}

#[test]
fn test_intersection_across_words() {
    let dir = TempDir::new().unwrap();
    let searcher = build_searcher(&dir);

    let query = HyponymQuery::new(["animal", "cat"]);
    let result = searcher.search(&query).unwrap();

    assert_eq!(result, vec!["cat", "feline"]);
}

#[test]
fn test_merged_synset_membership_is_queryable() {
    let dir = TempDir::new().unwrap();
    let searcher = build_searcher(&dir);

    // "entity" came from the second record for synset 0
    let hyponyms = searcher.taxonomy().hyponym_words_of("entity");
    assert!(hyponyms.contains("thing"));
    assert!(hyponyms.contains("puppy"));

    let query = HyponymQuery::new(["entity"]);
    let result = searcher.search(&query).unwrap();
    assert!(result.contains(&"dog".to_string()));
}

#[test]
fn test_unknown_word_yields_empty_result() {
    let dir = TempDir::new().unwrap();
    let searcher = build_searcher(&dir);

    let query = HyponymQuery::new(["animal", "spaceship"]);
    assert!(searcher.search(&query).unwrap().is_empty());

    // Matching is case-sensitive
    let query = HyponymQuery::new(["Animal"]);
    assert!(searcher.search(&query).unwrap().is_empty());
}

#[test]
fn test_empty_word_list_is_a_typed_error() {
    let dir = TempDir::new().unwrap();
    let searcher = build_searcher(&dir);

    let query = HyponymQuery::new(Vec::<String>::new());
    match searcher.search(&query) {
        Err(LexigraphError::EmptyQuery) => {}
        other => panic!("expected EmptyQuery, got {other:?}"),
    }
}

#[test]
fn test_malformed_synset_record_fails_load() {
    let dir = TempDir::new().unwrap();
    let synsets = dir.path().join("synsets.txt");
    let hyponyms = dir.path().join("hyponyms.txt");

    fs::write(&synsets, "not-a-number,thing\n").unwrap();
    fs::write(&hyponyms, "").unwrap();

    match Taxonomy::load(&synsets, &hyponyms) {
        Err(LexigraphError::Parse(message)) => {
            assert!(message.contains("synsets.txt:1"));
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_malformed_hyponym_record_fails_load() {
    let dir = TempDir::new().unwrap();
    let synsets = dir.path().join("synsets.txt");
    let hyponyms = dir.path().join("hyponyms.txt");

    fs::write(&synsets, "1,thing\n").unwrap();
    fs::write(&hyponyms, "1,two\n").unwrap();

    match Taxonomy::load(&synsets, &hyponyms) {
        Err(LexigraphError::Parse(message)) => {
            assert!(message.contains("hyponyms.txt:1"));
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}
