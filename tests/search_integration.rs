//! End-to-end tests: load a corpus file from disk, build the index, search.

use shakesearch::corpus::{Corpus, fold_byte};
use shakesearch::search::Searcher;
use shakesearch::search::excerpt::{EXCERPT_CLOSE, EXCERPT_OPEN, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A few paragraphs with Windows line endings, blank lines and mixed case
const CORPUS: &str = "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK\r\n\
\r\n\
HAMLET. To be, or not to be, that is the question:\r\n\
Whether 'tis nobler in the mind to suffer\r\n\
\r\n\
OPHELIA. Good my lord,\r\n\
How does your honour for this many a day?\r\n\
\r\n\
HAMLET. Alas, poor Yorick! I knew him, Horatio.";

fn write_corpus(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create corpus file");
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn load(path: &Path) -> Searcher {
    Searcher::load(path).expect("Failed to load corpus")
}

/// Every offset where `needle` occurs, ignoring ASCII case
fn brute_force(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    (0..=haystack.len() - needle.len())
        .filter(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
        .collect()
}

#[test]
fn test_loaded_corpus_is_aligned() {
    let file = write_corpus(CORPUS);
    let corpus = Corpus::open(file.path()).unwrap();

    assert_eq!(corpus.text(), CORPUS.as_bytes());
    assert_eq!(corpus.lowered().len(), corpus.text().len());
    for (k, &b) in corpus.text().iter().enumerate() {
        assert_eq!(corpus.lowered()[k], fold_byte(b), "offset {}", k);
    }

    let offsets = corpus.paragraphs().offsets();
    assert_eq!(offsets[0], 0);
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert!(offsets.iter().all(|&o| o <= corpus.len()));
}

#[test]
fn test_every_occurrence_is_found_and_highlighted() {
    let file = write_corpus(CORPUS);
    let searcher = load(file.path());

    for query in ["hamlet", "To Be", "the", "o", "yorick!", ":\r\nwhether", "DAY?"] {
        let expected = brute_force(CORPUS.as_bytes(), query.as_bytes());
        let mut found: Vec<usize> = searcher.find(query, None).iter().map(|e| e.start).collect();
        found.sort_unstable();
        assert_eq!(found, expected, "query {:?}", query);

        for excerpt in searcher.find(query, None) {
            let original = &CORPUS.as_bytes()[excerpt.start..excerpt.start + query.len()];
            assert_eq!(excerpt.matched(), original);
            assert!(excerpt.paragraph.contains(excerpt.start));
        }
    }
}

#[test]
fn test_excerpt_is_the_enclosing_paragraph() {
    let file = write_corpus(CORPUS);
    let searcher = load(file.path());

    let results = searcher.search("yorick");
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0],
        format!(
            "{EXCERPT_OPEN}HAMLET. Alas, poor {HIGHLIGHT_OPEN}Yorick{HIGHLIGHT_CLOSE}! I knew him, Horatio.{EXCERPT_CLOSE}"
        )
    );

    let results = searcher.search("good my lord");
    assert_eq!(results.len(), 1);
    // Every line break starts a new paragraph
    assert_eq!(
        results[0],
        format!("{EXCERPT_OPEN}OPHELIA. <b>Good my lord</b>,\r\n{EXCERPT_CLOSE}")
    );
}

#[test]
fn test_first_byte_match() {
    let file = write_corpus(CORPUS);
    let searcher = load(file.path());

    let excerpts = searcher.find("the tragedy", None);
    assert_eq!(excerpts.len(), 1);
    assert_eq!(excerpts[0].start, 0);
    assert_eq!(excerpts[0].paragraph.open, 0);
    assert_eq!(excerpts[0].matched(), b"THE TRAGEDY");
}

#[test]
fn test_missing_query_and_idempotence() {
    let file = write_corpus(CORPUS);
    let searcher = load(file.path());

    assert!(searcher.search("polonius").is_empty());
    assert_eq!(searcher.search("hamlet"), searcher.search("HAMLET"));
    assert_eq!(searcher.search("lord"), searcher.search("lord"));
}

#[test]
fn test_concurrent_queries_share_one_searcher() {
    let file = write_corpus(CORPUS);
    let searcher = std::sync::Arc::new(load(file.path()));
    let expected = searcher.search("the");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let searcher = std::sync::Arc::clone(&searcher);
            std::thread::spawn(move || searcher.search("the"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_unreadable_corpus_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let result = Searcher::load(&dir.path().join("missing.txt"));
    assert!(result.is_err());
}

#[test]
fn test_non_utf8_corpus() {
    let mut bytes = b"Caf\xe9 au lait\r\nCAF\xc9 noir".to_vec();
    bytes.push(b'.');
    let searcher = Searcher::new(Corpus::from_bytes(&bytes));

    let excerpts = searcher.find("caf", None);
    assert_eq!(excerpts.len(), 2);
    for result in searcher.search("caf") {
        assert!(result.starts_with(EXCERPT_OPEN));
    }
}
