#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::corpus::Corpus;
use shakesearch::search::Searcher;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    corpus: &'a [u8],
    query: &'a str,
    limit: Option<u8>,
}

fuzz_target!(|input: Input<'_>| {
    // Searching must never panic, whatever the corpus or query
    let searcher = Searcher::new(Corpus::from_bytes(input.corpus));
    let limit = input.limit.map(usize::from);
    let results = searcher.search_with_limit(input.query, limit);

    if let Some(limit) = limit {
        assert!(results.len() <= limit);
    }
    assert_eq!(results.len(), searcher.find(input.query, limit).len());
});
