#![no_main]

use libfuzzer_sys::fuzz_target;
use shakesearch::corpus::{Corpus, fold_byte};

fuzz_target!(|data: &[u8]| {
    // Loading arbitrary bytes must keep the folded copy aligned and the
    // boundaries sorted and in range
    let corpus = Corpus::from_bytes(data);
    assert_eq!(corpus.lowered().len(), data.len());
    assert!(corpus.text().iter().zip(corpus.lowered()).all(|(&a, &b)| fold_byte(a) == b));

    let offsets = corpus.paragraphs().offsets();
    assert_eq!(offsets.first(), Some(&0));
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert!(offsets.iter().all(|&o| o <= data.len()));
});
