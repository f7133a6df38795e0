use crate::search::Searcher;
use crate::utils::format_size;
use std::path::Path;
use std::time::Duration;

/// Display corpus and index statistics
pub fn show_stats(corpus_path: &Path, searcher: &Searcher, build_time: Duration) {
    let stats = searcher.stats();

    println!("Corpus Statistics");
    println!("=================");
    println!();
    println!("Corpus path:      {}", corpus_path.display());
    println!("Corpus size:      {}", format_size(stats.corpus_bytes as u64));
    println!("Paragraphs:       {}", stats.paragraph_count);

    if stats.paragraph_count > 0 {
        let avg = stats.corpus_bytes as f64 / stats.paragraph_count as f64;
        println!("Avg paragraph:    {:.1} bytes", avg);
    }

    let longest = longest_paragraph(searcher.paragraphs().offsets(), stats.corpus_bytes);
    println!("Longest para:     {}", format_size(longest as u64));

    println!();
    println!("Index Statistics");
    println!("================");
    println!();
    println!("Suffixes:         {}", stats.index.suffix_count);
    println!("Index memory:     {}", format_size(stats.index.memory_bytes));
    println!("Build time:       {:.2?}", build_time);
}

/// Length of the longest paragraph given sorted start offsets
fn longest_paragraph(offsets: &[usize], corpus_len: usize) -> usize {
    offsets
        .iter()
        .zip(offsets.iter().skip(1).chain(std::iter::once(&corpus_len)))
        .map(|(&open, &close)| close.saturating_sub(open))
        .max()
        .unwrap_or(0)
}
