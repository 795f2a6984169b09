use crate::decades::{self, Decade};
use crate::input::Document;
use itertools::Itertools;
use log::info;
use std::collections::HashSet;

pub fn statistics(corpus: &[Document]) {
    let lines: usize = corpus.iter().map(|d| d.lines.len()).sum();
    let blank: usize = corpus
        .iter()
        .map(|d| d.lines.len() - d.nonblank_lines().count())
        .sum();
    let undated = corpus.iter().filter(|d| d.year.is_none()).count();
    info!(target: "songlex", "before normalization: documents: {}", corpus.len());
    info!(target: "songlex", "before normalization: lines: {} ({} blank)", lines, blank);
    match decades::get_years(corpus) {
        None => info!(target: "songlex", "years in input data: none"),
        Some(years) => info!(
            target: "songlex",
            "years in input data: {}",
            decades::pretty_years(&years)
        ),
    }
    let found = corpus
        .iter()
        .filter_map(|d| d.year)
        .map(Decade::of)
        .unique()
        .sorted()
        .collect_vec();
    info!(target: "songlex", "decades: {}", decades::pretty_decades(&found));
    if undated > 0 {
        info!(target: "songlex", "documents without a year: {}", undated);
    }
}

pub fn post_statistics(normalized: &[Document]) {
    let mut terms = HashSet::new();
    let mut tokencount = 0;
    for doc in normalized {
        for token in doc.tokens() {
            tokencount += 1;
            terms.insert(token);
        }
    }
    let empty = normalized.iter().filter(|d| d.is_empty()).count();
    info!(target: "songlex", "after normalization: tokens: {}", tokencount);
    info!(target: "songlex", "after normalization: distinct terms: {}", terms.len());
    if empty > 0 {
        info!(target: "songlex", "after normalization: empty documents: {}", empty);
    }
}
