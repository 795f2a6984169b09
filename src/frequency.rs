//! Term-by-document frequency tables.

use crate::errors::{self, Result};
use crate::input::Document;
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

/// Sparse term counts per document, plus totals over the corpus.
#[derive(Debug)]
pub struct TermFrequencyTable {
    index: HashMap<String, usize>,
    counts: Vec<HashMap<String, u64>>,
    totals: HashMap<String, u64>,
}

impl TermFrequencyTable {
    /// Count whitespace-separated tokens of normalized documents.
    pub fn build(corpus: &[Document]) -> Result<TermFrequencyTable> {
        let mut index = HashMap::new();
        let mut counts = Vec::with_capacity(corpus.len());
        let mut totals: HashMap<String, u64> = HashMap::new();
        for (i, doc) in corpus.iter().enumerate() {
            if index.insert(doc.id.clone(), i).is_some() {
                return Err(errors::invalid_input(format!(
                    "duplicate document '{}'",
                    doc.id
                )));
            }
            let mut doc_counts: HashMap<String, u64> = HashMap::new();
            for token in doc.tokens() {
                *doc_counts.entry(token.to_owned()).or_default() += 1;
            }
            for (term, &count) in &doc_counts {
                *totals.entry(term.clone()).or_default() += count;
            }
            counts.push(doc_counts);
        }
        Ok(TermFrequencyTable {
            index,
            counts,
            totals,
        })
    }

    /// Distinct terms in alphabetical order.
    pub fn terms(&self) -> Vec<&str> {
        self.totals.keys().map(|t| t.as_str()).sorted().collect_vec()
    }

    pub fn total(&self, term: &str) -> u64 {
        self.totals.get(term).copied().unwrap_or(0)
    }

    pub fn total_tokens(&self) -> u64 {
        self.totals.values().sum()
    }

    pub fn count(&self, term: &str, document: &str) -> u64 {
        match self.index.get(document) {
            None => 0,
            Some(&i) => self.counts[i].get(term).copied().unwrap_or(0),
        }
    }

    /// All terms ranked by total count.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        rank(&self.totals)
    }

    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Term counts summed over the given documents.
    pub fn group_counts(&self, group: &[&str]) -> Result<HashMap<String, u64>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for id in group {
            let i = match self.index.get(*id) {
                None => return Err(errors::invalid_input(format!("unknown document '{id}'"))),
                Some(&i) => i,
            };
            for (term, &count) in &self.counts[i] {
                *counts.entry(term.clone()).or_default() += count;
            }
        }
        Ok(counts)
    }

    /// Share of each term among all tokens of the given documents.
    pub fn per_group_frequency(&self, group: &[&str]) -> Result<BTreeMap<String, f64>> {
        let counts = self.group_counts(group)?;
        Ok(ratios(&counts))
    }
}

/// Count descending, then term ascending.
pub fn rank(counts: &HashMap<String, u64>) -> Vec<(String, u64)> {
    counts
        .iter()
        .map(|(t, &c)| (t.clone(), c))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect_vec()
}

pub fn ratios(counts: &HashMap<String, u64>) -> BTreeMap<String, f64> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(t, &c)| (t.clone(), c as f64 / total as f64))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::InvalidInput;

    fn baby_corpus() -> Vec<Document> {
        vec![
            Document::new("a", Some(1985), &["baby baby night"]),
            Document::new("b", Some(1992), &["baby love"]),
        ]
    }

    #[test]
    fn baby_totals() {
        let table = TermFrequencyTable::build(&baby_corpus()).unwrap();
        assert_eq!(table.total("baby"), 3);
        assert_eq!(table.total("love"), 1);
        assert_eq!(table.total("moon"), 0);
        assert_eq!(table.count("baby", "a"), 2);
        assert_eq!(table.count("night", "b"), 0);
        assert_eq!(table.top_n(1), [("baby".to_owned(), 3)]);
        assert_eq!(table.terms(), ["baby", "love", "night"]);
        assert_eq!(table.total_tokens(), 5);
    }

    #[test]
    fn ties_are_alphabetical_and_order_independent() {
        let mut corpus = baby_corpus();
        let forward = TermFrequencyTable::build(&corpus).unwrap().ranked();
        corpus.reverse();
        let backward = TermFrequencyTable::build(&corpus).unwrap().ranked();
        assert_eq!(forward, backward);
        assert_eq!(
            forward,
            [
                ("baby".to_owned(), 3),
                ("love".to_owned(), 1),
                ("night".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn top_n_is_bounded() {
        let table = TermFrequencyTable::build(&baby_corpus()).unwrap();
        assert_eq!(table.top_n(10).len(), 3);
        assert!(table.top_n(0).is_empty());
    }

    #[test]
    fn group_ratios_sum_to_one() {
        let table = TermFrequencyTable::build(&baby_corpus()).unwrap();
        let ratios = table.per_group_frequency(&["a"]).unwrap();
        assert!((ratios["baby"] - 2.0 / 3.0).abs() < 1e-12);
        let sum: f64 = ratios.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        let ratios = table.per_group_frequency(&["a", "b"]).unwrap();
        assert!((ratios["baby"] - 0.6).abs() < 1e-12);
        assert!(table.per_group_frequency(&[]).unwrap().is_empty());
    }

    #[test]
    fn unknown_and_duplicate_documents() {
        let table = TermFrequencyTable::build(&baby_corpus()).unwrap();
        let e = table.per_group_frequency(&["c"]).unwrap_err();
        assert!(e.is::<InvalidInput>());
        let mut corpus = baby_corpus();
        corpus.push(Document::new("a", None, &["again"]));
        let e = TermFrequencyTable::build(&corpus).unwrap_err();
        assert!(e.is::<InvalidInput>());
    }
}
