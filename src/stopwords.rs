//! The fixed English stop-word set.
//!
//! Single words come from the NLTK English list shipped with the
//! `stop-words` crate; stop phrases are kept here.

use itertools::Itertools;
use std::collections::HashSet;
use stop_words::{LANGUAGE, get};

/// Multi-word stop phrases.
pub const PHRASES: &[&str] = &["come on"];

/// Stop words and stop phrases, matched against whole tokens.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
    phrases: Vec<Vec<String>>,
}

impl Stopwords {
    pub fn empty() -> Stopwords {
        Stopwords::default()
    }

    /// The English set, the stop phrases, and the given extra words.
    pub fn english<'a>(extra: impl IntoIterator<Item = &'a String>) -> Stopwords {
        let mut s = Stopwords::empty();
        s.words.extend(english_words());
        s.extend(extra.into_iter().map(|w| w.as_str()));
        for phrase in PHRASES {
            s.add_phrase(phrase);
        }
        s
    }

    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        self.words.extend(words.into_iter().map(|w| w.to_owned()));
    }

    pub fn add_phrase(&mut self, phrase: &str) {
        let words = phrase.split_whitespace().map(|w| w.to_owned()).collect_vec();
        match words.len() {
            0 => (),
            1 => self.extend(words.iter().map(|w| w.as_str())),
            _ => self.phrases.push(words),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop stop words and stop phrases from a token sequence.
    pub fn filter<'a>(&self, tokens: &[&'a str]) -> Vec<&'a str> {
        let mut kept = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if let Some(len) = self.phrase_at(&tokens[i..]) {
                i += len;
                continue;
            }
            if !self.contains(tokens[i]) {
                kept.push(tokens[i]);
            }
            i += 1;
        }
        kept
    }

    fn phrase_at(&self, tokens: &[&str]) -> Option<usize> {
        self.phrases
            .iter()
            .find(|p| p.len() <= tokens.len() && p.iter().zip(tokens).all(|(a, b)| a == b))
            .map(|p| p.len())
    }
}

fn english_words() -> impl Iterator<Item = String> {
    get(LANGUAGE::English).into_iter().map(|w| w.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn english_words_and_phrase() {
        let extra = vec!["yeah".to_owned()];
        let s = Stopwords::english(&extra);
        assert!(s.contains("and"));
        assert!(s.contains("yeah"));
        assert!(s.contains("you're"));
        assert!(!s.contains("love"));
        assert!(!s.contains("baby"));
        let tokens = ["come", "on", "baby", "come", "to", "me", "yeah"];
        assert_eq!(s.filter(&tokens), ["baby", "come"]);
    }

    #[test]
    fn tokens_with_punctuation_are_not_stopwords() {
        let extra: Vec<String> = vec![];
        let s = Stopwords::english(&extra);
        assert_eq!(s.filter(&["it,", "it"]), ["it,"]);
    }

    #[test]
    fn extra_words_add_to_english_list() {
        let extra: Vec<String> = vec![];
        let plain = Stopwords::english(&extra);
        assert!(!plain.contains("yeah"));
        assert!(plain.contains("the"));
        let extra = vec!["yeah".to_owned(), "oh".to_owned()];
        let more = Stopwords::english(&extra);
        assert!(more.contains("yeah"));
        assert!(more.contains("oh"));
        assert!(more.contains("the"));
    }
}
