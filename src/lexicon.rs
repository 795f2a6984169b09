//! Emotion and valence lexicons.
//!
//! Both lexicons are loaded once from tab-separated data files and are
//! read-only afterwards.

use crate::emotion::Emotion;
use crate::errors::{self, Result};
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Word lookups used by the sentiment scorer.
pub trait LexiconProvider: Sync {
    /// Emotion categories listed for this word; empty if none.
    fn emotions_of(&self, word: &str) -> &[Emotion];

    /// Valence of a word or a space-separated phrase.
    fn valence_of(&self, word: &str) -> Option<f64>;

    /// Number of words in the longest valence phrase.
    fn max_phrase_words(&self) -> usize {
        1
    }
}

#[derive(Debug, Default)]
pub struct Lexicon {
    emotions: HashMap<String, Vec<Emotion>>,
    valence: HashMap<String, f64>,
    max_phrase_words: usize,
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    /// Load the lexicon files that are given.
    pub fn load(emotions: Option<&Path>, valence: Option<&Path>) -> Result<Lexicon> {
        let mut lexicon = Lexicon::new();
        if let Some(path) = emotions {
            lexicon.read_emotions(&read_file(path)?, &path.display().to_string())?;
        }
        if let Some(path) = valence {
            lexicon.read_valence(&read_file(path)?, &path.display().to_string())?;
        }
        debug!(
            target: "songlex",
            "lexicon: {} emotion words, {} valence entries",
            lexicon.emotions.len(),
            lexicon.valence.len()
        );
        Ok(lexicon)
    }

    pub fn insert_emotion(&mut self, word: &str, emotion: Emotion) {
        let emotions = self.emotions.entry(word.to_lowercase()).or_default();
        if !emotions.contains(&emotion) {
            emotions.push(emotion);
            emotions.sort();
        }
    }

    pub fn insert_valence(&mut self, phrase: &str, score: f64) {
        let key = phrase.split_whitespace().join(" ").to_lowercase();
        let words = key.split(' ').count();
        self.max_phrase_words = self.max_phrase_words.max(words);
        self.valence.insert(key, score);
    }

    /// Parse a word-emotion association table: `word<TAB>category<TAB>0|1`.
    ///
    /// Rows for the `positive` and `negative` polarity categories are skipped.
    pub fn read_emotions(&mut self, data: &str, source: &str) -> Result<()> {
        for (lineno, line) in data_lines(data) {
            let fields = line.split('\t').collect_vec();
            if fields.len() != 3 {
                return Err(errors::invalid_input(format!(
                    "{source}:{lineno}: expected 3 tab-separated fields, got {}",
                    fields.len()
                )));
            }
            let (word, category, flag) = (fields[0].trim(), fields[1].trim(), fields[2].trim());
            match flag {
                "0" => continue,
                "1" => (),
                _ => {
                    return Err(errors::invalid_input(format!(
                        "{source}:{lineno}: association flag should be 0 or 1, got '{flag}'"
                    )));
                }
            }
            match category.parse::<Emotion>() {
                Ok(emotion) => self.insert_emotion(word, emotion),
                Err(()) if category == "positive" || category == "negative" => (),
                Err(()) => {
                    return Err(errors::invalid_input(format!(
                        "{source}:{lineno}: unknown emotion category '{category}'"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse a valence table: `word or phrase<TAB>score`, further columns ignored.
    pub fn read_valence(&mut self, data: &str, source: &str) -> Result<()> {
        for (lineno, line) in data_lines(data) {
            let mut fields = line.split('\t');
            let phrase = fields.next().unwrap_or("").trim();
            let score = fields.next().map(str::trim);
            let score = match score.map(str::parse::<f64>) {
                Some(Ok(score)) if !phrase.is_empty() => score,
                _ => {
                    return Err(errors::invalid_input(format!(
                        "{source}:{lineno}: expected 'phrase<TAB>score', got '{line}'"
                    )));
                }
            };
            if !score.is_finite() {
                return Err(errors::invalid_input(format!(
                    "{source}:{lineno}: score of '{phrase}' is not a finite number"
                )));
            }
            self.insert_valence(phrase, score);
        }
        Ok(())
    }
}

impl LexiconProvider for Lexicon {
    fn emotions_of(&self, word: &str) -> &[Emotion] {
        self.emotions.get(word).map(|e| e.as_slice()).unwrap_or(&[])
    }

    fn valence_of(&self, word: &str) -> Option<f64> {
        self.valence.get(word).copied()
    }

    fn max_phrase_words(&self) -> usize {
        self.max_phrase_words.max(1)
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(errors::input_not_found(path));
    }
    Ok(fs::read_to_string(path)?)
}

/// Non-blank, non-comment lines with 1-based line numbers.
pub(crate) fn data_lines(data: &str) -> impl Iterator<Item = (usize, &str)> {
    data.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty() && !l.starts_with('#'))
}
