//! Text normalization: raw lyric lines to canonical token sequences.
//!
//! Normalization is a fixed, ordered list of [Stage]s. Each stage is a pure
//! function from a line of text to a new line of text, and later stages
//! assume that the earlier ones have already run.
//!
//! Two quirks are kept on purpose so that results stay comparable with
//! earlier runs: `in'` is replaced by `ing` anywhere in the text, also inside
//! longer words, and a lone `c` token left over from contractions is removed
//! after punctuation stripping.

use crate::errors::{self, Result};
use crate::input::Document;
use crate::lemmatizer::Lemmatizer;
use crate::stopwords::Stopwords;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filler words removed by default in addition to the English stop words.
pub const FILLER_WORDS: &[&str] = &[
    "yeah", "oh", "ooh", "uh", "ah", "hey", "la", "na", "whoa", "woah",
];

/// Typographic punctuation removed together with ASCII punctuation.
const TYPOGRAPHIC_PUNCTUATION: &[char] = &[
    '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2013}', '\u{2014}', '\u{2026}', '\u{00ab}',
    '\u{00bb}', '\u{00a1}', '\u{00bf}',
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NormalizationConfig {
    /// Remove English stop words, stop phrases and extra stop words.
    pub remove_stopwords: bool,
    /// Additional words to treat as stop words.
    pub extra_stopwords: BTreeSet<String>,
    /// Replace words by their lemmas. Implies stop-word removal.
    pub lemmatize: bool,
}

impl Default for NormalizationConfig {
    fn default() -> NormalizationConfig {
        NormalizationConfig {
            remove_stopwords: true,
            extra_stopwords: FILLER_WORDS.iter().map(|&w| w.to_owned()).collect(),
            lemmatize: false,
        }
    }
}

impl NormalizationConfig {
    pub fn removes_stopwords(&self) -> bool {
        self.remove_stopwords || self.lemmatize
    }

    /// The same configuration with lemmatization switched on.
    pub fn lemmatized(&self) -> NormalizationConfig {
        NormalizationConfig {
            lemmatize: true,
            ..self.clone()
        }
    }

    /// Default configuration modified by `key=value` options.
    pub fn from_options(options: &[String]) -> Result<NormalizationConfig> {
        let mut config = NormalizationConfig::default();
        for option in options {
            config.set_option(option)?;
        }
        Ok(config)
    }

    /// Apply one `key=value` option.
    ///
    /// Known keys are `remove_stopwords`, `lemmatize` and `extra_stopwords`;
    /// the last one takes a comma-separated list that replaces the current set.
    pub fn set_option(&mut self, option: &str) -> Result<()> {
        let parts = option.splitn(2, '=').collect_vec();
        if parts.len() != 2 {
            return Err(errors::invalid_argument(format!(
                "option should be of the form 'key=value', got '{option}'"
            )));
        }
        let (key, value) = (parts[0].trim(), parts[1].trim());
        match key {
            "remove_stopwords" => self.remove_stopwords = parse_bool(key, value)?,
            "lemmatize" => self.lemmatize = parse_bool(key, value)?,
            "extra_stopwords" => {
                self.extra_stopwords = value
                    .split(',')
                    .map(|w| w.trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
            }
            _ => return Err(errors::unknown_config_option(key)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(errors::invalid_argument(format!(
            "option '{key}' expects true or false, got '{value}'"
        ))),
    }
}

/// Normalization stages in the order in which they are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Abbreviations,
    CaseFolding,
    Digits,
    Stopwords,
    Punctuation,
    Whitespace,
    ExtraStopwords,
    Lemmatization,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Abbreviations,
        Stage::CaseFolding,
        Stage::Digits,
        Stage::Stopwords,
        Stage::Punctuation,
        Stage::Whitespace,
        Stage::ExtraStopwords,
        Stage::Lemmatization,
    ];
}

pub struct Normalizer<'a> {
    config: &'a NormalizationConfig,
    stopwords: Stopwords,
    extra_stopwords: Stopwords,
    lemmatizer: &'a dyn Lemmatizer,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a NormalizationConfig, lemmatizer: &'a dyn Lemmatizer) -> Normalizer<'a> {
        let mut extra_stopwords = Stopwords::empty();
        extra_stopwords.extend(config.extra_stopwords.iter().map(|w| w.as_str()));
        extra_stopwords.extend(["c"]);
        Normalizer {
            config,
            stopwords: Stopwords::english(&config.extra_stopwords),
            extra_stopwords,
            lemmatizer,
        }
    }

    /// The stages this configuration runs, in order.
    pub fn stages(&self) -> Vec<Stage> {
        Stage::ALL
            .iter()
            .copied()
            .filter(|&s| self.enabled(s))
            .collect_vec()
    }

    fn enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::Stopwords => self.config.removes_stopwords(),
            Stage::Lemmatization => self.config.lemmatize,
            _ => true,
        }
    }

    /// Run a single stage on a line of text.
    pub fn apply(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Abbreviations => text.replace("in'", "ing"),
            Stage::CaseFolding => text.to_lowercase(),
            Stage::Digits => text.chars().filter(|c| !c.is_numeric()).collect(),
            Stage::Stopwords => {
                let tokens = text.split_whitespace().collect_vec();
                self.stopwords.filter(&tokens).join(" ")
            }
            Stage::Punctuation => text
                .replace('\u{2019}', "'")
                .chars()
                .filter(|&c| !is_punctuation(c))
                .collect(),
            Stage::Whitespace => text.split_whitespace().join(" "),
            Stage::ExtraStopwords => {
                let tokens = text.split_whitespace().collect_vec();
                self.extra_stopwords.filter(&tokens).join(" ")
            }
            Stage::Lemmatization => text
                .split_whitespace()
                .map(|w| self.lemmatizer.lemma_of(w))
                .join(" "),
        }
    }

    pub fn normalize_line(&self, line: &str) -> String {
        self.stages()
            .into_iter()
            .fold(line.to_owned(), |text, stage| self.apply(stage, &text))
    }

    /// Normalize every line; lines left empty are dropped.
    pub fn normalize(&self, doc: &Document) -> Document {
        let lines = doc
            .lines
            .iter()
            .map(|l| self.normalize_line(l))
            .filter(|l| !l.is_empty())
            .collect_vec();
        doc.with_lines(lines)
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || TYPOGRAPHIC_PUNCTUATION.contains(&c)
}

pub fn normalize(
    doc: &Document,
    config: &NormalizationConfig,
    lemmatizer: &dyn Lemmatizer,
) -> Document {
    Normalizer::new(config, lemmatizer).normalize(doc)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::{InvalidArgument, UnknownConfigOption};
    use crate::lemmatizer::LemmaTable;

    fn plain() -> NormalizationConfig {
        NormalizationConfig {
            remove_stopwords: false,
            extra_stopwords: BTreeSet::new(),
            lemmatize: false,
        }
    }

    fn line(config: &NormalizationConfig, text: &str) -> String {
        let lemmas = LemmaTable::new();
        Normalizer::new(config, &lemmas).normalize_line(text)
    }

    #[test]
    fn hailing_and_forcing() {
        let config = NormalizationConfig::default();
        assert!(config.remove_stopwords);
        assert!(!config.lemmatize);
        assert_eq!(
            line(&config, "I'm hailin' and forcin' it, yeah!"),
            "im hailing forcing it"
        );
    }

    #[test]
    fn stage_order() {
        let lemmas = LemmaTable::new();
        let config = NormalizationConfig::default();
        assert_eq!(
            Normalizer::new(&config, &lemmas).stages(),
            [
                Stage::Abbreviations,
                Stage::CaseFolding,
                Stage::Digits,
                Stage::Stopwords,
                Stage::Punctuation,
                Stage::Whitespace,
                Stage::ExtraStopwords,
            ]
        );
        let config = plain();
        assert!(!Normalizer::new(&config, &lemmas).stages().contains(&Stage::Stopwords));
        let config = plain().lemmatized();
        let stages = Normalizer::new(&config, &lemmas).stages();
        assert_eq!(stages.len(), 8);
        assert_eq!(stages[3], Stage::Stopwords);
        assert_eq!(stages[7], Stage::Lemmatization);
    }

    #[test]
    fn abbreviation_quirks() {
        let config = plain();
        let lemmas = LemmaTable::new();
        let n = Normalizer::new(&config, &lemmas);
        assert_eq!(n.apply(Stage::Abbreviations, "lovin' you"), "loving you");
        assert_eq!(n.apply(Stage::Abbreviations, "pin'ball"), "pingball");
        assert_eq!(n.apply(Stage::Abbreviations, "LOVIN'"), "LOVIN'");
        assert_eq!(line(&config, "LOVIN' you"), "lovin you");
    }

    #[test]
    fn digits_and_punctuation() {
        let config = plain();
        assert_eq!(line(&config, "99 Problems, but 1 ain\u{2019}t"), "problems but aint");
        assert_eq!(line(&config, "\u{201c}Rock-n-roll\u{201d} \u{2026} forever"), "rocknroll forever");
    }

    #[test]
    fn stray_c_is_removed() {
        let config = plain();
        let lemmas = LemmaTable::new();
        let n = Normalizer::new(&config, &lemmas);
        assert_eq!(n.apply(Stage::ExtraStopwords, "c mon c cc"), "mon cc");
        assert_eq!(line(&config, "c 'mon"), "mon");
    }

    #[test]
    fn come_on_phrase() {
        let config = NormalizationConfig::default();
        assert_eq!(line(&config, "Come on baby light my fire"), "baby light fire");
    }

    #[test]
    fn lemmatization_implies_stopwords() {
        let config = plain().lemmatized();
        let lemmas = LemmaTable::from_pairs(&[("hearts", "heart"), ("crying", "cry")]);
        let doc = Document::new("s", Some(1999), &["The hearts were crying", "", "and"]);
        let doc = normalize(&doc, &config, &lemmas);
        assert_eq!(doc.lines, ["heart cry"]);
        assert_eq!(doc.year, Some(1999));
    }

    #[test]
    fn empty_document() {
        let lemmas = LemmaTable::new();
        let doc = Document::new("empty", None, &[]);
        let doc = normalize(&doc, &NormalizationConfig::default(), &lemmas);
        assert!(doc.is_empty());
        assert_eq!(doc.id, "empty");
    }

    #[test]
    fn idempotent() {
        let lemmas = LemmaTable::from_pairs(&[("dancing", "dance"), ("nights", "night")]);
        let doc = Document::new(
            "s",
            None,
            &["Dancin' all the nights away", "  ", "Whoa, 1000 nights!"],
        );
        for config in [NormalizationConfig::default(), plain().lemmatized()] {
            let once = normalize(&doc, &config, &lemmas);
            let twice = normalize(&once, &config, &lemmas);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn options() {
        let options = ["lemmatize=true".to_owned(), "extra_stopwords=Baby, oh".to_owned()];
        let config = NormalizationConfig::from_options(&options).unwrap();
        assert!(config.lemmatize);
        assert!(config.removes_stopwords());
        assert_eq!(config.extra_stopwords.iter().collect_vec(), ["baby", "oh"]);

        let mut config = NormalizationConfig::default();
        config.set_option("remove_stopwords=false").unwrap();
        assert!(!config.remove_stopwords);
        let e = config.set_option("stem=true").unwrap_err();
        assert!(e.is::<UnknownConfigOption>());
        let e = config.set_option("lemmatize=maybe").unwrap_err();
        assert!(e.is::<InvalidArgument>());
        let e = config.set_option("lemmatize").unwrap_err();
        assert!(e.is::<InvalidArgument>());
    }
}
