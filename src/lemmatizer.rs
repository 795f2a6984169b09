//! Dictionary-based lemmatization.

use crate::errors::{self, Result};
use crate::lexicon::{data_lines, read_file};
use itertools::Itertools;
use std::collections::HashMap;
use std::path::Path;

/// Maps a surface word to its base form.
pub trait Lemmatizer: Sync {
    fn lemma_of(&self, word: &str) -> String;
}

/// A fixed form-to-lemma table; unknown words are their own lemma.
#[derive(Debug, Default)]
pub struct LemmaTable {
    lemmas: HashMap<String, String>,
}

impl LemmaTable {
    pub fn new() -> LemmaTable {
        LemmaTable::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> LemmaTable {
        LemmaTable {
            lemmas: pairs
                .iter()
                .map(|&(form, lemma)| (form.to_owned(), lemma.to_owned()))
                .collect(),
        }
    }

    /// Load a `form<TAB>lemma` table.
    pub fn load(path: &Path) -> Result<LemmaTable> {
        let data = read_file(path)?;
        LemmaTable::parse(&data, &path.display().to_string())
    }

    pub fn parse(data: &str, source: &str) -> Result<LemmaTable> {
        let mut lemmas = HashMap::new();
        for (lineno, line) in data_lines(data) {
            let fields = line.split('\t').map(str::trim).collect_vec();
            match fields[..] {
                [form, lemma] if !form.is_empty() && !lemma.is_empty() => {
                    lemmas.insert(form.to_lowercase(), lemma.to_lowercase());
                }
                _ => {
                    return Err(errors::invalid_input(format!(
                        "{source}:{lineno}: expected 'form<TAB>lemma', got '{line}'"
                    )));
                }
            }
        }
        Ok(LemmaTable { lemmas })
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Lemmatizer for LemmaTable {
    fn lemma_of(&self, word: &str) -> String {
        match self.lemmas.get(word) {
            None => word.to_owned(),
            Some(lemma) => lemma.clone(),
        }
    }
}
