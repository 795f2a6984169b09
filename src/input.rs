//! Data structures for representing the input corpus.

use serde::{Deserialize, Serialize};

pub type Year = u16;

/// One song: its identifier, production year if known, and raw lines.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Document {
    pub id: String,
    pub year: Option<Year>,
    pub lines: Vec<String>,
}

pub type Corpus = Vec<Document>;

impl Document {
    pub fn new(id: &str, year: Option<Year>, lines: &[&str]) -> Document {
        Document {
            id: id.to_owned(),
            year,
            lines: lines.iter().map(|&l| l.to_owned()).collect(),
        }
    }

    /// A new document with the same identity and different lines.
    pub fn with_lines(&self, lines: Vec<String>) -> Document {
        Document {
            id: self.id.clone(),
            year: self.year,
            lines,
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flat_map(|l| l.split_whitespace())
    }

    /// Lines that are not blank after trimming.
    pub fn nonblank_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(|l| l.as_str())
            .filter(|l| !l.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn tokens_span_lines() {
        let doc = Document::new("a", None, &["baby  baby", "", " night "]);
        assert_eq!(doc.tokens().collect_vec(), ["baby", "baby", "night"]);
        assert_eq!(doc.nonblank_lines().count(), 2);
    }
}
