//! Valence scores per line and emotion counts per document.
//!
//! Valence is computed from raw lines. Emotion counts are computed from the
//! lemmatized normalized form of a document.

use crate::emotion::EmotionVector;
use crate::errors::{self, Result};
use crate::input::Document;
use crate::lexicon::LexiconProvider;
use crate::summary;
use itertools::Itertools;

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentScore {
    /// Scores of the non-blank lines, in order.
    pub line_scores: Vec<f64>,
    /// Mean of `line_scores`.
    pub mean: f64,
}

/// Lowercase, with surrounding punctuation trimmed.
fn lookup_form(token: &str) -> String {
    let lower = token.to_lowercase();
    let trimmed = lower.trim_matches(|c: char| c.is_ascii_punctuation());
    if trimmed.is_empty() {
        lower
    } else {
        trimmed.to_owned()
    }
}

/// Sum of the valences of the words and phrases on a line.
///
/// Phrases are matched greedily, longest first; words not in the
/// lexicon count as zero.
pub fn score_line(line: &str, lexicon: &dyn LexiconProvider) -> f64 {
    let tokens = line.split_whitespace().map(lookup_form).collect_vec();
    let max_words = lexicon.max_phrase_words();
    let mut score = 0.0;
    let mut i = 0;
    while i < tokens.len() {
        let mut step = 1;
        for len in (1..=max_words.min(tokens.len() - i)).rev() {
            let valence = if len == 1 {
                lexicon.valence_of(&tokens[i])
            } else {
                lexicon.valence_of(&tokens[i..i + len].join(" "))
            };
            if let Some(v) = valence {
                score += v;
                step = len;
                break;
            }
        }
        i += step;
    }
    score
}

/// Scores of all non-blank lines and their mean.
pub fn score_document(doc: &Document, lexicon: &dyn LexiconProvider) -> Result<DocumentScore> {
    let line_scores = doc
        .nonblank_lines()
        .map(|l| score_line(l, lexicon))
        .collect_vec();
    if line_scores.is_empty() {
        return Err(errors::empty_score_set(&format!(
            "document '{}' has no non-blank lines",
            doc.id
        )));
    }
    let mean = summary::mean(&line_scores)?;
    Ok(DocumentScore { line_scores, mean })
}

/// Emotion categories of every token in a lemmatized normalized document.
pub fn emotion_counts(doc: &Document, lexicon: &dyn LexiconProvider) -> EmotionVector {
    let mut counts = EmotionVector::new();
    for token in doc.tokens() {
        for &emotion in lexicon.emotions_of(token) {
            counts[emotion] += 1;
        }
    }
    counts
}

pub fn aggregate_emotions(corpus: &[Document], lexicon: &dyn LexiconProvider) -> EmotionVector {
    corpus.iter().map(|d| emotion_counts(d, lexicon)).sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::emotion::Emotion;
    use crate::errors::EmptyScoreSet;
    use crate::lexicon::Lexicon;

    fn lexicon() -> Lexicon {
        let mut lexicon = Lexicon::new();
        lexicon.insert_valence("love", 0.5);
        lexicon.insert_valence("cry", -1.0);
        lexicon.insert_valence("broken heart", -2.0);
        lexicon.insert_valence("heart", 1.0);
        lexicon.insert_emotion("love", Emotion::Joy);
        lexicon.insert_emotion("love", Emotion::Trust);
        lexicon.insert_emotion("cry", Emotion::Sadness);
        lexicon
    }

    #[test]
    fn i_love_you() {
        let lexicon = lexicon();
        assert_eq!(score_line("I love you", &lexicon), 0.5);
        assert_eq!(score_line("I LOVE you!", &lexicon), 0.5);
        assert_eq!(score_line("nothing to see here", &lexicon), 0.0);
        assert_eq!(score_line("", &lexicon), 0.0);
    }

    #[test]
    fn phrases_match_longest_first() {
        let lexicon = lexicon();
        assert_eq!(score_line("my broken heart", &lexicon), -2.0);
        assert_eq!(score_line("my heart is broken", &lexicon), 1.0);
        assert_eq!(score_line("love, broken heart, cry", &lexicon), -2.5);
    }

    #[test]
    fn mean_skips_blank_lines() {
        let lexicon = lexicon();
        let doc = Document::new("s", None, &["I love you", "", "   ", "we cry", "la la"]);
        let score = score_document(&doc, &lexicon).unwrap();
        assert_eq!(score.line_scores, [0.5, -1.0, 0.0]);
        assert!((score.mean - (-0.5 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn blank_document_has_no_score() {
        let lexicon = lexicon();
        let doc = Document::new("blank", None, &["", "  ", "\t"]);
        let e = score_document(&doc, &lexicon).unwrap_err();
        assert!(e.is::<EmptyScoreSet>());
        let doc = Document::new("empty", None, &[]);
        assert!(score_document(&doc, &lexicon).is_err());
    }

    #[test]
    fn emotions_per_token() {
        let lexicon = lexicon();
        let doc = Document::new("s", None, &["love cry love", "table"]);
        let counts = emotion_counts(&doc, &lexicon);
        assert_eq!(counts[Emotion::Joy], 2);
        assert_eq!(counts[Emotion::Trust], 2);
        assert_eq!(counts[Emotion::Sadness], 1);
        assert_eq!(counts.total(), 5);

        let doc = Document::new("t", None, &["table chair"]);
        assert_eq!(emotion_counts(&doc, &lexicon), EmotionVector::new());
    }

    #[test]
    fn aggregate_is_order_independent() {
        let lexicon = lexicon();
        let mut corpus = vec![
            Document::new("a", None, &["love cry"]),
            Document::new("b", None, &["cry cry"]),
        ];
        let forward = aggregate_emotions(&corpus, &lexicon);
        corpus.reverse();
        let backward = aggregate_emotions(&corpus, &lexicon);
        assert_eq!(forward, backward);
        assert_eq!(
            forward.ranked()[..3],
            [(Emotion::Sadness, 3), (Emotion::Joy, 1), (Emotion::Trust, 1)]
        );
    }
}
