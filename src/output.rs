//! Data structures for representing the output.

use crate::decades::Decade;
use crate::emotion::{Emotion, EmotionVector};
use crate::input::Year;
use crate::normalizer::NormalizationConfig;
use crate::summary::Summary;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct OTerm {
    pub term: String,
    pub count: u64,
    /// Share of all tokens in the same group.
    pub ratio: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct OEmotion {
    pub emotion: Emotion,
    pub count: u64,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct ODocument {
    pub id: String,
    pub year: Option<Year>,
    pub decade: Option<Decade>,
    /// Number of non-blank lines.
    pub lines: usize,
    /// Mean line valence; `None` if the song has no non-blank lines.
    pub mean: Option<f64>,
    pub emotions: Vec<OEmotion>,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct ODecade {
    pub decade: Decade,
    pub documents: usize,
    pub tokens: u64,
    pub top_terms: Vec<OTerm>,
    pub emotions: Vec<OEmotion>,
    /// Summary of document means.
    pub sentiment: Option<Summary>,
    /// Summary of all line scores.
    pub line_sentiment: Option<Summary>,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Output {
    pub config: NormalizationConfig,
    pub documents: usize,
    pub tokens: u64,
    pub distinct_terms: usize,
    pub top_terms: Vec<OTerm>,
    pub emotions: Vec<OEmotion>,
    pub sentiment: Option<Summary>,
    pub line_sentiment: Option<Summary>,
    pub songs: Vec<ODocument>,
    pub decades: Vec<ODecade>,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

pub fn emotions(v: &EmotionVector) -> Vec<OEmotion> {
    v.ranked()
        .into_iter()
        .map(|(emotion, count)| OEmotion { emotion, count })
        .collect_vec()
}

pub fn terms(ranked: &[(String, u64)], total: u64) -> Vec<OTerm> {
    ranked
        .iter()
        .map(|(term, count)| OTerm {
            term: term.clone(),
            count: *count,
            ratio: if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            },
        })
        .collect_vec()
}

pub fn summary_string(s: &Option<Summary>) -> String {
    match s {
        None => "no score".to_owned(),
        Some(s) => format!(
            "mean {:.3}, median {:.3}, range {:.3}–{:.3}, n = {}",
            s.mean, s.median, s.min, s.max, s.count
        ),
    }
}

pub fn emotions_string(emotions: &[OEmotion]) -> String {
    emotions
        .iter()
        .filter(|e| e.count > 0)
        .take(3)
        .map(|e| format!("{} {}", e.emotion, e.count))
        .join(", ")
}
