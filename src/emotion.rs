//! Emotion categories and per-category counts.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index, IndexMut};
use std::{fmt, str};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
}

impl Emotion {
    /// All categories in canonical (alphabetical) order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Anger,
        Emotion::Anticipation,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Trust,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Anticipation => "anticipation",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl str::FromStr for Emotion {
    type Err = ();

    fn from_str(s: &str) -> Result<Emotion, ()> {
        Emotion::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or(())
    }
}

/// Number of lexicon matches per emotion category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmotionVector([u64; 8]);

impl EmotionVector {
    pub fn new() -> EmotionVector {
        EmotionVector::default()
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Categories by count, highest first; ties in canonical order.
    pub fn ranked(&self) -> Vec<(Emotion, u64)> {
        let mut ranked = Emotion::ALL.iter().map(|&e| (e, self[e])).collect_vec();
        // Stable sort keeps canonical order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl Index<Emotion> for EmotionVector {
    type Output = u64;

    fn index(&self, e: Emotion) -> &u64 {
        &self.0[e as usize]
    }
}

impl IndexMut<Emotion> for EmotionVector {
    fn index_mut(&mut self, e: Emotion) -> &mut u64 {
        &mut self.0[e as usize]
    }
}

impl AddAssign for EmotionVector {
    fn add_assign(&mut self, other: EmotionVector) {
        for e in Emotion::ALL {
            self[e] += other[e];
        }
    }
}

impl Add for EmotionVector {
    type Output = EmotionVector;

    fn add(mut self, other: EmotionVector) -> EmotionVector {
        self += other;
        self
    }
}

impl Sum for EmotionVector {
    fn sum<I: Iterator<Item = EmotionVector>>(iter: I) -> EmotionVector {
        iter.fold(EmotionVector::new(), Add::add)
    }
}

impl<'a> Sum<&'a EmotionVector> for EmotionVector {
    fn sum<I: Iterator<Item = &'a EmotionVector>>(iter: I) -> EmotionVector {
        iter.copied().sum()
    }
}
