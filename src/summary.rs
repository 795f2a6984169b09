//! Five-number summaries of score distributions.

use crate::errors::{self, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Summary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub mean: f64,
    pub q3: f64,
    pub max: f64,
    pub count: usize,
}

pub fn mean(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(errors::empty_score_set("mean of zero values"));
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Minimum, quartiles, median, mean and maximum.
///
/// Quartiles interpolate linearly between the closest order statistics.
pub fn distribution_summary(scores: &[f64]) -> Result<Summary> {
    if scores.is_empty() {
        return Err(errors::empty_score_set("summary of zero values"));
    }
    let sorted = scores.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    Ok(Summary {
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        mean: mean(&sorted)?,
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
        count: sorted.len(),
    })
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
