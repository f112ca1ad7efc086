//! Crew qualification scores.
//!
//! Scores are kept per crew member in the order they were recorded. The
//! average is the exact mean rounded to two decimals, half away from zero
//! (`1.005` → `1.01`, `-0.005` → `-0.01`). Rounding happens on integer
//! hundredths, so a mean that is exactly half-way is never nudged by float
//! representation error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualificationTracker {
    scores: BTreeMap<String, Vec<i32>>,
}

impl QualificationTracker {
    pub fn record_score(&mut self, crew_member: impl Into<String>, score: i32) {
        self.scores.entry(crew_member.into()).or_default().push(score);
    }

    /// Recorded scores in recording order.
    pub fn scores(&self, crew_member: &str) -> Option<&[i32]> {
        self.scores.get(crew_member).map(Vec::as_slice)
    }

    /// Mean score rounded to 2 decimals, or `0.0` if nothing is on record.
    pub fn average(&self, crew_member: &str) -> f64 {
        match self.scores(crew_member) {
            Some(scores) if !scores.is_empty() => {
                let sum: i128 = scores.iter().map(|&s| i128::from(s)).sum();
                mean_in_hundredths(sum, scores.len()) as f64 / 100.0
            }
            _ => 0.0,
        }
    }

    /// Members with at least one score, in name order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }
}

/// `sum / count` in hundredths, rounded half away from zero. `count` must be
/// non-zero.
pub fn mean_in_hundredths(sum: i128, count: usize) -> i128 {
    let n = count as i128;
    let q = sum * 100;
    let rounded = (2 * q.abs() + n) / (2 * n);
    if q < 0 {
        -rounded
    } else {
        rounded
    }
}
