//! Rolling performance-score history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::HISTORY_CAPACITY;

/// Fixed-capacity ring buffer; pushing into a full buffer evicts the oldest score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreHistory {
    capacity: usize,
    scores: VecDeque<f64>,
}

impl ScoreHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            scores: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, score: f64) {
        if self.scores.len() == self.capacity {
            self.scores.pop_front();
        }
        self.scores.push_back(score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Mean of the `n` most recent scores, `None` when fewer than `n` are stored.
    pub fn recent_mean(&self, n: usize) -> Option<f64> {
        if n == 0 || self.scores.len() < n {
            return None;
        }
        let sum: f64 = self.scores.iter().rev().take(n).sum();
        Some(sum / n as f64)
    }

    pub fn latest(&self) -> Option<f64> {
        self.scores.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.scores.iter()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

impl Default for ScoreHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
