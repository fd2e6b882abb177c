//! Naive reference model shared by the integration tests.

#![allow(dead_code)]

/// Plain array of slots with linear-time queries.
#[derive(Debug, Clone)]
pub struct NaiveSlots {
    values: Vec<i64>,
}

impl NaiveSlots {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: vec![0; capacity],
        }
    }

    pub fn add(&mut self, index: usize, delta: i64) {
        self.values[index] += delta;
    }

    pub fn prefix_sum(&self, index: isize) -> i64 {
        self.values.iter().take((index + 1) as usize).sum()
    }

    pub fn largest_index_with_sum_at_most(&self, threshold: i64) -> Option<usize> {
        let mut running = 0;
        let mut best = None;
        for (idx, &value) in self.values.iter().enumerate() {
            running += value;
            if running <= threshold {
                best = Some(idx);
            }
        }
        best
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}
