//! Tree sizing
//!
//! The search in [`FenwickTree::largest_index_with_sum_at_most`] starts from a
//! step equal to the capacity, so capacity must be a power of two.
//!
//! [`FenwickTree::largest_index_with_sum_at_most`]: super::FenwickTree::largest_index_with_sum_at_most

use super::FenwickError;

/// Configuration parameters for a [`FenwickTree`](super::FenwickTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of logical slots (must be a non-zero power of two)
    pub capacity: usize,
}

impl TreeConfig {
    /// Request an exact capacity. Checked by [`validate`](Self::validate).
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Smallest valid configuration holding at least `len` slots.
    ///
    /// `len` is rounded up to the next power of two; `0` rounds to `1`.
    pub fn for_len(len: usize) -> Self {
        Self {
            capacity: len.max(1).next_power_of_two(),
        }
    }

    /// Reject zero and non-power-of-two capacities.
    pub fn validate(&self) -> Result<(), FenwickError> {
        if !self.capacity.is_power_of_two() {
            tracing::debug!(capacity = self.capacity, "rejecting tree capacity");
            return Err(FenwickError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
