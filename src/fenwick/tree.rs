use super::{lsb, TreeConfig};
use thiserror::Error;

/// Errors that can occur while building or querying a [`FenwickTree`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenwickError {
    /// Slot index outside the documented domain of the operation.
    #[error("index {index} out of range for tree of capacity {capacity}")]
    IndexOutOfRange {
        /// Index supplied by the caller
        index: isize,
        /// Capacity of the tree
        capacity: usize,
    },

    /// Capacity is zero or not a power of two.
    #[error("invalid capacity {0}: must be a non-zero power of two")]
    InvalidCapacity(usize),

    /// A slot, stored block or requested sum does not fit in `i64`.
    #[error("sum overflows i64")]
    Overflow,
}

/// Binary Indexed Tree over `capacity` slots of `i64`.
///
/// Slot values are never stored directly. `tree[i]` (1-indexed, `tree[0]`
/// unused) holds the sum of slots `i - lsb(i) ..= i - 1`, so every prefix
/// decomposes into at most `log2(capacity) + 1` stored blocks.
///
/// Every slot value and every stored block fits in `i64`; updates that would
/// break this are rejected before anything is written. Sums are accumulated
/// in `i128` and narrowed on return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenwickTree {
    capacity: usize,
    tree: Vec<i64>,
}

impl FenwickTree {
    /// Create an all-zero tree with `capacity` slots.
    ///
    /// Fails with [`FenwickError::InvalidCapacity`] unless `capacity` is a
    /// non-zero power of two.
    pub fn new(capacity: usize) -> Result<Self, FenwickError> {
        Self::with_config(&TreeConfig::new(capacity))
    }

    /// Create an all-zero tree from a validated configuration.
    pub fn with_config(config: &TreeConfig) -> Result<Self, FenwickError> {
        config.validate()?;
        tracing::debug!(capacity = config.capacity, "creating fenwick tree");

        Ok(Self {
            capacity: config.capacity,
            tree: vec![0; config.capacity + 1],
        })
    }

    /// Build a tree holding `values` in O(n).
    ///
    /// Capacity is rounded up to the next power of two; the extra trailing
    /// slots start at zero. Fails with [`FenwickError::Overflow`] if a stored
    /// block would not fit in `i64`.
    pub fn from_values(values: &[i64]) -> Result<Self, FenwickError> {
        let capacity = TreeConfig::for_len(values.len()).capacity;
        let mut wide = vec![0i128; capacity + 1];
        for (slot, &value) in wide[1..].iter_mut().zip(values) {
            *slot = i128::from(value);
        }

        // Push each finished block into the next block that covers it.
        for i in 1..=capacity {
            let parent = i + lsb(i);
            if parent <= capacity {
                let block = wide[i];
                wide[parent] += block;
            }
        }

        let tree = wide.into_iter().map(narrow).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(capacity, len = values.len(), "built fenwick tree from values");
        Ok(Self { capacity, tree })
    }

    /// Number of logical slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add `delta` to slot `index`.
    ///
    /// Touches every stored block whose range covers `index`. The tree is
    /// left unchanged on error: `index >= capacity` is out of range, and a
    /// slot or covering block leaving `i64` is [`FenwickError::Overflow`].
    pub fn add(&mut self, index: usize, delta: i64) -> Result<(), FenwickError> {
        if index >= self.capacity {
            return Err(self.out_of_range(signed(index)));
        }

        let slot = self.prefix_wide(index + 1) - self.prefix_wide(index);
        narrow(slot + i128::from(delta))?;
        let mut i = index + 1;
        while i <= self.capacity {
            if self.tree[i].checked_add(delta).is_none() {
                tracing::debug!(index, delta, block = i, "rejecting overflowing update");
                return Err(FenwickError::Overflow);
            }
            i += lsb(i);
        }

        tracing::trace!(index, delta, "fenwick add");
        let mut i = index + 1;
        while i <= self.capacity {
            self.tree[i] += delta;
            i += lsb(i);
        }
        Ok(())
    }

    /// Sum of slots `0..=index`.
    ///
    /// `index == -1` is the empty prefix and sums to `0`. Anything below `-1`
    /// or at/above `capacity` is out of range. A sum outside `i64` is
    /// [`FenwickError::Overflow`].
    pub fn prefix_sum(&self, index: isize) -> Result<i64, FenwickError> {
        if index < -1 || index >= signed(self.capacity) {
            return Err(self.out_of_range(index));
        }
        narrow(self.prefix_wide((index + 1) as usize))
    }

    /// Sum of slots `low..=high`.
    ///
    /// An empty range (`low > high`) sums to `0` without bounds checks.
    pub fn range_sum(&self, low: usize, high: usize) -> Result<i64, FenwickError> {
        if low > high {
            return Ok(0);
        }
        if high >= self.capacity {
            return Err(self.out_of_range(signed(high)));
        }
        narrow(self.prefix_wide(high + 1) - self.prefix_wide(low))
    }

    /// Largest slot `r` with `prefix_sum(r) <= threshold`.
    ///
    /// Returns `None` when only the empty prefix qualifies. Requires every
    /// slot to hold a non-negative value; the result is unspecified otherwise
    /// (and a negative block may overflow `remaining`).
    ///
    /// Runs in O(log capacity): `tree[r + step]` is exactly the sum of the
    /// `step` slots after the accepted prefix `r`, so greedily taking each
    /// power-of-two block that still fits builds the answer bit by bit.
    pub fn largest_index_with_sum_at_most(&self, threshold: i64) -> Option<usize> {
        if threshold < 0 {
            return None;
        }

        let mut accepted = 0usize;
        let mut step = self.capacity;
        let mut remaining = threshold;

        while step >= 1 && accepted + step <= self.capacity {
            let candidate = accepted + step;
            if self.tree[candidate] <= remaining {
                accepted = candidate;
                remaining -= self.tree[candidate];
            }
            step /= 2;
        }

        tracing::trace!(threshold, prefix_len = accepted, "fenwick search");
        accepted.checked_sub(1)
    }

    /// Sum of every slot.
    pub fn total(&self) -> i64 {
        // `capacity` is a power of two, so its block spans the whole array.
        self.tree[self.capacity]
    }

    /// Current value of a single slot.
    pub fn value_at(&self, index: usize) -> Result<i64, FenwickError> {
        self.range_sum(index, index)
    }

    /// All slot values in order, recovered in O(n).
    pub fn values(&self) -> Vec<i64> {
        let mut wide: Vec<i128> = self.tree.iter().copied().map(i128::from).collect();
        for i in (1..=self.capacity).rev() {
            let parent = i + lsb(i);
            if parent <= self.capacity {
                let block = wide[i];
                wide[parent] -= block;
            }
        }
        // Slot values always fit: `add` and `from_values` reject anything else.
        wide.into_iter().skip(1).map(|value| value as i64).collect()
    }

    /// Sum of the first `len` slots, without narrowing.
    fn prefix_wide(&self, len: usize) -> i128 {
        let mut sum = 0i128;
        let mut i = len;
        while i > 0 {
            sum += i128::from(self.tree[i]);
            i -= lsb(i);
        }
        sum
    }

    fn out_of_range(&self, index: isize) -> FenwickError {
        FenwickError::IndexOutOfRange {
            index,
            capacity: self.capacity,
        }
    }
}

fn narrow(value: i128) -> Result<i64, FenwickError> {
    i64::try_from(value).map_err(|_| FenwickError::Overflow)
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
