//! Binary Indexed Tree (Fenwick tree)
//!
//! Point updates and prefix sums over a fixed array of `i64` slots:
//! - `tree[i]` holds the sum of the `lsb(i)` slots ending at slot `i - 1`
//! - Updates climb by adding `lsb(i)`, queries descend by subtracting it
//! - Capacity is a power of two so the search can halve its step cleanly

mod bits;
mod config;
mod tree;

pub use bits::lsb;
pub use config::TreeConfig;
pub use tree::{FenwickError, FenwickTree};
