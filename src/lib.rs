//! # Fenwick trees and contest number theory
//!
//! This library provides a handful of small, exact integer algorithms:
//!
//! 1. **Fenwick tree** (Binary Indexed Tree): point updates, prefix sums and
//!    range sums in O(log n), plus a binary search for the largest prefix
//!    whose sum stays under a threshold that walks the tree's own bit layout
//! 2. **Number theory**: gcd, lcm, extended gcd and the Chinese Remainder
//!    Theorem for two or more congruences
//! 3. **Permutations**: a lazy iterator over the distinct permutations of a
//!    multiset in lexicographic order
//!
//! ## Usage Example
//!
//! ```
//! use bitkit::{crt, permutations, FenwickTree};
//!
//! let mut tree = FenwickTree::new(32)?;
//! tree.add(6, 14)?;
//! tree.add(28, 52)?;
//! tree.add(24, 2)?;
//! assert_eq!(tree.prefix_sum(27)?, 16);
//! assert_eq!(tree.largest_index_with_sum_at_most(20), Some(27));
//!
//! let solution = crt(2, 3, 3, 5)?.expect("consistent system");
//! assert_eq!((solution.residue, solution.modulus), (8, 15));
//!
//! assert_eq!(permutations("aab".chars()).count(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod fenwick; // Binary Indexed Tree
pub mod number_theory; // gcd / lcm / CRT
pub mod permutations; // Distinct lexicographic permutations

// Re-exports for convenience
pub use fenwick::{lsb, FenwickError, FenwickTree, TreeConfig};
pub use number_theory::{
    crt, crt_extended, extended_gcd, gcd, lcm, Congruence, NumberTheoryError,
};
pub use permutations::{permutations, Permutations};
