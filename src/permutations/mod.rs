//! Distinct permutations in lexicographic order
//!
//! The iterator keeps a single cursor (the next permutation to hand out) and
//! steps it with the classic next-permutation move. Equal elements never
//! produce an ascent, so duplicate orderings are skipped without bookkeeping.

use std::iter::FusedIterator;

/// Iterator over the distinct permutations of a multiset.
///
/// Created by [`permutations`]. Clone it before iterating to replay the
/// sequence; separate iterators share no state.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    next: Option<Vec<T>>,
}

/// Every distinct permutation of `elems`, starting from the sorted order.
///
/// Repeated elements reduce the count: `aab` yields `aab`, `aba`, `baa`. An
/// empty input yields a single empty permutation.
pub fn permutations<T, I>(elems: I) -> Permutations<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut items: Vec<T> = elems.into_iter().collect();
    items.sort();
    Permutations { next: Some(items) }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut following = current.clone();
        if advance(&mut following) {
            self.next = Some(following);
        }
        Some(current)
    }
}

impl<T: Ord + Clone> FusedIterator for Permutations<T> {}

/// Rearrange `items` into the next larger permutation.
///
/// Returns `false`, leaving `items` untouched, when it is already the last
/// (non-increasing) arrangement.
fn advance<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Rightmost ascent items[pivot] < items[pivot + 1].
    let mut suffix = items.len() - 1;
    while suffix > 0 && items[suffix - 1] >= items[suffix] {
        suffix -= 1;
    }
    if suffix == 0 {
        return false;
    }
    let pivot = suffix - 1;

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }

    items.swap(pivot, successor);
    items[suffix..].reverse();
    true
}
