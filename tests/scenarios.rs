//! Table-driven scenarios for the tree, number theory and permutations.

use bitkit::{
    crt, crt_extended, extended_gcd, gcd, lcm, permutations, Congruence, FenwickError,
    FenwickTree, NumberTheoryError, TreeConfig,
};
use test_case::test_case;

fn sparse_tree() -> FenwickTree {
    let mut tree = FenwickTree::new(32).expect("valid capacity");
    tree.add(6, 14).unwrap();
    tree.add(28, 52).unwrap();
    tree.add(24, 2).unwrap();
    tree
}

#[test_case(-1, 0 ; "empty prefix")]
#[test_case(5, 0 ; "before first update")]
#[test_case(6, 14 ; "first update")]
#[test_case(27, 16 ; "before last update")]
#[test_case(28, 68 ; "last update")]
#[test_case(31, 68 ; "whole tree")]
fn sparse_tree_prefix_sums(index: isize, expected: i64) {
    assert_eq!(sparse_tree().prefix_sum(index).unwrap(), expected);
}

#[test_case(-2 ; "below empty prefix")]
#[test_case(32 ; "at capacity")]
#[test_case(isize::MAX ; "far out")]
fn prefix_sum_out_of_range(index: isize) {
    assert_eq!(
        sparse_tree().prefix_sum(index),
        Err(FenwickError::IndexOutOfRange {
            index,
            capacity: 32
        })
    );
}

#[test_case(-1, None ; "negative threshold")]
#[test_case(0, Some(5) ; "zero threshold")]
#[test_case(15, Some(23) ; "between updates")]
#[test_case(68, Some(31) ; "exactly the total")]
#[test_case(1_000, Some(31) ; "above the total")]
fn sparse_tree_search(threshold: i64, expected: Option<usize>) {
    assert_eq!(sparse_tree().largest_index_with_sum_at_most(threshold), expected);
}

#[test_case(0, Some(15) ; "zero threshold covers every zero slot")]
#[test_case(-1, None ; "negative threshold")]
fn all_zero_tree_search(threshold: i64, expected: Option<usize>) {
    let tree = FenwickTree::new(16).unwrap();
    assert_eq!(tree.largest_index_with_sum_at_most(threshold), expected);
}

#[test]
fn only_empty_prefix_qualifies() {
    let mut tree = FenwickTree::with_config(&TreeConfig::new(4)).unwrap();
    tree.add(0, 1).unwrap();
    assert_eq!(tree.largest_index_with_sum_at_most(0), None);
}

#[test_case(3 ; "odd")]
#[test_case(48 ; "even but not a power of two")]
#[test_case(0 ; "zero")]
fn rejects_non_power_of_two_capacity(capacity: usize) {
    assert_eq!(
        FenwickTree::new(capacity),
        Err(FenwickError::InvalidCapacity(capacity))
    );
}

#[test_case(14, 21, 7 ; "common factor")]
#[test_case(0, 5, 5 ; "zero operand")]
#[test_case(-12, 18, 6 ; "negative operand")]
#[test_case(17, 31, 1 ; "coprime")]
fn gcd_cases(a: i64, b: i64, expected: u64) {
    assert_eq!(gcd(a, b), expected);
}

#[test]
fn lcm_gcd_product_identity() {
    for a in 1..=99i64 {
        for b in 1..=99i64 {
            assert_eq!(lcm(a, b).unwrap() * gcd(a, b), (a * b) as u64);
        }
    }
}

#[test_case(2, 3, 3, 5, Some((8, 15)) ; "coprime")]
#[test_case(3, 4, 5, 6, Some((11, 12)) ; "common factor")]
#[test_case(1, 4, 2, 6, None ; "inconsistent")]
#[test_case(0, 1, 0, 1, Some((0, 1)) ; "trivial moduli")]
fn crt_cases(a: i64, m: i64, b: i64, n: i64, expected: Option<(i64, i64)>) {
    let solution = crt(a, m, b, n).unwrap();
    assert_eq!(
        solution,
        expected.map(|(residue, modulus)| Congruence { residue, modulus })
    );
    if let Some(solution) = solution {
        assert_eq!(solution.residue.rem_euclid(m), a.rem_euclid(m));
        assert_eq!(solution.residue.rem_euclid(n), b.rem_euclid(n));
    }
}

#[test]
fn crt_requires_positive_moduli() {
    assert_eq!(crt(0, 0, 0, 0), Err(NumberTheoryError::NonPositiveModulus(0)));
}

#[test]
fn crt_extended_three_way() {
    let solution = crt_extended(&[1, 2, 3], &[2, 3, 5]).unwrap().unwrap();
    assert_eq!(solution, Congruence { residue: 23, modulus: 30 });
}

#[test]
fn extended_gcd_identity() {
    let (g, x, y) = extended_gcd(99, 78).unwrap();
    assert_eq!(g, 3);
    assert_eq!(99 * x + 78 * y, 3);
}

#[test_case("bac", &["abc", "acb", "bac", "bca", "cab", "cba"] ; "distinct letters")]
#[test_case("aab", &["aab", "aba", "baa"] ; "repeated letter")]
#[test_case("", &[""] ; "empty word")]
fn permutation_words(input: &str, expected: &[&str]) {
    let actual: Vec<String> = permutations(input.chars())
        .map(|p| p.into_iter().collect())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn permutations_of_numbers_with_duplicates() {
    let actual: Vec<Vec<u32>> = permutations([1, 2, 1]).collect();
    assert_eq!(actual, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
}
