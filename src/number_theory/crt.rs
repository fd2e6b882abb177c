//! Chinese Remainder Theorem
//!
//! `z ≡ a (mod m)` and `z ≡ b (mod n)` have a common solution iff
//! `a ≡ b (mod gcd(m, n))`, and that solution is unique modulo `lcm(m, n)`.

use super::{extended_gcd, lcm};
use thiserror::Error;

/// Errors that can occur while solving a system of congruences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberTheoryError {
    /// Moduli must be strictly positive.
    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(i64),

    /// Residue and modulus lists differ in length.
    #[error("{residues} residues supplied for {moduli} moduli")]
    LengthMismatch {
        /// Number of residues supplied
        residues: usize,
        /// Number of moduli supplied
        moduli: usize,
    },

    /// No congruences supplied.
    #[error("system of congruences is empty")]
    Empty,

    /// Result does not fit in its integer type.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Solution class `z ≡ residue (mod modulus)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Congruence {
    /// Least non-negative representative, `0 <= residue < modulus`
    pub residue: i64,
    /// Positive modulus
    pub modulus: i64,
}

impl Congruence {
    /// Normalise `residue` into `0..modulus`.
    pub fn new(residue: i64, modulus: i64) -> Result<Self, NumberTheoryError> {
        if modulus <= 0 {
            return Err(NumberTheoryError::NonPositiveModulus(modulus));
        }
        Ok(Self {
            residue: residue.rem_euclid(modulus),
            modulus,
        })
    }

    /// Whether `z` belongs to this class.
    pub fn contains(&self, z: i64) -> bool {
        z.rem_euclid(self.modulus) == self.residue
    }
}

/// Solve `z ≡ a (mod m)` and `z ≡ b (mod n)`.
///
/// Returns `Ok(None)` when the congruences are inconsistent. Both moduli must
/// be positive.
pub fn crt(a: i64, m: i64, b: i64, n: i64) -> Result<Option<Congruence>, NumberTheoryError> {
    for modulus in [m, n] {
        if modulus <= 0 {
            return Err(NumberTheoryError::NonPositiveModulus(modulus));
        }
    }

    // m * s ≡ g (mod n)
    let (g, s, _) = extended_gcd(m, n)?;
    let (wide_a, wide_b, g) = (i128::from(a), i128::from(b), i128::from(g));

    let diff = wide_b - wide_a;
    if diff.rem_euclid(g) != 0 {
        tracing::debug!(a, m, b, n, "congruences are inconsistent");
        return Ok(None);
    }

    let modulus = i64::try_from(lcm(m, n)?).map_err(|_| NumberTheoryError::Overflow)?;
    let (a, m, n, s, modulus) = (
        wide_a,
        i128::from(m),
        i128::from(n),
        i128::from(s),
        i128::from(modulus),
    );

    // z = a + m * s * (diff / g), with the multiplier reduced mod n / g to
    // keep every product inside i128.
    let step = n / g;
    let k = (diff / g).rem_euclid(step) * s.rem_euclid(step) % step;
    let z = (a + m * k).rem_euclid(modulus);

    Ok(Some(Congruence {
        residue: z as i64,
        modulus: modulus as i64,
    }))
}

/// Solve `z ≡ residues[i] (mod moduli[i])` for every `i`.
///
/// Folds [`crt`] over the pairs; the result is unique modulo the lcm of all
/// moduli. Returns `Ok(None)` as soon as two congruences disagree.
pub fn crt_extended(
    residues: &[i64],
    moduli: &[i64],
) -> Result<Option<Congruence>, NumberTheoryError> {
    if residues.len() != moduli.len() {
        return Err(NumberTheoryError::LengthMismatch {
            residues: residues.len(),
            moduli: moduli.len(),
        });
    }
    let (Some(&first_residue), Some(&first_modulus)) = (residues.first(), moduli.first()) else {
        return Err(NumberTheoryError::Empty);
    };

    let mut acc = Congruence::new(first_residue, first_modulus)?;
    for (&residue, &modulus) in residues.iter().zip(moduli).skip(1) {
        match crt(acc.residue, acc.modulus, residue, modulus)? {
            Some(next) => acc = next,
            None => return Ok(None),
        }
    }
    Ok(Some(acc))
}
