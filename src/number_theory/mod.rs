//! Integer number theory
//!
//! Stateless helpers over `i64`:
//! - gcd / lcm on absolute values
//! - Extended gcd returning Bézout coefficients
//! - Chinese Remainder Theorem for two or more congruences

mod crt;
mod gcd;

pub use crt::{crt, crt_extended, Congruence, NumberTheoryError};
pub use gcd::{extended_gcd, gcd, lcm};
