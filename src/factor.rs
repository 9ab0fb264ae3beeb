//! Integer factorization by sieve-backed trial division.

use std::fmt;

use crate::error::{Error, Result};
use crate::num::isqrt;
use crate::primality::{classify, Primality};
use crate::sieve::sieve_of_eratosthenes;

/// Prime factors of an integer, ascending, with repetition.
///
/// The product of the factors always equals the factored number; for a
/// prime (or 1) the list is just the number itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    number: u64,
    factors: Vec<u64>,
}

impl Factorization {
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn factors(&self) -> &[u64] {
        &self.factors
    }

    /// Product of the factors; u128 so verification cannot overflow.
    pub fn product(&self) -> u128 {
        self.factors.iter().map(|&f| f as u128).product()
    }
}

impl fmt::Display for Factorization {
    /// Exponent-grouped form: `12 = 2^2 × 3`, `2047 = 23 × 89`, `5 = 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.number)?;
        let mut i = 0;
        while i < self.factors.len() {
            let p = self.factors[i];
            let run = self.factors[i..].iter().take_while(|&&q| q == p).count();
            if i > 0 {
                write!(f, " × ")?;
            }
            if run > 1 {
                write!(f, "{p}^{run}")?;
            } else {
                write!(f, "{p}")?;
            }
            i += run;
        }
        Ok(())
    }
}

/// Decompose n into prime factors; 1 and primes come back unchanged.
///
/// Candidate divisors are the sieved primes up to ⌈√n⌉, scanned ascending;
/// each divides n out as often as it can, so repeated factors appear
/// repeatedly. A residual above 1 after the scan is itself prime and is
/// appended as the final factor: for a composite whose cofactor exceeds
/// every candidate (2047 = 23 × 89) dropping it would truncate the
/// factorization.
pub fn decompose(n: u64) -> Result<Factorization> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "0 has no prime factorization".into(),
        ));
    }
    if n == 1 || classify(n)? == Primality::Prime {
        return Ok(Factorization {
            number: n,
            factors: vec![n],
        });
    }

    let mut rest = n;
    let mut factors = Vec::new();
    for d in sieve_of_eratosthenes(ceil_sqrt(n)) {
        if d as u128 * d as u128 > rest as u128 {
            break;
        }
        while rest % d == 0 {
            rest /= d;
            factors.push(d);
        }
    }
    if rest > 1 {
        factors.push(rest);
    }

    Ok(Factorization { number: n, factors })
}

fn ceil_sqrt(n: u64) -> u64 {
    let root = isqrt(n);
    if root * root == n {
        root
    } else {
        root + 1
    }
}
