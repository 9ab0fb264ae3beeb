//! Prime generation: the Sieve of Eratosthenes, a trial-division prime
//! generator, and primorial numbers.
//!
//! The sieve and the generator are independent sources of the same sequence;
//! the generator is infinite and lazy, the sieve is bounded and eager. Both
//! return fresh values on every call.

use num_bigint::BigUint;
use num_traits::One;

use crate::num::isqrt;

/// All primes in [2, limit], strictly ascending.
///
/// Candidates live in a boolean array indexed by value; each surviving
/// candidate i eliminates its multiples starting at i·i (smaller multiples
/// were already removed by earlier primes). Limits below 2 yield an empty
/// vector.
pub fn sieve_of_eratosthenes(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    for i in 2..=isqrt(limit as u64) as usize {
        if is_prime[i] {
            let mut j = i * i;
            while j <= limit {
                is_prime[j] = false;
                j += i;
            }
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(value, &prime)| if prime { Some(value as u64) } else { None })
        .collect()
}

/// Infinite prime iterator by trial division.
///
/// 2 and 3 are emitted directly. Every later candidate has the form 6k-1 or
/// 6k+1 (numbers of the form 6k, 6k±2, 6k±3 are multiples of 2 and/or 3),
/// and each k is used twice before advancing: 5 = 6·1-1, 7 = 6·1+1,
/// 11 = 6·2-1, and so on. A candidate p is prime iff no d in [2, √p]
/// divides it.
#[derive(Debug, Clone)]
pub struct TrialDivision {
    candidate: u64,
    k: u64,
    // the 6k+1 form is next for the current k
    upper_form: bool,
}

impl TrialDivision {
    pub fn new() -> Self {
        TrialDivision {
            candidate: 2,
            k: 1,
            upper_form: false,
        }
    }
}

impl Default for TrialDivision {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TrialDivision {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let p = self.candidate;
            let is_prime = match p {
                2 | 3 => true,
                _ => {
                    let root = isqrt(p);
                    !(2..=root).any(|d| p % d == 0)
                }
            };

            self.candidate = match p {
                2 => 3,
                3 => 5,
                _ => {
                    if self.upper_form {
                        // 6k+1 was just used; advance k and return to 6k-1
                        self.k += 1;
                        self.upper_form = false;
                        6 * self.k - 1
                    } else {
                        self.upper_form = true;
                        6 * self.k + 1
                    }
                }
            };

            if is_prime {
                return Some(p);
            }
        }
    }
}

/// The first n primes from the trial-division generator.
pub fn first_n_primes(n: usize) -> Vec<u64> {
    TrialDivision::new().take(n).collect()
}

/// The n+1 primorial numbers [1, p1, p1·p2, ..., p1·p2·...·pn].
///
/// A cumulative-product scan over the first n primes. The products outgrow
/// u64 after 15 primes, so the sequence is arbitrary-precision.
pub fn primorials(n: usize) -> Vec<BigUint> {
    let mut out = Vec::with_capacity(n + 1);
    let mut acc = BigUint::one();
    out.push(acc.clone());
    for p in TrialDivision::new().take(n) {
        acc *= p;
        out.push(acc.clone());
    }
    out
}
