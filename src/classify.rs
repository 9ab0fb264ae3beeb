//! Prime classifiers: strong, weak, and good primes.
//!
//! Each classifier is a lazy, finite iterator over a sieved range. State
//! advances only when the consumer pulls; dropping the iterator mid-stream
//! is the only way to stop it early, and no cleanup is required.

use crate::primality::is_probable_prime;
use crate::sieve::{first_n_primes, sieve_of_eratosthenes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MeanSide {
    Above,
    Below,
}

/// Primes greater than the arithmetic mean of their two neighbors.
#[derive(Debug, Clone)]
pub struct StrongPrimes {
    inner: NeighborMean,
}

/// Primes less than the arithmetic mean of their two neighbors.
#[derive(Debug, Clone)]
pub struct WeakPrimes {
    inner: NeighborMean,
}

/// Strong primes up to `bound`: every interior p_i of the sieved range with
/// p_i > (p_{i-1} + p_{i+1}) / 2. Balanced primes (exactly the mean, like 5)
/// are neither strong nor weak.
pub fn strong_primes(bound: u64) -> StrongPrimes {
    StrongPrimes {
        inner: NeighborMean::new(bound, MeanSide::Above),
    }
}

/// Weak primes up to `bound`; the mirror of [`strong_primes`].
pub fn weak_primes(bound: u64) -> WeakPrimes {
    WeakPrimes {
        inner: NeighborMean::new(bound, MeanSide::Below),
    }
}

impl Iterator for StrongPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.inner.next()
    }
}

impl Iterator for WeakPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.inner.next()
    }
}

/// Shared machinery for the strong/weak classifiers.
///
/// Interior primes compare against both sieved neighbors. The last sieved
/// prime has no successor inside the range, so the iterator probes past the
/// bound for exactly one probable prime and compares against that; it then
/// ends whether or not the comparison yielded. Ranges with fewer than two
/// primes have no interior and nothing to probe for.
#[derive(Debug, Clone)]
struct NeighborMean {
    primes: Vec<u64>,
    side: MeanSide,
    i: usize,
    boundary_done: bool,
}

impl NeighborMean {
    fn new(bound: u64, side: MeanSide) -> Self {
        NeighborMean {
            primes: sieve_of_eratosthenes(bound),
            side,
            i: 1,
            boundary_done: false,
        }
    }

    // p vs (prev + next) / 2, doubled to stay in integers
    fn holds(&self, p: u64, prev: u64, next: u64) -> bool {
        match self.side {
            MeanSide::Above => 2 * p > prev + next,
            MeanSide::Below => 2 * p < prev + next,
        }
    }
}

impl Iterator for NeighborMean {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.i + 1 < self.primes.len() {
            let i = self.i;
            self.i += 1;
            if self.holds(self.primes[i], self.primes[i - 1], self.primes[i + 1]) {
                return Some(self.primes[i]);
            }
        }

        if self.boundary_done || self.primes.len() < 2 {
            return None;
        }
        self.boundary_done = true;

        let last = self.primes[self.primes.len() - 1];
        let prev = self.primes[self.primes.len() - 2];
        let mut q = last + 1;
        loop {
            if is_probable_prime(q) {
                if self.holds(last, prev, q) {
                    return Some(last);
                }
                return None;
            }
            q += 1;
        }
    }
}

/// Primes whose square exceeds every product of same-distance neighbors.
#[derive(Debug, Clone)]
pub struct GoodPrimes {
    sieved: Vec<u64>,
    probe: Vec<u64>,
    n: usize,
}

/// Good primes up to `bound`: the p_n (1-indexed into the prime sequence)
/// with p_n² > p_{n-i}·p_{n+i} for every offset i in [1, n]. The first
/// violating offset rejects the candidate.
pub fn good_primes(bound: u64) -> GoodPrimes {
    let sieved = sieve_of_eratosthenes(bound);
    // the offset check reaches index 2n, so the probe list is twice as long
    let probe = first_n_primes(2 * sieved.len());
    GoodPrimes {
        sieved,
        probe,
        n: 1,
    }
}

impl Iterator for GoodPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.n < self.sieved.len() {
            let n = self.n;
            self.n += 1;
            let square = self.probe[n] as u128 * self.probe[n] as u128;
            let good = (1..=n)
                .all(|i| square > self.probe[n - i] as u128 * self.probe[n + i] as u128);
            if good {
                return Some(self.sieved[n]);
            }
        }
        None
    }
}
