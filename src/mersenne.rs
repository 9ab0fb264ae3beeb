//! Mersenne-prime testing via the Lucas-Lehmer recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::primality::is_probable_prime;

/// Lucas-Lehmer test: is 2^p - 1 prime?
///
/// The recurrence s₀ = 4, s_{k+1} = (s_k² - 2) mod (2^p - 1) runs p - 2
/// times; the Mersenne number is prime iff the final residue is zero. The
/// test is only meaningful for odd prime p, so the function is total by
/// contract rather than by error: p = 2 is true (M₂ = 3), any other even p
/// is false, and p < 2 is false (M₀ = 0 and M₁ = 1 are not prime). Callers
/// pre-filter exponents through a primality check.
pub fn lucas_lehmer(p: u32) -> bool {
    if p == 2 {
        return true;
    }
    if p < 2 || p % 2 == 0 {
        return false;
    }

    let m = (BigUint::one() << p) - 1u32;
    let mut s = BigUint::from(4u32);
    for _ in 0..p - 2 {
        // s² + m - 2 ≡ s² - 2 (mod m), without an unsigned underflow when
        // the residue drops below 2
        s = (&s * &s + &m - 2u32) % &m;
    }
    s.is_zero()
}

/// Confirmed Mersenne exponents up to a bound, lazily.
///
/// Candidates are the running sums of 2, 1, 2, (2, 4, 2, 4, ...), that is
/// 2, 3, 5 and then the 6k±1 wheel: a superset of all primes, so no
/// exponent is missed. Wheel composites are filtered by the probable-prime
/// check before Lucas-Lehmer runs.
#[derive(Debug, Clone)]
pub struct MersenneExponents {
    bound: u32,
    candidate: u32,
    // next wheel increment, alternating 2 and 4
    step: u32,
    // counts the opening 1, 2 increments before the wheel takes over
    warmup: u8,
}

/// Lazy iterator over the Mersenne exponents in [2, bound].
pub fn mersenne_exponents(bound: u32) -> MersenneExponents {
    MersenneExponents {
        bound,
        candidate: 2,
        step: 2,
        warmup: 0,
    }
}

impl Iterator for MersenneExponents {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.candidate <= self.bound {
            let p = self.candidate;
            match self.warmup {
                0 => {
                    self.candidate += 1;
                    self.warmup = 1;
                }
                1 => {
                    self.candidate += 2;
                    self.warmup = 2;
                }
                _ => {
                    self.candidate += self.step;
                    self.step = 6 - self.step;
                }
            }
            if is_probable_prime(p as u64) && lucas_lehmer(p) {
                return Some(p);
            }
        }
        None
    }
}
