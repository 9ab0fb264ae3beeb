//! Coefficients of (x-1)^p and the AKS divisibility demonstration.
//!
//! Every helper here is a pure input/output pair; nothing shares an
//! accumulator across calls.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// One Pascal step: the coefficient row one degree up from `prev`.
pub fn next_row(prev: &[BigUint]) -> Vec<BigUint> {
    let mut row = Vec::with_capacity(prev.len() + 1);
    row.push(BigUint::one());
    for pair in prev.windows(2) {
        row.push(&pair[0] + &pair[1]);
    }
    row.push(BigUint::one());
    row
}

/// Row p of Pascal's triangle: the unsigned coefficients of (x-1)^p.
pub fn binomial_row(p: u32) -> Vec<BigUint> {
    let mut row = vec![BigUint::one()];
    for _ in 0..p {
        row = next_row(&row);
    }
    row
}

/// AKS criterion: p is prime iff p divides every interior coefficient of
/// the expansion of (x-1)^p - (x^p - 1).
pub fn aks_prime(p: u32) -> bool {
    if p < 2 {
        return false;
    }
    let row = binomial_row(p);
    let modulus = BigUint::from(p);
    row[1..row.len() - 1]
        .iter()
        .all(|c| (c % &modulus).is_zero())
}

/// The signed expansion text, e.g. `(x-1)^3 = x^3 - 3*x^2 + 3*x - 1`.
pub fn format_expansion(p: u32) -> String {
    let mut s = format!("(x-1)^{p} = ");
    match p {
        0 => s.push('1'),
        1 => s.push_str("x-1"),
        _ => {
            let row = binomial_row(p);
            for (i, c) in row.iter().enumerate() {
                if i == 0 {
                    s.push_str(&format!("x^{p}"));
                } else if i == row.len() - 1 {
                    s.push_str(if i % 2 == 0 { " + 1" } else { " - 1" });
                } else {
                    s.push_str(if i % 2 == 0 { " + " } else { " - " });
                    let exponent = p - i as u32;
                    if exponent > 1 {
                        s.push_str(&format!("{c}*x^{exponent}"));
                    } else {
                        s.push_str(&format!("{c}*x"));
                    }
                }
            }
        }
    }
    s
}
