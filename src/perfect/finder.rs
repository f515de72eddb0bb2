//! Perfect number search.
//!
//! A number is perfect when it equals the sum of its proper divisors,
//! e.g. `6 = 1 + 2 + 3` and `28 = 1 + 2 + 4 + 7 + 14`.

use super::types::{PerfectError, PerfectMethod};

/// How many perfect numbers the Euclid-Euler strategy can represent in a `u64`.
/// The ninth one (`2^60 * (2^61 - 1)`) overflows.
pub const MAX_EUCLID_EULER: usize = 8;

/// Upper bound on the up-front reservation for naive results. The requested
/// count comes straight from the query string.
const NAIVE_RESERVE: usize = 16;

/// Stateless search front-end; cheap to copy into a blocking task.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfectNumberFinder {
    method: PerfectMethod,
}

impl PerfectNumberFinder {
    pub fn new(method: PerfectMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> PerfectMethod {
        self.method
    }

    /// Returns the first `how_many` perfect numbers in ascending order.
    ///
    /// A non-positive count yields an empty list. With the naive method the
    /// runtime grows without bound; there is no timeout.
    pub fn find(&self, how_many: i64) -> Result<Vec<u64>, PerfectError> {
        if how_many <= 0 {
            return Ok(Vec::new());
        }
        let how_many = how_many as usize;

        match self.method {
            PerfectMethod::Naive => Ok(find_naive(how_many)),
            PerfectMethod::EuclidEuler => find_euclid_euler(how_many),
        }
    }
}

/// Sum of all divisors of `n` in `[1, n-1]`, found by testing every integer.
pub fn proper_divisor_sum(n: u64) -> u64 {
    (1..n).filter(|divisor| n % divisor == 0).sum()
}

pub fn is_perfect(n: u64) -> bool {
    n >= 2 && proper_divisor_sum(n) == n
}

pub fn find_naive(how_many: usize) -> Vec<u64> {
    let mut found = Vec::with_capacity(how_many.min(NAIVE_RESERVE));
    let mut candidate = 2u64;

    while found.len() < how_many {
        if proper_divisor_sum(candidate) == candidate {
            tracing::debug!("Found perfect number {}", candidate);
            found.push(candidate);
        }
        candidate += 1;
    }

    found
}

pub fn find_euclid_euler(how_many: usize) -> Result<Vec<u64>, PerfectError> {
    if how_many > MAX_EUCLID_EULER {
        return Err(PerfectError::Overflow {
            requested: how_many,
            max: MAX_EUCLID_EULER,
        });
    }

    let mut found = Vec::with_capacity(how_many);
    let mut k = 2u32;

    while found.len() < how_many {
        let mersenne = (1u64 << k) - 1;
        if is_prime(mersenne) {
            found.push((1u64 << (k - 1)) * mersenne);
        }
        k += 1;
    }

    Ok(found)
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut divisor = 3u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
