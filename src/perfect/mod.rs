//! Perfect Number Module
//!
//! A deliberately CPU-heavy endpoint used to make a single instance work hard,
//! so that autoscaling can be observed from the outside.
//!
//! ## Strategies
//! - **Naive** (default): for every candidate, sums all divisors in `[1, n-1]`
//!   by trial division. Quadratic per candidate, intentionally slow.
//! - **Euclid-Euler**: walks Mersenne exponents `k` and emits
//!   `2^(k-1) * (2^k - 1)` whenever `2^k - 1` is prime. Limited to the eight
//!   perfect numbers that fit in a `u64`.
//!
//! ## Submodules
//! - **`finder`**: the search algorithms.
//! - **`handlers`**: HTTP handler for `/perfectNr`.
//! - **`types`**: query parameters, response DTO, and errors.

pub mod finder;
pub mod handlers;
pub mod types;
