use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const ENDPOINT_PERFECT_NUMBERS: &str = "/perfectNr";

/// Number of perfect numbers returned when `howMany` is absent.
pub const DEFAULT_HOW_MANY: i64 = 2;

/// Query string accepted by `/perfectNr`.
///
/// Values are kept as raw strings so that malformed input can be reported
/// with a JSON error body instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PerfectParams {
    #[serde(rename = "howMany")]
    pub how_many: Option<String>,
    pub method: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PerfectNumbersResponse {
    #[serde(rename = "perfect numbers")]
    pub perfect_numbers: Vec<u64>,
}

/// Which search to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PerfectMethod {
    #[default]
    Naive,
    EuclidEuler,
}

impl FromStr for PerfectMethod {
    type Err = PerfectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(PerfectMethod::Naive),
            "euclid" | "euclid-euler" | "euclid_euler" => Ok(PerfectMethod::EuclidEuler),
            other => Err(PerfectError::UnknownMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PerfectError {
    #[error("howMany must be an integer, got '{0}'")]
    InvalidCount(String),

    #[error("Unknown method '{0}', expected 'naive' or 'euclid'")]
    UnknownMethod(String),

    #[error("Requested {requested} perfect numbers but only {max} fit in 64 bits")]
    Overflow { requested: usize, max: usize },
}

/// Parses the `howMany` query value, falling back to [`DEFAULT_HOW_MANY`].
pub fn parse_how_many(raw: Option<&str>) -> Result<i64, PerfectError> {
    match raw {
        None => Ok(DEFAULT_HOW_MANY),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| PerfectError::InvalidCount(value.to_string())),
    }
}
