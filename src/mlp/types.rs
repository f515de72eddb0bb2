use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENDPOINT_FASHION_MLP: &str = "/fashionMNIST_MLP";

pub const DEFAULT_EPOCHS: usize = 10;
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Number of test samples whose predicted and actual classes are reported.
pub const SAMPLE_PREDICTIONS: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub struct TrainParams {
    pub epochs: Option<String>,
    pub batch_size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainSettings {
    pub epochs: usize,
    pub batch_size: usize,
}

impl Default for TrainSettings {
    fn default() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl TrainSettings {
    pub fn from_params(params: &TrainParams) -> Result<Self, TrainError> {
        Ok(Self {
            epochs: parse_positive("epochs", params.epochs.as_deref(), DEFAULT_EPOCHS)?,
            batch_size: parse_positive(
                "batch_size",
                params.batch_size.as_deref(),
                DEFAULT_BATCH_SIZE,
            )?,
        })
    }
}

fn parse_positive(name: &'static str, raw: Option<&str>, default: usize) -> Result<usize, TrainError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TrainError::InvalidSetting {
            name,
            value: value.to_string(),
        }),
    }
}

/// Result of one training run. Field names on the wire are the labels the
/// demo has always printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainReport {
    #[serde(rename = "Training time (in s):")]
    pub training_time_secs: f64,
    #[serde(rename = "Train accuracy:")]
    pub train_accuracy: f64,
    #[serde(rename = "Train loss:")]
    pub train_loss: f64,
    #[serde(rename = "Test accuracy:")]
    pub test_accuracy: f64,
    #[serde(rename = "Test loss:")]
    pub test_loss: f64,
    #[serde(rename = "Predictions of the first 10 classes within test:")]
    pub predictions: Vec<String>,
    #[serde(rename = "Actuals of the first 10 classes within test:")]
    pub actuals: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidSetting { name: &'static str, value: String },

    #[error("{0}")]
    Unavailable(String),

    #[error("invalid dataset: {0}")]
    Dataset(String),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}
