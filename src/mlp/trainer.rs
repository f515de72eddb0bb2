use super::dataset::class_name;
use super::types::{SAMPLE_PREDICTIONS, TrainError, TrainReport, TrainSettings};

use std::path::PathBuf;
use std::sync::Arc;

/// Something that can train the Fashion-MNIST model and report on it.
///
/// Training is synchronous and CPU-bound; callers run it on a blocking thread.
pub trait ModelTrainer: Send + Sync {
    fn train(&self, settings: TrainSettings) -> Result<TrainReport, TrainError>;
}

/// Stand-in used when the service is built without the `mlp` feature.
#[derive(Debug, Default)]
pub struct UnavailableTrainer;

impl ModelTrainer for UnavailableTrainer {
    fn train(&self, _settings: TrainSettings) -> Result<TrainReport, TrainError> {
        Err(TrainError::Unavailable(
            "this build does not include the MLP trainer (enable the `mlp` feature)".to_string(),
        ))
    }
}

/// Picks the trainer compiled into this build.
pub fn default_trainer(data_dir: PathBuf) -> Arc<dyn ModelTrainer> {
    #[cfg(feature = "mlp")]
    {
        Arc::new(super::burn_mlp::BurnMlpTrainer::new(data_dir))
    }
    #[cfg(not(feature = "mlp"))]
    {
        tracing::info!(
            "MLP trainer not compiled in; {} will not be used",
            data_dir.display()
        );
        Arc::new(UnavailableTrainer)
    }
}

/// Maps the first [`SAMPLE_PREDICTIONS`] predicted and actual class indices to names.
pub fn sample_classes(predicted: &[usize], actual: &[u8]) -> (Vec<String>, Vec<String>) {
    let predictions = predicted
        .iter()
        .take(SAMPLE_PREDICTIONS)
        .map(|&label| class_name(label).to_string())
        .collect();
    let actuals = actual
        .iter()
        .take(SAMPLE_PREDICTIONS)
        .map(|&label| class_name(label as usize).to_string())
        .collect();
    (predictions, actuals)
}

/// Running loss/accuracy over the batches of one pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct EpochMetrics {
    loss_sum: f64,
    correct: usize,
    samples: usize,
}

impl EpochMetrics {
    /// `batch_loss` is the mean loss of a batch of `batch_len` samples.
    pub fn record(&mut self, batch_loss: f64, correct: usize, batch_len: usize) {
        self.loss_sum += batch_loss * batch_len as f64;
        self.correct += correct;
        self.samples += batch_len;
    }

    pub fn loss(&self) -> f64 {
        if self.samples == 0 {
            return f64::NAN;
        }
        self.loss_sum / self.samples as f64
    }

    pub fn accuracy(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.correct as f64 / self.samples as f64
    }
}
