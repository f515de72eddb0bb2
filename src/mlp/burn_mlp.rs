//! `burn` implementation of the Fashion-MNIST MLP.
//!
//! 784 inputs -> 200 sigmoid units -> 10 outputs, cross-entropy loss, plain SGD
//! with learning rate 0.1. Runs on the CPU `NdArray` backend.

use super::batcher::{FashionBatch, FashionBatcher, FashionSplit};
use super::dataset::FashionMnist;
use super::trainer::{EpochMetrics, ModelTrainer, sample_classes};
use super::types::{SAMPLE_PREDICTIONS, TrainError, TrainReport, TrainSettings};

use burn::{
    backend::{Autodiff, NdArray, ndarray::NdArrayDevice},
    data::dataloader::{DataLoader, DataLoaderBuilder, batcher::Batcher},
    module::AutodiffModule,
    nn::{Linear, LinearConfig, loss::CrossEntropyLossConfig},
    optim::{GradientsParams, Optimizer, SgdConfig},
    prelude::*,
    tensor::activation,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

type TrainBackend = Autodiff<NdArray>;
type EvalBackend = NdArray;

const HIDDEN_UNITS: usize = 200;
const CLASSES: usize = 10;
const LEARNING_RATE: f64 = 0.1;
/// Seed for the per-epoch shuffle of the training split.
const SHUFFLE_SEED: u64 = 7;

#[derive(Module, Debug)]
pub struct FashionMlp<B: Backend> {
    hidden: Linear<B>,
    output: Linear<B>,
}

impl<B: Backend> FashionMlp<B> {
    pub fn new(pixels: usize, device: &B::Device) -> Self {
        Self {
            hidden: LinearConfig::new(pixels, HIDDEN_UNITS).init(device),
            output: LinearConfig::new(HIDDEN_UNITS, CLASSES).init(device),
        }
    }

    /// images: [batch, pixels] -> logits: [batch, 10]
    ///
    /// Softmax is left to the loss and to `predict`.
    pub fn forward(&self, images: Tensor<B, 2>) -> Tensor<B, 2> {
        let hidden = activation::sigmoid(self.hidden.forward(images));
        self.output.forward(hidden)
    }

    pub fn predict(&self, images: Tensor<B, 2>) -> Vec<usize> {
        activation::softmax(self.forward(images), 1)
            .argmax(1)
            .into_data()
            .iter::<i64>()
            .map(|class| class as usize)
            .collect()
    }
}

pub struct BurnMlpTrainer {
    data_dir: PathBuf,
}

impl BurnMlpTrainer {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

impl ModelTrainer for BurnMlpTrainer {
    fn train(&self, settings: TrainSettings) -> Result<TrainReport, TrainError> {
        let data = FashionMnist::load(&self.data_dir)?;
        if data.train_images.is_empty() || data.test_images.is_empty() {
            return Err(TrainError::Dataset("dataset is empty".to_string()));
        }

        let device = NdArrayDevice::default();
        let train_split = FashionSplit::new(data.train_images, data.train_labels);
        let test_split = FashionSplit::new(data.test_images, data.test_labels);

        let pixels = train_split.pixels_per_image();
        let mut model: FashionMlp<TrainBackend> = FashionMlp::new(pixels, &device);
        tracing::info!(
            "Model: dense {}x{} (sigmoid) -> dense {}x{} (softmax), {} trainable parameters",
            pixels,
            HIDDEN_UNITS,
            HIDDEN_UNITS,
            CLASSES,
            model.num_params()
        );

        let mut optim = SgdConfig::new().init();
        let loss_fn = CrossEntropyLossConfig::new().init(&device);

        let samples = test_split.head(SAMPLE_PREDICTIONS);
        let actual_labels: Vec<u8> = samples.iter().map(|item| item.label).collect();

        let train_loader = DataLoaderBuilder::<TrainBackend, _, _>::new(FashionBatcher)
            .batch_size(settings.batch_size)
            .shuffle(SHUFFLE_SEED)
            .num_workers(1)
            .build(train_split);
        let test_loader: Arc<dyn DataLoader<EvalBackend, FashionBatch<EvalBackend>>> =
            DataLoaderBuilder::<EvalBackend, _, _>::new(FashionBatcher)
                .batch_size(settings.batch_size)
                .num_workers(1)
                .build(test_split);

        let started = Instant::now();
        let mut train = EpochMetrics::default();
        let mut test = EpochMetrics::default();

        for epoch in 1..=settings.epochs {
            train = EpochMetrics::default();

            for batch in train_loader.iter() {
                let batch_len = batch.len();
                let logits = model.forward(batch.images);
                let loss = loss_fn.forward(logits.clone(), batch.labels.clone());

                let batch_loss: f64 = loss.clone().into_scalar().elem::<f64>();
                train.record(batch_loss, count_correct(logits, batch.labels), batch_len);

                let grads = GradientsParams::from_grads(loss.backward(), &model);
                model = optim.step(LEARNING_RATE, model, grads);
            }

            test = evaluate(&model.valid(), test_loader.as_ref(), &device);

            tracing::info!(
                "Epoch {}/{} | train_loss={:.4} train_acc={:.4} | test_loss={:.4} test_acc={:.4}",
                epoch,
                settings.epochs,
                train.loss(),
                train.accuracy(),
                test.loss(),
                test.accuracy()
            );
        }

        let training_time_secs = started.elapsed().as_secs_f64();

        let model = model.valid();
        let sample_batch: FashionBatch<EvalBackend> = FashionBatcher.batch(samples, &device);
        let predicted = model.predict(sample_batch.images);
        let (predictions, actuals) = sample_classes(&predicted, &actual_labels);

        Ok(TrainReport {
            training_time_secs,
            train_accuracy: train.accuracy(),
            train_loss: train.loss(),
            test_accuracy: test.accuracy(),
            test_loss: test.loss(),
            predictions,
            actuals,
        })
    }
}

fn evaluate(
    model: &FashionMlp<EvalBackend>,
    loader: &dyn DataLoader<EvalBackend, FashionBatch<EvalBackend>>,
    device: &NdArrayDevice,
) -> EpochMetrics {
    let loss_fn = CrossEntropyLossConfig::new().init(device);
    let mut metrics = EpochMetrics::default();

    for batch in loader.iter() {
        let batch_len = batch.len();
        let logits = model.forward(batch.images);
        let loss: f64 = loss_fn
            .forward(logits.clone(), batch.labels.clone())
            .into_scalar()
            .elem::<f64>();
        metrics.record(loss, count_correct(logits, batch.labels), batch_len);
    }

    metrics
}

/// Number of rows whose highest logit matches the label.
pub fn count_correct<B: Backend>(logits: Tensor<B, 2>, labels: Tensor<B, 1, Int>) -> usize {
    // argmax(1) keeps the reduced dimension: [batch, 1] -> [batch]
    let predicted = logits.argmax(1).flatten::<1>(0, 1);
    predicted
        .equal(labels)
        .int()
        .sum()
        .into_scalar()
        .elem::<i64>() as usize
}
