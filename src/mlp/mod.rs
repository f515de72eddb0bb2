//! Fashion-MNIST MLP Module
//!
//! Backs `/fashionMNIST_MLP`: trains a small multi-layer perceptron on the
//! Fashion-MNIST dataset and reports timing, accuracy, loss, and a handful of
//! sample predictions. It exists to put heavy, bursty load on an instance.
//!
//! ## Overview
//! Training is delegated to the `burn` framework and only compiled in with the
//! `mlp` cargo feature. Without it, the endpoint answers 503.
//!
//! ## Submodules
//! - **`dataset`**: IDX file parsing and the class-name table.
//! - **`trainer`**: the `ModelTrainer` seam and trainer selection.
//! - **`batcher`**: `burn` dataset and batcher over a split (feature `mlp`).
//! - **`burn_mlp`**: the `burn` model and training loop (feature `mlp`).
//! - **`handlers`**: HTTP handler.
//! - **`types`**: settings, report DTO, and errors.

#[cfg(feature = "mlp")]
pub mod batcher;
#[cfg(feature = "mlp")]
pub mod burn_mlp;
pub mod dataset;
pub mod handlers;
pub mod trainer;
pub mod types;
