use super::trainer::ModelTrainer;
use super::types::{TrainParams, TrainReport, TrainSettings};
use crate::error::AppResult;

use axum::Json;
use axum::extract::{Extension, Query};
use std::sync::Arc;

pub async fn handle_fashion_mlp(
    Extension(trainer): Extension<Arc<dyn ModelTrainer>>,
    Query(params): Query<TrainParams>,
) -> AppResult<Json<TrainReport>> {
    let settings = TrainSettings::from_params(&params)?;
    tracing::info!(
        "Training Fashion-MNIST MLP: {} epochs, batch size {}",
        settings.epochs,
        settings.batch_size
    );

    let report = tokio::task::spawn_blocking(move || trainer.train(settings)).await??;

    tracing::info!(
        "Training finished in {:.1}s, test accuracy {:.4}",
        report.training_time_secs,
        report.test_accuracy
    );
    Ok(Json(report))
}
