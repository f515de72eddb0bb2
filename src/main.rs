use clap::Parser;
use elasticity_demo::cart::external::{ExternalCartStore, RedisListStore};
use elasticity_demo::cart::memory::InProcessCartStore;
use elasticity_demo::config::AppConfig;
use elasticity_demo::instance::InstanceId;
use elasticity_demo::mlp::trainer::default_trainer;
use elasticity_demo::router::{AppState, build_router};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::parse();
    let instance = InstanceId::new();
    tracing::info!("Starting instance {}", instance);

    // 1. Stateful cart: lives and dies with this process.
    let memory_cart = Arc::new(InProcessCartStore::new());

    // 2. Stateless cart: shared through Redis. No connection is made yet.
    let redis_url = config.redis_url();
    let redis = RedisListStore::open(&redis_url, config.store_timeout())?;
    let external_cart = Arc::new(ExternalCartStore::new(redis, config.cart_key.clone()));
    tracing::info!(
        "Stateless cart stored at {} under key '{}'",
        redis_url,
        config.cart_key
    );

    // 3. ML trainer:
    let trainer = default_trainer(config.fashion_mnist_dir.clone());

    // 4. HTTP Router:
    let app = build_router(AppState {
        instance,
        memory_cart,
        external_cart,
        trainer,
    });

    // 5. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_target()).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
