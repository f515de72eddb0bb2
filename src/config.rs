//! Service configuration.
//!
//! Every setting is a command-line flag with an environment fallback, so the
//! same binary runs locally and on a container platform that only sets env vars.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "elasticity-demo",
    about = "Demo service contrasting stateful and stateless cart storage"
)]
pub struct AppConfig {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// HTTP port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Redis host backing the stateless cart
    #[arg(long, env = "REDISHOST", default_value = "localhost")]
    pub redis_host: String,

    #[arg(long, env = "REDISPORT", default_value_t = 6379)]
    pub redis_port: u16,

    #[arg(long, env = "REDISDB", default_value_t = 0)]
    pub redis_db: i64,

    /// Redis key holding the stateless cart list
    #[arg(long, env = "CART_KEY", default_value = "cart")]
    pub cart_key: String,

    /// Upper bound for connecting to Redis and for each Redis command
    #[arg(long, env = "STORE_TIMEOUT_MS", default_value_t = 2000)]
    pub store_timeout_ms: u64,

    /// Directory holding the uncompressed Fashion-MNIST IDX files
    #[arg(long, env = "FASHION_MNIST_DIR", default_value = "data/fashion-mnist")]
    pub fashion_mnist_dir: PathBuf,
}

impl AppConfig {
    pub fn redis_url(&self) -> String {
        format!(
            "redis://{}:{}/{}",
            self.redis_host, self.redis_port, self.redis_db
        )
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "elasticity-demo",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--redis-host",
            "10.0.0.3",
            "--redis-port",
            "6380",
            "--redis-db",
            "2",
            "--cart-key",
            "cart:demo",
            "--store-timeout-ms",
            "250",
        ])
        .unwrap();

        assert_eq!(config.bind_target(), ("0.0.0.0", 9000));
        assert_eq!(config.redis_url(), "redis://10.0.0.3:6380/2");
        assert_eq!(config.cart_key, "cart:demo");
        assert_eq!(config.store_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = AppConfig::try_parse_from(["elasticity-demo", "--redis-port", "redis"]);

        assert!(result.is_err());
    }
}
