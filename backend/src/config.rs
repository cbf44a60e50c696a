use std::{env, fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};

/// Runtime configuration, read from the environment once at startup. The
/// listen address and port stay with Rocket's own `ROCKET_*` variables.
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub store_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self {
            database_url: require("DATABASE_URL"),
            max_connections: try_load("VOTE_DB_MAX_CONNECTIONS", "5"),
            store_timeout: Duration::from_millis(try_load("VOTE_STORE_TIMEOUT_MS", "5000")),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn require(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} must be set"))
}
