use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use tracing::{info, warn};

pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub workers: usize,
    /// Cosmetic pause before a submission or a load completes.
    pub simulated_delay: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self {
            addr: try_load("COMPLAINTS_ADDR", "127.0.0.1:3000"),
            db_path: try_load("COMPLAINTS_DB_PATH", "complaints.sqlite3"),
            schema_path: try_load("COMPLAINTS_SCHEMA_PATH", "sql/schema.sql"),
            workers: try_load::<usize>("COMPLAINTS_WORKERS", "1").max(1),
            simulated_delay: Duration::from_millis(try_load(
                "COMPLAINTS_SIMULATED_DELAY_MS",
                "0",
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "complaints.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            workers: 1,
            simulated_delay: Duration::ZERO,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    parse_or_default(key, var(key), default)
}

fn parse_or_default<T: FromStr>(key: &str, raw: Option<String>, default: &str) -> T
where
    T::Err: Display,
{
    let raw = raw.unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default_value(default)
        }
    }
}

// Defaults are literals chosen to parse for their target type.
fn default_value<T: FromStr>(default: &str) -> T
where
    T::Err: Display,
{
    match default.parse() {
        Ok(value) => value,
        Err(e) => unreachable!("default {default:?} does not parse: {e}"),
    }
}
