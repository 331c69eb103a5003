use std::{env, path::PathBuf, time::Duration};

/// File the history log lives in when `HISTORY_FILE` is not set.
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

pub struct Config {
    pub port: u16,
    pub history_file: PathBuf,
    pub connect_timeout: Duration,
    /// Overall per-request timeout; `None` leaves only the connect timeout.
    pub request_timeout: Option<Duration>,
    pub accept_invalid_certs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            connect_timeout: Duration::from_millis(10_000),
            request_timeout: None,
            accept_invalid_certs: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            history_file: env::var("HISTORY_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.history_file),
            connect_timeout: env::var("CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|t| t.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.connect_timeout),
            request_timeout: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|t| t.parse().ok())
                .map(Duration::from_millis),
            accept_invalid_certs: env::var("ACCEPT_INVALID_CERTS")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.accept_invalid_certs),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
