use std::{env, path::PathBuf, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// File that receives a copy of all log output (default: unset)
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `LOG_FILE` - Append logs to this file as well as stdout (default: unset)
    pub fn from_env() -> Self {
        Self {
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_file: env::var("LOG_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            log_file: None,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_env_values() {
        env::remove_var("REQUEST_TIMEOUT_SECS");
        env::remove_var("LOG_FILE");

        let config = Config::from_env();
        assert_eq!(config.request_timeout_seconds, 10);
        assert_eq!(config.log_file, None);

        env::set_var("REQUEST_TIMEOUT_SECS", "not-a-number");
        env::set_var("LOG_FILE", "logs/app.log");

        let config = Config::from_env();
        assert_eq!(config.request_timeout_seconds, 10);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/app.log")));

        env::remove_var("REQUEST_TIMEOUT_SECS");
        env::remove_var("LOG_FILE");
    }
}
