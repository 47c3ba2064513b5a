//! Configuration for the todo widget.
//!
//! Loads configuration from environment variables with sensible defaults:
//! six titles from the public placeholder API.

use crate::environment::DEFAULT_SEED_LIMIT;
use crate::seed::DEFAULT_SEED_URL;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "plan_today=info,plan_today_runtime=info";

/// Configuration values that could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but its value has the wrong shape
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
        /// What was expected
        reason: &'static str,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seed endpoint (`PLAN_TODAY_SEED_URL`)
    pub seed_url: String,
    /// Number of seed titles kept (`PLAN_TODAY_SEED_LIMIT`)
    pub seed_limit: usize,
    /// Log filter used when `RUST_LOG` is unset (`PLAN_TODAY_LOG`)
    pub log_filter: String,
    /// Prometheus listener, disabled when unset (`PLAN_TODAY_METRICS_ADDR`)
    pub metrics_addr: Option<SocketAddr>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            seed_limit: DEFAULT_SEED_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            metrics_addr: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a numeric or address variable
    /// is set to something unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// variables it does not know.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a numeric or address variable
    /// is set to something unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_limit = match lookup("PLAN_TODAY_SEED_LIMIT") {
            Some(value) => value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: "PLAN_TODAY_SEED_LIMIT",
                value,
                reason: "expected a non-negative integer",
            })?,
            None => defaults.seed_limit,
        };

        let metrics_addr = match lookup("PLAN_TODAY_METRICS_ADDR") {
            Some(value) if !value.trim().is_empty() => {
                Some(value.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                    var: "PLAN_TODAY_METRICS_ADDR",
                    value,
                    reason: "expected host:port",
                })?)
            },
            _ => None,
        };

        Ok(Self {
            seed_url: lookup("PLAN_TODAY_SEED_URL").unwrap_or(defaults.seed_url),
            seed_limit,
            log_filter: lookup("PLAN_TODAY_LOG").unwrap_or(defaults.log_filter),
            metrics_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_use_placeholder_api() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.seed_url, "https://jsonplaceholder.typicode.com/todos");
        assert_eq!(config.seed_limit, 6);
        assert_eq!(config.metrics_addr, None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PLAN_TODAY_SEED_URL", "http://localhost:8080/todos"),
            ("PLAN_TODAY_SEED_LIMIT", "3"),
            ("PLAN_TODAY_LOG", "debug"),
            ("PLAN_TODAY_METRICS_ADDR", "127.0.0.1:9100"),
        ]))
        .unwrap();

        assert_eq!(config.seed_url, "http://localhost:8080/todos");
        assert_eq!(config.seed_limit, 3);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.metrics_addr, Some("127.0.0.1:9100".parse().unwrap()));
    }

    #[test]
    fn invalid_limit_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PLAN_TODAY_SEED_LIMIT", "six")])).unwrap_err();

        assert_eq!(err, ConfigError::InvalidValue {
            var: "PLAN_TODAY_SEED_LIMIT",
            value: "six".into(),
            reason: "expected a non-negative integer",
        });
    }

    #[test]
    fn invalid_metrics_addr_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PLAN_TODAY_METRICS_ADDR", "nowhere")])).unwrap_err();
        assert!(err.to_string().contains("PLAN_TODAY_METRICS_ADDR"));
    }

    #[test]
    fn blank_metrics_addr_disables_metrics() {
        let config = Config::from_lookup(lookup_from(&[("PLAN_TODAY_METRICS_ADDR", " ")])).unwrap();
        assert_eq!(config.metrics_addr, None);
    }
}
