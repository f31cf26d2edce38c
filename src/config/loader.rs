//! Configuration loading from the environment.
//!
//! The service deploys as a single container with no config file; everything
//! tunable arrives through environment variables layered over schema
//! defaults.

use std::env;

use crate::config::schema::Config;
use crate::config::validation::{validate_config, ValidationError};

/// `;`-delimited credential list. Required in practice: validation rejects
/// an empty list.
pub const API_KEYS_VAR: &str = "API_KEYS";

/// Listener bind address override.
pub const BIND_ADDR_VAR: &str = "OFFSETS_BIND_ADDR";

/// Request timeout override, in whole seconds.
pub const REQUEST_TIMEOUT_VAR: &str = "OFFSETS_REQUEST_TIMEOUT_SECS";

/// Metrics endpoint toggle ("true" / "false").
pub const METRICS_ENABLED_VAR: &str = "OFFSETS_METRICS_ENABLED";

/// Metrics endpoint bind address override.
pub const METRICS_ADDR_VAR: &str = "OFFSETS_METRICS_ADDR";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Env {
        var: &'static str,
        reason: String,
    },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Env { var, reason } => write!(f, "Environment error: {}: {}", var, reason),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Assemble and validate a config from process environment variables.
///
/// Unset variables fall back to schema defaults.
pub fn load_from_env() -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Ok(keys) = env::var(API_KEYS_VAR) {
        config.auth.api_keys = keys;
    }
    if let Ok(addr) = env::var(BIND_ADDR_VAR) {
        config.listener.bind_address = addr;
    }
    if let Ok(secs) = env::var(REQUEST_TIMEOUT_VAR) {
        config.timeouts.request_secs = secs.parse().map_err(|e| ConfigError::Env {
            var: REQUEST_TIMEOUT_VAR,
            reason: format!("expected an integer number of seconds: {}", e),
        })?;
    }
    if let Ok(enabled) = env::var(METRICS_ENABLED_VAR) {
        config.observability.metrics_enabled = enabled.parse().map_err(|e| ConfigError::Env {
            var: METRICS_ENABLED_VAR,
            reason: format!("expected true or false: {}", e),
        })?;
    }
    if let Ok(addr) = env::var(METRICS_ADDR_VAR) {
        config.observability.metrics_address = addr;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        for var in [
            API_KEYS_VAR,
            BIND_ADDR_VAR,
            REQUEST_TIMEOUT_VAR,
            METRICS_ENABLED_VAR,
            METRICS_ADDR_VAR,
        ] {
            env::remove_var(var);
        }
    }

    // Environment variables are process-global, so every case runs serially
    // inside this one test, with the variables cleared between cases.
    #[test]
    fn test_load_from_env() {
        // Overrides win over schema defaults; unset fields keep theirs.
        clear_env();
        env::set_var(API_KEYS_VAR, "key-a;key-b");
        env::set_var(BIND_ADDR_VAR, "127.0.0.1:9999");
        env::set_var(REQUEST_TIMEOUT_VAR, "5");
        let config = load_from_env().unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
        assert_eq!(config.timeouts.request_secs, 5);
        assert_eq!(config.auth.api_keys, "key-a;key-b");
        assert!(!config.observability.metrics_enabled);
        assert_eq!(config.observability.metrics_address, "0.0.0.0:9090");

        // A non-numeric timeout is reported against its variable.
        clear_env();
        env::set_var(API_KEYS_VAR, "key-a");
        env::set_var(REQUEST_TIMEOUT_VAR, "soon");
        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Env { var, .. } if var == REQUEST_TIMEOUT_VAR));

        // A non-boolean metrics toggle is reported against its variable.
        clear_env();
        env::set_var(API_KEYS_VAR, "key-a");
        env::set_var(METRICS_ENABLED_VAR, "yes");
        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Env { var, .. } if var == METRICS_ENABLED_VAR));

        // An empty credential list loads fine but fails validation.
        clear_env();
        env::set_var(API_KEYS_VAR, "");
        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        clear_env();
    }
}
