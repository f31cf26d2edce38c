//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and the loader handle syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Reject credential lists that could never authenticate a request
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::Config;

/// A single semantic configuration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Listener bind address is empty.
    EmptyBindAddress,

    /// A zero request timeout would cancel every request.
    ZeroRequestTimeout,

    /// No credentials configured; every request would be rejected.
    EmptyCredentialList,

    /// A `;`-delimited credential fragment was empty (e.g. "key1;;key2").
    EmptyCredentialEntry,

    /// Metrics are enabled but the endpoint address does not parse.
    InvalidMetricsAddress { value: String, reason: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyBindAddress => {
                write!(f, "listener bind address is empty")
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "request timeout must be greater than zero")
            }
            ValidationError::EmptyCredentialList => {
                write!(f, "no API keys configured")
            }
            ValidationError::EmptyCredentialEntry => {
                write!(f, "API key list contains an empty entry")
            }
            ValidationError::InvalidMetricsAddress { value, reason } => {
                write!(f, "invalid metrics address '{}': {}", value, reason)
            }
        }
    }
}

/// Check an assembled config, reporting every violation together.
///
/// The listener address is only checked for emptiness here; name resolution
/// happens at bind time. The metrics address must parse as a socket address
/// because the exporter requires one.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.auth.api_keys.is_empty() {
        errors.push(ValidationError::EmptyCredentialList);
    } else if config.auth.api_keys.split(';').any(str::is_empty) {
        errors.push(ValidationError::EmptyCredentialEntry);
    }

    if config.observability.metrics_enabled {
        if let Err(e) = config.observability.metrics_address.parse::<SocketAddr>() {
            errors.push(ValidationError::InvalidMetricsAddress {
                value: config.observability.metrics_address.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
