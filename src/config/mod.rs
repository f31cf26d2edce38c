//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables over schema defaults)
//!     → validation.rs (semantic checks)
//!     → Config (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal environments
//! - Validation separates syntactic (loader parse errors) from semantic
//!   checks, and reports every semantic failure at once

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::Config;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
