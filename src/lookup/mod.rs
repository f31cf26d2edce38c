//! Offset lookup pipeline.
//!
//! # Data Flow
//!
//! ```text
//! raw query string
//!     │
//!     ▼
//! params.rs (split on & and first =, allow-list, count)
//!     │
//!     ▼
//! protocol.rs (legacy shape checked first, then current)
//!     │
//!     ▼
//! credential check ──▶ table.rs lookup
//!     │
//!     ▼
//! VersionRecord or RequestError
//! ```

pub mod error;
pub mod params;
pub mod protocol;
pub mod table;

pub use error::RequestError;
pub use params::{ParsedParams, PARAM_COUNT};
pub use protocol::{Protocol, ProtocolRequest};
pub use table::{VersionEntry, VersionRecord};

use crate::auth::ApiKeySet;

/// Successful pipeline outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    /// Which request shape the caller used.
    pub protocol: Protocol,

    /// The table entry that will be served.
    pub entry: &'static VersionEntry,
}

/// Run the full pipeline against a raw query string.
pub fn resolve_query(query: Option<&str>, keys: &ApiKeySet) -> Result<Lookup, RequestError> {
    let params = params::parse_query(query)?;
    resolve(&params, keys)
}

/// Authenticate a parsed request and look up its offset entry.
///
/// The credential check runs before any version checks on both paths; a bad
/// credential is reported even when the version fields are also wrong.
pub fn resolve(params: &ParsedParams, keys: &ApiKeySet) -> Result<Lookup, RequestError> {
    let request = protocol::detect(params)?;

    let mc_version = match request {
        ProtocolRequest::Current {
            api_key,
            mc_version,
            ..
        } => {
            if !keys.contains(api_key) {
                return Err(RequestError::Unauthorized);
            }
            // The version value is accepted without inspection.
            mc_version
        }
        ProtocolRequest::Legacy {
            token,
            config_version,
            mc_version,
        } => {
            if !keys.contains(token) {
                return Err(RequestError::Unauthorized);
            }
            if !table::is_legacy_config_version(config_version) {
                return Err(RequestError::InvalidConfigVersion);
            }
            mc_version
        }
    };

    let entry = table::find_entry(mc_version).ok_or(RequestError::UnsupportedVersion)?;

    Ok(Lookup {
        protocol: request.protocol(),
        entry,
    })
}
