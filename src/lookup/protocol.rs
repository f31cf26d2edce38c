//! Request-shape detection.

use crate::lookup::error::RequestError;
use crate::lookup::params::{ParamName, ParsedParams};

/// Which request shape a parameter set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// `api_key` / `version` / `mc_version`.
    Current,
    /// `token` / `config_version` / `mc_version`, kept for old clients.
    Legacy,
}

impl Protocol {
    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Legacy => "legacy",
        }
    }
}

/// A classified request borrowing its fields from the parameter map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolRequest<'a> {
    Current {
        api_key: &'a str,
        version: &'a str,
        mc_version: &'a str,
    },
    Legacy {
        token: &'a str,
        config_version: &'a str,
        mc_version: &'a str,
    },
}

impl ProtocolRequest<'_> {
    /// The shape this request was classified as.
    pub fn protocol(&self) -> Protocol {
        match self {
            Self::Current { .. } => Protocol::Current,
            Self::Legacy { .. } => Protocol::Legacy,
        }
    }
}

/// Classify a parameter set by key presence alone; values pass through
/// untouched. The legacy shape is checked first so old clients keep working
/// without renegotiation.
pub fn detect(params: &ParsedParams) -> Result<ProtocolRequest<'_>, RequestError> {
    if let (Some(token), Some(config_version), Some(mc_version)) = (
        params.get(ParamName::Token),
        params.get(ParamName::ConfigVersion),
        params.get(ParamName::McVersion),
    ) {
        return Ok(ProtocolRequest::Legacy {
            token,
            config_version,
            mc_version,
        });
    }

    if let (Some(api_key), Some(version), Some(mc_version)) = (
        params.get(ParamName::ApiKey),
        params.get(ParamName::Version),
        params.get(ParamName::McVersion),
    ) {
        return Ok(ProtocolRequest::Current {
            api_key,
            version,
            mc_version,
        });
    }

    Err(RequestError::InvalidRequestShape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::params::parse_query;

    #[test]
    fn test_detect_current() {
        let params = parse_query(Some("api_key=k&version=2&mc_version=1.16.2")).unwrap();
        let request = detect(&params).unwrap();
        assert_eq!(request.protocol(), Protocol::Current);
        assert_eq!(
            request,
            ProtocolRequest::Current {
                api_key: "k",
                version: "2",
                mc_version: "1.16.2",
            }
        );
    }

    #[test]
    fn test_detect_legacy() {
        let params = parse_query(Some("token=t&config_version=1.0.0&mc_version=1.16.2")).unwrap();
        let request = detect(&params).unwrap();
        assert_eq!(request.protocol(), Protocol::Legacy);
        assert_eq!(
            request,
            ProtocolRequest::Legacy {
                token: "t",
                config_version: "1.0.0",
                mc_version: "1.16.2",
            }
        );
    }

    #[test]
    fn test_mixed_shape_rejected() {
        let params = parse_query(Some("api_key=k&token=t&mc_version=1.16.2")).unwrap();
        assert_eq!(detect(&params), Err(RequestError::InvalidRequestShape));
    }

    #[test]
    fn test_three_valid_names_without_a_shape_rejected() {
        let params = parse_query(Some("api_key=k&version=2&config_version=1.0.0")).unwrap();
        assert_eq!(detect(&params), Err(RequestError::InvalidRequestShape));
    }

    #[test]
    fn test_protocol_labels() {
        assert_eq!(Protocol::Current.as_str(), "current");
        assert_eq!(Protocol::Legacy.as_str(), "legacy");
    }
}
