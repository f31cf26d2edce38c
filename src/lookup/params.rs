//! Query-string extraction and validation.
//!
//! # Design Decisions
//! - Splitting is literal: `&` and the first `=` only, no percent-decoding,
//!   no trimming. Credentials and versions are matched on raw bytes
//! - Duplicate names collapse last-wins before the count check
//! - An unknown name rejects the request before the count is looked at

use std::collections::HashMap;

use crate::lookup::error::RequestError;

/// Parameter names a request may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    ApiKey,
    Token,
    ConfigVersion,
    Version,
    McVersion,
}

impl ParamName {
    /// Parse a raw name; `None` for anything outside the allowed set.
    fn parse(name: &str) -> Option<Self> {
        match name {
            "api_key" => Some(Self::ApiKey),
            "token" => Some(Self::Token),
            "config_version" => Some(Self::ConfigVersion),
            "version" => Some(Self::Version),
            "mc_version" => Some(Self::McVersion),
            _ => None,
        }
    }
}

/// Exact number of distinct parameters a valid request carries.
pub const PARAM_COUNT: usize = 3;

/// Validated parameter map for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedParams {
    values: HashMap<ParamName, String>,
}

impl ParsedParams {
    /// Raw value for a parameter, if the request carried it.
    pub fn get(&self, name: ParamName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    /// Number of distinct parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split a raw query string into a validated parameter map.
///
/// `query` is the portion after `?`, or `None` when the URL had no `?` at
/// all. A pair without `=` yields an empty-string value; everything after
/// the first `=` is the value, unescaped.
pub fn parse_query(query: Option<&str>) -> Result<ParsedParams, RequestError> {
    let query = query.ok_or(RequestError::NoParameters)?;

    let mut params = ParsedParams::default();
    for pair in query.split('&') {
        let (name, value) = match pair.split_once('=') {
            Some((name, value)) => (name, value),
            None => (pair, ""),
        };
        let name = ParamName::parse(name).ok_or(RequestError::InvalidParameter)?;
        params.values.insert(name, value.to_string());
    }

    if params.len() != PARAM_COUNT {
        return Err(RequestError::InvalidParameterCount);
    }

    Ok(params)
}
