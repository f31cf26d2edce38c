//! Credential handling.
//!
//! Deployment supplies one `;`-delimited string of keys. It is split once at
//! startup and shared read-only for the life of the process; both request
//! shapes authenticate against the same set.

use std::collections::HashSet;

/// The set of credentials a request may authenticate with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeySet {
    keys: HashSet<String>,
}

impl ApiKeySet {
    /// Split a `;`-delimited credential string into a set.
    ///
    /// Splitting is literal: fragments are not trimmed or decoded. Config
    /// validation rejects empty fragments before a server is built.
    pub fn from_delimited(raw: &str) -> Self {
        Self {
            keys: raw.split(';').map(str::to_string).collect(),
        }
    }

    /// Membership test against the raw credential text.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_key() {
        let keys = ApiKeySet::from_delimited("alpha");
        assert!(keys.contains("alpha"));
        assert!(!keys.contains("beta"));
    }

    #[test]
    fn test_multiple_keys() {
        let keys = ApiKeySet::from_delimited("alpha;beta;gamma");
        assert!(keys.contains("alpha"));
        assert!(keys.contains("beta"));
        assert!(keys.contains("gamma"));
        assert!(!keys.contains("alpha;beta"));
    }

    #[test]
    fn test_matching_is_literal() {
        let keys = ApiKeySet::from_delimited(" padded ;en%63oded");
        assert!(keys.contains(" padded "));
        assert!(!keys.contains("padded"));
        assert!(keys.contains("en%63oded"));
        assert!(!keys.contains("encoded"));
    }

    #[test]
    fn test_empty_fragments_are_kept() {
        let keys = ApiKeySet::from_delimited("alpha;;beta");
        assert!(keys.contains(""));
    }
}
