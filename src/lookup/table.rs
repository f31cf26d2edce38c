//! Compiled-in offset tables.
//!
//! # Design Decisions
//! - Tables are `static` data baked into the binary; a release that changes
//!   offsets is a redeploy, never a runtime mutation
//! - Lookup is a linear scan over a handful of entries
//! - Offsets serialize in declaration order; clients walk the pointer chain
//!   in exactly this order

use serde::Serialize;

/// Offset data for one supported client version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Module-relative base address of the pointer chain.
    pub base_offset: u32,

    /// Displacements applied in order starting from the base.
    pub offsets: &'static [u32],
}

/// One row of the offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionEntry {
    /// Client version string, e.g. `"1.16.102"`.
    pub version: &'static str,

    /// The record served for this version.
    pub record: VersionRecord,
}

/// Offset table keyed by client version string.
pub static OFFSET_TABLE: &[VersionEntry] = &[
    VersionEntry {
        version: "1.14.3002",
        record: VersionRecord {
            base_offset: 0x0302_2668,
            offsets: &[0xC0, 0xF80, 0xB0, 0xCE8, 0xB0, 0x120, 0xF0],
        },
    },
    VersionEntry {
        version: "1.14.6005",
        record: VersionRecord {
            base_offset: 0x0305_9208,
            offsets: &[0xC0, 0x890, 0xB0, 0xDD0, 0xB0, 0x120, 0xF0],
        },
    },
    VersionEntry {
        version: "1.16.2",
        record: VersionRecord {
            base_offset: 0x0385_8120,
            offsets: &[0x18, 0xC8, 0x830, 0x8, 0x40, 0x120, 0xF0],
        },
    },
    VersionEntry {
        version: "1.16.102",
        record: VersionRecord {
            base_offset: 0x036D_94B8,
            offsets: &[0xE8, 0x10, 0xE38, 0xB0, 0x120, 0xF0],
        },
    },
];

/// Minimum client build expected per version.
///
/// Informational only: the serving path logs it but never gates on it, so
/// older builds keep receiving offsets.
pub static NEEDED_VERSIONS: &[(&str, u32)] = &[
    ("1.14.3002", 100),
    ("1.14.6005", 101),
    ("1.16.2", 101),
    ("1.16.102", 101),
];

/// Configuration versions the legacy request shape still accepts.
pub static LEGACY_CONFIG_VERSIONS: &[&str] = &["1.0.0"];

/// Look up the offset entry for a client version.
pub fn find_entry(version: &str) -> Option<&'static VersionEntry> {
    OFFSET_TABLE.iter().find(|entry| entry.version == version)
}

/// Minimum client build for a version, if the version is known.
pub fn needed_version(version: &str) -> Option<u32> {
    NEEDED_VERSIONS
        .iter()
        .find(|(v, _)| *v == version)
        .map(|(_, needed)| *needed)
}

/// Whether a legacy `config_version` value is still served.
pub fn is_legacy_config_version(version: &str) -> bool {
    LEGACY_CONFIG_VERSIONS.contains(&version)
}
