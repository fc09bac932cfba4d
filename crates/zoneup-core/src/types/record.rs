use serde::{Deserialize, Serialize};

/// TTL for published records. Zero disables resolver caching so a replaced
/// record takes effect immediately.
pub const DEFAULT_TTL: u64 = 0;

/// Weight for published records. Every host registers with weight 1.
pub const DEFAULT_WEIGHT: u64 = 1;

/// Kind of record published for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Maps the record name to the host's private IPv4 address
    A,
    /// Aliases the record name to the host's public hostname
    #[serde(rename = "CNAME")]
    Cname,
}

impl RecordKind {
    /// Instance metadata path that yields this kind's target value
    #[must_use]
    pub const fn metadata_path(self) -> &'static str {
        match self {
            Self::A => "local-ipv4",
            Self::Cname => "public-hostname",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::Cname => write!(f, "CNAME"),
        }
    }
}

/// Record name for a host in a zone.
///
/// The full hostname is joined with the zone name. Earlier revisions of the
/// registrar kept only the first dot-delimited label of the hostname; the
/// full-hostname policy is the one kept here (see DESIGN.md).
#[must_use]
pub fn record_name(hostname: &str, zone_name: &str) -> String {
    format!("{hostname}.{zone_name}")
}

/// The single weighted record set published for this host.
///
/// Built once per invocation and immutable afterwards. TTL and weight carry
/// fixed defaults that are never exposed on the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    /// Canonical id of the zone the record lands in
    pub zone_id: String,

    /// Fully-qualified record name
    pub name: String,

    /// A or CNAME
    pub kind: RecordKind,

    /// Record target: private IPv4 for A, public hostname for CNAME
    pub value: String,

    /// Record TTL in seconds
    pub ttl: u64,

    /// Weighted-routing weight
    pub weight: u64,

    /// Identifier distinguishing this host within the weighted set
    pub set_identifier: String,
}

impl RecordSpec {
    /// Build the record set for a host, applying the record-name policy and
    /// the fixed TTL/weight defaults.
    #[must_use]
    pub fn new(
        zone_id: impl Into<String>,
        hostname: &str,
        zone_name: &str,
        kind: RecordKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            name: record_name(hostname, zone_name),
            kind,
            value: value.into(),
            ttl: DEFAULT_TTL,
            weight: DEFAULT_WEIGHT,
            set_identifier: hostname.to_string(),
        }
    }
}
