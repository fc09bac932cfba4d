use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path-like prefix the provider uses for canonical zone identifiers.
pub const HOSTED_ZONE_PREFIX: &str = "/hostedzone/";

/// How the caller names the target zone.
///
/// Exactly one variant drives resolution: an explicit id short-circuits the
/// name lookup entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneRef {
    /// Human-readable zone name, resolved via the hosted-zone API
    Name(String),

    /// Provider-assigned zone id, used as-is (after canonicalization)
    Id(String),
}

impl ZoneRef {
    /// Build a reference from the optional CLI inputs.
    ///
    /// An explicit id wins over a name; supplying neither is a configuration
    /// error caught before any network call.
    pub fn from_options(zone_name: Option<&str>, zone_id: Option<&str>) -> Result<Self> {
        match (zone_id, zone_name) {
            (Some(id), _) if !id.is_empty() => Ok(Self::Id(id.to_string())),
            (_, Some(name)) if !name.is_empty() => Ok(Self::Name(name.to_string())),
            _ => Err(Error::Config(
                "either a zone name or a zone id is required".to_string(),
            )),
        }
    }

}

/// Prefix a bare zone id with the provider's path-like form.
///
/// Ids that already carry the prefix pass through unchanged.
#[must_use]
pub fn canonical_zone_id(id: &str) -> String {
    if id.starts_with(HOSTED_ZONE_PREFIX) {
        id.to_string()
    } else {
        format!("{HOSTED_ZONE_PREFIX}{id}")
    }
}

/// Strip the canonical prefix back off for URL path construction.
#[must_use]
pub fn bare_zone_id(id: &str) -> &str {
    id.strip_prefix(HOSTED_ZONE_PREFIX).unwrap_or(id)
}

/// A hosted zone as returned by the provider's lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Canonical zone identifier (`/hostedzone/...`)
    pub id: String,

    /// Fully-qualified zone name
    pub name: String,
}

/// Response body of the list-zones-by-name operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneList {
    /// Matching zones, in provider order
    #[serde(default)]
    pub zones: Vec<Zone>,
}
