//! Command implementations.

pub mod register;

use zoneup_client::{MetadataClient, ZoneupClient};
use zoneup_core::{RecordKind, RetryPolicy, ZoneRef};

/// Everything the registration sequence needs, built once from the flags.
pub struct Context {
    /// Name for the new DNS entry
    pub hostname: String,

    /// Zone name, when one was supplied; joined with the hostname to form
    /// the record name
    pub zonename: Option<String>,

    /// How to reach the target zone
    pub zone: ZoneRef,

    /// Record kind to publish
    pub kind: RecordKind,

    /// Hosted-zone API client
    pub client: ZoneupClient,

    /// Instance metadata client
    pub metadata: MetadataClient,

    /// Retry policy for zone-name lookups
    pub policy: RetryPolicy,
}
