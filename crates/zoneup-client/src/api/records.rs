//! Record-set change endpoints.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zoneup_core::{bare_zone_id, RecordKind, RecordSpec, Result};

use crate::ZoneupClient;

/// Record-set change endpoints
pub struct RecordsApi<'a> {
    client: &'a ZoneupClient,
}

impl<'a> RecordsApi<'a> {
    pub(crate) fn new(client: &'a ZoneupClient) -> Self {
        Self { client }
    }

    /// Upsert a single weighted record set into its zone.
    ///
    /// Create-or-replace semantics: re-registering a host replaces the record
    /// it published last time.
    pub async fn upsert(&self, spec: &RecordSpec) -> Result<ChangeInfo> {
        let path = format!("/zones/{}/rrsets", bare_zone_id(&spec.zone_id));
        let batch = ChangeBatch::upsert(spec);
        debug!(zone = %spec.zone_id, name = %spec.name, kind = %spec.kind, "upserting record set");
        self.client.post(&path, &batch).await
    }
}

/// A batch of record-set changes submitted in one call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Human-readable note stored with the change
    pub comment: String,

    /// The changes to apply
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    /// Batch holding a single upsert for the given record
    #[must_use]
    pub fn upsert(spec: &RecordSpec) -> Self {
        let comment = match spec.kind {
            RecordKind::A => "Host A record registered",
            RecordKind::Cname => "Host CNAME record registered",
        };
        Self {
            comment: comment.to_string(),
            changes: vec![Change {
                action: ChangeAction::Upsert,
                record: WireRecordSet::from(spec),
            }],
        }
    }
}

/// One record-set change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Change {
    /// What to do with the record set
    pub action: ChangeAction,

    /// The record set itself
    pub record: WireRecordSet,
}

/// Change action on a record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create-if-absent-else-replace
    Upsert,
}

/// Wire form of a weighted record set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireRecordSet {
    /// Fully-qualified record name
    pub name: String,

    /// Record type (A, CNAME)
    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// Record values; always a single entry here
    pub values: Vec<String>,

    /// TTL in seconds
    pub ttl: u64,

    /// Weighted-routing weight
    pub weight: u64,

    /// Identifier of this host within the weighted set
    pub set_identifier: String,
}

impl From<&RecordSpec> for WireRecordSet {
    fn from(spec: &RecordSpec) -> Self {
        Self {
            name: spec.name.clone(),
            kind: spec.kind,
            values: vec![spec.value.clone()],
            ttl: spec.ttl,
            weight: spec.weight,
            set_identifier: spec.set_identifier.clone(),
        }
    }
}

/// Provider acknowledgement of a submitted change batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeInfo {
    /// Provider-assigned change id
    #[serde(default)]
    pub id: Option<String>,

    /// Change status (e.g. PENDING, INSYNC)
    #[serde(default)]
    pub status: Option<String>,
}
