//! Strongly-typed representations of zones and host records.

mod record;
mod zone;

pub use record::{record_name, RecordKind, RecordSpec, DEFAULT_TTL, DEFAULT_WEIGHT};
pub use zone::{bare_zone_id, canonical_zone_id, Zone, ZoneList, ZoneRef, HOSTED_ZONE_PREFIX};
