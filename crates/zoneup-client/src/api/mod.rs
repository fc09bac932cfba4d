//! Hosted-zone API endpoint groups.

mod records;
mod zones;

pub use records::{Change, ChangeAction, ChangeBatch, ChangeInfo, RecordsApi, WireRecordSet};
pub use zones::ZonesApi;
