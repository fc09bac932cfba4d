//! Hosted-zone lookup endpoints.

use crate::ZoneupClient;
use zoneup_core::{Result, Zone, ZoneList};

/// Hosted-zone lookup endpoints
pub struct ZonesApi<'a> {
    client: &'a ZoneupClient,
}

impl<'a> ZonesApi<'a> {
    pub(crate) fn new(client: &'a ZoneupClient) -> Self {
        Self { client }
    }

    /// List hosted zones whose name matches, in provider order.
    ///
    /// An empty list is a successful response; callers decide whether that is
    /// an error.
    pub async fn list_by_name(&self, zone_name: &str) -> Result<Vec<Zone>> {
        let list: ZoneList = self
            .client
            .get_with_query("/zones", &[("name", zone_name)])
            .await?;
        Ok(list.zones)
    }
}
