//! Zone resolution with linear-backoff retry.
//!
//! An explicit zone id is canonicalized locally with zero network calls.
//! A zone name is resolved through the hosted-zone API, retrying transient
//! failures on the [`RetryPolicy`] schedule. An empty lookup result aborts
//! immediately: the provider answered, the zone just is not there.

use tracing::warn;
use zoneup_core::{canonical_zone_id, Error, Result, RetryPolicy, ZoneRef};

use crate::ZoneupClient;

/// Resolve a zone reference to its canonical `/hostedzone/<id>` identifier.
pub async fn resolve_zone(
    client: &ZoneupClient,
    zone: &ZoneRef,
    policy: &RetryPolicy,
) -> Result<String> {
    let zone_name = match zone {
        ZoneRef::Id(id) => return Ok(canonical_zone_id(id)),
        ZoneRef::Name(name) => name,
    };

    let mut attempt = 1;
    loop {
        let Some(backoff) = policy.backoff_before(attempt) else {
            // Attempt budget spent without ever reaching the provider.
            return Err(Error::RetriesExhausted {
                attempts: attempt - 1,
                last: Box::new(Error::Http("no lookup attempted".to_string())),
            });
        };
        if !backoff.is_zero() {
            tokio::time::sleep(backoff).await;
        }

        match client.zones().list_by_name(zone_name).await {
            Ok(zones) => {
                // First match wins when the provider returns several.
                return zones.into_iter().next().map_or_else(
                    || {
                        Err(Error::ZoneNotFound {
                            zone: zone_name.clone(),
                        })
                    },
                    |zone| Ok(canonical_zone_id(&zone.id)),
                );
            }
            Err(err) => {
                if policy.backoff_before(attempt + 1).is_none() {
                    return Err(Error::RetriesExhausted {
                        attempts: attempt,
                        last: Box::new(err),
                    });
                }
                warn!(zone = %zone_name, attempt, error = %err, "zone lookup failed, retrying");
                attempt += 1;
            }
        }
    }
}
