//! The registration sequence: resolve zone, fetch metadata, publish record.

use anyhow::Result;
use tracing::{info, warn};
use zoneup_client::resolve_zone;
use zoneup_core::{record_name, RecordSpec, DEFAULT_TTL, DEFAULT_WEIGHT};

use super::Context;

/// Run the sequence. Zone resolution and metadata fetch are fatal on error;
/// the final publish is best-effort and only changes the last log line.
pub async fn execute(ctx: Context) -> Result<()> {
    let zone_id = resolve_zone(&ctx.client, &ctx.zone, &ctx.policy).await?;
    info!(zone = %zone_id, "resolved target zone");

    let value = ctx.metadata.fetch(ctx.kind).await?;

    // With only an explicit zone id there is no zone name to join, so the
    // hostname is taken as the full record name.
    let name = ctx.zonename.as_deref().map_or_else(
        || ctx.hostname.clone(),
        |zone| record_name(&ctx.hostname, zone),
    );

    let spec = RecordSpec {
        zone_id,
        name,
        kind: ctx.kind,
        value,
        ttl: DEFAULT_TTL,
        weight: DEFAULT_WEIGHT,
        set_identifier: ctx.hostname.clone(),
    };

    match ctx.client.records().upsert(&spec).await {
        Ok(_) => {
            info!(record = %spec.name, kind = %spec.kind, value = %spec.value, "record registered");
        }
        Err(err) => {
            warn!(record = %spec.name, error = %err, "failed to register record");
        }
    }

    Ok(())
}
