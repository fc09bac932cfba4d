//! CLI argument parsing and the top-level dispatcher.
//!
//! All process-exit policy lives here and in `main`; library code below this
//! layer only returns errors.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zoneup_client::{MetadataClient, ZoneupClient};
use zoneup_core::{Error, RecordKind, RetryPolicy, ZoneRef};

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let ctx = build_context(cli)?;
    commands::register::execute(ctx).await
}

/// Initialize the tracing subscriber; `--debug` raises the default level.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Validate flags and construct clients. Fails before any network call.
fn build_context(cli: Cli) -> Result<commands::Context> {
    let zone = ZoneRef::from_options(cli.zonename.as_deref(), cli.zone_id.as_deref())?;

    let kind = if cli.cname {
        RecordKind::Cname
    } else {
        RecordKind::A
    };

    let api_token = cli
        .api_token
        .ok_or_else(|| Error::Config("API token required (set ZONEUP_API_TOKEN)".to_string()))?;

    let mut builder = ZoneupClient::builder(api_token);
    if let Some(url) = cli.api_url {
        builder = builder.base_url(url);
    }
    let client = builder.build();

    let metadata = cli
        .metadata_url
        .map_or_else(MetadataClient::new, MetadataClient::with_base_url);

    Ok(commands::Context {
        hostname: cli.hostname,
        zonename: cli.zonename,
        zone,
        kind,
        client,
        metadata,
        policy: RetryPolicy::default(),
    })
}
