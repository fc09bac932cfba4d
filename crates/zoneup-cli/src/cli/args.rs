//! Command-line argument definitions using clap.

use clap::Parser;

/// Register this host's address or hostname as a DNS record in a hosted zone
///
/// Publishes one weighted record (TTL 0, weight 1) pointing at the value the
/// instance metadata service reports for this host: the private IPv4 address
/// for an A record, the public hostname for a CNAME.
#[derive(Parser, Debug)]
#[command(name = "zoneup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name for the new DNS entry
    #[arg(long)]
    pub hostname: String,

    /// Zone name to register the record in (resolved via the hosted-zone API)
    #[arg(long)]
    pub zonename: Option<String>,

    /// Explicit hosted-zone id, bypassing the name lookup
    #[arg(long)]
    pub zone_id: Option<String>,

    /// Publish a CNAME to the public hostname instead of an A record to the
    /// private IPv4 address
    #[arg(long)]
    pub cname: bool,

    /// Raise API request logging to debug verbosity
    #[arg(long)]
    pub debug: bool,

    /// Hosted-zone API token
    #[arg(long, env = "ZONEUP_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Hosted-zone API base URL
    #[arg(long, env = "ZONEUP_API_URL")]
    pub api_url: Option<String>,

    /// Instance metadata service base URL
    #[arg(long, env = "ZONEUP_METADATA_URL")]
    pub metadata_url: Option<String>,
}
