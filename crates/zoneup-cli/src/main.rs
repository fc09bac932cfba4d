//! zoneup - register this host in a hosted DNS zone.

use tracing::error;

#[tokio::main]
async fn main() {
    std::process::exit(match zoneup_cli::run().await {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %err, "fatal error, terminating");
            1
        }
    });
}
