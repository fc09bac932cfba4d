//! # zoneup-cli
//!
//! Command-line registrar that publishes the running host's network identity
//! as a single weighted DNS record in a hosted zone.
//!
//! The whole run is one sequence: resolve the target zone (by name lookup
//! with retry, or by explicit id), fetch the host's address or hostname from
//! the instance metadata service, upsert one record, exit.

pub mod cli;

pub use cli::run;
