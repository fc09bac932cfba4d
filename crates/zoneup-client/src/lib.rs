//! HTTP clients for the zoneup host registrar.
//!
//! This crate provides [`ZoneupClient`] for the hosted-zone DNS API,
//! [`MetadataClient`] for the instance metadata service, and the retrying
//! zone [`resolver`].

mod client;
pub mod api;
pub mod metadata;
pub mod resolver;

pub use client::{ZoneupClient, ZoneupClientBuilder};
pub use metadata::MetadataClient;
pub use resolver::resolve_zone;
pub use zoneup_core::{Error, Result};
