//! Core types for the zoneup host registrar.
//!
//! This crate provides the pieces shared by the client and the CLI:
//!
//! - **Types**: zone references, record kinds and the record set that gets
//!   published
//! - **Errors**: the [`Error`] enum used across the workspace
//! - **Backoff**: the pure retry policy applied to zone-name lookups
//!
//! # Example
//!
//! ```rust
//! use zoneup_core::{RecordKind, RecordSpec};
//!
//! let spec = RecordSpec::new("/hostedzone/Z123", "svc1", "internal.example.com.", RecordKind::A, "10.0.0.5");
//! assert_eq!(spec.name, "svc1.internal.example.com.");
//! assert_eq!(spec.ttl, 0);
//! ```

pub mod backoff;
mod error;
pub mod types;

pub use backoff::RetryPolicy;
pub use error::{Error, Result};
pub use types::*;
