//! Domain model for rooms, tenants and billing snapshots.
//!
//! # Responsibility
//! - Define the canonical records the apportionment engine operates on.
//! - Pin the JSON exchange shape used by import/export and sessions.
//!
//! # Invariants
//! - Every room and tenant is identified by a stable UUID.
//! - A common-area room carries no tenant reference; the common flag is
//!   authoritative when both fields are set in external input.

pub mod room;
pub mod snapshot;
pub mod tenant;
