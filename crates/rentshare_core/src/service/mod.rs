//! Snapshot editing services.
//!
//! # Responsibility
//! - Orchestrate room/tenant edits into validated snapshot mutations.
//! - Keep callers decoupled from engine and model invariants.

pub mod ledger;
