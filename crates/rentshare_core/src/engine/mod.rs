//! Rent apportionment engine.
//!
//! # Responsibility
//! - Map one billing snapshot to per-tenant cost breakdowns.
//!
//! # Invariants
//! - Pure and deterministic: identical inputs yield identical outputs.
//! - Never divides by a zero total; degenerate inputs fail with a typed
//!   error before any arithmetic.

pub mod apportion;

pub use apportion::{
    compute_rent, CalcResult, CalculationError, CalculationResult, TenantRentBreakdown,
};
