//! Core domain logic for rentshare.
//! This crate is the single source of truth for apportionment invariants.

pub mod engine;
pub mod io;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;

pub use engine::apportion::{
    compute_rent, CalcResult, CalculationError, CalculationResult, TenantRentBreakdown,
};
pub use io::{export_snapshot, import_snapshot, SnapshotIoError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::room::{Room, RoomId, RoomValidationError};
pub use model::snapshot::{BillingSnapshot, RentInputs};
pub use model::tenant::{Tenant, TenantId, TenantValidationError};
pub use service::ledger::{LedgerError, LedgerService};
pub use session::{SessionError, SessionStore, SESSION_FILE_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
