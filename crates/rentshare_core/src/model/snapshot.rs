//! Billing snapshot: the serializable unit of exchange.
//!
//! # Responsibility
//! - Bundle rent inputs, rooms and tenants into one value the engine,
//!   importer and session store all agree on.
//!
//! # Invariants
//! - Wire field names are fixed (`totalColdRent`, `tenantId`,
//!   `isCommonArea`); changing them breaks previously exported files.

use crate::model::room::Room;
use crate::model::tenant::Tenant;
use serde::{Deserialize, Serialize};

/// Global billing figures for one calculation.
///
/// Engine-facing view of the snapshot's global fields; never serialized
/// itself — the wire shape is [`BillingSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentInputs {
    /// Base rent excluding utilities. Non-positive means "no calculation".
    pub total_cold_rent: f64,
    /// Utilities prepayment; non-finite values are coerced to 0 by the
    /// engine before any precondition check.
    pub utilities: f64,
}

impl RentInputs {
    pub fn new(total_cold_rent: f64, utilities: f64) -> Self {
        Self {
            total_cold_rent,
            utilities,
        }
    }
}

/// Complete in-memory data set the engine consumes and the I/O layer
/// serializes.
///
/// The engine only ever reads a snapshot; rooms and tenants are edited
/// through [`crate::service::ledger::LedgerService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSnapshot {
    /// Base rent excluding utilities.
    #[serde(rename = "totalColdRent")]
    pub total_cold_rent: f64,
    /// Utilities prepayment.
    pub utilities: f64,
    /// All rooms, in creation order.
    pub rooms: Vec<Room>,
    /// All tenants, in creation order. Breakdown ordering follows this list.
    pub tenants: Vec<Tenant>,
}

impl Default for BillingSnapshot {
    fn default() -> Self {
        Self {
            total_cold_rent: 0.0,
            utilities: 0.0,
            rooms: Vec::new(),
            tenants: Vec::new(),
        }
    }
}

impl BillingSnapshot {
    /// Extracts the global figures as engine inputs.
    pub fn rent_inputs(&self) -> RentInputs {
        RentInputs::new(self.total_cold_rent, self.utilities)
    }

    /// Looks up a tenant's display name by ID.
    pub fn tenant_name(&self, id: crate::model::tenant::TenantId) -> Option<&str> {
        self.tenants
            .iter()
            .find(|tenant| tenant.id == id)
            .map(|tenant| tenant.name.as_str())
    }
}
