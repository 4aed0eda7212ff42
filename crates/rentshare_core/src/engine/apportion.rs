//! Cost apportionment over a room/tenant snapshot.
//!
//! # Responsibility
//! - Partition floor space into common, private and unallocated area.
//! - Split cold rent by area and common cost/utilities by private-area
//!   ratio.
//!
//! # Invariants
//! - `total_area == total_common_area + total_private_area +
//!   unallocated_area` holds exactly: the total is the sum of the three
//!   partition sums, each accumulated in room input order.
//! - `checksum` equals the sum of all tenant totals plus the unallocated
//!   cost, so with no unallocated area it reconstitutes
//!   `total_cold_rent + utilities`.
//! - Breakdowns follow tenant creation order; buckets for tenant IDs absent
//!   from the tenant list come last, in first-room-encounter order.

use crate::model::room::Room;
use crate::model::snapshot::RentInputs;
use crate::model::tenant::{Tenant, TenantId};
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CalcResult<T> = Result<T, CalculationError>;

/// Terminal precondition failures of the apportionment engine.
///
/// All three mean "no calculation possible" for the given snapshot; no
/// partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// Total cold rent is missing, non-finite or not positive.
    InvalidRent,
    /// No rooms, or all rooms have zero area.
    NoArea,
    /// Rooms are assigned to tenants, but no billable private area exists
    /// to apportion common costs to.
    NoPrivateAreaWithTenants,
}

impl Display for CalculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRent => write!(f, "total cold rent must be a positive amount"),
            Self::NoArea => write!(f, "no room area available for apportionment"),
            Self::NoPrivateAreaWithTenants => write!(
                f,
                "tenants have assigned rooms but there is no private area to bill"
            ),
        }
    }
}

impl Error for CalculationError {}

/// Per-tenant cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenantRentBreakdown {
    /// Tenant this breakdown is billed to. May reference a tenant absent
    /// from the snapshot's tenant list; the renderer decides how to label
    /// such rows.
    #[serde(rename = "tenantId")]
    pub tenant_id: TenantId,
    /// Sum of areas of this tenant's private rooms.
    #[serde(rename = "privateArea")]
    pub private_area: f64,
    /// Names of this tenant's private rooms, in room input order.
    pub rooms: Vec<String>,
    /// Common area equivalent attributed by private-area ratio.
    #[serde(rename = "commonAreaShare")]
    pub common_area_share: f64,
    /// Share of the collective common-area cost.
    #[serde(rename = "commonCostShare")]
    pub common_cost_share: f64,
    /// Private cost plus common cost share.
    #[serde(rename = "coldRent")]
    pub cold_rent: f64,
    /// Utilities prepayment share, same ratio as the common cost.
    #[serde(rename = "utilitiesShare")]
    pub utilities_share: f64,
    /// Cold rent share plus utilities share.
    #[serde(rename = "totalRent")]
    pub total_rent: f64,
}

/// Whole-building apportionment result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    #[serde(rename = "totalColdRent")]
    pub total_cold_rent: f64,
    pub utilities: f64,
    #[serde(rename = "totalArea")]
    pub total_area: f64,
    #[serde(rename = "totalPrivateArea")]
    pub total_private_area: f64,
    #[serde(rename = "totalCommonArea")]
    pub total_common_area: f64,
    /// Cold rent per square meter over the whole building.
    #[serde(rename = "ratePerSqm")]
    pub rate_per_sqm: f64,
    #[serde(rename = "totalCommonCost")]
    pub total_common_cost: f64,
    /// Ordered per-tenant breakdowns (tenant creation order).
    #[serde(rename = "tenantBreakdowns")]
    pub tenant_breakdowns: Vec<TenantRentBreakdown>,
    /// Area neither common nor leased.
    #[serde(rename = "unallocatedArea")]
    pub unallocated_area: f64,
    /// Cost of unallocated area, tracked but billed to nobody.
    #[serde(rename = "unallocatedCost")]
    pub unallocated_cost: f64,
    /// Sum of all tenant totals plus the unallocated cost.
    pub checksum: f64,
}

/// Area totals and per-tenant room groupings for one snapshot.
struct AreaPartition {
    total_common_area: f64,
    total_private_area: f64,
    unallocated_area: f64,
    /// Private area and room names per referenced tenant ID.
    buckets: HashMap<TenantId, TenantBucket>,
    /// Tenant IDs in first-room-encounter order.
    encounter_order: Vec<TenantId>,
}

struct TenantBucket {
    private_area: f64,
    rooms: Vec<String>,
}

impl AreaPartition {
    fn total_area(&self) -> f64 {
        self.total_common_area + self.total_private_area + self.unallocated_area
    }
}

fn partition_rooms(rooms: &[Room]) -> AreaPartition {
    let mut total_common_area = 0.0;
    let mut total_private_area = 0.0;
    let mut unallocated_area = 0.0;
    let mut buckets: HashMap<TenantId, TenantBucket> = HashMap::new();
    let mut encounter_order = Vec::new();

    for room in rooms {
        // The common flag wins over a stored tenant reference.
        if room.is_common_area {
            total_common_area += room.area;
        } else if let Some(tenant_id) = room.tenant_id {
            total_private_area += room.area;
            let bucket = buckets.entry(tenant_id).or_insert_with(|| {
                encounter_order.push(tenant_id);
                TenantBucket {
                    private_area: 0.0,
                    rooms: Vec::new(),
                }
            });
            bucket.private_area += room.area;
            bucket.rooms.push(room.name.clone());
        } else {
            unallocated_area += room.area;
        }
    }

    AreaPartition {
        total_common_area,
        total_private_area,
        unallocated_area,
        buckets,
        encounter_order,
    }
}

/// Apportions cold rent and utilities over the given snapshot.
///
/// # Preconditions (checked in order, each a terminal failure)
/// 1. `total_cold_rent` finite and > 0, else [`CalculationError::InvalidRent`].
/// 2. Total room area > 0, else [`CalculationError::NoArea`].
/// 3. When tenant-assigned rooms exist, their private area must be > 0,
///    else [`CalculationError::NoPrivateAreaWithTenants`].
///
/// # Contract
/// - Referentially transparent; inputs are never mutated.
/// - Non-finite `utilities` is coerced to 0 before the checks run.
/// - No currency rounding happens here; display rounding is the consumer's
///   concern.
pub fn compute_rent(
    inputs: &RentInputs,
    rooms: &[Room],
    tenants: &[Tenant],
) -> CalcResult<CalculationResult> {
    if !inputs.total_cold_rent.is_finite() || inputs.total_cold_rent <= 0.0 {
        return Err(CalculationError::InvalidRent);
    }
    let utilities = if inputs.utilities.is_finite() {
        inputs.utilities
    } else {
        0.0
    };

    let mut partition = partition_rooms(rooms);
    let total_area = partition.total_area();
    if total_area == 0.0 {
        return Err(CalculationError::NoArea);
    }
    if partition.total_private_area <= 0.0 && !partition.buckets.is_empty() {
        return Err(CalculationError::NoPrivateAreaWithTenants);
    }

    let rate_per_sqm = inputs.total_cold_rent / total_area;
    let total_common_cost = partition.total_common_area * rate_per_sqm;

    let mut tenant_breakdowns = Vec::with_capacity(partition.buckets.len());
    for tenant_id in breakdown_order(tenants, &partition.encounter_order) {
        let Some(bucket) = partition.buckets.remove(&tenant_id) else {
            continue;
        };

        let private_cost = bucket.private_area * rate_per_sqm;

        // Common cost is only apportioned when there is both a common area
        // to bill and a private area to split it over.
        let (common_area_share, common_cost_share) =
            if partition.total_common_area > 0.0 && partition.total_private_area > 0.0 {
                let share_ratio = bucket.private_area / partition.total_private_area;
                (
                    share_ratio * partition.total_common_area,
                    share_ratio * total_common_cost,
                )
            } else {
                (0.0, 0.0)
            };

        // Utilities follow the same private-area ratio as the common cost.
        let utilities_share = if utilities > 0.0 && partition.total_private_area > 0.0 {
            (bucket.private_area / partition.total_private_area) * utilities
        } else {
            0.0
        };

        let cold_rent = private_cost + common_cost_share;
        let total_rent = cold_rent + utilities_share;

        tenant_breakdowns.push(TenantRentBreakdown {
            tenant_id,
            private_area: bucket.private_area,
            rooms: bucket.rooms,
            common_area_share,
            common_cost_share,
            cold_rent,
            utilities_share,
            total_rent,
        });
    }

    let unallocated_cost = partition.unallocated_area * rate_per_sqm;
    let checksum = tenant_breakdowns
        .iter()
        .map(|breakdown| breakdown.total_rent)
        .sum::<f64>()
        + unallocated_cost;

    Ok(CalculationResult {
        total_cold_rent: inputs.total_cold_rent,
        utilities,
        total_area,
        total_private_area: partition.total_private_area,
        total_common_area: partition.total_common_area,
        rate_per_sqm,
        total_common_cost,
        tenant_breakdowns,
        unallocated_area: partition.unallocated_area,
        unallocated_cost,
        checksum,
    })
}

/// Stable breakdown ordering: tenant creation order first, then tenant IDs
/// only known from room references, in first-encounter order.
fn breakdown_order(tenants: &[Tenant], encounter_order: &[TenantId]) -> Vec<TenantId> {
    let mut order: Vec<TenantId> = tenants.iter().map(|tenant| tenant.id).collect();
    for tenant_id in encounter_order {
        if !tenants.iter().any(|tenant| tenant.id == *tenant_id) {
            order.push(*tenant_id);
        }
    }
    order
}
