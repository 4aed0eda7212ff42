//! Ledger use-case service.
//!
//! # Responsibility
//! - Own one [`BillingSnapshot`] and apply validated edits to it.
//! - Enforce tenant name uniqueness and referential integrity between
//!   rooms and tenants before data ever reaches the engine.
//!
//! # Invariants
//! - Tenant names are non-empty and case-insensitively unique.
//! - A room's tenant reference always resolves to a registered tenant.
//! - A tenant with assigned rooms cannot be removed.

use crate::engine::apportion::{compute_rent, CalcResult, CalculationResult};
use crate::model::room::{Room, RoomId, RoomValidationError};
use crate::model::snapshot::BillingSnapshot;
use crate::model::tenant::{Tenant, TenantId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Edit failure for ledger operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// Tenant name is empty or whitespace-only.
    EmptyTenantName,
    /// A tenant with the same name (ignoring case) already exists.
    DuplicateTenant(String),
    /// Target tenant does not exist.
    TenantNotFound(TenantId),
    /// Tenant still has rooms assigned and cannot be removed.
    TenantHasRooms { name: String, rooms: Vec<String> },
    /// Target room does not exist.
    RoomNotFound(RoomId),
    /// Room fields failed model validation.
    InvalidRoom(RoomValidationError),
    /// Room references a tenant ID that is not registered.
    UnknownTenantReference(TenantId),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTenantName => write!(f, "tenant name must not be empty"),
            Self::DuplicateTenant(name) => write!(f, "tenant `{name}` already exists"),
            Self::TenantNotFound(id) => write!(f, "tenant not found: {id}"),
            Self::TenantHasRooms { name, rooms } => write!(
                f,
                "tenant `{name}` still has rooms assigned: {}",
                rooms.join(", ")
            ),
            Self::RoomNotFound(id) => write!(f, "room not found: {id}"),
            Self::InvalidRoom(err) => write!(f, "{err}"),
            Self::UnknownTenantReference(id) => {
                write!(f, "room references unknown tenant: {id}")
            }
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRoom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RoomValidationError> for LedgerError {
    fn from(value: RoomValidationError) -> Self {
        Self::InvalidRoom(value)
    }
}

/// Owning editor for one billing snapshot.
///
/// The UI/CLI layer holds one service per open data set; the engine is only
/// ever invoked through [`LedgerService::calculate`], so it always sees a
/// snapshot that passed the service's integrity checks (or was explicitly
/// imported through the stricter I/O validator).
#[derive(Debug, Default)]
pub struct LedgerService {
    snapshot: BillingSnapshot,
}

impl LedgerService {
    /// Creates a service over an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing snapshot (import/session restore).
    pub fn from_snapshot(snapshot: BillingSnapshot) -> Self {
        Self { snapshot }
    }

    /// Read access to the current snapshot.
    pub fn snapshot(&self) -> &BillingSnapshot {
        &self.snapshot
    }

    /// Replaces the whole snapshot, e.g. after a file import.
    pub fn replace_snapshot(&mut self, snapshot: BillingSnapshot) {
        self.snapshot = snapshot;
    }

    /// Updates the global billing figures.
    pub fn set_rent_inputs(&mut self, total_cold_rent: f64, utilities: f64) {
        self.snapshot.total_cold_rent = total_cold_rent;
        self.snapshot.utilities = if utilities.is_finite() { utilities } else { 0.0 };
    }

    /// Registers a new tenant.
    pub fn add_tenant(&mut self, name: impl Into<String>) -> Result<TenantId, LedgerError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(LedgerError::EmptyTenantName);
        }
        if self.snapshot.tenants.iter().any(|t| t.name_matches(&name)) {
            return Err(LedgerError::DuplicateTenant(name));
        }

        let tenant = Tenant::new(name);
        let id = tenant.id;
        self.snapshot.tenants.push(tenant);
        info!("event=tenant_added module=ledger status=ok tenant_id={id}");
        Ok(id)
    }

    /// Renames a tenant. The duplicate check excludes the tenant itself, so
    /// pure case changes of its own name are allowed.
    pub fn rename_tenant(
        &mut self,
        id: TenantId,
        name: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(LedgerError::EmptyTenantName);
        }
        if self
            .snapshot
            .tenants
            .iter()
            .any(|t| t.id != id && t.name_matches(&name))
        {
            return Err(LedgerError::DuplicateTenant(name));
        }

        let tenant = self
            .snapshot
            .tenants
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TenantNotFound(id))?;
        tenant.name = name;
        info!("event=tenant_renamed module=ledger status=ok tenant_id={id}");
        Ok(())
    }

    /// Removes a tenant. Refused while rooms are still assigned; the error
    /// lists the offending room names.
    pub fn remove_tenant(&mut self, id: TenantId) -> Result<(), LedgerError> {
        let tenant = self
            .snapshot
            .tenants
            .iter()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TenantNotFound(id))?;

        let assigned: Vec<String> = self
            .snapshot
            .rooms
            .iter()
            .filter(|room| room.tenant_id == Some(id))
            .map(|room| room.name.clone())
            .collect();
        if !assigned.is_empty() {
            return Err(LedgerError::TenantHasRooms {
                name: tenant.name.clone(),
                rooms: assigned,
            });
        }

        self.snapshot.tenants.retain(|t| t.id != id);
        info!("event=tenant_removed module=ledger status=ok tenant_id={id}");
        Ok(())
    }

    /// Adds a room. A tenant reference on a common-area room is dropped;
    /// otherwise it must resolve to a registered tenant.
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        area: f64,
        tenant_id: Option<TenantId>,
        is_common_area: bool,
    ) -> Result<RoomId, LedgerError> {
        let room = Room::new(name, area, tenant_id, is_common_area);
        room.validate()?;
        self.check_tenant_reference(room.tenant_id)?;

        let id = room.id;
        self.snapshot.rooms.push(room);
        info!("event=room_added module=ledger status=ok room_id={id} area={area}");
        Ok(id)
    }

    /// Replaces all editable fields of an existing room.
    pub fn update_room(
        &mut self,
        id: RoomId,
        name: impl Into<String>,
        area: f64,
        tenant_id: Option<TenantId>,
        is_common_area: bool,
    ) -> Result<(), LedgerError> {
        let updated = Room::with_id(id, name, area, tenant_id, is_common_area);
        updated.validate()?;
        self.check_tenant_reference(updated.tenant_id)?;

        let room = self
            .snapshot
            .rooms
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or(LedgerError::RoomNotFound(id))?;
        *room = updated;
        info!("event=room_updated module=ledger status=ok room_id={id} area={area}");
        Ok(())
    }

    /// Removes a room by ID.
    pub fn remove_room(&mut self, id: RoomId) -> Result<(), LedgerError> {
        let before = self.snapshot.rooms.len();
        self.snapshot.rooms.retain(|room| room.id != id);
        if self.snapshot.rooms.len() == before {
            return Err(LedgerError::RoomNotFound(id));
        }
        info!("event=room_removed module=ledger status=ok room_id={id}");
        Ok(())
    }

    /// Runs the apportionment engine over the current snapshot.
    pub fn calculate(&self) -> CalcResult<CalculationResult> {
        compute_rent(
            &self.snapshot.rent_inputs(),
            &self.snapshot.rooms,
            &self.snapshot.tenants,
        )
    }

    fn check_tenant_reference(&self, tenant_id: Option<TenantId>) -> Result<(), LedgerError> {
        if let Some(id) = tenant_id {
            if !self.snapshot.tenants.iter().any(|t| t.id == id) {
                return Err(LedgerError::UnknownTenantReference(id));
            }
        }
        Ok(())
    }
}
