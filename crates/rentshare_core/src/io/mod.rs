//! JSON snapshot import/export.
//!
//! # Responsibility
//! - Serialize snapshots to the fixed exchange shape and read them back.
//! - Validate imported data before it replaces the working snapshot.
//!
//! # Invariants
//! - Import is stricter than the engine: dangling tenant references and
//!   duplicate tenant names are rejected here, while the engine merely
//!   tolerates them.
//! - Imported common-area rooms are normalized (tenant reference dropped).

use crate::model::room::RoomValidationError;
use crate::model::snapshot::BillingSnapshot;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while reading or validating an exchanged snapshot.
#[derive(Debug)]
pub enum SnapshotIoError {
    /// Input is not valid JSON or does not match the exchange shape.
    Parse(serde_json::Error),
    /// A room record failed model validation.
    InvalidRoom {
        room: String,
        source: RoomValidationError,
    },
    /// A tenant record has an empty name.
    EmptyTenantName,
    /// Two tenants share a name (ignoring case).
    DuplicateTenant(String),
    /// A room references a tenant ID absent from the tenant list.
    UnknownTenantReference { room: String },
}

impl Display for SnapshotIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid snapshot JSON: {err}"),
            Self::InvalidRoom { room, source } => {
                write!(f, "invalid room `{room}`: {source}")
            }
            Self::EmptyTenantName => write!(f, "imported tenant has an empty name"),
            Self::DuplicateTenant(name) => {
                write!(f, "imported tenants contain duplicate name `{name}`")
            }
            Self::UnknownTenantReference { room } => {
                write!(f, "room `{room}` references a tenant that does not exist")
            }
        }
    }
}

impl Error for SnapshotIoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidRoom { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotIoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Serializes a snapshot as pretty-printed exchange JSON.
pub fn export_snapshot(snapshot: &BillingSnapshot) -> Result<String, SnapshotIoError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parses and validates exchange JSON into a snapshot.
///
/// # Contract
/// - Rooms must pass [`crate::model::room::Room::validate`].
/// - Tenant names must be non-empty and case-insensitively unique.
/// - Non-common rooms with a tenant reference must resolve against the
///   tenant list.
/// - Common rooms that also carry a tenant reference are normalized, not
///   rejected.
pub fn import_snapshot(raw: &str) -> Result<BillingSnapshot, SnapshotIoError> {
    let mut snapshot: BillingSnapshot = serde_json::from_str(raw)?;

    for room in &mut snapshot.rooms {
        room.normalize();
        room.validate().map_err(|source| SnapshotIoError::InvalidRoom {
            room: room.name.clone(),
            source,
        })?;
    }

    for (index, tenant) in snapshot.tenants.iter().enumerate() {
        if tenant.name.trim().is_empty() {
            return Err(SnapshotIoError::EmptyTenantName);
        }
        if snapshot.tenants[..index]
            .iter()
            .any(|earlier| earlier.name_matches(&tenant.name))
        {
            return Err(SnapshotIoError::DuplicateTenant(tenant.name.clone()));
        }
    }

    for room in &snapshot.rooms {
        if let Some(tenant_id) = room.billing_tenant() {
            if !snapshot.tenants.iter().any(|t| t.id == tenant_id) {
                return Err(SnapshotIoError::UnknownTenantReference {
                    room: room.name.clone(),
                });
            }
        }
    }

    info!(
        "event=snapshot_imported module=io status=ok rooms={} tenants={}",
        snapshot.rooms.len(),
        snapshot.tenants.len()
    );
    Ok(snapshot)
}
