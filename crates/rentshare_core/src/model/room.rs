//! Room domain record.
//!
//! # Invariants
//! - `area` is a finite, positive number of square meters.
//! - A common-area room has no tenant reference. External input may violate
//!   this; `is_common_area` wins and the reference is dropped on
//!   construction/normalization.

use crate::model::tenant::TenantId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a room.
pub type RoomId = Uuid;

/// A single unit of floor space in the building.
///
/// Exactly one of three billing roles applies per room: common area (shared
/// by all tenants), private (leased to one tenant), or unallocated (neither).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable global ID.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Floor area in square meters, finite and positive.
    pub area: f64,
    /// Leasing tenant; `None` for common and unallocated rooms.
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<TenantId>,
    /// Marks floor space shared by all tenants.
    #[serde(rename = "isCommonArea")]
    pub is_common_area: bool,
}

/// Validation failure for room records.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
    /// Area is non-finite, zero or negative.
    InvalidArea(f64),
}

impl Display for RoomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "room name must not be empty"),
            Self::InvalidArea(area) => {
                write!(f, "room area must be a positive number, got {area}")
            }
        }
    }
}

impl Error for RoomValidationError {}

impl Room {
    /// Creates a room with a generated stable ID.
    ///
    /// A tenant reference passed together with `is_common_area = true` is
    /// dropped; the common flag is authoritative.
    pub fn new(
        name: impl Into<String>,
        area: f64,
        tenant_id: Option<TenantId>,
        is_common_area: bool,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, area, tenant_id, is_common_area)
    }

    /// Creates a room with a caller-provided stable ID.
    pub fn with_id(
        id: RoomId,
        name: impl Into<String>,
        area: f64,
        tenant_id: Option<TenantId>,
        is_common_area: bool,
    ) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            area,
            tenant_id: if is_common_area { None } else { tenant_id },
            is_common_area,
        }
    }

    /// Checks model invariants without mutating the record.
    pub fn validate(&self) -> Result<(), RoomValidationError> {
        if self.name.trim().is_empty() {
            return Err(RoomValidationError::EmptyName);
        }
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(RoomValidationError::InvalidArea(self.area));
        }
        Ok(())
    }

    /// Drops the tenant reference when the common flag is set.
    ///
    /// Used to normalize externally supplied records where both fields were
    /// populated.
    pub fn normalize(&mut self) {
        if self.is_common_area {
            self.tenant_id = None;
        }
    }

    /// Tenant this room is billed to, with the common flag authoritative.
    pub fn billing_tenant(&self) -> Option<TenantId> {
        if self.is_common_area {
            None
        } else {
            self.tenant_id
        }
    }

    /// Whether this room is neither common nor leased.
    pub fn is_unallocated(&self) -> bool {
        !self.is_common_area && self.tenant_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Room, RoomValidationError};
    use uuid::Uuid;

    #[test]
    fn new_drops_tenant_reference_on_common_rooms() {
        let room = Room::new("Lounge", 18.0, Some(Uuid::new_v4()), true);
        assert_eq!(room.tenant_id, None);
        assert!(room.is_common_area);
        assert_eq!(room.billing_tenant(), None);
    }

    #[test]
    fn billing_tenant_prefers_common_flag_over_stored_reference() {
        let mut room = Room::new("Office", 12.0, Some(Uuid::new_v4()), false);
        room.is_common_area = true;
        assert_eq!(room.billing_tenant(), None);
        room.normalize();
        assert_eq!(room.tenant_id, None);
    }

    #[test]
    fn validate_rejects_bad_areas() {
        assert_eq!(
            Room::new("A", 0.0, None, false).validate(),
            Err(RoomValidationError::InvalidArea(0.0))
        );
        assert_eq!(
            Room::new("A", -3.5, None, false).validate(),
            Err(RoomValidationError::InvalidArea(-3.5))
        );
        assert!(Room::new("A", f64::NAN, None, false).validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let room = Room::new("  ", 10.0, None, false);
        assert_eq!(room.validate(), Err(RoomValidationError::EmptyName));
    }

    #[test]
    fn unallocated_means_no_tenant_and_not_common() {
        assert!(Room::new("Empty", 5.0, None, false).is_unallocated());
        assert!(!Room::new("Lounge", 5.0, None, true).is_unallocated());
        assert!(!Room::new("Office", 5.0, Some(Uuid::new_v4()), false).is_unallocated());
    }
}
