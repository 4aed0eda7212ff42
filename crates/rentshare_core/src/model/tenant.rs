//! Tenant domain record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a tenant.
pub type TenantId = Uuid;

/// A party renting one or more private rooms.
///
/// Display names must be non-empty and case-insensitively unique among all
/// tenants of one snapshot. Uniqueness is enforced by the ledger service and
/// the snapshot importer, never by the apportionment engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Stable global ID used for room assignment and result keying.
    pub id: TenantId,
    /// Display name, non-empty after trimming.
    pub name: String,
}

/// Validation failure for tenant records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
}

impl Display for TenantValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "tenant name must not be empty"),
        }
    }
}

impl Error for TenantValidationError {}

impl Tenant {
    /// Creates a tenant with a generated stable ID. The name is trimmed.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a tenant with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: TenantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
        }
    }

    /// Checks model invariants without mutating the record.
    pub fn validate(&self) -> Result<(), TenantValidationError> {
        if self.name.trim().is_empty() {
            return Err(TenantValidationError::EmptyName);
        }
        Ok(())
    }

    /// Case-insensitive name comparison used for uniqueness checks.
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.to_lowercase() == candidate.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::{Tenant, TenantValidationError};

    #[test]
    fn new_trims_name() {
        let tenant = Tenant::new("  Alice  ");
        assert_eq!(tenant.name, "Alice");
        assert!(tenant.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let tenant = Tenant::new("   ");
        assert_eq!(tenant.validate(), Err(TenantValidationError::EmptyName));
    }

    #[test]
    fn name_matches_ignores_case_and_padding() {
        let tenant = Tenant::new("Alice");
        assert!(tenant.name_matches(" ALICE "));
        assert!(!tenant.name_matches("Bob"));
    }
}
