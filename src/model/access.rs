use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a signed-in user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Owner,
    HrManager,
    Employee,
    Customer,
}

impl Role {
    /// Human readable label shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::HrManager => "HR Manager",
            Role::Employee => "Employee",
            Role::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Record type an access check is scoped to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum AccessEntity {
    Customer,
    Employee,
    HrManager,
    Owner,
    User,
    Company,
}

impl AccessEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessEntity::Customer => "customer",
            AccessEntity::Employee => "employee",
            AccessEntity::HrManager => "hr-manager",
            AccessEntity::Owner => "owner",
            AccessEntity::User => "user",
            AccessEntity::Company => "company",
        }
    }
}

impl std::fmt::Display for AccessEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation an access check is scoped to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum AccessOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl AccessOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessOperation::Create => "create",
            AccessOperation::Read => "read",
            AccessOperation::Update => "update",
            AccessOperation::Delete => "delete",
        }
    }
}

impl std::fmt::Display for AccessOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current session as reported by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SessionDto {
    pub authenticated: bool,
    pub user_id: Option<Uuid>,
    pub role: Option<Role>,
}

/// Result of an access check for one entity and operation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AccessDto {
    pub allowed: bool,
}
