use crate::model::access::Role;

/// Static application descriptor rendered by the UI
pub struct AppConfig {
    pub application_name: &'static str,
    pub tenant_name: &'static str,
    pub tenant_roles: &'static [Role],
    pub customer_roles: &'static [Role],
    /// Roles granted owner-level record management
    pub owner_roles: &'static [Role],
    pub add_ons: &'static [&'static str],
    pub owner_abilities: &'static [&'static str],
    pub customer_abilities: &'static [&'static str],
}

pub static APP_CONFIG: AppConfig = AppConfig {
    application_name: "Roster HR",
    tenant_name: "Company",
    tenant_roles: &[Role::Owner, Role::HrManager, Role::Employee],
    customer_roles: &[Role::Customer],
    owner_roles: &[Role::HrManager],
    add_ons: &["file upload", "chat", "notifications", "file"],
    owner_abilities: &[
        "Manage user information",
        "Manage company details",
        "Manage employee data",
        "Manage HR manager details",
    ],
    customer_abilities: &[
        "Read company information",
        "Read own customer information",
        "Update own customer information",
        "Make purchases",
    ],
};
