use tower_sessions::Session;

use crate::{
    model::access::{AccessEntity, AccessOperation, Role},
    server::{
        error::{access::AccessError, Error},
        model::session::SessionUser,
    },
};

/// Returns whether a role is permitted to perform an operation on an entity.
///
/// The decision table is fixed at compile time:
///
/// | entity     | Owner | HR Manager | Employee | Customer |
/// |------------|-------|------------|----------|----------|
/// | customer   | CRUD  | CRUD       | R        | R,U      |
/// | employee   | CRUD  | CRUD       | R        | -        |
/// | hr-manager | CRUD  | CRUD       | R        | -        |
/// | owner      | CRUD  | R          | R        | -        |
/// | user       | CRUD  | CRUD       | R        | R        |
/// | company    | CRUD  | CRUD       | R        | R        |
pub fn permits(role: Role, entity: AccessEntity, operation: AccessOperation) -> bool {
    match role {
        Role::Owner => true,
        Role::HrManager => {
            entity != AccessEntity::Owner || operation == AccessOperation::Read
        }
        Role::Employee => operation == AccessOperation::Read,
        Role::Customer => match entity {
            AccessEntity::Customer => {
                matches!(operation, AccessOperation::Read | AccessOperation::Update)
            }
            AccessEntity::User | AccessEntity::Company => operation == AccessOperation::Read,
            _ => false,
        },
    }
}

/// Requires an authenticated session permitted to perform the operation.
///
/// Returns the session user on success so handlers can act on their identity.
///
/// # Returns
/// - `Ok(SessionUser)` - Session is authenticated and the role is permitted
/// - `Err(Error::AccessError(AccessError::NotAuthenticated))` - No user in session
/// - `Err(Error::AccessError(AccessError::PermissionDenied))` - Role is not permitted
pub async fn require(
    session: &Session,
    entity: AccessEntity,
    operation: AccessOperation,
) -> Result<SessionUser, Error> {
    let user = match SessionUser::get(session).await? {
        Some(user) => user,
        None => return Err(AccessError::NotAuthenticated.into()),
    };

    if !permits(user.role, entity, operation) {
        return Err(AccessError::PermissionDenied {
            role: user.role.to_string(),
            entity,
            operation,
        }
        .into());
    }

    Ok(user)
}
