use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{model::access::Role, server::error::Error};

pub const SESSION_USER_KEY: &str = "roster:user";

/// The signed-in user as stored in the session
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl SessionUser {
    /// Insert the signed-in user into the session
    pub async fn insert(session: &Session, user_id: Uuid, role: Role) -> Result<(), Error> {
        session
            .insert(SESSION_USER_KEY, SessionUser { user_id, role })
            .await?;

        Ok(())
    }

    /// Get the signed-in user from the session
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        let user = session.get::<SessionUser>(SESSION_USER_KEY).await?;

        Ok(user)
    }
}
