use uuid::Uuid;

use crate::model::access::{Role, SessionDto};

/// Session state shared across pages, populated once at app start
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// The session as reported by the API, None until the fetch completes
    pub session: Option<SessionDto>,
    /// Whether the session fetch has completed, successfully or not
    pub fetched: bool,
}

impl SessionState {
    pub fn authenticated(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| session.authenticated)
            .unwrap_or(false)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().and_then(|session| session.role)
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.session.as_ref().and_then(|session| session.user_id)
    }
}
