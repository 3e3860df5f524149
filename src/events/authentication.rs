//! Enrichment of the login response. After a token is issued the caller's
//! "api" view is attached under `user`, except for the shared demo account.

use serde_json::{Map, Value};

use crate::db::db_service::DbService;
use crate::types::{error::AppError, user::UserApi};

/// Seeded demo account whose profile is never returned on login.
pub const GUEST_USERNAME: &str = "guest@sportroops.fr";

/// A successful authentication, carrying the response body being built.
#[derive(Debug)]
pub struct AuthenticationSuccessEvent {
    username: Option<String>,
    data: Map<String, Value>,
}

impl AuthenticationSuccessEvent {
    pub fn new(username: Option<String>, data: Map<String, Value>) -> Self {
        Self { username, data }
    }

    /// Authenticated username, empty when the event has no user.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn set_data(&mut self, data: Map<String, Value>) {
        self.data = data;
    }

    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }
}

pub async fn on_authentication_success(
    db: &DbService,
    event: &mut AuthenticationSuccessEvent,
) -> Result<(), AppError> {
    let username = event.username().to_string();

    let user = if username == GUEST_USERNAME {
        None
    } else {
        match db.get_user_by_username(&username).await {
            Ok(u) => Some(UserApi::from(u)),
            Err(AppError::NotFound(_)) => None,
            Err(e) => return Err(e),
        }
    };

    let mut data = event.data().clone();
    apply_user_payload(&mut data, &username, user)
        .map_err(|e| AppError::Internal(format!("serialize user payload: {e}")))?;
    event.set_data(data);
    Ok(())
}

/// Put `user` (or `null` when unresolved) under the `user` key, then drop the
/// key again for the guest account.
pub fn apply_user_payload(
    data: &mut Map<String, Value>,
    username: &str,
    user: Option<UserApi>,
) -> Result<(), serde_json::Error> {
    data.insert("user".to_string(), serde_json::to_value(user)?);

    if username == GUEST_USERNAME {
        data.remove("user");
    }
    Ok(())
}
