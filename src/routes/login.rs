use actix_web::{post, web};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::config;
use crate::db::db_service::DbService;
use crate::events::authentication::{on_authentication_success, AuthenticationSuccessEvent};
use crate::types::{
    auth::LoginRequest,
    error::AppError,
    response::{ApiResponse, ApiResult},
};
use crate::utils::token::{encode_token, verify};

/// Exchange credentials for a JWT. The body is `{token}` plus whatever the
/// authentication-success listener adds.
#[post("/login_check")]
pub async fn login(
    db: web::Data<Arc<DbService>>,
    body: web::Json<LoginRequest>,
) -> ApiResult<Map<String, Value>> {
    let LoginRequest { username, password } = body.into_inner();

    let user = match db.get_user_by_username(&username).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => {
            debug!(%username, "login for unknown username");
            return Err(AppError::Unauthorized);
        }
        Err(e) => return Err(e),
    };

    let valid = verify(&password, &user.password).map_err(|e| {
        error!(user_id = user.id, error = %e, "stored password hash is unreadable");
        AppError::Internal("password check failed".into())
    })?;
    if !valid {
        debug!(%username, "login with wrong password");
        return Err(AppError::Unauthorized);
    }

    let token = encode_token(&user, &config().jwt)
        .map_err(|e| AppError::Internal(format!("token issuance failed: {e}")))?;

    let mut data = Map::new();
    data.insert("token".to_string(), Value::String(token));

    let mut event = AuthenticationSuccessEvent::new(Some(user.username), data);
    on_authentication_success(&db, &mut event).await?;

    info!(user_id = user.id, "user logged in");
    Ok(ApiResponse::Ok(event.into_data()))
}
