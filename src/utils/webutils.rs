use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{
    dev::Payload, dev::ServiceRequest, error::JsonPayloadError, error::PathError, web, FromRequest,
    HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;
use tracing::debug;

use crate::config::config;
use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::utils::token::decode_token;

/// The authenticated caller, resolved once by [`validate_token`].
#[derive(Clone, Debug)]
pub struct CurrentUser(pub UserModel);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or(AppError::Unauthorized),
        )
    }
}

/// Path ids that match `\d+` but do not fit an id are unknown users.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let segment = req
        .match_info()
        .iter()
        .map(|(_, value)| value)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string();
    debug!(error = %err, %segment, "path id rejected");
    AppError::NotFound(format!("Unable to find user with id {segment}")).into()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

// Credentials are optional at the extractor level so a missing header goes
// through AppError like every other rejection.
pub async fn validate_token(req: ServiceRequest, credentials: Option<BearerAuth>) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(credentials) = credentials else {
        debug!("request without bearer token");
        return Err((AppError::Unauthorized.into(), req));
    };

    let claims = match decode_token(credentials.token(), &config().jwt) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, "rejected bearer token");
            return Err((AppError::Unauthorized.into(), req));
        }
    };

    let db = req.app_data::<web::Data<Arc<DbService>>>().cloned();
    let Some(db) = db else {
        return Err((AppError::Internal("database service not registered".into()).into(), req));
    };

    // a valid token for a user that no longer exists is still unauthorized
    match db.get_user_by_id(claims.uid).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(req)
        }
        Err(AppError::NotFound(_)) => Err((AppError::Unauthorized.into(), req)),
        Err(e) => Err((e.into(), req)),
    }
}
