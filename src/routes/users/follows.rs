use actix_web::{get, post, web};
use std::sync::Arc;

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserApi;
use crate::utils::webutils::CurrentUser;

/// The caller starts following `followed`.
#[post("/follows/{followed:\\d+}")]
pub async fn add_followed(
    db: web::Data<Arc<DbService>>,
    current: CurrentUser,
    path: web::Path<i32>,
) -> ApiResult<()> {
    db.add_followed(&current.0, path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}

#[get("/{id:\\d+}/follows")]
pub async fn list_follows(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<UserApi>> {
    let follows = db.get_follows(path.into_inner()).await?;
    Ok(ApiResponse::Ok(follows.into_iter().map(UserApi::from).collect()))
}
