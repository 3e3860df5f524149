use actix_web::{delete, get, post, web};
use std::sync::Arc;

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserApi;
use crate::utils::webutils::CurrentUser;

/// Make `follower` a follower of the caller.
#[post("/followers/{follower:\\d+}")]
pub async fn add_follower(
    db: web::Data<Arc<DbService>>,
    current: CurrentUser,
    path: web::Path<i32>,
) -> ApiResult<()> {
    db.add_follower(&current.0, path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}

#[delete("/followers/{follower:\\d+}")]
pub async fn remove_follower(
    db: web::Data<Arc<DbService>>,
    current: CurrentUser,
    path: web::Path<i32>,
) -> ApiResult<()> {
    db.remove_follower(&current.0, path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}

#[get("/{id:\\d+}/followers")]
pub async fn list_followers(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<UserApi>> {
    let followers = db.get_followers(path.into_inner()).await?;
    Ok(ApiResponse::Ok(followers.into_iter().map(UserApi::from).collect()))
}
