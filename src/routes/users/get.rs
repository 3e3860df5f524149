use actix_web::{get, web};
use std::sync::Arc;

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserApi;

#[get("/{id:\\d+}")]
pub async fn get_user(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<UserApi> {
    let user = db.get_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(user.into()))
}
