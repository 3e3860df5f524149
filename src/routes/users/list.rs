use actix_web::{get, web};
use std::sync::Arc;

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserSummary;

#[get("")]
pub async fn list_users(
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<UserSummary>> {
    Ok(ApiResponse::Ok(db.list_users().await?))
}
