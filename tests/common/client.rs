use actix_web::{
    body::{to_bytes, MessageBody},
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, App,
};
use entity::user::Model as UserModel;
use serde_json::Value;
use sportroops_api::{
    config::config,
    db::db_service::DbService,
    types::error::AppError,
    utils::token::encode_token,
};
use std::sync::Arc;

use super::test_data;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(sportroops_api::routes::configure_routes)
    }

    /// Creates a user whose username and email are `username`, and a valid
    /// bearer token for it.
    pub async fn create_test_user(&self, username: &str) -> Result<(UserModel, String), AppError> {
        let user_id = self.db.create_user(test_data::sample_user(username)).await?;
        let user = self.db.get_user_by_id(user_id).await?;

        let token = encode_token(&user, &config().jwt).expect("Failed to sign token");

        Ok((user, token))
    }
}

/// Sends `req` and returns status plus JSON body (`Null` when empty).
/// Requests rejected by middleware come back as errors, so both paths are
/// turned into a response here.
#[allow(dead_code)]
pub async fn send<S, B>(app: &S, req: actix_http::Request) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => {
            let status = resp.status();
            let bytes = test::read_body(resp).await;
            (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let bytes = to_bytes(resp.into_body()).await.unwrap_or_default();
            (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
        }
    }
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
