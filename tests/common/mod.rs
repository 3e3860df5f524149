use std::sync::Arc;
use sportroops_api::config::{EnvConfig, JwtConfig, CONFIG};
use sportroops_api::db::db_service::DbService;

pub mod client;

pub const TEST_PASSWORD: &str = "s3cret-pass";

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    /// Fresh in-memory database with migrations applied.
    pub async fn new() -> TestContext {
        Self::with_url("sqlite::memory:").await
    }

    pub async fn with_url(db_url: &str) -> TestContext {
        // Initialize config for tests
        let _ = CONFIG.set(get_test_config());

        let db = Arc::new(
            DbService::new(db_url)
                .await
                .expect("Failed to initialize DbService")
        );

        TestContext { db }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        jwt: JwtConfig {
            secret: "test_jwt_secret".to_string(),
            ttl_secs: 600,
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use sportroops_api::types::user::DBUserCreate;
    use sportroops_api::utils::token::encrypt;

    pub fn sample_user(username: &str) -> DBUserCreate {
        let first = username.split('@').next().unwrap_or(username).to_string();
        DBUserCreate {
            email: username.to_string(),
            firstname: first,
            lastname: "Tester".to_string(),
            username: username.to_string(),
            password_hash: encrypt(super::TEST_PASSWORD).expect("Failed to hash password"),
        }
    }
}
