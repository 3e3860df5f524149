use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt: JwtConfig,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret shared by issuance and validation.
    pub secret: String,
    pub ttl_secs: i64,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env_or("PORT", 8080),
            db_url: Self::get_env("DATABASE_URL"),
            jwt: JwtConfig {
                secret: Self::get_env("JWT_SECRET"),
                ttl_secs: Self::get_env_or("JWT_TTL_SECS", 3600),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
