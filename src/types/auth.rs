use serde::Deserialize;

/// Credentials posted to `/login_check`. No Debug, it holds a password.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
