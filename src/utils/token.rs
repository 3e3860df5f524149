use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use entity::user::Model as UserModel;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// The claims that are stored in the JWT.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Claims {
    /// The subject of the token, i.e. the username.
    pub sub: String,
    /// Id of the user, used to resolve the acting user on each request.
    pub uid: i32,
    pub iat: i64,
    /// The expiry time of the token, in seconds since UNIX_EPOCH.
    pub exp: i64,
}

pub fn encrypt(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

/// Issue a signed token for `user`.
pub fn encode_token(user: &UserModel, jwt: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.username.clone(),
        uid: user.id,
        iat: now,
        exp: now + jwt.ttl_secs,
    };
    encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
}

pub fn decode_token(token: &str, jwt: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(ALGORITHM);
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt.secret.as_bytes()),
        &validation,
    )?;
    Ok(decoded.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(secret: &str, ttl_secs: i64) -> JwtConfig {
        JwtConfig { secret: secret.to_string(), ttl_secs }
    }

    fn sample_user() -> UserModel {
        let now = Utc::now();
        UserModel {
            id: 12,
            email: "runner@example.com".into(),
            firstname: "Run".into(),
            lastname: "Ner".into(),
            username: "runner@example.com".into(),
            password: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn password_hash_verifies_only_the_original() {
        let hash = encrypt("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify("correct horse", &hash).unwrap());
        assert!(!verify("battery staple", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn encode_decode_token() {
        let jwt = jwt_config("test-secret", 60);
        let token = encode_token(&sample_user(), &jwt).unwrap();

        let claims = decode_token(&token, &jwt).expect("Failed to decode token");
        assert_eq!(claims.uid, 12);
        assert_eq!(claims.sub, "runner@example.com");
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = encode_token(&sample_user(), &jwt_config("secret-a", 60)).unwrap();
        assert!(decode_token(&token, &jwt_config("secret-b", 60)).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s leeway.
        let jwt = jwt_config("test-secret", -120);
        let token = encode_token(&sample_user(), &jwt).unwrap();
        assert!(decode_token(&token, &jwt).is_err());
    }
}
