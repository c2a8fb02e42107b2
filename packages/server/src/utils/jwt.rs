use anyhow::{Context, Result};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Email
    pub uid: i32,    // User ID
    pub exp: usize,  // Expiration timestamp
}

/// Sign a session token for a user, valid for `ttl_hours`.
pub fn sign(user_id: i32, email: &str, secret: &str, ttl_hours: i64) -> Result<String> {
    let expiration = TimeDelta::try_hours(ttl_hours)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .context("token expiration out of range")?
        .timestamp();

    let claims = Claims {
        sub: email.to_owned(),
        uid: user_id,
        exp: expiration as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode a session token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
