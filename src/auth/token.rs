use crate::error::AppError;
use crate::models::User;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime: 24 hours from issuance.
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims encoded within an identity token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the user's id, as a string.
    pub sub: String,
    /// The user's email at issuance time. Verification re-fetches the account
    /// by this value rather than trusting the rest of the claim set.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Issues a signed token for a user, expiring in 24 hours.
///
/// Signing is HS256 with the process-wide secret from [`crate::config::Config`].
pub fn issue(user: &User, secret: &str) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp");

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        iat: now.timestamp() as usize,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        log::error!("failed to sign token: {}", e);
        AppError::Internal("Internal server error".into())
    })
}

/// Verifies a token string and decodes its claims.
///
/// Default validation applies: signature check plus expiry. Malformed, badly
/// signed, and expired tokens all fail with the same `Unauthorized` error.
/// Pure and side-effect-free; whether the subject still exists is the caller's
/// concern.
pub fn verify(token: &str, secret: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
