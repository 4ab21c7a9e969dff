//! Authentication and authorization

use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{Actor, ClientId, Role};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the client id for clients, a staff handle otherwise
    pub sub: String,
    /// The subject's role
    pub role: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Client tokens must carry a client id subject")]
    MissingClientId,
}

/// Creates a new JWT token
///
/// # Arguments
///
/// * `subject` - Client id for clients, a staff handle otherwise
/// * `role` - The subject's role
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    subject: &str,
    role: Role,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: subject.to_string(),
        role: role.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
///
/// # Arguments
///
/// * `token` - The JWT token to validate
/// * `secret` - JWT secret key
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}

/// Builds the acting identity out of validated claims
///
/// Client tokens must carry their own client id as the subject; staff
/// tokens carry an opaque handle.
pub fn actor_from_claims(claims: &Claims) -> Result<Actor, AuthError> {
    let role =
        Role::from_str(&claims.role).map_err(|_| AuthError::UnknownRole(claims.role.clone()))?;

    match role {
        Role::Client => {
            let client_id =
                ClientId::from_str(&claims.sub).map_err(|_| AuthError::MissingClientId)?;
            Ok(Actor::client(client_id))
        }
        Role::Admin => Ok(Actor::admin()),
        Role::Agent => Ok(Actor::agent()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = create_token("staff-1", Role::Agent, SECRET, 60).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "staff-1");
        assert_eq!(claims.role, "agent");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("staff-1", Role::Admin, SECRET, 60).unwrap();
        assert!(matches!(
            validate_token(&token, "other-secret"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_client_actor_carries_its_id() {
        let client_id = ClientId::new();
        let token = create_token(&client_id.to_string(), Role::Client, SECRET, 60).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        let actor = actor_from_claims(&claims).unwrap();
        assert_eq!(actor.role, Role::Client);
        assert_eq!(actor.client_id, Some(client_id));
    }

    #[test]
    fn test_client_token_without_id_rejected() {
        let token = create_token("not-an-id", Role::Client, SECRET, 60).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert!(matches!(
            actor_from_claims(&claims),
            Err(AuthError::MissingClientId)
        ));
    }
}
