use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Error, Result};

/// Claims carried by both access and refresh tokens. The `session` field ties
/// a token to its `auth_tokens` row so a single login can be revoked without
/// touching the user's other sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: i64,
    pub role: String,
    pub session: Uuid,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    pub id: i64,
    pub exp: i64,
}

/// Signs and verifies the three token kinds, each with its own secret and
/// lifetime.
#[derive(Clone)]
pub struct TokenSigner {
    access_secret: String,
    refresh_secret: String,
    reset_secret: String,
    access_life: i64,
    refresh_life: i64,
    reset_life: i64,
}

impl TokenSigner {
    pub fn new(
        access_secret: String,
        refresh_secret: String,
        reset_secret: String,
        access_life: i64,
        refresh_life: i64,
        reset_life: i64,
    ) -> Self {
        Self {
            access_secret,
            refresh_secret,
            reset_secret,
            access_life,
            refresh_life,
            reset_life,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.access_token_secret.clone(),
            config.refresh_token_secret.clone(),
            config.password_reset_secret.clone(),
            config.access_token_life,
            config.refresh_token_life,
            config.password_reset_life,
        )
    }

    pub fn generate_access_token(&self, user_id: i64, role: &str, session: Uuid) -> Result<String> {
        self.sign_session_token(user_id, role, session, &self.access_secret, self.access_life)
    }

    pub fn generate_refresh_token(
        &self,
        user_id: i64,
        role: &str,
        session: Uuid,
    ) -> Result<String> {
        self.sign_session_token(
            user_id,
            role,
            session,
            &self.refresh_secret,
            self.refresh_life,
        )
    }

    pub fn generate_reset_token(&self, user_id: i64) -> Result<String> {
        let claims = ResetClaims {
            id: user_id,
            exp: Utc::now().timestamp() + self.reset_life,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.reset_secret.as_bytes()),
        )
        .map_err(|e| Error::Internal(format!("Failed to sign reset token: {}", e)))
    }

    pub fn verify_access_token(&self, token: &str) -> Result<SessionClaims> {
        Self::verify_session_token(token, &self.access_secret)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<SessionClaims> {
        Self::verify_session_token(token, &self.refresh_secret)
    }

    pub fn verify_reset_token(&self, token: &str) -> Result<ResetClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<ResetClaims>(
            token,
            &DecodingKey::from_secret(self.reset_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| Error::Unauthorized("Invalid reset token".to_string()))
    }

    fn sign_session_token(
        &self,
        user_id: i64,
        role: &str,
        session: Uuid,
        secret: &str,
        life: i64,
    ) -> Result<String> {
        let claims = SessionClaims {
            id: user_id,
            role: role.to_string(),
            session,
            exp: Utc::now().timestamp() + life,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
    }

    fn verify_session_token(token: &str, secret: &str) -> Result<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| Error::Unauthorized("Invalid token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new(
            "access_secret".into(),
            "refresh_secret".into(),
            "reset_secret".into(),
            900,
            604800,
            600,
        )
    }

    #[test]
    fn access_token_roundtrip() {
        let signer = signer();
        let session = Uuid::new_v4();

        let token = signer.generate_access_token(7, "admin", session).unwrap();
        let claims = signer.verify_access_token(&token).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.session, session);
    }

    #[test]
    fn refresh_token_roundtrip() {
        let signer = signer();
        let session = Uuid::new_v4();

        let token = signer.generate_refresh_token(7, "user", session).unwrap();
        let claims = signer.verify_refresh_token(&token).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.session, session);
    }

    #[test]
    fn access_and_refresh_secrets_are_distinct() {
        let signer = signer();
        let session = Uuid::new_v4();

        let access = signer.generate_access_token(1, "user", session).unwrap();
        let refresh = signer.generate_refresh_token(1, "user", session).unwrap();

        assert!(signer.verify_refresh_token(&access).is_err());
        assert!(signer.verify_access_token(&refresh).is_err());
    }

    #[test]
    fn tampered_token_fails() {
        let signer = signer();
        let token = signer
            .generate_access_token(1, "user", Uuid::new_v4())
            .unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(signer.verify_access_token(&tampered).is_err());
    }

    #[test]
    fn wrong_secret_fails() {
        let a = signer();
        let b = TokenSigner::new(
            "other_access".into(),
            "other_refresh".into(),
            "other_reset".into(),
            900,
            604800,
            600,
        );

        let token = a.generate_access_token(1, "user", Uuid::new_v4()).unwrap();
        assert!(b.verify_access_token(&token).is_err());
    }

    #[test]
    fn expired_token_fails() {
        // jsonwebtoken applies 60s of leeway, so expire well in the past.
        let signer = TokenSigner::new(
            "access_secret".into(),
            "refresh_secret".into(),
            "reset_secret".into(),
            -3600,
            -3600,
            -3600,
        );
        let token = signer
            .generate_access_token(1, "user", Uuid::new_v4())
            .unwrap();
        assert!(signer.verify_access_token(&token).is_err());
    }

    #[test]
    fn reset_token_roundtrip() {
        let signer = signer();
        let token = signer.generate_reset_token(42).unwrap();
        let claims = signer.verify_reset_token(&token).unwrap();
        assert_eq!(claims.id, 42);
    }

    #[test]
    fn session_token_is_not_a_reset_token() {
        let signer = signer();
        let token = signer
            .generate_access_token(1, "user", Uuid::new_v4())
            .unwrap();
        assert!(signer.verify_reset_token(&token).is_err());
    }
}
