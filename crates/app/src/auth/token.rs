//! Session token signing and verification (HS256 JWTs).

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::SessionUser;

/// Default session lifetime.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(24);

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("session token could not be signed")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("session token is invalid")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("session token has expired")]
    Expired,

    #[error("session expiry out of range")]
    Expiry(#[from] jiff::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    user: SessionUser,
    iat: i64,
    exp: i64,
}

/// Signs and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct SessionSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: SignedDuration,
}

impl SessionSigner {
    #[must_use]
    pub fn new(secret: &[u8], ttl: SignedDuration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> SignedDuration {
        self.ttl
    }

    /// Sign a token for `user`, valid from `now` for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`SessionTokenError::Encode`] if signing fails.
    pub fn issue(
        &self,
        user: &SessionUser,
        now: Timestamp,
    ) -> Result<(String, Timestamp), SessionTokenError> {
        let expires_at = now.checked_add(self.ttl)?;

        let claims = SessionClaims {
            user: user.clone(),
            iat: now.as_second(),
            exp: expires_at.as_second(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(SessionTokenError::Encode)?;

        Ok((token, expires_at))
    }

    /// Verify `token` against the wall clock and return the user it was issued to.
    ///
    /// # Errors
    ///
    /// Returns [`SessionTokenError::Expired`] for expired tokens and
    /// [`SessionTokenError::Invalid`] for anything else that fails validation.
    pub fn verify(&self, token: &str) -> Result<SessionUser, SessionTokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.user)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => SessionTokenError::Expired,
                _ => SessionTokenError::Invalid(error),
            })
    }
}

impl fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSigner")
            .field("secret", &"**redacted**")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
        }
    }

    #[test]
    fn issued_token_verifies() -> TestResult {
        let signer = SessionSigner::new(b"secret", DEFAULT_SESSION_TTL);
        let now = Timestamp::now();

        let (token, expires_at) = signer.issue(&user(), now)?;

        assert_eq!(signer.verify(&token)?, user());
        assert_eq!(expires_at.duration_since(now), DEFAULT_SESSION_TTL);

        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> TestResult {
        let signer = SessionSigner::new(b"secret", DEFAULT_SESSION_TTL);
        let issued = Timestamp::now().checked_sub(SignedDuration::from_hours(25))?;

        let (token, _) = signer.issue(&user(), issued)?;

        assert!(matches!(
            signer.verify(&token),
            Err(SessionTokenError::Expired)
        ));

        Ok(())
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() -> TestResult {
        let (token, _) = SessionSigner::new(b"other", DEFAULT_SESSION_TTL).issue(&user(), Timestamp::now())?;

        let result = SessionSigner::new(b"secret", DEFAULT_SESSION_TTL).verify(&token);

        assert!(matches!(result, Err(SessionTokenError::Invalid(_))));

        Ok(())
    }

    #[test]
    fn garbage_is_rejected() {
        let signer = SessionSigner::new(b"secret", DEFAULT_SESSION_TTL);

        assert!(matches!(
            signer.verify("not-a-token"),
            Err(SessionTokenError::Invalid(_))
        ));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let signer = SessionSigner::new(b"hunter2", DEFAULT_SESSION_TTL);

        assert!(!format!("{signer:?}").contains("hunter2"));
    }
}
