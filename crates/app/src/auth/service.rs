//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::auth::{AdminAccount, AuthServiceError, Credentials, Session, SessionSigner, SessionUser};

#[derive(Debug, Clone)]
pub struct ConfiguredAuthService {
    admin: AdminAccount,
    signer: SessionSigner,
}

impl ConfiguredAuthService {
    #[must_use]
    pub fn new(admin: AdminAccount, signer: SessionSigner) -> Self {
        Self { admin, signer }
    }

    fn credentials_match(&self, credentials: &Credentials) -> bool {
        let email = credentials
            .email
            .trim()
            .eq_ignore_ascii_case(&self.admin.user.email);

        // Both comparisons always run.
        let password = credentials.password.as_bytes() == self.admin.password.as_bytes();

        email & password
    }
}

#[async_trait]
impl AuthService for ConfiguredAuthService {
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
        if !self.credentials_match(&credentials) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let user = self.admin.user.clone();
        let (token, expires_at) = self.signer.issue(&user, Timestamp::now())?;

        Ok(Session {
            user,
            token,
            expires_at,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<SessionUser, AuthServiceError> {
        Ok(self.signer.verify(token)?)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials against the configured account and issue a session.
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError>;

    /// Resolve a session token to its user.
    async fn authenticate(&self, token: &str) -> Result<SessionUser, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use zeroize::Zeroizing;

    use crate::{auth::SessionTokenError, test::TestContext};

    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: Zeroizing::new(password.to_string()),
        }
    }

    #[tokio::test]
    async fn login_with_valid_credentials_issues_verifiable_token() -> TestResult {
        let ctx = TestContext::new();

        let session = ctx
            .auth
            .login(credentials("admin@example.com", "correct horse"))
            .await?;

        assert_eq!(session.user.email, "admin@example.com");
        assert_eq!(ctx.auth.authenticate(&session.token).await?, session.user);

        Ok(())
    }

    #[tokio::test]
    async fn login_email_is_case_insensitive() -> TestResult {
        let ctx = TestContext::new();

        ctx.auth
            .login(credentials(" Admin@Example.com ", "correct horse"))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let ctx = TestContext::new();

        let result = ctx
            .auth
            .login(credentials("admin@example.com", "Correct horse"))
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_rejected() {
        let ctx = TestContext::new();

        let result = ctx
            .auth
            .login(credentials("someone@example.com", "correct horse"))
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn authenticate_rejects_tampered_token() -> TestResult {
        let ctx = TestContext::new();

        let session = ctx
            .auth
            .login(credentials("admin@example.com", "correct horse"))
            .await?;

        let result = ctx.auth.authenticate(&format!("{}x", session.token)).await;

        assert!(
            matches!(
                result,
                Err(AuthServiceError::Token(SessionTokenError::Invalid(_)))
            ),
            "expected invalid token, got {result:?}"
        );

        Ok(())
    }
}
