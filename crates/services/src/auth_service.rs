use std::sync::Arc;

use coursehub_core::model::User;
use gateway::{AuthGateway, AuthSession, GatewayError, NewAccount};

use crate::error::AuthError;

/// Sign-in, sign-up and sign-out against the shared `AuthSession`.
#[derive(Clone)]
pub struct AuthService {
    auth: Arc<dyn AuthGateway>,
    session: AuthSession,
}

impl AuthService {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthGateway>, session: AuthSession) -> Self {
        Self { auth, session }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Exchange credentials for a token, store it, and load the profile.
    ///
    /// The session is left signed out if any step fails.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` for blank input,
    /// `AuthError::InvalidCredentials` when the server refuses them, or
    /// `AuthError::Gateway` for other failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        self.session.sign_out()?;
        let token = self.auth.login(email, password).await.map_err(map_auth_error)?;
        self.session.sign_in(token)?;
        match self.auth.current_user().await {
            Ok(user) => {
                tracing::info!(user = %user.username, "signed in");
                Ok(user)
            }
            Err(err) => {
                self.session.sign_out()?;
                Err(map_auth_error(err))
            }
        }
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` for blank input, `AuthError::Rejected`
    /// with the server's reason when the email or username is taken, or
    /// `AuthError::Gateway` for other failures.
    pub async fn register(&self, account: &NewAccount) -> Result<User, AuthError> {
        for (field, value) in [
            ("username", &account.username),
            ("email", &account.email),
            ("password", &account.password),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::MissingField(field));
            }
        }
        let user = self.auth.register(account).await.map_err(map_auth_error)?;
        tracing::info!(user = %user.username, "account created");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Gateway` if the session lock is poisoned.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.sign_out()?;
        tracing::info!("signed out");
        Ok(())
    }

    /// The signed-in user, or `None` when signed out or the token was refused.
    ///
    /// A refused token is dropped from the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Gateway` for failures other than a refused token.
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        if !self.session.is_authenticated() {
            return Ok(None);
        }
        match self.auth.current_user().await {
            Ok(user) => Ok(Some(user)),
            Err(GatewayError::Unauthorized) => {
                tracing::warn!("stored token refused; signing out");
                self.session.sign_out()?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn map_auth_error(err: GatewayError) -> AuthError {
    match err {
        GatewayError::Unauthorized => AuthError::InvalidCredentials,
        GatewayError::Rejected { detail, .. } => AuthError::Rejected(detail),
        other => AuthError::Gateway(other),
    }
}
