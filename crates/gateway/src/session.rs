use std::sync::{Arc, RwLock};

use coursehub_core::model::AccessToken;

use crate::api::GatewayError;

/// Credential context shared by the gateway and the services that sign in.
///
/// Passed explicitly at construction time; nothing reads tokens from ambient
/// storage. Clones share the same slot.
#[derive(Clone, Default)]
pub struct AuthSession {
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl AuthSession {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// # Errors
    ///
    /// Returns `GatewayError::Session` if the lock is poisoned.
    pub fn sign_in(&self, token: AccessToken) -> Result<(), GatewayError> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| GatewayError::Session(e.to_string()))?;
        *guard = Some(token);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `GatewayError::Session` if the lock is poisoned.
    pub fn sign_out(&self) -> Result<(), GatewayError> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| GatewayError::Session(e.to_string()))?;
        *guard = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `GatewayError::Session` if the lock is poisoned.
    pub fn token(&self) -> Result<Option<AccessToken>, GatewayError> {
        let guard = self
            .token
            .read()
            .map_err(|e| GatewayError::Session(e.to_string()))?;
        Ok(guard.clone())
    }

    /// A poisoned session reads as signed out.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().map(|guard| guard.is_some()).unwrap_or(false)
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_token_slot() {
        let session = AuthSession::anonymous();
        let other = session.clone();
        assert!(!other.is_authenticated());

        session.sign_in(AccessToken::new("t").unwrap()).unwrap();
        assert!(other.is_authenticated());
        assert_eq!(other.token().unwrap().unwrap().secret(), "t");

        other.sign_out().unwrap();
        assert!(!session.is_authenticated());
    }
}
