use crate::model::ids::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Bearer credential issued by the auth endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for a blank token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self(token))
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

// Never print the secret.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_rejected() {
        assert!(AccessToken::new("  ").is_none());
        assert_eq!(AccessToken::new("abc").unwrap().secret(), "abc");
    }

    #[test]
    fn debug_hides_secret() {
        let token = AccessToken::new("very-secret").unwrap();
        assert!(!format!("{token:?}").contains("very-secret"));
    }
}
