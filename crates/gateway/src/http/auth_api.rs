use async_trait::async_trait;
use coursehub_core::model::{AccessToken, User};
use reqwest::Method;

use super::HttpGateway;
use super::wire::{self, RegisterRequest, TokenWire, UserWire, map_token, map_user};
use crate::api::{AuthGateway, GatewayError, NewAccount};

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, GatewayError> {
        let url = self.endpoint(&["auth", "token"])?;
        let label = "POST /auth/token";
        // OAuth2 password form; the server reads the email from `username`.
        let builder = self
            .request(Method::POST, url)?
            .form(&[("username", email), ("password", password)]);
        let body = self.send(builder, label).await?;
        let token: TokenWire = wire::decode(label, &body)?;
        map_token(label, token)
    }

    async fn register(&self, account: &NewAccount) -> Result<User, GatewayError> {
        let wire: UserWire = self
            .post_json(&["auth", "register"], &RegisterRequest::from(account))
            .await?;
        map_user("POST /auth/register", wire)
    }

    async fn current_user(&self) -> Result<User, GatewayError> {
        self.require_auth()?;
        let wire: UserWire = self.get_json(&["auth", "me"]).await?;
        map_user("GET /auth/me", wire)
    }
}
