use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{Gateway, GatewayError};
use crate::config::GatewayConfig;
use crate::session::AuthSession;

mod auth_api;
mod course_api;
mod lesson_api;
mod progress_api;
mod quiz_api;
mod wire;

/// REST client for the course API.
///
/// Cheap to clone: the underlying connection pool and auth session are shared.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    session: AuthSession,
}

impl HttpGateway {
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig, session: AuthSession) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Absolute URL for a path under the base URL. Segments are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::Transport(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder, GatewayError> {
        let builder = self.client.request(method, url);
        Ok(match self.session.token()? {
            Some(token) => builder.bearer_auth(token.secret()),
            None => builder,
        })
    }

    /// Fails fast for calls that only make sense for a signed-in user.
    fn require_auth(&self) -> Result<(), GatewayError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(GatewayError::Unauthorized)
        }
    }

    async fn send(&self, builder: RequestBuilder, label: &str) -> Result<String, GatewayError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(endpoint = label, error = %e, "api request failed");
            GatewayError::Transport(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        tracing::debug!(endpoint = label, status = status.as_u16(), "api response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(status_error(status, &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, GatewayError> {
        let url = self.endpoint(segments)?;
        let label = format!("GET {}", url.path());
        let body = self.send(self.request(Method::GET, url)?, &label).await?;
        wire::decode(&label, &body)
    }

    async fn post_json<B, T>(&self, segments: &[&str], payload: &B) -> Result<T, GatewayError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let label = format!("POST {}", url.path());
        let builder = self.request(Method::POST, url)?.json(payload);
        let body = self.send(builder, &label).await?;
        wire::decode(&label, &body)
    }
}

/// Maps a non-success status onto the gateway taxonomy.
fn status_error(status: StatusCode, body: &str) -> GatewayError {
    match status {
        StatusCode::NOT_FOUND => GatewayError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            GatewayError::Rejected {
                status: status.as_u16(),
                detail: wire::error_detail(body),
            }
        }
        other => GatewayError::Status(other.as_u16()),
    }
}

impl Gateway {
    /// Build a `Gateway` backed by the REST API.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the HTTP client cannot be built.
    pub fn http(config: &GatewayConfig, session: AuthSession) -> Result<Self, GatewayError> {
        Ok(Self::from_backend(HttpGateway::new(config, session)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::model::AccessToken;

    fn gateway(base: &str) -> HttpGateway {
        HttpGateway::new(&GatewayConfig::new(base).unwrap(), AuthSession::anonymous()).unwrap()
    }

    #[test]
    fn endpoint_appends_under_base_path() {
        let gw = gateway("http://api.test/v1");
        let url = gw.endpoint(&["courses", "c1", "lessons"]).unwrap();
        assert_eq!(url.as_str(), "http://api.test/v1/courses/c1/lessons");
    }

    #[test]
    fn endpoint_encodes_ids() {
        let gw = gateway("http://api.test");
        let url = gw.endpoint(&["courses", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://api.test/courses/a%2Fb%20c");
    }

    #[test]
    fn status_mapping_follows_taxonomy() {
        assert!(status_error(StatusCode::NOT_FOUND, "").is_not_found());
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, ""),
            GatewayError::Unauthorized
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, ""),
            GatewayError::Unauthorized
        ));
        match status_error(StatusCode::BAD_REQUEST, r#"{"detail":"Email already registered"}"#) {
            GatewayError::Rejected { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Email already registered");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, ""),
            GatewayError::Status(502)
        ));
    }

    #[test]
    fn progress_calls_need_a_token() {
        let gw = gateway("http://api.test");
        assert!(matches!(gw.require_auth(), Err(GatewayError::Unauthorized)));
        gw.session()
            .sign_in(AccessToken::new("t").unwrap())
            .unwrap();
        assert!(gw.require_auth().is_ok());
    }
}
