use crate::error::ApiClientError;
use crate::protocol::{
    ErrorResponse, ExampleRequest, ExampleResponse, FortyTwoResponse, GameSessionResponse,
    HelloResponse, TokenRequest, TokenValidation,
};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

// Header the API reads the session token from.
const TOKEN_HEADER: &str = "token";

// Thin reqwest wrapper over the `/api` routes with a remembered session token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the server at `base_url` (without the `/api` prefix).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_parts(Client::new(), base_url.into())
    }

    /// Same as [`ApiClient::new`] but every request is bounded by `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::from_parts(http, base_url.into()))
    }

    fn from_parts(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token: None,
        }
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn set_session_token(&mut self, token: Option<String>) {
        self.session_token = token;
    }

    pub async fn get_hello(&self) -> Result<HelloResponse, ApiClientError> {
        let res = self.request(Method::GET, "/hello").send().await;
        decode(res).await
    }

    pub async fn create_example(
        &self,
        data: &ExampleRequest,
    ) -> Result<ExampleResponse, ApiClientError> {
        let res = self.request(Method::POST, "/example").json(data).send().await;
        decode(res).await
    }

    /// 42 when the stored token is valid, 43 otherwise.
    pub async fn get_forty_two(&self) -> Result<FortyTwoResponse, ApiClientError> {
        let res = self.request(Method::GET, "/forty-two").send().await;
        decode(res).await
    }

    /// Joins a waiting room or opens a new one, and stores the issued token.
    pub async fn create_game_session(&mut self) -> Result<GameSessionResponse, ApiClientError> {
        let res = self.request(Method::POST, "/token").send().await;
        let session: GameSessionResponse = decode(res).await?;

        tracing::debug!(
            room_id = %session.room_id,
            player_number = session.player_number,
            "stored session token"
        );
        self.session_token = Some(session.token.clone());
        Ok(session)
    }

    /// Returns `None` when the server rejects the token.
    pub async fn validate_token(
        &self,
        token: &str,
    ) -> Result<Option<TokenValidation>, ApiClientError> {
        let res = self
            .request(Method::POST, "/validate-token")
            .json(&TokenRequest { token })
            .send()
            .await
            .map_err(ApiClientError::Transport)?;

        if res.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        decode(Ok(res)).await.map(Some)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.session_token {
            Some(token) => builder.header(TOKEN_HEADER, token),
            None => builder,
        }
    }
}

// Map a send result into a typed payload, keeping upstream status/message.
async fn decode<T: DeserializeOwned>(
    res: Result<Response, reqwest::Error>,
) -> Result<T, ApiClientError> {
    let res = res.map_err(ApiClientError::Transport)?;
    let status = res.status();

    if !status.is_success() {
        let message = res
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|payload| payload.message);
        return Err(ApiClientError::Upstream { status, message });
    }

    res.json::<T>().await.map_err(ApiClientError::Decode)
}
