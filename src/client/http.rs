//! HTTP client wrapper
//!
//! Every REST call goes through [`ApiClient`]: it owns the base URL, JSON
//! headers, the bearer credential and the cookie jar that carries the refresh
//! cookie. An authenticated request answered with 401 is handed to the
//! [`TokenRefresher`] and resent once with the new token.

use crate::client::config::Config;
use crate::client::error::{ClientError, RefreshError};
use crate::client::refresh::{Reissuer, TokenRefresher};
use crate::client::session::Session;
use crate::shared::models::{ListEnvelope, TokenBody};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A REST call, kept as data so it can be resent after a refresh
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    authenticated: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authenticated: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Send without a bearer token
    pub fn public(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body).map_err(crate::shared::SharedError::from)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Build the shared reqwest client (cookie store on, timeout from config)
pub fn build_http_client(config: &Config) -> Result<Client, ClientError> {
    Client::builder()
        .cookie_store(true)
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
    session: Session,
    refresher: Arc<TokenRefresher>,
}

impl ApiClient {
    pub fn new(http: Client, config: Config, session: Session, refresher: Arc<TokenRefresher>) -> Self {
        Self {
            http,
            config,
            session,
            refresher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn refresher(&self) -> &Arc<TokenRefresher> {
        &self.refresher
    }

    /// Send a request; returns the successful response
    pub async fn send(&self, request: &ApiRequest) -> Result<Response, ClientError> {
        let token = if request.authenticated {
            Some(self.session.access_token().ok_or(ClientError::NotAuthenticated)?)
        } else {
            None
        };

        let response = self.dispatch(request, token.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED || !request.authenticated {
            return check_status(response).await;
        }

        tracing::info!("[HTTP] {} {} -> 401, refreshing token", request.method, request.path);
        let fresh = self.refresher.refresh(token.as_deref()).await?;
        let retried = self.dispatch(request, Some(&fresh)).await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("[HTTP] {} {} still unauthorized after refresh", request.method, request.path);
            return Err(ClientError::Unauthorized);
        }
        check_status(retried).await
    }

    /// Send and decode a JSON body
    pub async fn json<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::Decode(format!("{} {}: {}", request.method, request.path, e))
        })
    }

    /// Send and decode a list, whatever envelope the endpoint uses
    pub async fn list<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<Vec<T>, ClientError> {
        Ok(self.json::<ListEnvelope<T>>(request).await?.into_vec())
    }

    /// Send and discard the body
    pub async fn execute(&self, request: &ApiRequest) -> Result<(), ClientError> {
        self.send(request).await.map(|_| ())
    }

    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> Result<Response, ClientError> {
        let url = self.config.api_url(&request.path);
        tracing::debug!("[HTTP] {} {}", request.method, url);

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }
}

/// Map a non-success status to `ClientError::Status` with the server message
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(ClientError::status(status, server_message(&text, status)))
}

fn server_message(body: &str, status: StatusCode) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message), .. }) => message,
        Ok(ErrorBody { error: Some(error), .. }) => error,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

/// Pull an access token from `Authorization: Bearer ...`, else from an
/// `accessToken` body field
pub(crate) fn extract_token(headers: &HeaderMap, body: &[u8]) -> Option<String> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim())
        .and_then(|value| value.strip_prefix("Bearer ").or(Some(value)))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    from_header.or_else(|| {
        serde_json::from_slice::<TokenBody>(body)
            .ok()
            .and_then(|body| body.access_token)
            .filter(|token| !token.is_empty())
    })
}

/// `POST /reissue` using the refresh cookie held in the shared cookie jar
pub struct HttpReissuer {
    http: Client,
    config: Config,
}

impl HttpReissuer {
    /// `http` must be the same client the `ApiClient` uses so the cookie jar is shared
    pub fn new(http: Client, config: Config) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl Reissuer for HttpReissuer {
    async fn reissue(&self, expired: Option<&str>) -> Result<String, RefreshError> {
        let mut builder = self.http.post(self.config.api_url("/reissue"));
        if let Some(expired) = expired {
            builder = builder.bearer_auth(expired);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RefreshError::Network(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(RefreshError::Rejected {
                status: response.status().as_u16(),
            });
        }

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| RefreshError::Network(e.to_string()))?;
        extract_token(&headers, &body).ok_or(RefreshError::MissingToken)
    }
}
