//! Session endpoints: login, logout, signup and the signed-in profile

use crate::client::error::ClientError;
use crate::client::http::{extract_token, ApiClient, ApiRequest};
use crate::shared::models::{LoginRequest, ProfileUpdate, SignupRequest, UserInfo};
use serde::Deserialize;

/// Body of a successful `/user/login`; the token may instead be in the
/// `Authorization` header
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    user: UserInfo,
}

#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Sign in and persist the session
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, ClientError> {
        let request = ApiRequest::post("/user/login")
            .public()
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })?;

        let response = self.client.send(&request).await?;
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let token = extract_token(&headers, &body)
            .ok_or_else(|| ClientError::Decode("login response carried no access token".to_string()))?;
        let LoginBody { user } = serde_json::from_slice(&body)?;

        self.client.session().establish(&token, &user)?;
        Ok(user)
    }

    /// Sign out; local state is cleared even when the server call fails
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = if self.client.session().is_authenticated() {
            self.client.execute(&ApiRequest::post("/user/logout")).await
        } else {
            Ok(())
        };
        if let Err(err) = &result {
            tracing::warn!("[SESSION] Server logout failed: {}", err);
        }
        self.client.session().clear()?;
        result
    }

    pub async fn signup(&self, form: &SignupRequest) -> Result<(), ClientError> {
        crate::client::validation::validate_signup(form)?;
        self.client
            .execute(&ApiRequest::post("/user/join").public().json(form)?)
            .await
    }

    /// Fetch the signed-in user and refresh the stored copy
    pub async fn me(&self) -> Result<UserInfo, ClientError> {
        let user: UserInfo = self.client.json(&ApiRequest::get("/user/me")).await?;
        self.client.session().set_user(&user)?;
        Ok(user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserInfo, ClientError> {
        let user: UserInfo = self
            .client
            .json(&ApiRequest::patch("/user/me").json(update)?)
            .await?;
        self.client.session().set_user(&user)?;
        Ok(user)
    }
}
